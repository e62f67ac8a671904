//! Application-level configuration.

use std::time::Duration;

/// Default data endpoint served by the sheet backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/data";

/// Where the lexicon comes from and how the loading overlay paces itself.
#[derive(Clone, Debug)]
pub struct LexiconConfig {
	/// GET endpoint returning `{ "nodes": [...] }`.
	pub endpoint: String,
	/// Id of an optional inline `<script type="application/json">` dataset.
	pub inline_data_id: String,
	/// Interval between loading percentage steps.
	pub loading_tick: Duration,
	/// Overlay fade-out duration once loading completes.
	pub fade: Duration,
}

impl Default for LexiconConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			inline_data_id: "graph-data".to_string(),
			loading_tick: Duration::from_millis(30),
			fade: Duration::from_millis(500),
		}
	}
}

impl LexiconConfig {
	/// Defaults, with the endpoint overridable through
	/// `<meta name="lexicon-endpoint" content="...">`.
	pub fn from_document() -> Self {
		let mut config = Self::default();
		if let Some(endpoint) = meta_content("lexicon-endpoint") {
			config.endpoint = endpoint;
		}
		config
	}
}

fn meta_content(name: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let meta = document
		.query_selector(&format!("meta[name=\"{name}\"]"))
		.ok()??;
	meta.get_attribute("content")
		.map(|c| c.trim().to_string())
		.filter(|c| !c.is_empty())
}
