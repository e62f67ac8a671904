//! Error types for loading the lexicon.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for dataset loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Why the dataset could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
	/// No `window` global (not running in a browser).
	#[error("no browser window available")]
	NoWindow,

	/// The fetch could not be issued or the network failed.
	#[error("request failed: {0}")]
	Request(String),

	/// The endpoint answered with a non-2xx status.
	#[error("endpoint returned HTTP {0}")]
	Status(u16),

	/// The response body could not be read as text.
	#[error("could not read response body: {0}")]
	Body(String),

	/// The body was not a `{ "nodes": [...] }` document.
	#[error("malformed dataset: {0}")]
	Decode(#[from] serde_json::Error),
}

impl LoadError {
	pub(crate) fn request(value: JsValue) -> Self {
		LoadError::Request(describe(&value))
	}

	pub(crate) fn body(value: JsValue) -> Self {
		LoadError::Body(describe(&value))
	}
}

fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
