//! Fetching and decoding the lexicon dataset.
//!
//! Data comes from an inline `<script type="application/json">` element when
//! the page embeds one, otherwise from a single GET to the configured endpoint.
//! There is no retry, timeout, or cancellation.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlScriptElement, Request, RequestInit, RequestMode, Response, Window};

use super::error::{LoadError, Result};
use super::graph::LexiconGraph;
use super::record::Dataset;
use crate::config::LexiconConfig;

/// Decodes a `{ "nodes": [...] }` document.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
	Ok(serde_json::from_str(json)?)
}

/// Reads the dataset embedded in the script element with the given id.
fn load_inline(element_id: &str) -> Option<Dataset> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(element_id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_dataset(&json_text) {
		Ok(data) => Some(data),
		Err(e) => {
			warn!("lexicon: ignoring inline data in #{element_id}: {e}");
			None
		}
	}
}

/// Issues one GET for the dataset at `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
	let window: Window = web_sys::window().ok_or(LoadError::NoWindow)?;

	let init = RequestInit::new();
	init.set_method("GET");
	init.set_mode(RequestMode::Cors);
	let request = Request::new_with_str_and_init(url, &init).map_err(LoadError::request)?;

	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(LoadError::request)?
		.dyn_into()
		.map_err(LoadError::request)?;
	if !response.ok() {
		return Err(LoadError::Status(response.status()));
	}

	let body = JsFuture::from(response.text().map_err(LoadError::body)?)
		.await
		.map_err(LoadError::body)?;
	let text = body
		.as_string()
		.ok_or_else(|| LoadError::Body("response body is not text".into()))?;
	parse_dataset(&text)
}

/// Loads the dataset (inline first, then network) and builds the graph.
pub async fn load_lexicon(config: &LexiconConfig) -> Result<LexiconGraph> {
	let dataset = match load_inline(&config.inline_data_id) {
		Some(data) => data,
		None => fetch_dataset(&config.endpoint).await?,
	};
	let graph = LexiconGraph::from_records(dataset.nodes);
	if graph.is_empty() {
		warn!("lexicon: dataset has no words");
	}
	info!(
		"lexicon: loaded {} words, {} relations",
		graph.len(),
		graph.edges().len()
	);
	Ok(graph)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_backend_payload() {
		let json = r#"{
			"nodes": [
				{
					"id": "işıq",
					"kok": "",
					"en_word": "light",
					"az_word_type": "isim",
					"en_word_type": "noun",
					"azerbaijani_synonyms": "nur, şəfəq",
					"english_synonyms": "glow",
					"azerbaijani_antonyms": "",
					"english_antonyms": "",
					"azerbaijani_variants": "",
					"english_variants": "",
					"azerbaijani_sentences": "1. Işıq yandı."
				},
				{ "id": "nur" },
				{ "id": "şəfəq" }
			]
		}"#;
		let dataset = parse_dataset(json).unwrap();
		assert_eq!(dataset.nodes.len(), 3);
		assert_eq!(dataset.nodes[0].en_word.as_deref(), Some("light"));

		let graph = LexiconGraph::from_records(dataset.nodes);
		assert_eq!(graph.edges().len(), 2);
	}

	#[test]
	fn rejects_documents_without_nodes() {
		let err = parse_dataset(r#"{"error": "Worksheet not found."}"#).unwrap_err();
		assert!(matches!(err, LoadError::Decode(_)));
		assert!(err.to_string().starts_with("malformed dataset"));
	}
}
