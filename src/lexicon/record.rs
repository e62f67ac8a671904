//! Word records as delivered by the data endpoint.

use serde::Deserialize;

/// The four kinds of relation a word can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
	/// Same meaning.
	Synonym,
	/// Opposite meaning.
	Antonym,
	/// Alternative spelling or form.
	Variant,
	/// Root word ("kök").
	Root,
}

impl RelationKind {
	/// Field scan order used when deriving edges.
	pub const ALL: [RelationKind; 4] = [
		RelationKind::Synonym,
		RelationKind::Antonym,
		RelationKind::Variant,
		RelationKind::Root,
	];

	/// Lowercase name used in log lines.
	pub fn name(self) -> &'static str {
		match self {
			RelationKind::Synonym => "synonym",
			RelationKind::Antonym => "antonym",
			RelationKind::Variant => "variant",
			RelationKind::Root => "root",
		}
	}
}

/// One row of the lexicon.
///
/// Reference fields hold comma-separated `id`s of other records. Everything
/// except `id` may be missing or `null` in the payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WordRecord {
	/// Unique display name, also the target of references.
	#[serde(default)]
	pub id: String,
	/// Comma-separated synonym ids.
	#[serde(default)]
	pub azerbaijani_synonyms: Option<String>,
	/// Comma-separated antonym ids.
	#[serde(default)]
	pub azerbaijani_antonyms: Option<String>,
	/// Comma-separated variant ids.
	#[serde(default)]
	pub azerbaijani_variants: Option<String>,
	/// Root words ("kök").
	#[serde(default)]
	pub kok: Option<String>,
	/// Numbered example sentences, e.g. `"1. Bu gözəldir. 2. O da gözəldir."`.
	#[serde(default)]
	pub azerbaijani_sentences: Option<String>,
	/// English translation.
	#[serde(default)]
	pub en_word: Option<String>,
	/// Part of speech in Azerbaijani.
	#[serde(default)]
	pub az_word_type: Option<String>,
	/// Part of speech in English.
	#[serde(default)]
	pub en_word_type: Option<String>,
	/// English lists are shown nowhere and never become edges.
	#[serde(default)]
	pub english_synonyms: Option<String>,
	/// Not used for edges.
	#[serde(default)]
	pub english_antonyms: Option<String>,
	/// Not used for edges.
	#[serde(default)]
	pub english_variants: Option<String>,
	/// Fallback colour category, looked up in the theme's colour table.
	#[serde(default, rename = "type")]
	pub category: Option<String>,
}

impl WordRecord {
	/// Raw reference list for `kind`, or `None` when absent or empty.
	pub fn references(&self, kind: RelationKind) -> Option<&str> {
		let field = match kind {
			RelationKind::Synonym => &self.azerbaijani_synonyms,
			RelationKind::Antonym => &self.azerbaijani_antonyms,
			RelationKind::Variant => &self.azerbaijani_variants,
			RelationKind::Root => &self.kok,
		};
		non_empty(field)
	}

	/// Example sentences, or `None` when absent or empty.
	pub fn sentences(&self) -> Option<&str> {
		non_empty(&self.azerbaijani_sentences)
	}
}

/// Payload shape of the data endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dataset {
	/// Every record, in sheet order.
	pub nodes: Vec<WordRecord>,
}

/// Splits a comma-separated list into trimmed tokens.
///
/// Empty tokens are kept: `"a,,b"` yields `["a", "", "b"]`.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
	list.split(',').map(str::trim)
}

pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
	field.as_deref().filter(|s| !s.is_empty())
}
