//! Detail panel content for the selected word.

use log::debug;

use super::record::{RelationKind, WordRecord, non_empty, split_list};

/// One tag container of the detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagGroup {
	/// DOM id of the container element.
	pub container_id: &'static str,
	/// Heading shown above the container.
	pub title: &'static str,
	/// Pill colour class applied to every tag.
	pub pill_class: &'static str,
	/// One entry per pill.
	pub tags: Vec<String>,
}

/// Everything the detail panel shows for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelContent {
	/// The record's `id`.
	pub word: String,
	/// English gloss, when the sheet has one.
	pub translation: Option<String>,
	/// Part of speech, Azerbaijani and English, joined for display.
	pub word_type: Option<String>,
	/// Relation containers in synonym, antonym, variant, root order, then sentences.
	pub groups: Vec<TagGroup>,
}

impl PanelContent {
	/// Collects the header and every tag container for `record`.
	pub fn from_record(record: &WordRecord) -> Self {
		let mut groups: Vec<TagGroup> = RelationKind::ALL
			.into_iter()
			.map(|kind| {
				let (container_id, title, pill_class) = relation_container(kind);
				TagGroup {
					container_id,
					title,
					pill_class,
					tags: list_tags(record.references(kind)),
				}
			})
			.collect();

		let sentences = record.sentences().map(extract_sentences).unwrap_or_default();
		if sentences.is_empty() && record.sentences().is_some() {
			debug!("lexicon: no numbered sentences found for {:?}", record.id);
		}
		groups.push(TagGroup {
			container_id: "sentence-container",
			title: "Cümlələr",
			pill_class: "orange-pill",
			tags: sentences,
		});

		let word_type = [&record.az_word_type, &record.en_word_type]
			.into_iter()
			.filter_map(non_empty)
			.collect::<Vec<_>>();

		Self {
			word: record.id.clone(),
			translation: non_empty(&record.en_word).map(str::to_string),
			word_type: (!word_type.is_empty()).then(|| word_type.join(" / ")),
			groups,
		}
	}

	/// Blank header and empty containers, shown before any selection.
	pub fn empty() -> Self {
		Self::from_record(&WordRecord::default())
	}

	#[cfg(test)]
	fn group(&self, container_id: &str) -> Option<&TagGroup> {
		self.groups.iter().find(|g| g.container_id == container_id)
	}
}

fn relation_container(kind: RelationKind) -> (&'static str, &'static str, &'static str) {
	match kind {
		RelationKind::Synonym => ("synonyms-container", "Sinonimlər", "green-pill"),
		RelationKind::Antonym => ("antonyms-container", "Antonimlər", "red-pill"),
		RelationKind::Variant => ("variants-container", "Variantlar", "yellow-pill"),
		RelationKind::Root => ("kok-container", "Kök", "purple-pill"),
	}
}

/// One tag per comma-separated token; nothing for an absent list.
pub fn list_tags(list: Option<&str>) -> Vec<String> {
	list.map(|l| split_list(l).map(str::to_string).collect())
		.unwrap_or_default()
}

/// Extracts numbered sentences: every leftmost, non-overlapping run of
/// ASCII digits, a period, one whitespace character, then one or more
/// non-period characters. The terminating period is not included.
pub fn extract_sentences(text: &str) -> Vec<String> {
	let mut sentences = Vec::new();
	let mut start = 0;
	while start < text.len() {
		match match_numbered(&text[start..]) {
			Some(len) => {
				sentences.push(text[start..start + len].trim().to_string());
				start += len;
			}
			None => {
				// Advance one char, staying on a UTF-8 boundary.
				start += text[start..].chars().next().map_or(1, char::len_utf8);
			}
		}
	}
	sentences
}

/// Length in bytes of a numbered sentence anchored at the start of `s`.
fn match_numbered(s: &str) -> Option<usize> {
	let digits = s.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return None;
	}
	let rest = s[digits..].strip_prefix('.')?;
	let space = rest.chars().next().filter(|c| c.is_whitespace())?;
	let body = &rest[space.len_utf8()..];
	let body_len = body.find('.').unwrap_or(body.len());
	if body_len == 0 {
		return None;
	}
	Some(digits + 1 + space.len_utf8() + body_len)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbered_sentences_split_on_periods() {
		assert_eq!(
			extract_sentences("1. Bu gözəldir. 2. O da gözəldir."),
			vec!["1. Bu gözəldir", "2. O da gözəldir"]
		);
	}

	#[test]
	fn unnumbered_text_yields_nothing() {
		assert!(extract_sentences("Bu gözəldir. O da gözəldir.").is_empty());
		assert!(extract_sentences("1.Bu").is_empty());
		assert!(extract_sentences("").is_empty());
	}

	#[test]
	fn multi_digit_numbers_and_missing_final_period() {
		assert_eq!(
			extract_sentences("10. Onuncu cümlə 11. on birinci"),
			vec!["10. Onuncu cümlə 11"]
		);
	}

	#[test]
	fn sentence_may_start_mid_text() {
		assert_eq!(
			extract_sentences("Nümunə: 3. Günəş çıxdı."),
			vec!["3. Günəş çıxdı"]
		);
	}

	#[test]
	fn empty_fields_produce_no_tags() {
		let content = PanelContent::from_record(&WordRecord {
			id: "nur".into(),
			..Default::default()
		});
		assert_eq!(content.word, "nur");
		assert!(content.groups.iter().all(|g| g.tags.is_empty()));
		assert_eq!(content.groups.len(), 5);
		assert_eq!(content.translation, None);
		assert_eq!(content.word_type, None);
	}

	#[test]
	fn relation_lists_become_trimmed_tags() {
		let content = PanelContent::from_record(&WordRecord {
			id: "işıq".into(),
			azerbaijani_synonyms: Some("nur, şəfəq".into()),
			kok: Some("iş".into()),
			azerbaijani_sentences: Some("1. Işıq yandı.".into()),
			en_word: Some("light".into()),
			az_word_type: Some("isim".into()),
			en_word_type: Some("noun".into()),
			..Default::default()
		});
		let synonyms = content.group("synonyms-container").unwrap();
		assert_eq!(synonyms.tags, vec!["nur", "şəfəq"]);
		assert_eq!(synonyms.pill_class, "green-pill");
		assert_eq!(content.group("kok-container").unwrap().tags, vec!["iş"]);
		assert!(content.group("antonyms-container").unwrap().tags.is_empty());
		assert_eq!(
			content.group("sentence-container").unwrap().tags,
			vec!["1. Işıq yandı"]
		);
		assert_eq!(content.translation.as_deref(), Some("light"));
		assert_eq!(content.word_type.as_deref(), Some("isim / noun"));
	}
}
