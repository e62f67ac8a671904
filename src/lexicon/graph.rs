//! Relationship graph derived from word records.

use std::collections::HashMap;

use log::debug;

use super::record::{RelationKind, WordRecord, split_list};

/// A typed, directed relation between two records (indices into the record list).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Record holding the reference.
	pub source: usize,
	/// Record the reference names.
	pub target: usize,
	/// Which reference list the edge came from.
	pub kind: RelationKind,
}

impl Edge {
	/// Whether either endpoint is `idx`.
	pub fn touches(&self, idx: usize) -> bool {
		self.source == idx || self.target == idx
	}

	/// The endpoint opposite `idx`, if this edge touches it.
	pub fn other(&self, idx: usize) -> Option<usize> {
		if self.source == idx {
			Some(self.target)
		} else if self.target == idx {
			Some(self.source)
		} else {
			None
		}
	}
}

/// Records plus the edges resolved between them. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct LexiconGraph {
	records: Vec<WordRecord>,
	edges: Vec<Edge>,
}

impl LexiconGraph {
	/// Builds the graph, resolving every reference list with [`build_edges`].
	pub fn from_records(records: Vec<WordRecord>) -> Self {
		let edges = build_edges(&records);
		Self { records, edges }
	}

	/// All records in payload order.
	pub fn records(&self) -> &[WordRecord] {
		&self.records
	}

	/// Record at `idx`, if in range.
	pub fn record(&self, idx: usize) -> Option<&WordRecord> {
		self.records.get(idx)
	}

	/// Resolved relations in [`build_edges`] order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of records.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether the dataset had no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Case-insensitive exact match on `id`; the first matching record wins.
	///
	/// The term is trimmed first. Blank terms never match.
	pub fn find(&self, term: &str) -> Option<usize> {
		let term = term.trim().to_lowercase();
		if term.is_empty() {
			return None;
		}
		let found = self
			.records
			.iter()
			.position(|r| r.id.to_lowercase() == term);
		if found.is_none() {
			debug!("lexicon: search for {term:?} matched nothing");
		}
		found
	}
}

/// Resolves every record's reference lists into edges.
///
/// Records are scanned in order, fields in [`RelationKind::ALL`] order, tokens
/// left to right. Lookup is exact and case-sensitive; unresolved names are
/// dropped. Duplicates and self-loops are kept.
pub fn build_edges(records: &[WordRecord]) -> Vec<Edge> {
	let mut by_id: HashMap<&str, usize> = HashMap::new();
	for (idx, record) in records.iter().enumerate() {
		by_id.entry(record.id.as_str()).or_insert(idx);
	}

	let mut edges = Vec::new();
	for (source, record) in records.iter().enumerate() {
		for kind in RelationKind::ALL {
			let Some(list) = record.references(kind) else {
				continue;
			};
			for name in split_list(list) {
				match by_id.get(name) {
					Some(&target) => edges.push(Edge {
						source,
						target,
						kind,
					}),
					None => debug!(
						"lexicon: {} reference {:?} on {:?} is unresolved",
						kind.name(),
						name,
						record.id
					),
				}
			}
		}
	}
	edges
}
