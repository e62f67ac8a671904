//! Selection cursor and the recolouring rules it drives.

use super::graph::LexiconGraph;
use super::record::RelationKind;

/// The single "currently selected word" cursor.
///
/// Starts empty and can only move between records; there is no deselect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
	/// Selected record index, if any.
	pub fn current(&self) -> Option<usize> {
		self.0
	}

	/// Moves the cursor to `idx`. Returns `false` (and changes nothing) when
	/// `idx` is already selected.
	pub fn select(&mut self, idx: usize) -> bool {
		if self.0 == Some(idx) {
			return false;
		}
		self.0 = Some(idx);
		true
	}
}

/// How a node should be painted for a given selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	/// Nothing is selected yet; the record's own category colour applies.
	Resting,
	/// The selected word itself.
	Selected,
	/// Connected to the selection; coloured by the first connecting edge.
	Related(RelationKind),
	/// Unrelated to the selection.
	Neutral,
}

/// How an edge should be stroked for a given selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRole {
	/// Nothing is selected yet: relation colour, thin, solid.
	Resting(RelationKind),
	/// Touches the selection: relation colour, thick, dashed.
	Highlighted(RelationKind),
	/// Unrelated to the selection: neutral, thin, solid.
	Dimmed,
}

/// Role of every node, indexed like the graph's records.
///
/// A node related to the selection through several edges takes the kind of
/// the first such edge in edge-list order.
pub fn node_roles(graph: &LexiconGraph, selection: Selection) -> Vec<NodeRole> {
	let Some(selected) = selection.current() else {
		return vec![NodeRole::Resting; graph.len()];
	};

	let mut roles = vec![NodeRole::Neutral; graph.len()];
	for edge in graph.edges() {
		let Some(other) = edge.other(selected) else {
			continue;
		};
		if let Some(role) = roles.get_mut(other) {
			if *role == NodeRole::Neutral {
				*role = NodeRole::Related(edge.kind);
			}
		}
	}
	if let Some(role) = roles.get_mut(selected) {
		*role = NodeRole::Selected;
	}
	roles
}

/// Role of every edge, indexed like the graph's edge list.
pub fn edge_roles(graph: &LexiconGraph, selection: Selection) -> Vec<EdgeRole> {
	graph
		.edges()
		.iter()
		.map(|edge| match selection.current() {
			None => EdgeRole::Resting(edge.kind),
			Some(idx) if edge.touches(idx) => EdgeRole::Highlighted(edge.kind),
			Some(_) => EdgeRole::Dimmed,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::record::WordRecord;

	fn word(id: &str) -> WordRecord {
		WordRecord {
			id: id.into(),
			..Default::default()
		}
	}

	fn isiq_graph() -> LexiconGraph {
		LexiconGraph::from_records(vec![
			WordRecord {
				azerbaijani_synonyms: Some("nur, şəfəq".into()),
				..word("işıq")
			},
			word("nur"),
			word("şəfəq"),
			word("qaranlıq"),
		])
	}

	#[test]
	fn reselecting_is_a_no_op() {
		let mut selection = Selection::default();
		assert!(selection.select(2));
		let before = selection;
		assert!(!selection.select(2));
		assert_eq!(selection, before);
		assert!(selection.select(0));
		assert_eq!(selection.current(), Some(0));
	}

	#[test]
	fn nothing_selected_leaves_everything_resting() {
		let graph = isiq_graph();
		let selection = Selection::default();
		assert!(
			node_roles(&graph, selection)
				.iter()
				.all(|r| *r == NodeRole::Resting)
		);
		assert_eq!(
			edge_roles(&graph, selection),
			vec![EdgeRole::Resting(RelationKind::Synonym); 2]
		);
	}

	#[test]
	fn selecting_isiq_colours_its_synonyms() {
		let graph = isiq_graph();
		let mut selection = Selection::default();
		selection.select(0);
		assert_eq!(
			node_roles(&graph, selection),
			vec![
				NodeRole::Selected,
				NodeRole::Related(RelationKind::Synonym),
				NodeRole::Related(RelationKind::Synonym),
				NodeRole::Neutral,
			]
		);
	}

	#[test]
	fn incoming_edges_also_relate_and_highlight() {
		let graph = isiq_graph();
		let mut selection = Selection::default();
		selection.select(1);
		let nodes = node_roles(&graph, selection);
		assert_eq!(nodes[0], NodeRole::Related(RelationKind::Synonym));
		assert_eq!(nodes[2], NodeRole::Neutral);
		assert_eq!(
			edge_roles(&graph, selection),
			vec![
				EdgeRole::Highlighted(RelationKind::Synonym),
				EdgeRole::Dimmed
			]
		);
	}

	#[test]
	fn first_edge_in_list_order_decides_colour() {
		let graph = LexiconGraph::from_records(vec![
			WordRecord {
				azerbaijani_antonyms: Some("b".into()),
				..word("a")
			},
			WordRecord {
				azerbaijani_synonyms: Some("a".into()),
				..word("b")
			},
		]);
		let mut selection = Selection::default();
		selection.select(0);
		assert_eq!(
			node_roles(&graph, selection)[1],
			NodeRole::Related(RelationKind::Antonym)
		);
		selection.select(1);
		assert_eq!(
			node_roles(&graph, selection)[0],
			NodeRole::Related(RelationKind::Antonym)
		);
	}

	#[test]
	fn self_loop_keeps_selected_colour() {
		let graph = LexiconGraph::from_records(vec![WordRecord {
			kok: Some("a".into()),
			..word("a")
		}]);
		let mut selection = Selection::default();
		selection.select(0);
		assert_eq!(node_roles(&graph, selection), vec![NodeRole::Selected]);
		assert_eq!(
			edge_roles(&graph, selection),
			vec![EdgeRole::Highlighted(RelationKind::Root)]
		);
	}
}
