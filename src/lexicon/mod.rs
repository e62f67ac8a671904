//! Lexicon data model: word records, the relation graph derived from them,
//! the selection cursor, and detail panel content.
//!
//! Everything here is independent of the canvas and DOM, except the network
//! half of [`loader`].

mod error;
mod graph;
pub mod loader;
mod panel;
mod record;
mod selection;

pub use error::{LoadError, Result};
pub use graph::{Edge, LexiconGraph, build_edges};
pub use panel::{PanelContent, TagGroup, extract_sentences, list_tags};
pub use record::{Dataset, RelationKind, WordRecord, split_list};
pub use selection::{EdgeRole, NodeRole, Selection, edge_roles, node_roles};
