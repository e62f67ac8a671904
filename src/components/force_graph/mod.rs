//! Force-directed lexicon graph component.
//!
//! Renders the word graph on an HTML canvas with:
//! - Physics-based bubble positioning (charge, centering, collision) that
//!   cools down once the layout settles
//! - Pan, zoom, bubble dragging, and click-to-select
//! - Relation-coloured highlighting of the selected word's neighbourhood
//! - An animated move that centres the selected bubble beside the detail panel
//!
//! # Example
//!
//! ```ignore
//! use lexicon_graph::{ForceGraphCanvas, LexiconGraph, Selection};
//!
//! let graph = LexiconGraph::from_records(records);
//! let selection = RwSignal::new(Selection::default());
//!
//! view! {
//!     <ForceGraphCanvas
//!         graph=Signal::derive(move || graph.clone())
//!         selection=selection
//!         on_select=move |idx| { selection.maybe_update(|s| s.select(idx)); }
//!         fullscreen=true
//!     />
//! }
//! ```

mod component;
pub mod forces;
mod render;
pub mod scale;
mod state;
pub mod theme;
pub mod viewport;

pub use component::ForceGraphCanvas;
pub use scale::ScaleConfig;
pub use state::{ForceGraphState, SimulationConfig};
pub use theme::Theme;
pub use viewport::{ViewTransform, ViewportConfig};
