//! Leptos components making up the page.

pub mod detail_panel;
pub mod force_graph;
pub mod loading_screen;
pub mod search_box;
