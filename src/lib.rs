//! lexicon-graph: interactive relationship graph for an Azerbaijani lexicon.
//!
//! Word records are fetched from a sheet-backed endpoint (or an inline JSON
//! script), linked by their synonym, antonym, variant and root lists, and
//! drawn as a force-directed bubble graph. Clicking a bubble or searching a
//! word selects it, recolours its neighbourhood, and fills the detail panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, error, info};

pub mod components;
pub mod config;
pub mod lexicon;

pub use components::detail_panel::DetailPanel;
pub use components::force_graph::ForceGraphCanvas;
pub use components::loading_screen::{LoadProgress, LoadingScreen};
pub use components::search_box::SearchBox;
pub use config::LexiconConfig;
pub use lexicon::{LexiconGraph, PanelContent, Selection};

use components::loading_screen::{finish_loading, start_progress_ticker};
use lexicon::loader::load_lexicon;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("lexicon-graph: logging initialized");
}

/// Main application component.
///
/// Owns the loaded graph and the selection cursor; the canvas, search box
/// and detail panel only report intents back through callbacks.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = LexiconConfig::from_document();
	let lexicon = RwSignal::new(None::<LexiconGraph>);
	let selection = RwSignal::new(Selection::default());
	let progress = RwSignal::new(LoadProgress::default());

	start_progress_ticker(progress, config.loading_tick);

	let fade = config.fade;
	spawn_local(async move {
		match load_lexicon(&config).await {
			Ok(graph) => {
				lexicon.set(Some(graph));
				finish_loading(progress, fade);
			}
			Err(e) => error!("lexicon: failed to load words: {e}"),
		}
	});

	let select = Callback::new(move |idx: usize| {
		selection.maybe_update(|s| s.select(idx));
	});

	let search = Callback::new(move |term: String| {
		let found = lexicon.with_untracked(|g| g.as_ref().and_then(|g| g.find(&term)));
		if let Some(idx) = found {
			select.run(idx);
		}
	});

	let panel = Memo::new(move |_| {
		let idx = selection.get().current()?;
		lexicon.with(|g| g.as_ref()?.record(idx).map(PanelContent::from_record))
	});

	let loaded = move || lexicon.with(Option::is_some);
	let graph = Signal::derive(move || lexicon.get().unwrap_or_default());

	view! {
		<Html attr:lang="az" attr:dir="ltr" />
		<Title text="Lexicon Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<LoadingScreen progress=progress />
		<div class="fullscreen-graph">
			<Show when=loaded>
				<ForceGraphCanvas
					graph=graph
					selection=selection
					on_select=select
					fullscreen=true
				/>
			</Show>
			<div class="graph-overlay">
				<SearchBox on_search=search />
			</div>
			<DetailPanel content=panel />
		</div>
	}
}
