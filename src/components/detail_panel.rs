//! Side panel listing the selected word's relations and example sentences.

use leptos::prelude::*;

use crate::lexicon::{PanelContent, TagGroup};

#[component]
fn TagList(group: TagGroup) -> impl IntoView {
	let pill_class = format!("pill {}", group.pill_class);
	view! {
		<section class="tag-group">
			<h3>{group.title}</h3>
			<div id=group.container_id class="pill-container">
				{group
					.tags
					.into_iter()
					.map(|tag| view! { <div class=pill_class.clone()>{tag}</div> })
					.collect_view()}
			</div>
		</section>
	}
}

/// Renders `content`, or empty containers while nothing is selected.
#[component]
pub fn DetailPanel(#[prop(into)] content: Signal<Option<PanelContent>>) -> impl IntoView {
	let shown = move || content.get().unwrap_or_else(PanelContent::empty);

	view! {
		<aside class="detail-panel">
			<h2 id="selected-word">{move || shown().word}</h2>
			<p class="word-meta">
				{move || {
					let c = shown();
					[c.translation, c.word_type].into_iter().flatten().collect::<Vec<_>>().join(" · ")
				}}
			</p>
			{move || {
				shown()
					.groups
					.into_iter()
					.map(|group| view! { <TagList group=group /> })
					.collect_view()
			}}
		</aside>
	}
}
