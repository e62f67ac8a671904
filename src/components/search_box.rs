//! Word search input.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Text input that reports its value when Enter is pressed.
#[component]
pub fn SearchBox(
	#[prop(into)] on_search: Callback<String>,
	#[prop(default = "Söz axtar...")] placeholder: &'static str,
) -> impl IntoView {
	let on_keypress = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			on_search.run(event_target_value(&ev));
		}
	};

	view! {
		<input
			id="search-box"
			class="search-box"
			type="text"
			placeholder=placeholder
			on:keypress=on_keypress
		/>
	}
}
