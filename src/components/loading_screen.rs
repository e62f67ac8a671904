//! Loading overlay with a percentage counter.
//!
//! The counter creeps up while the dataset is in flight but holds at 99%
//! until loading actually completes, so a failed fetch leaves the overlay up.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

/// Overlay lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
	/// Counting up.
	#[default]
	Loading,
	/// Data arrived; the overlay is fading out.
	Fading,
	/// Removed from layout.
	Hidden,
}

/// Percentage shown on the overlay and the overlay's phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
	/// 0 to 100.
	pub percent: u8,
	/// Where the overlay is in its lifecycle.
	pub phase: LoadPhase,
}

impl LoadProgress {
	/// Highest percentage shown before the data has arrived.
	pub const HOLD_AT: u8 = 99;

	/// One tick of the counter.
	pub fn advance(&mut self) {
		if self.phase == LoadPhase::Loading && self.percent < Self::HOLD_AT {
			self.percent += 1;
		}
	}

	/// Jumps to 100% and starts the fade.
	pub fn complete(&mut self) {
		if self.phase == LoadPhase::Loading {
			self.percent = 100;
			self.phase = LoadPhase::Fading;
		}
	}

	/// Ends the fade.
	pub fn hide(&mut self) {
		if self.phase == LoadPhase::Fading {
			self.phase = LoadPhase::Hidden;
		}
	}

	/// Whether the data is still outstanding.
	pub fn is_loading(&self) -> bool {
		self.phase == LoadPhase::Loading
	}
}

/// Steps `progress` every `tick` until loading completes.
pub fn start_progress_ticker(progress: RwSignal<LoadProgress>, tick: Duration) {
	let handle = Rc::new(Cell::new(None::<IntervalHandle>));
	let handle_tick = handle.clone();
	let started = set_interval_with_handle(
		move || {
			progress.update(LoadProgress::advance);
			if !progress.with_untracked(LoadProgress::is_loading) {
				if let Some(h) = handle_tick.take() {
					h.clear();
				}
			}
		},
		tick,
	);
	if let Ok(h) = started {
		handle.set(Some(h));
	}
}

/// Marks loading complete and hides the overlay once `fade` has elapsed.
pub fn finish_loading(progress: RwSignal<LoadProgress>, fade: Duration) {
	progress.update(LoadProgress::complete);
	set_timeout(move || progress.update(LoadProgress::hide), fade);
}

/// Full-window overlay showing the loading percentage.
#[component]
pub fn LoadingScreen(#[prop(into)] progress: Signal<LoadProgress>) -> impl IntoView {
	let style = move || match progress.get().phase {
		LoadPhase::Loading => "opacity: 1; transition: opacity 0.5s ease-out;",
		LoadPhase::Fading => "opacity: 0; transition: opacity 0.5s ease-out;",
		LoadPhase::Hidden => "display: none;",
	};

	view! {
		<div id="loading-screen" class="loading-screen" style=style>
			<div id="loading-text" class="loading-text">
				{move || format!("{}%", progress.get().percent)}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn progress_holds_below_complete_until_data_arrives() {
		let mut progress = LoadProgress::default();
		for _ in 0..500 {
			progress.advance();
		}
		assert_eq!(progress.percent, 99);
		assert!(progress.is_loading());
	}

	#[test]
	fn completion_fades_then_hides() {
		let mut progress = LoadProgress::default();
		progress.advance();
		progress.hide();
		assert_eq!(progress.phase, LoadPhase::Loading);

		progress.complete();
		assert_eq!(progress.percent, 100);
		assert_eq!(progress.phase, LoadPhase::Fading);
		progress.advance();
		assert_eq!(progress.percent, 100);

		progress.hide();
		assert_eq!(progress.phase, LoadPhase::Hidden);
		progress.complete();
		assert_eq!(progress.phase, LoadPhase::Hidden);
	}
}
