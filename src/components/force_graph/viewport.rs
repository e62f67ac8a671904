//! Pan/zoom transform and the animated "center on node" move.

use std::time::Duration;

/// Pan and zoom transform applied to the entire graph view.
///
/// `screen = graph * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal pan offset in pixels.
	pub x: f64,
	/// Vertical pan offset in pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Inverse of the transform.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zooms by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, (min_k, max_k): (f64, f64)) {
		let new_k = (self.k * factor).clamp(min_k, max_k);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}

	fn lerp(&self, to: &ViewTransform, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

/// Viewport behaviour.
#[derive(Clone, Debug)]
pub struct ViewportConfig {
	/// Allowed zoom range.
	pub scale_extent: (f64, f64),
	/// Zoom step per wheel notch (in, out).
	pub wheel_factors: (f64, f64),
	/// The centred node lands at `width / anchor_divisor`, leaving room for
	/// the detail panel on the right.
	pub anchor_divisor: f64,
	/// Length of the "centre on node" move.
	pub center_duration: Duration,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			scale_extent: (0.5, 5.0),
			wheel_factors: (1.1, 0.9),
			anchor_divisor: 1.625,
			center_duration: Duration::from_millis(750),
		}
	}
}

impl ViewportConfig {
	/// Transform that puts graph point `(gx, gy)` at the anchor, at scale 1.
	pub fn center_target(&self, gx: f64, gy: f64, width: f64, height: f64) -> ViewTransform {
		ViewTransform {
			x: width / self.anchor_divisor - gx,
			y: height / 2.0 - gy,
			k: 1.0,
		}
	}

	/// Zoom factor for one wheel event.
	pub fn wheel_factor(&self, delta_y: f64) -> f64 {
		if delta_y > 0.0 {
			self.wheel_factors.1
		} else {
			self.wheel_factors.0
		}
	}
}

fn ease_cubic_in_out(t: f64) -> f64 {
	let t = t * 2.0;
	if t <= 1.0 {
		t * t * t / 2.0
	} else {
		let t = t - 2.0;
		(t * t * t + 2.0) / 2.0
	}
}

/// An in-flight transition between two transforms.
#[derive(Clone, Debug)]
pub struct CenterAnimation {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl CenterAnimation {
	/// Starts a move from `from` to `to` lasting `duration`.
	pub fn new(from: ViewTransform, to: ViewTransform, duration: Duration) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration: duration.as_secs_f64(),
		}
	}

	/// Advances by `dt` seconds and returns the transform to show, plus
	/// whether the animation has finished.
	pub fn advance(&mut self, dt: f64) -> (ViewTransform, bool) {
		self.elapsed += dt;
		if self.duration <= 0.0 || self.elapsed >= self.duration {
			return (self.to, true);
		}
		let t = ease_cubic_in_out(self.elapsed / self.duration);
		(self.from.lerp(&self.to, t), false)
	}
}

/// Converts `requestAnimationFrame` timestamps into elapsed seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
	last_ms: Option<f64>,
}

impl FrameClock {
	/// Seconds since the previous frame; zero on the first frame or if the
	/// timestamp goes backwards.
	pub fn tick(&mut self, now_ms: f64) -> f64 {
		let elapsed = self
			.last_ms
			.map_or(0.0, |last| ((now_ms - last) / 1000.0).max(0.0));
		self.last_ms = Some(now_ms);
		elapsed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn center_target_puts_node_left_of_centre() {
		let config = ViewportConfig::default();
		let target = config.center_target(100.0, 50.0, 1300.0, 800.0);
		assert_eq!(
			target,
			ViewTransform {
				x: 700.0,
				y: 350.0,
				k: 1.0
			}
		);
		// the node maps to (800, 400) on screen
		assert_eq!(target.x + 100.0 * target.k, 800.0);
		assert_eq!(target.y + 50.0 * target.k, 400.0);
	}

	#[test]
	fn zoom_is_clamped_and_keeps_cursor_fixed() {
		let config = ViewportConfig::default();
		let mut transform = ViewTransform::default();
		let before = transform.screen_to_graph(200.0, 100.0);
		transform.zoom_at(200.0, 100.0, 2.0, config.scale_extent);
		assert_eq!(transform.k, 2.0);
		assert_eq!(transform.screen_to_graph(200.0, 100.0), before);

		transform.zoom_at(0.0, 0.0, 100.0, config.scale_extent);
		assert_eq!(transform.k, 5.0);
		transform.zoom_at(0.0, 0.0, 0.001, config.scale_extent);
		assert_eq!(transform.k, 0.5);
	}

	#[test]
	fn animation_eases_to_target() {
		let from = ViewTransform::default();
		let to = ViewTransform {
			x: 100.0,
			y: -40.0,
			k: 1.0,
		};
		let mut animation = CenterAnimation::new(from, to, Duration::from_millis(750));

		let (mid, done) = animation.advance(0.375);
		assert!(!done);
		assert!((mid.x - 50.0).abs() < 1e-9);
		assert!((mid.y + 20.0).abs() < 1e-9);

		let (end, done) = animation.advance(0.5);
		assert!(done);
		assert_eq!(end, to);
	}

	#[test]
	fn animation_runs_on_wall_clock_time() {
		let to = ViewTransform {
			x: 300.0,
			y: 0.0,
			k: 1.0,
		};
		let mut animation =
			CenterAnimation::new(ViewTransform::default(), to, Duration::from_millis(750));
		let mut clock = FrameClock::default();

		// irregular frame spacing, as on a throttled or high refresh display
		for now_ms in [1000.0, 1007.0, 1040.0, 1250.0, 1251.0, 1600.0, 1749.0] {
			let (_, done) = animation.advance(clock.tick(now_ms));
			assert!(!done, "finished early at {now_ms} ms");
		}

		let (end, done) = animation.advance(clock.tick(1760.0));
		assert!(done);
		assert_eq!(end, to);
	}

	#[test]
	fn frame_clock_measures_between_frames() {
		let mut clock = FrameClock::default();
		assert_eq!(clock.tick(500.0), 0.0);
		assert!((clock.tick(516.0) - 0.016).abs() < 1e-12);
		assert!((clock.tick(566.0) - 0.05).abs() < 1e-12);
		assert_eq!(clock.tick(100.0), 0.0);
	}

	#[test]
	fn easing_is_slow_at_the_ends() {
		assert_eq!(ease_cubic_in_out(0.0), 0.0);
		assert_eq!(ease_cubic_in_out(1.0), 1.0);
		assert!(ease_cubic_in_out(0.1) < 0.1);
		assert!(ease_cubic_in_out(0.9) > 0.9);
	}

	#[test]
	fn wheel_direction() {
		let config = ViewportConfig::default();
		assert_eq!(config.wheel_factor(120.0), 0.9);
		assert_eq!(config.wheel_factor(-120.0), 1.1);
	}
}
