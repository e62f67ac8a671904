//! Layout passes applied on top of the `force_graph` charge simulation:
//! centering, collision, and the cooling schedule that decides when the
//! layout has settled.

/// Simulation "temperature". Physics runs while `alpha >= alpha_min`.
#[derive(Clone, Debug)]
pub struct Cooling {
	/// Current temperature; scales every physics step.
	pub alpha: f64,
	/// Value alpha decays toward.
	pub alpha_target: f64,
	/// Below this the layout counts as settled.
	pub alpha_min: f64,
	/// Fraction of the gap to the target closed per tick.
	pub alpha_decay: f64,
}

impl Default for Cooling {
	fn default() -> Self {
		let alpha_min: f64 = 0.001;
		Self {
			alpha: 1.0,
			alpha_target: 0.0,
			alpha_min,
			// settles in ~300 ticks
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
		}
	}
}

impl Cooling {
	/// Whether physics should still run.
	pub fn is_active(&self) -> bool {
		self.alpha >= self.alpha_min || self.alpha_target >= self.alpha_min
	}

	/// Moves alpha one step toward its target. Returns the alpha to apply
	/// this tick, or `None` once the layout has settled.
	pub fn step(&mut self) -> Option<f64> {
		if !self.is_active() {
			return None;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
		Some(self.alpha)
	}

	/// Keeps the layout warm (while dragging) or lets it cool again.
	pub fn set_target(&mut self, target: f64) {
		self.alpha_target = target;
	}
}

/// Offset that moves the mean position `strength` of the way to `center`.
pub fn center_shift(positions: &[(f64, f64)], center: (f64, f64), strength: f64) -> (f64, f64) {
	if positions.is_empty() {
		return (0.0, 0.0);
	}
	let n = positions.len() as f64;
	let (sx, sy) = positions
		.iter()
		.fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
	((center.0 - sx / n) * strength, (center.1 - sy / n) * strength)
}

/// Per-node displacement separating overlapping circles.
///
/// Each overlapping pair is pushed apart along the line between centres,
/// each node taking half of `overlap * strength`. Coincident centres are
/// split along a fixed per-pair angle.
pub fn collision_offsets(positions: &[(f64, f64)], radii: &[f64], strength: f64) -> Vec<(f64, f64)> {
	let mut offsets = vec![(0.0, 0.0); positions.len()];
	for i in 0..positions.len() {
		for j in (i + 1)..positions.len() {
			let (dx, dy) = (
				positions[i].0 - positions[j].0,
				positions[i].1 - positions[j].1,
			);
			let min_distance = radii[i] + radii[j];
			let distance_sq = dx * dx + dy * dy;
			if distance_sq >= min_distance * min_distance {
				continue;
			}
			let distance = distance_sq.sqrt();
			let (ux, uy) = if distance > 0.0001 {
				(dx / distance, dy / distance)
			} else {
				let angle = ((i as f64) * 0.618_034 + (j as f64) * 0.414_214) * std::f64::consts::TAU;
				(angle.cos(), angle.sin())
			};
			let push = (min_distance - distance) * strength * 0.5;
			offsets[i].0 += ux * push;
			offsets[i].1 += uy * push;
			offsets[j].0 -= ux * push;
			offsets[j].1 -= uy * push;
		}
	}
	offsets
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cooling_settles_and_rewarms() {
		let mut cooling = Cooling::default();
		let mut ticks = 0;
		while cooling.step().is_some() {
			ticks += 1;
			assert!(ticks < 1000);
		}
		assert!((299..=301).contains(&ticks));
		assert!(!cooling.is_active());

		cooling.set_target(0.3);
		assert!(cooling.is_active());
		let alpha = cooling.step().unwrap();
		assert!(alpha > 0.0 && alpha < 0.3);

		cooling.set_target(0.0);
		assert!(cooling.step().is_some());
	}

	#[test]
	fn center_shift_moves_mean_toward_center() {
		let positions = [(0.0, 0.0), (20.0, 40.0)];
		let (dx, dy) = center_shift(&positions, (110.0, 220.0), 0.05);
		assert!((dx - 5.0).abs() < 1e-9);
		assert!((dy - 10.0).abs() < 1e-9);
		assert_eq!(center_shift(&[], (1.0, 1.0), 1.0), (0.0, 0.0));
	}

	#[test]
	fn overlapping_pairs_are_pushed_apart() {
		let positions = [(0.0, 0.0), (10.0, 0.0), (500.0, 0.0)];
		let radii = [10.0, 10.0, 10.0];
		let offsets = collision_offsets(&positions, &radii, 1.0);
		assert!((offsets[0].0 + 5.0).abs() < 1e-9);
		assert!((offsets[1].0 - 5.0).abs() < 1e-9);
		assert_eq!(offsets[2], (0.0, 0.0));
	}

	#[test]
	fn coincident_centres_still_separate() {
		let offsets = collision_offsets(&[(3.0, 3.0), (3.0, 3.0)], &[5.0, 5.0], 1.0);
		let (ax, ay) = offsets[0];
		assert!((ax * ax + ay * ay).sqrt() > 4.9);
		assert!((offsets[0].0 + offsets[1].0).abs() < 1e-9);
	}
}
