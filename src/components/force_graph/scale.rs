//! Sizing rules for bubbles, labels, and edges.
//!
//! All values are world-space: the canvas transform scales them with zoom,
//! like strokes inside a transformed SVG group.

/// Bubble sizing.
#[derive(Clone, Debug)]
pub struct BubbleScaleConfig {
	/// Radius of a bubble with an empty label.
	pub min_radius: f64,
	/// Extra radius gained per label character.
	pub radius_per_char: f64,
	/// Characters beyond this count no longer grow the bubble.
	pub max_chars: usize,
	/// The drawn circle is this much smaller than the layout radius.
	pub draw_inset: f64,
	/// Gap kept between neighbouring bubbles by the collision pass.
	pub buffer: f64,
}

/// Label typography.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// Nominal font size in pixels.
	pub font_size: f64,
	/// CSS font family for labels.
	pub font_family: &'static str,
}

/// Edge stroke configuration.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Width of edges not touching the selection.
	pub line_width: f64,
	/// Width of edges touching the selection.
	pub highlighted_width: f64,
	/// Dash pattern (dash, gap) for edges touching the selection.
	pub dash_pattern: (f64, f64),
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Bubble radii.
	pub bubble: BubbleScaleConfig,
	/// Label typography.
	pub label: LabelScaleConfig,
	/// Edge strokes.
	pub edge: EdgeScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			bubble: BubbleScaleConfig {
				min_radius: 50.0,
				radius_per_char: 2.0,
				max_chars: 10,
				draw_inset: 10.0,
				buffer: 5.0,
			},
			label: LabelScaleConfig {
				font_size: 12.0,
				font_family: "sans-serif",
			},
			edge: EdgeScaleConfig {
				line_width: 1.0,
				highlighted_width: 2.0,
				dash_pattern: (2.0, 2.0),
			},
		}
	}
}

impl ScaleConfig {
	/// Layout radius of a bubble, stable for a given label.
	pub fn bubble_radius(&self, label: &str) -> f64 {
		let chars = label.chars().count().min(self.bubble.max_chars);
		self.bubble.min_radius + self.bubble.radius_per_char * chars as f64
	}

	/// Radius of the circle actually painted.
	pub fn drawn_radius(&self, radius: f64) -> f64 {
		(radius - self.bubble.draw_inset).max(0.0)
	}

	/// Radius the collision pass keeps clear around a bubble.
	pub fn collision_radius(&self, radius: f64) -> f64 {
		radius + self.bubble.buffer
	}

	/// Font size that fits a label of `text_width` (measured at the nominal
	/// size) inside a bubble of `radius`. Shrunk sizes are floored to whole pixels.
	pub fn label_font_size(&self, text_width: f64, radius: f64) -> f64 {
		let available = (radius - self.bubble.buffer) * 2.0;
		if text_width > available && text_width > 0.0 {
			(self.label.font_size * available / text_width).floor()
		} else {
			self.label.font_size
		}
	}

	/// CSS font shorthand for a label at `size` pixels.
	pub fn label_font(&self, size: f64) -> String {
		format!("{}px {}", size, self.label.font_family)
	}
}
