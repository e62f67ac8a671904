//! Visual theming for the lexicon graph.
//!
//! Holds the relation colour table plus background and label styling.

use crate::lexicon::{EdgeRole, NodeRole, RelationKind};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0 to 1.
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colours keyed by selection state and relation kind.
#[derive(Clone, Debug)]
pub struct CategoryColors {
	/// The selected bubble.
	pub selected: Color,
	/// Relation colours, also used for resting categories.
	pub synonym: Color,
	/// Antonym relations.
	pub antonym: Color,
	/// Variant relations.
	pub variant: Color,
	/// Root relations.
	pub root: Color,
	/// Nodes unrelated to the selection.
	pub default: Color,
	/// Edges unrelated to the selection.
	pub dimmed_edge: Color,
}

impl CategoryColors {
	/// Colour of a relation kind.
	pub fn relation(&self, kind: RelationKind) -> Color {
		match kind {
			RelationKind::Synonym => self.synonym,
			RelationKind::Antonym => self.antonym,
			RelationKind::Variant => self.variant,
			RelationKind::Root => self.root,
		}
	}

	/// Looks up a record's `type` category; unknown names fall back to `default`.
	pub fn category(&self, name: Option<&str>) -> Color {
		match name {
			Some("selected") => self.selected,
			Some("synonym") => self.relation(RelationKind::Synonym),
			Some("antonym") => self.relation(RelationKind::Antonym),
			Some("variant") => self.relation(RelationKind::Variant),
			Some("root") => self.relation(RelationKind::Root),
			_ => self.default,
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for the centre of the radial gradient
	pub color_secondary: Color,
	pub use_gradient: bool,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Label text colour.
	pub label_color: Color,
	/// Border darkening relative to the fill (0 = no border)
	pub border_darken: f64,
	/// Border width in world units
	pub border_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background.
	pub background: BackgroundStyle,
	/// Bubble styling.
	pub node: NodeStyle,
	/// Colour table.
	pub colors: CategoryColors,
}

impl Theme {
	/// Fill for a bubble. `category` only matters before anything is selected.
	pub fn node_color(&self, role: NodeRole, category: Option<&str>) -> Color {
		match role {
			NodeRole::Resting => self.colors.category(category),
			NodeRole::Selected => self.colors.selected,
			NodeRole::Related(kind) => self.colors.relation(kind),
			NodeRole::Neutral => self.colors.default,
		}
	}

	/// Stroke colour for an edge.
	pub fn edge_color(&self, role: EdgeRole) -> Color {
		match role {
			EdgeRole::Resting(kind) | EdgeRole::Highlighted(kind) => self.colors.relation(kind),
			EdgeRole::Dimmed => self.colors.dimmed_edge,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
			},
			node: NodeStyle {
				label_color: Color::rgb(255, 255, 255),
				border_darken: 0.15,
				border_width: 1.0,
			},
			colors: CategoryColors {
				selected: Color::rgb(0x41, 0x69, 0xe1),
				synonym: Color::rgb(0x5c, 0xcf, 0x7a),
				antonym: Color::rgb(0xe3, 0x52, 0x52),
				variant: Color::rgb(0xe3, 0xc3, 0x52),
				root: Color::rgb(0x9b, 0x52, 0xe3),
				default: Color::rgb(0xd4, 0xd4, 0xd4),
				dimmed_edge: Color::rgb(0xf0, 0xf0, 0xf0),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colour_table_matches_css() {
		let theme = Theme::default();
		assert_eq!(theme.node_color(NodeRole::Selected, None).to_css(), "#4169e1");
		assert_eq!(
			theme
				.node_color(NodeRole::Related(RelationKind::Synonym), None)
				.to_css(),
			"#5ccf7a"
		);
		assert_eq!(theme.node_color(NodeRole::Neutral, None).to_css(), "#d4d4d4");
		assert_eq!(theme.edge_color(EdgeRole::Dimmed).to_css(), "#f0f0f0");
		assert_eq!(
			theme
				.edge_color(EdgeRole::Highlighted(RelationKind::Root))
				.to_css(),
			"#9b52e3"
		);
	}

	#[test]
	fn resting_nodes_use_their_category() {
		let theme = Theme::default();
		assert_eq!(
			theme.node_color(NodeRole::Resting, Some("antonym")),
			theme.colors.antonym
		);
		assert_eq!(
			theme.node_color(NodeRole::Resting, Some("isim")),
			theme.colors.default
		);
		assert_eq!(theme.node_color(NodeRole::Resting, None), theme.colors.default);
	}

	#[test]
	fn translucent_colours_use_rgba() {
		let translucent = Color {
			a: 0.5,
			..Color::rgb(1, 2, 3)
		};
		assert_eq!(translucent.to_css(), "rgba(1, 2, 3, 0.5)");
		assert_eq!(Color::rgb(200, 100, 0).darken(0.5), Color::rgb(100, 50, 0));
	}
}
