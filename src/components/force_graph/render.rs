//! Canvas rendering for the lexicon graph.
//!
//! Rendering uses three passes for correct z-ordering, all in world space
//! after the background: edges, then bubbles, then labels on top.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::ScaleConfig;
use super::state::ForceGraphState;
use super::theme::{Color, Theme};
use crate::lexicon::EdgeRole;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaleConfig,
	theme: &Theme,
) {
	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, scale, theme);
	draw_bubbles(state, ctx, scale, theme);
	draw_labels(state, ctx, scale, theme);

	ctx.restore();
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = theme
		.background
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// How one edge is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeStroke {
	color: Color,
	width: f64,
	dashed: bool,
}

/// Edges touching the selection are thick and dashed; the rest are thin and solid.
fn edge_stroke(role: EdgeRole, scale: &ScaleConfig, theme: &Theme) -> EdgeStroke {
	let highlighted = matches!(role, EdgeRole::Highlighted(_));
	EdgeStroke {
		color: theme.edge_color(role),
		width: if highlighted {
			scale.edge.highlighted_width
		} else {
			scale.edge.line_width
		},
		dashed: highlighted,
	}
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaleConfig,
	theme: &Theme,
) {
	let dash = js_sys::Array::of2(
		&JsValue::from_f64(scale.edge.dash_pattern.0),
		&JsValue::from_f64(scale.edge.dash_pattern.1),
	);
	let solid = js_sys::Array::new();

	for (edge, role) in state.edges.iter().zip(&state.edge_roles) {
		let (Some(&(x1, y1)), Some(&(x2, y2))) = (
			state.positions.get(edge.source),
			state.positions.get(edge.target),
		) else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		if (dx * dx + dy * dy).sqrt() < 0.001 {
			continue;
		}

		let stroke = edge_stroke(*role, scale, theme);
		ctx.set_stroke_style_str(&stroke.color.to_css());
		ctx.set_line_width(stroke.width);
		let _ = ctx.set_line_dash(if stroke.dashed { &dash } else { &solid });

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&solid);
}

fn draw_bubbles(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaleConfig,
	theme: &Theme,
) {
	for ((bubble, &(x, y)), role) in state
		.bubbles
		.iter()
		.zip(&state.positions)
		.zip(&state.node_roles)
	{
		let color = theme.node_color(*role, bubble.category.as_deref());
		ctx.begin_path();
		let _ = ctx.arc(x, y, scale.drawn_radius(bubble.radius), 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&color.to_css());
		ctx.fill();

		if theme.node.border_darken > 0.0 {
			ctx.set_stroke_style_str(&color.darken(theme.node.border_darken).to_css());
			ctx.set_line_width(theme.node.border_width);
			ctx.stroke();
		}
	}
}

fn draw_labels(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaleConfig,
	theme: &Theme,
) {
	ctx.set_fill_style_str(&theme.node.label_color.to_css());
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for (bubble, &(x, y)) in state.bubbles.iter().zip(&state.positions) {
		ctx.set_font(&scale.label_font(bubble.font_size));
		let _ = ctx.fill_text(&bubble.label, x, y);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::RelationKind;

	#[test]
	fn selected_edges_are_thick_dashed_and_coloured() {
		let (scale, theme) = (ScaleConfig::default(), Theme::default());
		let stroke = edge_stroke(EdgeRole::Highlighted(RelationKind::Antonym), &scale, &theme);
		assert_eq!(stroke.color.to_css(), "#e35252");
		assert_eq!(stroke.width, 2.0);
		assert!(stroke.dashed);
		assert_eq!(scale.edge.dash_pattern, (2.0, 2.0));
	}

	#[test]
	fn other_edges_are_thin_and_solid() {
		let (scale, theme) = (ScaleConfig::default(), Theme::default());
		let dimmed = edge_stroke(EdgeRole::Dimmed, &scale, &theme);
		assert_eq!(dimmed.color.to_css(), "#f0f0f0");
		assert_eq!(dimmed.width, 1.0);
		assert!(!dimmed.dashed);

		let resting = edge_stroke(EdgeRole::Resting(RelationKind::Variant), &scale, &theme);
		assert_eq!(resting.color.to_css(), "#e3c352");
		assert_eq!(resting.width, 1.0);
		assert!(!resting.dashed);
	}
}
