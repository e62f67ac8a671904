//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-bubble metadata, the
//! layout passes from [`super::forces`], the view transform, and the
//! selection-derived roles the renderer paints from.

use std::f64::consts::PI;

use force_graph::{ForceGraph, NodeData, SimulationParameters};

use super::forces::{Cooling, center_shift, collision_offsets};
use super::scale::ScaleConfig;
use super::viewport::{CenterAnimation, ViewTransform, ViewportConfig};
use crate::lexicon::{Edge, EdgeRole, LexiconGraph, NodeRole, Selection, edge_roles, node_roles};

/// Physics tuning.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
	/// Repulsion between every pair of bubbles.
	pub force_charge: f32,
	/// Spring stiffness (unused while relations exert no spring).
	pub force_spring: f32,
	/// Upper bound on the force applied to one node per step.
	pub force_max: f32,
	/// Velocity multiplier.
	pub node_speed: f32,
	/// Velocity kept between steps.
	pub damping_factor: f32,
	/// Mass of every bubble.
	pub mass: f32,
	/// Pull of the mean position toward the viewport centre per tick.
	pub center_strength: f64,
	/// Fraction of an overlap resolved per tick.
	pub collision_strength: f64,
	/// Alpha kept while a bubble is being dragged.
	pub drag_alpha_target: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			force_charge: 60.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			mass: 10.0,
			center_strength: 0.05,
			collision_strength: 0.7,
			drag_alpha_target: 0.3,
		}
	}
}

/// Per-bubble data attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Index of the record this bubble shows.
	pub slot: usize,
}

/// Per-bubble display metadata, indexed by record.
#[derive(Clone, Debug)]
pub struct Bubble {
	/// Text drawn in the bubble (the record's `id`).
	pub label: String,
	/// Layout radius.
	pub radius: f64,
	/// Label font size after fitting into the bubble.
	pub font_size: f64,
	/// Category used for the resting colour.
	pub category: Option<String>,
}

/// Tracks an in-progress bubble drag. Presses that never move past
/// [`CLICK_SLOP`] are reported as clicks.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Whether a bubble is held.
	pub active: bool,
	/// Record index of the held bubble.
	pub slot: Option<usize>,
	/// Screen x of the press.
	pub start_x: f64,
	/// Screen y of the press.
	pub start_y: f64,
	/// Graph x of the bubble when the press started.
	pub node_start_x: f32,
	/// Graph y of the bubble when the press started.
	pub node_start_y: f32,
	/// Whether the pointer left the click slop.
	pub moved: bool,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether the background is being dragged.
	pub active: bool,
	/// Screen x of the pan start.
	pub start_x: f64,
	/// Screen y of the pan start.
	pub start_y: f64,
	/// Transform x offset when the pan started.
	pub transform_start_x: f64,
	/// Transform y offset when the pan started.
	pub transform_start_y: f64,
}

/// Screen pixels a press may travel and still count as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Core graph state combining physics simulation with interaction tracking.
///
/// Created once when the canvas mounts, then mutated each frame by the
/// animation loop. Every [`tick`](Self::tick) ends by re-projecting node
/// positions into `positions`, which the renderer reads for bubbles, labels,
/// and edge endpoints alike.
pub struct ForceGraphState {
	/// Physics simulation; one node per record.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Display data, indexed by record.
	pub bubbles: Vec<Bubble>,
	/// Current position of every bubble, indexed by record.
	pub positions: Vec<(f64, f64)>,
	/// Relations to draw.
	pub edges: Vec<Edge>,
	/// Paint role per bubble for the current selection.
	pub node_roles: Vec<NodeRole>,
	/// Stroke role per edge for the current selection.
	pub edge_roles: Vec<EdgeRole>,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// Running "centre on node" move, if any.
	pub animation: Option<CenterAnimation>,
	/// Bubble drag in progress.
	pub drag: DragState,
	/// Background pan in progress.
	pub pan: PanState,
	/// Layout temperature.
	pub cooling: Cooling,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	config: SimulationConfig,
	viewport: ViewportConfig,
	scale: ScaleConfig,
}

impl ForceGraphState {
	/// Lays the records out on a ring around the canvas centre with default tuning.
	pub fn new(lexicon: &LexiconGraph, width: f64, height: f64, scale: &ScaleConfig) -> Self {
		Self::with_config(
			lexicon,
			width,
			height,
			scale,
			SimulationConfig::default(),
			ViewportConfig::default(),
		)
	}

	/// Like [`new`](Self::new) with explicit physics and viewport tuning.
	pub fn with_config(
		lexicon: &LexiconGraph,
		width: f64,
		height: f64,
		scale: &ScaleConfig,
		config: SimulationConfig,
		viewport: ViewportConfig,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping_factor,
		});
		let n = lexicon.len();
		let ring = 100.0 * (n.max(1) as f64).sqrt();
		let mut bubbles = Vec::with_capacity(n);

		for (i, record) in lexicon.records().iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / n as f64;
			let (x, y) = (
				(width / 2.0 + ring * angle.cos()) as f32,
				(height / 2.0 + ring * angle.sin()) as f32,
			);
			graph.add_node(NodeData {
				x,
				y,
				mass: config.mass,
				is_anchor: false,
				user_data: NodeInfo { slot: i },
			});
			bubbles.push(Bubble {
				label: record.id.clone(),
				radius: scale.bubble_radius(&record.id),
				font_size: scale.label.font_size,
				category: record.category.clone(),
			});
		}

		// Relations are drawn but exert no spring force; layout comes from
		// charge, centering, and collision only.
		let edges = lexicon.edges().to_vec();
		let selection = Selection::default();

		let mut state = Self {
			graph,
			bubbles,
			positions: vec![(0.0, 0.0); n],
			node_roles: node_roles(lexicon, selection),
			edge_roles: edge_roles(lexicon, selection),
			edges,
			transform: ViewTransform::default(),
			animation: None,
			drag: DragState::default(),
			pan: PanState::default(),
			cooling: Cooling::default(),
			width,
			height,
			config,
			viewport,
			scale: scale.clone(),
		};
		state.sync_positions();
		state
	}

	/// Fits every label into its bubble. `measure` returns the rendered width
	/// of a string at the nominal label size.
	pub fn fit_labels(&mut self, mut measure: impl FnMut(&str) -> f64) {
		for bubble in &mut self.bubbles {
			let width = measure(&bubble.label);
			bubble.font_size = self.scale.label_font_size(width, bubble.radius);
		}
	}

	/// Recomputes colours for `selection` and starts centering on it.
	pub fn apply_selection(&mut self, lexicon: &LexiconGraph, selection: Selection) {
		self.node_roles = node_roles(lexicon, selection);
		self.edge_roles = edge_roles(lexicon, selection);
		if let Some(&(gx, gy)) = selection.current().and_then(|idx| self.positions.get(idx)) {
			let target = self
				.viewport
				.center_target(gx, gy, self.width, self.height);
			self.animation = Some(CenterAnimation::new(
				self.transform,
				target,
				self.viewport.center_duration,
			));
		}
	}

	/// Converts a canvas point to graph coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		self.transform.screen_to_graph(sx, sy)
	}

	/// Topmost bubble under the screen point, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.positions
			.iter()
			.zip(&self.bubbles)
			.enumerate()
			.rev()
			.find(|(_, ((x, y), bubble))| {
				let (dx, dy) = (x - gx, y - gy);
				(dx * dx + dy * dy).sqrt() < self.scale.drawn_radius(bubble.radius)
			})
			.map(|(slot, _)| slot)
	}

	fn visit_slot_mut(&mut self, slot: usize, mut f: impl FnMut(&mut NodeData<NodeInfo>)) {
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.slot == slot {
				f(&mut node.data);
			}
		});
	}

	/// Pins `slot` under the pointer and keeps the layout warm.
	pub fn begin_drag(&mut self, slot: usize, sx: f64, sy: f64) {
		let (x, y) = self.positions.get(slot).copied().unwrap_or_default();
		self.drag = DragState {
			active: true,
			slot: Some(slot),
			start_x: sx,
			start_y: sy,
			node_start_x: x as f32,
			node_start_y: y as f32,
			moved: false,
		};
		self.visit_slot_mut(slot, |data| data.is_anchor = true);
		self.cooling.set_target(self.config.drag_alpha_target);
	}

	/// Moves the held bubble with the pointer.
	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(slot) = self.drag.slot.filter(|_| self.drag.active) else {
			return;
		};
		let (dx, dy) = (sx - self.drag.start_x, sy - self.drag.start_y);
		if (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
			self.drag.moved = true;
		}
		let (nx, ny) = (
			self.drag.node_start_x + (dx / self.transform.k) as f32,
			self.drag.node_start_y + (dy / self.transform.k) as f32,
		);
		self.visit_slot_mut(slot, |data| {
			data.x = nx;
			data.y = ny;
		});
		if let Some(p) = self.positions.get_mut(slot) {
			*p = (nx as f64, ny as f64);
		}
	}

	/// Releases the dragged bubble. Returns its slot when the press was a click.
	pub fn end_drag(&mut self) -> Option<usize> {
		let drag = std::mem::take(&mut self.drag);
		let slot = drag.slot.filter(|_| drag.active)?;
		self.visit_slot_mut(slot, |data| data.is_anchor = false);
		self.cooling.set_target(0.0);
		(!drag.moved).then_some(slot)
	}

	/// Starts panning the view. Cancels any centering move.
	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.animation = None;
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Follows the pointer while panning.
	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			return;
		}
		self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
	}

	/// Stops panning.
	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zooms one wheel notch about the pointer. Cancels any centering move.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		self.animation = None;
		let factor = self.viewport.wheel_factor(delta_y);
		self.transform
			.zoom_at(sx, sy, factor, self.viewport.scale_extent);
	}

	/// One layout iteration of `dt`. Physics is skipped once the layout has
	/// cooled; positions are re-projected regardless.
	pub fn tick(&mut self, dt: f32) {
		if let Some(alpha) = self.cooling.step() {
			self.graph.update(dt * alpha as f32);
			self.apply_layout_passes();
		}
		self.sync_positions();
	}

	/// Advances the centering animation by `seconds` of wall-clock time.
	pub fn advance_view(&mut self, seconds: f64) {
		if let Some(animation) = self.animation.as_mut() {
			let (transform, done) = animation.advance(seconds);
			self.transform = transform;
			if done {
				self.animation = None;
			}
		}
	}

	fn apply_layout_passes(&mut self) {
		self.sync_positions();
		let radii: Vec<f64> = self
			.bubbles
			.iter()
			.map(|b| self.scale.collision_radius(b.radius))
			.collect();
		let (cx, cy) = center_shift(
			&self.positions,
			(self.width / 2.0, self.height / 2.0),
			self.config.center_strength,
		);
		let offsets = collision_offsets(&self.positions, &radii, self.config.collision_strength);

		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			let (ox, oy) = offsets
				.get(node.data.user_data.slot)
				.copied()
				.unwrap_or_default();
			node.data.x += (cx + ox) as f32;
			node.data.y += (cy + oy) as f32;
		});
	}

	fn sync_positions(&mut self) {
		let positions = &mut self.positions;
		self.graph.visit_nodes(|node| {
			if let Some(p) = positions.get_mut(node.data.user_data.slot) {
				*p = (node.x() as f64, node.y() as f64);
			}
		});
	}

	/// Tracks a new canvas size; later centering uses it.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::{RelationKind, WordRecord};

	fn lexicon() -> LexiconGraph {
		let word = |id: &str| WordRecord {
			id: id.into(),
			..Default::default()
		};
		LexiconGraph::from_records(vec![
			WordRecord {
				azerbaijani_synonyms: Some("nur, şəfəq".into()),
				..word("işıq")
			},
			word("nur"),
			word("şəfəq"),
		])
	}

	fn state() -> ForceGraphState {
		ForceGraphState::new(&lexicon(), 800.0, 600.0, &ScaleConfig::default())
	}

	#[test]
	fn every_record_gets_a_bubble_and_position() {
		let state = state();
		assert_eq!(state.bubbles.len(), 3);
		assert_eq!(state.positions.len(), 3);
		assert_eq!(state.edges.len(), 2);
		assert!(state.node_roles.iter().all(|r| *r == NodeRole::Resting));
		assert_eq!(state.bubbles[1].radius, 56.0);
	}

	#[test]
	fn hit_testing_uses_drawn_radius() {
		let state = state();
		let (x, y) = state.positions[1];
		assert_eq!(state.node_at_position(x + 10.0, y), Some(1));
		assert_eq!(state.node_at_position(-10_000.0, -10_000.0), None);
	}

	#[test]
	fn selection_recolours_and_starts_centering() {
		let lexicon = lexicon();
		let mut state = state();
		let mut selection = Selection::default();
		selection.select(0);
		state.apply_selection(&lexicon, selection);
		assert_eq!(state.node_roles[0], NodeRole::Selected);
		assert_eq!(state.node_roles[2], NodeRole::Related(RelationKind::Synonym));
		assert_eq!(
			state.edge_roles,
			vec![EdgeRole::Highlighted(RelationKind::Synonym); 2]
		);
		assert!(state.animation.is_some());

		let (gx, gy) = state.positions[0];
		for _ in 0..10 {
			state.tick(0.016);
			state.advance_view(0.07);
		}
		assert!(state.animation.is_some());
		state.advance_view(0.06);
		assert!(state.animation.is_none());
		assert!((state.transform.x - (800.0 / 1.625 - gx)).abs() < 1e-6);
		assert!((state.transform.y - (300.0 - gy)).abs() < 1e-6);
		assert_eq!(state.transform.k, 1.0);
	}

	#[test]
	fn centering_lasts_the_same_time_at_any_frame_rate() {
		let lexicon = lexicon();
		let mut selection = Selection::default();
		selection.select(2);

		for frame in [1.0 / 144.0, 1.0 / 60.0, 0.25] {
			let mut state = state();
			state.apply_selection(&lexicon, selection);
			let mut elapsed = 0.0;
			while state.animation.is_some() {
				state.tick(0.016);
				state.advance_view(frame);
				elapsed += frame;
				assert!(elapsed < 2.0);
			}
			assert!(elapsed >= 0.75 - 1e-9, "{frame} s frames ended at {elapsed}");
			assert!(elapsed < 0.75 + frame + 1e-9);
		}
	}

	#[test]
	fn press_without_motion_is_a_click() {
		let mut state = state();
		state.begin_drag(1, 100.0, 100.0);
		assert!(state.cooling.alpha_target > 0.0);
		state.drag_to(101.0, 101.0);
		assert_eq!(state.end_drag(), Some(1));
		assert_eq!(state.cooling.alpha_target, 0.0);
	}

	#[test]
	fn dragging_moves_the_bubble_and_is_not_a_click() {
		let mut state = state();
		let (x, y) = state.positions[2];
		state.begin_drag(2, 0.0, 0.0);
		state.drag_to(40.0, -20.0);
		let (nx, ny) = state.positions[2];
		assert!((nx - (x + 40.0)).abs() < 1e-3);
		assert!((ny - (y - 20.0)).abs() < 1e-3);
		assert_eq!(state.end_drag(), None);
		assert!(!state.drag.active);
	}

	#[test]
	fn panning_and_zooming_cancel_centering() {
		let lexicon = lexicon();
		let mut state = state();
		let mut selection = Selection::default();
		selection.select(1);
		state.apply_selection(&lexicon, selection);
		state.begin_pan(10.0, 10.0);
		assert!(state.animation.is_none());
		state.pan_to(30.0, 5.0);
		state.end_pan();
		assert_eq!((state.transform.x, state.transform.y), (20.0, -5.0));

		state.apply_selection(&lexicon, selection);
		state.zoom_at(0.0, 0.0, 100.0);
		assert!(state.animation.is_none());
		assert_eq!(state.transform.k, 0.9);
	}

	#[test]
	fn fitted_labels_shrink_in_small_bubbles() {
		let mut state = state();
		state.fit_labels(|label| if label == "nur" { 200.0 } else { 10.0 });
		assert_eq!(state.bubbles[0].font_size, 12.0);
		assert!(state.bubbles[1].font_size < 12.0);
	}

	#[test]
	fn layout_cools_down() {
		let mut state = state();
		for _ in 0..400 {
			state.tick(0.016);
		}
		assert!(!state.cooling.is_active());
		assert!(
			state
				.positions
				.iter()
				.all(|(x, y)| x.is_finite() && y.is_finite())
		);
	}
}
