use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::sketch::{
	Drawing, MoveMode, NodeId, Rect, Renderer, RendererConfig, StrokeStyle, Vector2,
};

use super::types::SketchData;

pub const HIT_RADIUS: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub last: Vector2,
}

#[derive(Clone, Debug, Default)]
pub struct BoxSelectState {
	pub active: bool,
	pub origin: Vector2,
	pub current: Vector2,
}

impl BoxSelectState {
	pub fn rect(&self) -> Rect {
		Rect::from_corner(self.origin, self.current - self.origin)
	}
}

pub struct SketchState {
	pub drawing: Drawing,
	pub renderer: Renderer,
	pub selected: HashSet<NodeId>,
	pub drag: DragState,
	pub select_box: BoxSelectState,
	pub selected_stroke: StrokeStyle,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl SketchState {
	pub fn new(data: &SketchData, width: f64, height: f64, seed: u64, debug_labels: bool) -> Self {
		let mut drawing = Drawing::new();
		let mut id_to_idx = HashMap::new();

		for point in &data.points {
			let idx = drawing.add_point(Vector2::new(point.x, point.y), point.style);
			id_to_idx.insert(point.id.clone(), idx);
		}

		for link in &data.links {
			let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			else {
				warn!("dropping link {} -> {}: unknown point", link.source, link.target);
				continue;
			};
			if let Err(e) = drawing.link(src, tgt, link.style) {
				warn!("dropping link {} -> {}: {e}", link.source, link.target);
			}
		}

		let config = RendererConfig {
			debug_labels,
			..RendererConfig::default()
		};

		Self {
			drawing,
			renderer: Renderer::seeded(seed, config),
			selected: HashSet::new(),
			drag: DragState::default(),
			select_box: BoxSelectState::default(),
			selected_stroke: StrokeStyle {
				color: "#64b4ff".into(),
				width: 3.0,
			},
			width,
			height,
			animation_running: true,
		}
	}

	/// Closest point under the cursor, using stored (undisplaced) positions.
	pub fn node_at_position(&self, position: Vector2) -> Option<NodeId> {
		let graph = &self.drawing.graph;
		graph
			.nodes_within_radius(position, HIT_RADIUS)
			.into_iter()
			.filter_map(|id| graph.node(id).map(|p| (id, p.distance_to(position))))
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(id, _)| id)
	}

	/// Mouse down: grab a point (and its selection) or start a selection box.
	pub fn press(&mut self, position: Vector2, additive: bool) {
		match self.node_at_position(position) {
			Some(idx) => {
				if !self.selected.contains(&idx) {
					if !additive {
						self.selected.clear();
					}
					self.selected.insert(idx);
				}
				self.drag = DragState {
					active: true,
					last: position,
				};
			}
			None => {
				if !additive {
					self.selected.clear();
				}
				self.select_box = BoxSelectState {
					active: true,
					origin: position,
					current: position,
				};
			}
		}
	}

	/// Mouse move: drag the selection or grow the selection box.
	pub fn move_to(&mut self, position: Vector2) {
		if self.drag.active {
			let delta = position - self.drag.last;
			self.drag.last = position;
			for &idx in &self.selected {
				if let Err(e) = self.drawing.move_point(idx, delta, MoveMode::Relative) {
					warn!("drag: {e}");
				}
			}
		} else if self.select_box.active {
			self.select_box.current = position;
		}
	}

	/// Mouse up: finish a drag or commit the selection box.
	pub fn release(&mut self) {
		if self.select_box.active {
			let rect = self.select_box.rect();
			let hits = self.drawing.graph.nodes_within_bounds(
				Vector2::new(rect.x, rect.y),
				Vector2::new(rect.width, rect.height),
			);
			debug!("box selected {} points", hits.len());
			self.selected.extend(hits);
		}
		self.cancel();
	}

	/// Abort any gesture in progress; the selection is kept.
	pub fn cancel(&mut self) {
		self.drag = DragState::default();
		self.select_box = BoxSelectState::default();
	}

	/// Double click on empty space: add a point linked to every selected point.
	pub fn add_point_at(&mut self, position: Vector2) -> Option<NodeId> {
		if self.node_at_position(position).is_some() {
			return None;
		}
		let idx = self.drawing.add_point(position, None);
		for &other in &self.selected {
			if let Err(e) = self.drawing.link(other, idx, None) {
				warn!("link to new point failed: {e}");
			}
		}
		self.selected.clear();
		self.selected.insert(idx);
		Some(idx)
	}

	pub fn tick(&mut self, dt: f64) {
		self.renderer.tick(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::sketch_canvas::types::{SketchLink, SketchPoint};

	fn data() -> SketchData {
		let point = |id: &str, x, y| SketchPoint {
			id: id.into(),
			x,
			y,
			style: None,
		};
		SketchData {
			points: vec![point("a", 0.0, 0.0), point("b", 100.0, 0.0), point("c", 100.0, 100.0)],
			links: vec![
				SketchLink {
					source: "a".into(),
					target: "b".into(),
					style: None,
				},
				SketchLink {
					source: "b".into(),
					target: "nowhere".into(),
					style: None,
				},
			],
		}
	}

	fn state() -> SketchState {
		SketchState::new(&data(), 800.0, 600.0, 1, false)
	}

	#[test]
	fn builds_drawing_and_drops_dangling_links() {
		let s = state();
		assert_eq!(s.drawing.graph.node_count(), 3);
		assert_eq!(s.drawing.graph.edge_count(), 1);
	}

	#[test]
	fn drag_moves_selected_point() {
		let mut s = state();
		s.press(Vector2::new(2.0, 1.0), false);
		let idx = s.node_at_position(Vector2::new(102.0, 0.0));
		assert!(idx.is_some());
		assert_eq!(s.selected.len(), 1);

		s.move_to(Vector2::new(12.0, 21.0));
		s.release();
		let moved = s.selected.iter().next().copied().unwrap();
		assert_eq!(s.drawing.graph.node(moved), Some(Vector2::new(10.0, 20.0)));
		assert!(!s.drag.active);
	}

	#[test]
	fn box_select_collects_points() {
		let mut s = state();
		s.press(Vector2::new(150.0, 150.0), false);
		s.move_to(Vector2::new(50.0, -50.0));
		s.release();
		assert_eq!(s.selected.len(), 2);
	}

	#[test]
	fn double_click_links_new_point_to_selection() {
		let mut s = state();
		s.press(Vector2::new(150.0, 150.0), false);
		s.move_to(Vector2::new(-50.0, -50.0));
		s.release();
		assert_eq!(s.selected.len(), 3);

		let idx = s.add_point_at(Vector2::new(300.0, 300.0)).unwrap();
		assert_eq!(s.drawing.graph.neighbors(idx).len(), 3);
		assert_eq!(s.selected.len(), 1);
		assert!(s.add_point_at(Vector2::new(301.0, 300.0)).is_none());
	}
}
