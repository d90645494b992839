//! Frame renderer: displaces points, then draws every link as a hand-drawn
//! stroke between the displaced endpoints.

use std::collections::HashMap;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::clock::{Clock, FRAME_STEP};
use super::drawing::Drawing;
use super::effects::displace_nodes;
use super::graph::{Edge, EdgeId, NodeId};
use super::stroke::{draw_polyline, stroke_joints};
use super::style::StyleTable;
use super::surface::{StrokeStyle, Surface};
use super::vector::Vector2;

/// Fixed rendering parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct RendererConfig {
	/// Radius of the circle drawn for each point.
	pub node_radius: f64,
	/// Stroke used for points and links.
	pub stroke: StrokeStyle,
	/// Time added by [`Renderer::step`].
	pub frame_step: f64,
	/// Label every stroke joint with its index.
	pub debug_labels: bool,
}

impl Default for RendererConfig {
	fn default() -> Self {
		Self {
			node_radius: 5.0,
			stroke: StrokeStyle::default(),
			frame_step: FRAME_STEP,
			debug_labels: false,
		}
	}
}

/// What a render pass produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	/// Points drawn.
	pub nodes: usize,
	/// Links drawn.
	pub edges: usize,
	/// Links skipped because an endpoint was missing from the snapshot.
	pub skipped_edges: usize,
}

/// Stateful frame renderer owning the clock and the random source.
pub struct Renderer<R = SmallRng> {
	clock: Clock,
	rng: R,
	/// Rendering parameters.
	pub config: RendererConfig,
}

impl Renderer<SmallRng> {
	/// Renderer with a reproducible random source.
	pub fn seeded(seed: u64, config: RendererConfig) -> Self {
		Self::new(SmallRng::seed_from_u64(seed), config)
	}
}

impl<R: Rng> Renderer<R> {
	/// Renderer over an injected random source.
	pub fn new(rng: R, config: RendererConfig) -> Self {
		Self {
			clock: Clock::new(),
			rng,
			config,
		}
	}

	/// Current animation time.
	pub fn time(&self) -> f64 {
		self.clock.now()
	}

	/// Advances animation time by `dt`.
	pub fn tick(&mut self, dt: f64) -> f64 {
		self.clock.advance(dt)
	}

	/// Advances animation time by the configured fixed step.
	pub fn step(&mut self) -> f64 {
		self.clock.advance(self.config.frame_step)
	}

	/// Displayed position of every point for the current frame.
	pub fn displaced_nodes(&mut self, drawing: &Drawing) -> HashMap<NodeId, Vector2> {
		displace_nodes(&drawing.graph, &drawing.styles, self.clock.now(), &mut self.rng)
	}

	/// Draws one frame: points first, then links on top.
	pub fn render<S: Surface + ?Sized>(&mut self, drawing: &Drawing, surface: &mut S) -> FrameStats {
		let positions = self.displaced_nodes(drawing);
		let mut stats = FrameStats {
			nodes: positions.len(),
			..FrameStats::default()
		};

		for &position in positions.values() {
			surface.begin_stroke();
			surface.circle(position, self.config.node_radius);
			surface.end_stroke(&self.config.stroke);
		}

		let edge_stats = self.render_edges(&positions, drawing.graph.edges(), &drawing.styles, surface);
		stats.edges = edge_stats.edges;
		stats.skipped_edges = edge_stats.skipped_edges;
		stats
	}

	/// Draws links between already displaced positions. A link whose endpoint
	/// is absent from `positions` is skipped for this frame.
	pub fn render_edges<S, I>(
		&mut self,
		positions: &HashMap<NodeId, Vector2>,
		edges: I,
		styles: &StyleTable,
		surface: &mut S,
	) -> FrameStats
	where
		S: Surface + ?Sized,
		I: IntoIterator<Item = (EdgeId, Edge)>,
	{
		let t = self.clock.now();
		let mut stats = FrameStats::default();
		for (id, edge) in edges {
			let (Some(&a), Some(&b)) = (positions.get(&edge.from), positions.get(&edge.to)) else {
				debug!("skipping edge {id}: endpoint missing from frame");
				stats.skipped_edges += 1;
				continue;
			};
			let style = styles.resolve_line(id);
			let joints = stroke_joints(a, b, &style, t, &mut self.rng);
			draw_polyline(surface, &joints, &self.config.stroke);
			if self.config.debug_labels {
				for (i, joint) in joints.iter().enumerate() {
					surface.fill_text(&i.to_string(), *joint + Vector2::new(10.0, 0.0));
				}
			}
			stats.edges += 1;
		}
		stats
	}
}
