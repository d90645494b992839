use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::sketch::{FrameStats, StrokeStyle, Surface, Vector2};

use super::state::SketchState;

const BACKGROUND: &str = "#1a1a2e";

impl Surface for CanvasRenderingContext2d {
	fn begin_stroke(&mut self) {
		self.begin_path();
	}

	fn move_to(&mut self, point: Vector2) {
		CanvasRenderingContext2d::move_to(self, point.x, point.y);
	}

	fn line_to(&mut self, point: Vector2) {
		CanvasRenderingContext2d::line_to(self, point.x, point.y);
	}

	fn end_stroke(&mut self, style: &StrokeStyle) {
		self.set_stroke_style_str(&style.color);
		self.set_line_width(style.width);
		self.stroke();
	}

	fn circle(&mut self, center: Vector2, radius: f64) {
		CanvasRenderingContext2d::move_to(self, center.x + radius, center.y);
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
	}

	fn fill_text(&mut self, text: &str, position: Vector2) {
		self.set_fill_style_str("white");
		self.set_font("10px sans-serif");
		let _ = CanvasRenderingContext2d::fill_text(self, text, position.x, position.y);
	}
}

pub fn render(state: &mut SketchState, ctx: &CanvasRenderingContext2d) -> FrameStats {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	// `Surface` takes `&mut self`; the JS handle is a cheap reference clone.
	let mut surface = ctx.clone();
	let stats = state.renderer.render(&state.drawing, &mut surface);
	draw_selection(state, &mut surface);
	stats
}

fn draw_selection(state: &SketchState, surface: &mut CanvasRenderingContext2d) {
	let radius = state.renderer.config.node_radius * 2.0;
	for &idx in &state.selected {
		if let Some(position) = state.drawing.graph.node(idx) {
			surface.begin_stroke();
			Surface::circle(surface, position, radius);
			surface.end_stroke(&state.selected_stroke);
		}
	}

	if state.select_box.active {
		let rect = state.select_box.rect();
		surface.set_stroke_style_str("rgba(100, 180, 255, 0.8)");
		surface.set_line_width(1.0);
		surface.stroke_rect(rect.x, rect.y, rect.width, rect.height);
	}
}
