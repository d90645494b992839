//! Drawing backend contract.
//!
//! The renderer only needs move/line/stroke primitives, circles for points
//! and text for debug labels. The canvas component implements this for
//! `CanvasRenderingContext2d`; [`RecordingSurface`] captures calls for tests.

use super::vector::Vector2;

/// Colour and width of a finished stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
	/// Any CSS colour string.
	pub color: String,
	/// Line width in canvas units.
	pub width: f64,
}

impl Default for StrokeStyle {
	fn default() -> Self {
		Self {
			color: "white".into(),
			width: 3.0,
		}
	}
}

/// Minimal 2D drawing backend.
pub trait Surface {
	/// Starts a new path.
	fn begin_stroke(&mut self);
	/// Moves the pen without drawing.
	fn move_to(&mut self, point: Vector2);
	/// Adds a straight line from the pen to `point`.
	fn line_to(&mut self, point: Vector2);
	/// Strokes the current path.
	fn end_stroke(&mut self, style: &StrokeStyle);
	/// Adds a full circle outline to the current path.
	fn circle(&mut self, center: Vector2, radius: f64);
	/// Places a text label.
	fn fill_text(&mut self, text: &str, position: Vector2);
}

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
	/// [`Surface::begin_stroke`].
	Begin,
	/// [`Surface::move_to`].
	MoveTo(Vector2),
	/// [`Surface::line_to`].
	LineTo(Vector2),
	/// [`Surface::end_stroke`].
	Stroke(StrokeStyle),
	/// [`Surface::circle`].
	Circle(Vector2, f64),
	/// [`Surface::fill_text`].
	Text(String, Vector2),
}

/// Headless surface that records every call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	/// Calls in order.
	pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
	/// Empty recording.
	pub fn new() -> Self {
		Self::default()
	}

	/// Every `(from, to)` pair drawn with `move_to` + `line_to`.
	pub fn segments(&self) -> Vec<(Vector2, Vector2)> {
		let mut pen = None;
		let mut out = Vec::new();
		for op in &self.ops {
			match *op {
				SurfaceOp::MoveTo(p) => pen = Some(p),
				SurfaceOp::LineTo(p) => {
					if let Some(from) = pen {
						out.push((from, p));
					}
					pen = Some(p);
				}
				_ => {}
			}
		}
		out
	}

	/// Number of circles drawn.
	pub fn circle_count(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, SurfaceOp::Circle(..)))
			.count()
	}
}

impl Surface for RecordingSurface {
	fn begin_stroke(&mut self) {
		self.ops.push(SurfaceOp::Begin);
	}

	fn move_to(&mut self, point: Vector2) {
		self.ops.push(SurfaceOp::MoveTo(point));
	}

	fn line_to(&mut self, point: Vector2) {
		self.ops.push(SurfaceOp::LineTo(point));
	}

	fn end_stroke(&mut self, style: &StrokeStyle) {
		self.ops.push(SurfaceOp::Stroke(style.clone()));
	}

	fn circle(&mut self, center: Vector2, radius: f64) {
		self.ops.push(SurfaceOp::Circle(center, radius));
	}

	fn fill_text(&mut self, text: &str, position: Vector2) {
		self.ops.push(SurfaceOp::Text(text.to_owned(), position));
	}
}
