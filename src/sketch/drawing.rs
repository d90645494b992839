//! The editable sketch document: graph plus style overrides kept consistent.

use log::warn;

use super::error::{GraphError, Result};
use super::graph::{EdgeId, Graph, MoveMode, NodeId};
use super::style::{LineStyleOverride, PointStyleOverride, StyleTable};
use super::vector::Vector2;

/// Points, links and their styles for one drawing session.
#[derive(Clone, Debug, Default)]
pub struct Drawing {
	/// Geometry.
	pub graph: Graph,
	/// Style defaults and overrides.
	pub styles: StyleTable,
}

impl Drawing {
	/// Empty drawing with stock styles.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty drawing with the given style table.
	pub fn with_styles(styles: StyleTable) -> Self {
		Self {
			graph: Graph::new(),
			styles,
		}
	}

	/// Adds a point, optionally styled.
	pub fn add_point(&mut self, position: Vector2, style: Option<PointStyleOverride>) -> NodeId {
		let id = self.graph.add_node(position);
		if let Some(style) = style {
			self.styles.set_point(id, style);
		}
		id
	}

	/// Links two points, optionally styling the link.
	///
	/// # Errors
	///
	/// Fails if either point is missing or both are the same point.
	pub fn link(
		&mut self,
		from: NodeId,
		to: NodeId,
		style: Option<LineStyleOverride>,
	) -> Result<EdgeId> {
		let id = self.graph.add_edge(from, to).inspect_err(|e| warn!("link rejected: {e}"))?;
		if let Some(style) = style {
			self.styles.set_line(id, style);
		}
		Ok(id)
	}

	/// Removes the link between two points along with its style.
	pub fn unlink(&mut self, a: NodeId, b: NodeId) -> bool {
		self.styles.remove_line(Graph::edge_id(a, b));
		self.graph.remove_edge(a, b).is_some()
	}

	/// Removes a point, its links and every related style override.
	pub fn remove_point(&mut self, id: NodeId) {
		self.styles.remove_point(id);
		for edge in self.graph.remove_node(id) {
			self.styles.remove_line(edge);
		}
	}

	/// Moves a point.
	///
	/// # Errors
	///
	/// Fails if the point does not exist.
	pub fn move_point(&mut self, id: NodeId, position: Vector2, mode: MoveMode) -> Result<Vector2> {
		Ok(self.graph.move_node(id, position, mode)?)
	}

	/// Replaces the style of an existing point.
	///
	/// # Errors
	///
	/// Fails if the point does not exist.
	pub fn set_point_style(&mut self, id: NodeId, style: PointStyleOverride) -> Result<()> {
		if !self.graph.contains_node(id) {
			return Err(GraphError::MissingNode(id).into());
		}
		self.styles.set_point(id, style);
		Ok(())
	}

	/// Replaces the style of an existing link.
	///
	/// # Errors
	///
	/// Fails if the link does not exist.
	pub fn set_line_style(&mut self, id: EdgeId, style: LineStyleOverride) -> Result<()> {
		if self.graph.edge_by_id(id).is_none() {
			return Err(GraphError::MissingEdge(id).into());
		}
		self.styles.set_line(id, style);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::sketch::error::SketchError;

	#[test]
	fn removing_a_point_drops_its_styles() {
		let mut d = Drawing::new();
		let a = d.add_point(Vector2::ZERO, Some(PointStyleOverride::default()));
		let b = d.add_point(Vector2::new(5.0, 5.0), None);
		let edge = d
			.link(a, b, Some(LineStyleOverride::default().with_taper(true)))
			.unwrap();
		assert!(d.styles.line(edge).is_some());

		d.remove_point(a);
		assert!(d.styles.point(a).is_none());
		assert!(d.styles.line(edge).is_none());
		assert_eq!(d.graph.edge_count(), 0);
		assert!(d.graph.contains_node(b));
	}

	#[test]
	fn styles_only_attach_to_existing_elements() {
		let mut d = Drawing::new();
		let a = d.add_point(Vector2::ZERO, None);
		let b = d.add_point(Vector2::new(1.0, 0.0), None);
		let missing = Graph::edge_id(a, b);

		assert_eq!(
			d.set_line_style(missing, LineStyleOverride::default()),
			Err(SketchError::Graph(GraphError::MissingEdge(missing)))
		);
		d.remove_point(b);
		assert!(d.set_point_style(b, PointStyleOverride::default()).is_err());
		assert!(d.set_point_style(a, PointStyleOverride::default()).is_ok());
	}

	#[test]
	fn unlink_and_move() {
		let mut d = Drawing::new();
		let a = d.add_point(Vector2::ZERO, None);
		let b = d.add_point(Vector2::new(1.0, 0.0), None);
		d.link(a, b, None).unwrap();
		assert!(d.unlink(b, a));
		assert!(!d.unlink(a, b));

		let p = d.move_point(a, Vector2::new(2.0, 2.0), MoveMode::Relative).unwrap();
		assert_eq!(p, Vector2::new(2.0, 2.0));
	}
}
