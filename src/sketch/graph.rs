//! Point/link graph backing a sketch.
//!
//! Nodes live in a generational arena; edges are keyed by the sorted pair of
//! their endpoints so `(a, b)` and `(b, a)` always collapse to one edge. An
//! adjacency index is kept in step with every mutation.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use slotmap::{SecondaryMap, SlotMap};

use super::error::GraphError;
use super::vector::Vector2;

slotmap::new_key_type! {
	/// Stable identifier of a point in the sketch.
	pub struct NodeId;
}

/// Order-independent identifier of a link between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(NodeId, NodeId);

impl EdgeId {
	/// Derives the id for the pair, regardless of argument order.
	pub fn new(a: NodeId, b: NodeId) -> Self {
		if a <= b { Self(a, b) } else { Self(b, a) }
	}

	/// Both endpoints in sorted order.
	pub fn nodes(&self) -> (NodeId, NodeId) {
		(self.0, self.1)
	}
}

impl fmt::Display for EdgeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use slotmap::Key;
		write!(
			f,
			"{}-{}",
			self.0.data().as_ffi(),
			self.1.data().as_ffi()
		)
	}
}

/// A link as originally supplied; `from`/`to` keep the caller's orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Start node.
	pub from: NodeId,
	/// End node.
	pub to: NodeId,
}

/// How [`Graph::move_node`] interprets its position argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveMode {
	/// Replace the stored position.
	Absolute,
	/// Offset the stored position.
	Relative,
}

/// Axis-aligned rectangle, `x`/`y` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

/// Nodes, edges and the adjacency index between them.
#[derive(Debug, Default, Clone)]
pub struct Graph {
	nodes: SlotMap<NodeId, Vector2>,
	edges: BTreeMap<EdgeId, Edge>,
	adjacency: SecondaryMap<NodeId, Vec<NodeId>>,
}

impl Graph {
	/// Creates an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Order-independent id for a pair of nodes.
	pub fn edge_id(a: NodeId, b: NodeId) -> EdgeId {
		EdgeId::new(a, b)
	}

	// --- Node operations ---

	/// Inserts a node and returns its id.
	pub fn add_node(&mut self, position: Vector2) -> NodeId {
		let id = self.nodes.insert(position);
		self.adjacency.insert(id, Vec::new());
		debug!("added node {id:?} at ({}, {})", position.x, position.y);
		id
	}

	/// Stored position of a node.
	pub fn node(&self, id: NodeId) -> Option<Vector2> {
		self.nodes.get(id).copied()
	}

	/// Whether the node exists.
	pub fn contains_node(&self, id: NodeId) -> bool {
		self.nodes.contains_key(id)
	}

	/// Moves a node, returning its new position.
	///
	/// # Errors
	///
	/// Returns [`GraphError::MissingNode`] if the node does not exist.
	pub fn move_node(
		&mut self,
		id: NodeId,
		position: Vector2,
		mode: MoveMode,
	) -> Result<Vector2, GraphError> {
		let stored = self.nodes.get_mut(id).ok_or(GraphError::MissingNode(id))?;
		*stored = match mode {
			MoveMode::Absolute => position,
			MoveMode::Relative => *stored + position,
		};
		Ok(*stored)
	}

	/// Removes a node and every edge touching it, returning the removed edge ids.
	pub fn remove_node(&mut self, id: NodeId) -> Vec<EdgeId> {
		if self.nodes.remove(id).is_none() {
			return Vec::new();
		}
		let neighbors = self.adjacency.remove(id).unwrap_or_default();
		let mut removed = Vec::with_capacity(neighbors.len());
		for other in neighbors {
			let edge_id = EdgeId::new(id, other);
			self.edges.remove(&edge_id);
			if let Some(list) = self.adjacency.get_mut(other) {
				list.retain(|&n| n != id);
			}
			removed.push(edge_id);
		}
		debug!("removed node {id:?} and {} incident edges", removed.len());
		removed
	}

	/// All nodes with their stored positions.
	pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Vector2)> + '_ {
		self.nodes.iter().map(|(id, &p)| (id, p))
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	// --- Edge operations ---

	/// Links two existing nodes. Re-linking a pair keeps its id and takes the
	/// new orientation.
	///
	/// # Errors
	///
	/// Returns [`GraphError::MissingNode`] if either end is absent and
	/// [`GraphError::SelfLoop`] if both ends are the same node.
	pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId, GraphError> {
		for id in [from, to] {
			if !self.nodes.contains_key(id) {
				return Err(GraphError::MissingNode(id));
			}
		}
		if from == to {
			return Err(GraphError::SelfLoop(from));
		}

		let id = EdgeId::new(from, to);
		if self.edges.insert(id, Edge { from, to }).is_none() {
			for (a, b) in [(from, to), (to, from)] {
				if let Some(list) = self.adjacency.get_mut(a) {
					if !list.contains(&b) {
						list.push(b);
					}
				}
			}
			debug!("added edge {id}");
		}
		Ok(id)
	}

	/// The edge between two nodes, in either order.
	pub fn edge(&self, a: NodeId, b: NodeId) -> Option<Edge> {
		self.edge_by_id(EdgeId::new(a, b))
	}

	/// Looks an edge up by id.
	pub fn edge_by_id(&self, id: EdgeId) -> Option<Edge> {
		self.edges.get(&id).copied()
	}

	/// Removes the edge between two nodes, returning it if it existed.
	pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Option<Edge> {
		let edge = self.edges.remove(&EdgeId::new(a, b))?;
		for (x, y) in [(a, b), (b, a)] {
			if let Some(list) = self.adjacency.get_mut(x) {
				list.retain(|&n| n != y);
			}
		}
		Some(edge)
	}

	/// All edges in id order.
	pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
		self.edges.iter().map(|(&id, &edge)| (id, edge))
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Nodes directly linked to `id`, in link order.
	pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
		self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Edges touching `id`.
	pub fn node_edges(&self, id: NodeId) -> Vec<(EdgeId, Edge)> {
		self.neighbors(id)
			.iter()
			.filter_map(|&other| {
				let edge_id = EdgeId::new(id, other);
				self.edge_by_id(edge_id).map(|edge| (edge_id, edge))
			})
			.collect()
	}

	/// Depth-first walk of everything reachable from `start`, `start` first.
	/// Empty if `start` does not exist.
	pub fn connected_nodes(&self, start: NodeId) -> Vec<NodeId> {
		if !self.contains_node(start) {
			return Vec::new();
		}
		let mut visited = SecondaryMap::new();
		let mut order = Vec::new();
		let mut stack = vec![start];
		while let Some(id) = stack.pop() {
			if visited.insert(id, ()).is_some() {
				continue;
			}
			order.push(id);
			for &next in self.neighbors(id).iter().rev() {
				if !visited.contains_key(next) {
					stack.push(next);
				}
			}
		}
		order
	}

	// --- Hit queries ---

	/// Nodes strictly closer than `radius` to `position`.
	pub fn nodes_within_radius(&self, position: Vector2, radius: f64) -> Vec<NodeId> {
		self.nodes()
			.filter(|(_, p)| p.distance_to(position) < radius)
			.map(|(id, _)| id)
			.collect()
	}

	/// Edges passing within `tolerance` of `position`, using the
	/// distance-sum test: `d1 + d2` is within `tolerance` of the edge length.
	pub fn edges_near(&self, position: Vector2, tolerance: f64) -> Vec<EdgeId> {
		self.edges()
			.filter_map(|(id, edge)| {
				let (a, b) = (self.node(edge.from)?, self.node(edge.to)?);
				let sum = position.distance_to(a) + position.distance_to(b);
				let length = a.distance_to(b);
				(sum >= length - tolerance && sum <= length + tolerance).then_some(id)
			})
			.collect()
	}

	/// Nodes strictly inside the box spanned from `origin` by `size`. A
	/// negative size on either axis extends the box the other way.
	pub fn nodes_within_bounds(&self, origin: Vector2, size: Vector2) -> Vec<NodeId> {
		let rect = Rect::from_corner(origin, size);
		self.nodes()
			.filter(|(_, p)| rect.contains_strict(*p))
			.map(|(id, _)| id)
			.collect()
	}

	/// Smallest rectangle enclosing the given nodes; `None` if none exist.
	pub fn bounding_box(&self, ids: &[NodeId]) -> Option<Rect> {
		let mut points = ids.iter().filter_map(|&id| self.node(id));
		let first = points.next()?;
		let (min, max) = points.fold((first, first), |(min, max), p| {
			(
				Vector2::new(min.x.min(p.x), min.y.min(p.y)),
				Vector2::new(max.x.max(p.x), max.y.max(p.y)),
			)
		});
		Some(Rect {
			x: min.x,
			y: min.y,
			width: max.x - min.x,
			height: max.y - min.y,
		})
	}
}

impl Rect {
	/// Rectangle spanned from `origin` by a possibly negative `size`.
	pub fn from_corner(origin: Vector2, size: Vector2) -> Self {
		Self {
			x: if size.x < 0.0 { origin.x + size.x } else { origin.x },
			y: if size.y < 0.0 { origin.y + size.y } else { origin.y },
			width: size.x.abs(),
			height: size.y.abs(),
		}
	}

	/// Whether `p` lies strictly inside.
	pub fn contains_strict(&self, p: Vector2) -> bool {
		p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn triangle() -> (Graph, [NodeId; 3]) {
		let mut g = Graph::new();
		let a = g.add_node(Vector2::new(0.0, 0.0));
		let b = g.add_node(Vector2::new(10.0, 0.0));
		let c = g.add_node(Vector2::new(0.0, 10.0));
		g.add_edge(a, b).unwrap();
		g.add_edge(b, c).unwrap();
		g.add_edge(c, a).unwrap();
		(g, [a, b, c])
	}

	#[test]
	fn edge_id_is_order_independent() {
		let mut g = Graph::new();
		let a = g.add_node(Vector2::ZERO);
		let b = g.add_node(Vector2::new(1.0, 1.0));
		assert_eq!(Graph::edge_id(a, b), Graph::edge_id(b, a));

		let first = g.add_edge(a, b).unwrap();
		let second = g.add_edge(b, a).unwrap();
		assert_eq!(first, second);
		assert_eq!(g.edge_count(), 1);
		assert_eq!(g.edge(a, b), Some(Edge { from: b, to: a }));
		assert_eq!(g.neighbors(a), &[b]);
	}

	#[test]
	fn add_edge_rejects_missing_and_self_loops() {
		let mut g = Graph::new();
		let a = g.add_node(Vector2::ZERO);
		let b = g.add_node(Vector2::ZERO);
		g.remove_node(b);
		assert_eq!(g.add_edge(a, b), Err(GraphError::MissingNode(b)));
		assert_eq!(g.add_edge(a, a), Err(GraphError::SelfLoop(a)));
		assert_eq!(g.edge_count(), 0);
	}

	#[test]
	fn remove_node_cascades_edges() {
		let (mut g, [a, b, c]) = triangle();
		let removed = g.remove_node(a);
		assert_eq!(removed.len(), 2);
		assert_eq!(g.edge_count(), 1);
		assert!(g.edge(b, c).is_some());
		assert_eq!(g.neighbors(b), &[c]);
		assert_eq!(g.neighbors(c), &[b]);
		for (_, edge) in g.edges() {
			assert!(g.contains_node(edge.from) && g.contains_node(edge.to));
		}
	}

	#[test]
	fn remove_edge_updates_adjacency() {
		let (mut g, [a, b, c]) = triangle();
		assert!(g.remove_edge(b, a).is_some());
		assert!(g.remove_edge(a, b).is_none());
		assert_eq!(g.neighbors(a), &[c]);
		assert_eq!(g.neighbors(b), &[c]);
		assert_eq!(g.node_edges(a).len(), 1);
	}

	#[test]
	fn move_node_absolute_and_relative() {
		let (mut g, [a, ..]) = triangle();
		g.move_node(a, Vector2::new(5.0, 5.0), MoveMode::Absolute).unwrap();
		let p = g.move_node(a, Vector2::new(1.0, -2.0), MoveMode::Relative).unwrap();
		assert_eq!(p, Vector2::new(6.0, 3.0));
		assert_eq!(g.node(a), Some(p));

		g.remove_node(a);
		assert_eq!(
			g.move_node(a, Vector2::ZERO, MoveMode::Absolute),
			Err(GraphError::MissingNode(a))
		);
	}

	#[test]
	fn connected_nodes_visits_each_once() {
		let (mut g, [a, b, c]) = triangle();
		let d = g.add_node(Vector2::new(50.0, 50.0));
		let e = g.add_node(Vector2::new(60.0, 50.0));
		g.add_edge(d, e).unwrap();

		let reached = g.connected_nodes(b);
		assert_eq!(reached.len(), 3);
		assert_eq!(reached[0], b);
		for id in [a, c] {
			assert!(reached.contains(&id));
		}
		assert_eq!(g.connected_nodes(e), vec![e, d]);
	}

	#[test]
	fn hit_queries() {
		let (g, [a, b, c]) = triangle();
		assert_eq!(g.nodes_within_radius(Vector2::new(9.0, 1.0), 3.0), vec![b]);
		assert_eq!(
			g.edges_near(Vector2::new(5.0, 0.0), 0.1),
			vec![Graph::edge_id(a, b)]
		);

		let mut boxed = g.nodes_within_bounds(Vector2::new(11.0, 1.0), Vector2::new(-12.0, -2.0));
		boxed.sort();
		let mut expected = vec![a, b];
		expected.sort();
		assert_eq!(boxed, expected);
		assert!(!boxed.contains(&c));
	}

	#[test]
	fn bounding_box_of_nodes() {
		let (g, ids) = triangle();
		assert_eq!(
			g.bounding_box(&ids),
			Some(Rect {
				x: 0.0,
				y: 0.0,
				width: 10.0,
				height: 10.0
			})
		);
		assert_eq!(g.bounding_box(&[]), None);
	}

	#[test]
	fn edge_id_display_is_sorted_pair() {
		let (_, [a, b, _]) = triangle();
		assert_eq!(
			Graph::edge_id(b, a).to_string(),
			Graph::edge_id(a, b).to_string()
		);
	}
}
