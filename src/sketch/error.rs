//! Error types for graph edits and style validation.

use thiserror::Error;

use super::graph::{EdgeId, NodeId};

/// Top-level error type for sketch edits.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
	/// A graph edit failed.
	#[error(transparent)]
	Graph(#[from] GraphError),

	/// A style descriptor was rejected.
	#[error(transparent)]
	Style(#[from] StyleError),
}

/// Errors raised by graph mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// The node is not in the graph.
	#[error("node {0:?} does not exist")]
	MissingNode(NodeId),

	/// The edge is not in the graph.
	#[error("edge {0} does not exist")]
	MissingEdge(EdgeId),

	/// Both ends of a link are the same node.
	#[error("node {0:?} cannot be linked to itself")]
	SelfLoop(NodeId),
}

/// Errors raised while building a style descriptor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
	/// Segment count below zero.
	#[error("segment count must be non-negative, got {0}")]
	NegativeSegments(i64),

	/// Segment count beyond `u32::MAX`.
	#[error("segment count {0} is too large")]
	TooManySegments(i64),

	/// Jitter negative, infinite or NaN.
	#[error("jitter must be a finite non-negative number, got {0}")]
	InvalidJitter(f64),
}

/// Convenience type alias for results using [`SketchError`].
pub type Result<T> = std::result::Result<T, SketchError>;
