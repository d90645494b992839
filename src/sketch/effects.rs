//! Per-frame positional effects for points: random shake plus a periodic
//! bob whose phase depends on the point's own position.

use std::collections::HashMap;

use rand::Rng;

use super::graph::{Graph, NodeId};
use super::stroke::random_spread;
use super::style::{PointStyle, StyleTable};
use super::vector::Vector2;

/// Displayed position of a point stored at `position`, at time `t`.
pub fn displaced_position<R: Rng + ?Sized>(
	position: Vector2,
	style: &PointStyle,
	t: f64,
	rng: &mut R,
) -> Vector2 {
	let shake = Vector2::new(
		random_spread(&mut *rng, style.jitter),
		random_spread(&mut *rng, style.jitter),
	);

	// Phase comes from the position, so neighbouring points drift out of step.
	let x_phase = (position.x % 11.0) / 10.0;
	let y_phase = (position.y % 11.0) / 10.0;
	let wave = &style.wave;
	let bob = Vector2::new(
		(t * wave.speed * x_phase).cos() * wave.amplitude,
		(t * wave.speed * y_phase).sin() * wave.amplitude,
	);

	position + shake + bob
}

/// Displayed position of every node. Stored positions are left untouched.
pub fn displace_nodes<R: Rng + ?Sized>(
	graph: &Graph,
	styles: &StyleTable,
	t: f64,
	rng: &mut R,
) -> HashMap<NodeId, Vector2> {
	graph
		.nodes()
		.map(|(id, position)| {
			let style = styles.resolve_point(id);
			(id, displaced_position(position, &style, t, &mut *rng))
		})
		.collect()
}
