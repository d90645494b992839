//! Hand-drawn stroke generation.
//!
//! A straight segment is split into evenly spaced joints. Interior joints are
//! pushed along the segment's normal by a per-joint wave plus a uniform random
//! jitter, optionally scaled down towards both ends by a triangular taper.
//! Endpoints are always pinned to the anchors.

use rand::Rng;

use super::style::LineStyle;
use super::surface::{StrokeStyle, Surface};
use super::vector::Vector2;

/// Uniform draw from `[-spread, spread)`, scaled from a unit draw so any
/// finite spread is safe. Zero for non-positive or non-finite spreads.
pub fn random_spread<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
	if spread > 0.0 && spread.is_finite() {
		rng.gen_range(-1.0..1.0) * spread
	} else {
		0.0
	}
}

/// Displacement envelope at joint `i` of `segments`: `0.5 - |i/segments - 0.5|`
/// when tapering, `1` otherwise.
pub fn taper_factor(i: u32, segments: u32, taper: bool) -> f64 {
	if !taper {
		return 1.0;
	}
	if segments == 0 {
		return 0.0;
	}
	0.5 - (f64::from(i) / f64::from(segments) - 0.5).abs()
}

/// Joints of the stroke from `a` to `b` at time `t`.
///
/// Returns `segments + 1` joints, or exactly `[a, b]` when `segments` is zero.
/// The first joint is always `a` and the last always `b`.
pub fn stroke_joints<R: Rng + ?Sized>(
	a: Vector2,
	b: Vector2,
	style: &LineStyle,
	t: f64,
	rng: &mut R,
) -> Vec<Vector2> {
	let segments = style.segments;
	if segments == 0 {
		return vec![a, b];
	}

	let line = b - a;
	let normal = line.perpendicular().normalize();

	(0..=segments)
		.map(|i| {
			if i == 0 {
				return a;
			}
			if i == segments {
				return b;
			}
			let base = a + line * (f64::from(i) / f64::from(segments));
			let wave = (t * style.wave.speed + f64::from(i)).sin() * style.wave.amplitude;
			let noise = random_spread(&mut *rng, style.jitter);
			base + normal * ((wave + noise) * taper_factor(i, segments, style.taper))
		})
		.collect()
}

/// Strokes consecutive joints as one path.
pub fn draw_polyline<S: Surface + ?Sized>(surface: &mut S, joints: &[Vector2], style: &StrokeStyle) {
	let Some((&first, rest)) = joints.split_first() else {
		return;
	};
	surface.begin_stroke();
	surface.move_to(first);
	for &joint in rest {
		surface.line_to(joint);
	}
	surface.end_stroke(style);
}
