//! Immutable 2D vector used for every position in a sketch.

use std::ops::{Add, Mul, Neg, Sub};

/// Magnitudes below this normalize to [`Vector2::ZERO`].
pub const NORMALIZE_EPSILON: f64 = 1e-9;

/// A 2D point or direction in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
	/// Horizontal component.
	pub x: f64,
	/// Vertical component (grows downwards on canvas).
	pub y: f64,
}

impl Vector2 {
	/// The origin.
	pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

	/// Creates a vector from its components.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Multiplies both components by `scalar`.
	pub fn scale(self, scalar: f64) -> Self {
		Self::new(self.x * scalar, self.y * scalar)
	}

	/// Euclidean length.
	pub fn magnitude(self) -> f64 {
		self.x.hypot(self.y)
	}

	/// Unit vector in the same direction, or [`Vector2::ZERO`] for (near) zero input.
	pub fn normalize(self) -> Self {
		let magnitude = self.magnitude();
		if magnitude < NORMALIZE_EPSILON {
			Self::ZERO
		} else {
			Self::new(self.x / magnitude, self.y / magnitude)
		}
	}

	/// Rotates by 90 degrees: `(x, y) -> (y, -x)`.
	pub fn perpendicular(self) -> Self {
		Self::new(self.y, -self.x)
	}

	/// Distance between two points.
	pub fn distance_to(self, other: Self) -> f64 {
		(self - other).magnitude()
	}

	/// Angle of the vector in radians, `atan2(y, x)`.
	pub fn angle(self) -> f64 {
		self.y.atan2(self.x)
	}

	/// Angle of the direction from `self` to `other`.
	pub fn angle_to(self, other: Self) -> f64 {
		(other - self).angle()
	}

	/// Component-wise absolute value.
	pub fn abs(self) -> Self {
		Self::new(self.x.abs(), self.y.abs())
	}

	/// Dot product.
	pub fn dot(self, other: Self) -> f64 {
		self.x * other.x + self.y * other.y
	}

	/// Rotates the point around `pivot` by `radians`, clockwise on screen.
	pub fn rotate_around(self, pivot: Self, radians: f64) -> Self {
		let (sin, cos) = (-radians).sin_cos();
		let d = self - pivot;
		Self::new(
			cos * d.x + sin * d.y + pivot.x,
			cos * d.y - sin * d.x + pivot.y,
		)
	}
}

impl Add for Vector2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Vector2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Neg for Vector2 {
	type Output = Self;

	fn neg(self) -> Self {
		Self::new(-self.x, -self.y)
	}
}

impl Mul<f64> for Vector2 {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		self.scale(rhs)
	}
}

impl From<(f64, f64)> for Vector2 {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

/// Degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
	degrees.to_radians()
}

/// Radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
	radians.to_degrees()
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn perpendicular_twice_negates() {
		for v in [
			Vector2::new(3.0, 4.0),
			Vector2::new(-1.5, 0.25),
			Vector2::new(0.0, -7.0),
		] {
			assert_eq!(v.perpendicular().perpendicular(), -v);
		}
	}

	#[test]
	fn normalize_gives_unit_length() {
		for v in [
			Vector2::new(3.0, 4.0),
			Vector2::new(-0.001, 0.002),
			Vector2::new(1e6, -1e6),
		] {
			assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);
		}
	}

	#[test]
	fn normalize_zero_is_zero() {
		assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
		assert_eq!(Vector2::new(1e-12, 0.0).normalize(), Vector2::ZERO);
	}

	#[test]
	fn arithmetic() {
		let a = Vector2::new(1.0, 2.0);
		let b = Vector2::new(4.0, 6.0);
		assert_eq!(a + b, Vector2::new(5.0, 8.0));
		assert_eq!(b - a, Vector2::new(3.0, 4.0));
		assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
		assert_relative_eq!(a.distance_to(b), 5.0);
		assert_eq!(Vector2::new(-2.0, 3.0).abs(), Vector2::new(2.0, 3.0));
	}

	#[test]
	fn angles() {
		assert_relative_eq!(Vector2::new(0.0, 1.0).angle(), FRAC_PI_2);
		assert_relative_eq!(
			Vector2::new(1.0, 1.0).angle_to(Vector2::new(1.0, 5.0)),
			FRAC_PI_2
		);
		assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
		assert_relative_eq!(rad_to_deg(FRAC_PI_2), 90.0);
	}

	#[test]
	fn rotate_quarter_turn_around_pivot() {
		let p = Vector2::new(2.0, 1.0).rotate_around(Vector2::new(1.0, 1.0), FRAC_PI_2);
		assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
		assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
	}
}
