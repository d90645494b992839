//! Animation time shared by every effect in a frame.

/// Time advanced per rendered frame when no real elapsed time is tracked.
pub const FRAME_STEP: f64 = 0.16;

/// Monotonically non-decreasing time driving periodic motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
	time: f64,
}

impl Clock {
	/// Clock starting at zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current time.
	pub fn now(&self) -> f64 {
		self.time
	}

	/// Moves time forward by `dt`. Negative or non-finite steps are ignored.
	pub fn advance(&mut self, dt: f64) -> f64 {
		if dt.is_finite() && dt > 0.0 {
			self.time += dt;
		}
		self.time
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	#[test]
	fn advances_and_never_goes_back() {
		let mut clock = Clock::new();
		clock.advance(FRAME_STEP);
		clock.advance(FRAME_STEP);
		assert_relative_eq!(clock.now(), 0.32);
		clock.advance(-1.0);
		clock.advance(f64::NAN);
		assert_relative_eq!(clock.now(), 0.32);
	}
}
