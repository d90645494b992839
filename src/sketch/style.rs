//! Style descriptors for points and lines, and the per-element override table.
//!
//! Overrides are partial: every field is optional and resolves against a set
//! of defaults. The nested `wave` group merges field by field, so overriding
//! only `wave.speed` keeps the default amplitude.

use std::collections::HashMap;

use super::error::StyleError;
use super::graph::{EdgeId, NodeId};

/// Periodic motion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
	/// Angular speed multiplier applied to the clock.
	pub speed: f64,
	/// Peak displacement in canvas units.
	pub amplitude: f64,
}

/// Partial [`Wave`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveOverride {
	/// Overrides [`Wave::speed`].
	pub speed: Option<f64>,
	/// Overrides [`Wave::amplitude`].
	pub amplitude: Option<f64>,
}

impl WaveOverride {
	/// Merges over `defaults`, field by field.
	pub fn resolve(&self, defaults: &Wave) -> Wave {
		Wave {
			speed: self.speed.unwrap_or(defaults.speed),
			amplitude: self.amplitude.unwrap_or(defaults.amplitude),
		}
	}
}

/// Resolved style of a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
	/// Half-width of the uniform random offset per axis.
	pub jitter: f64,
	/// Periodic bobbing.
	pub wave: Wave,
}

impl Default for PointStyle {
	fn default() -> Self {
		Self {
			jitter: 2.0,
			wave: Wave {
				speed: 1.0,
				amplitude: 1.0,
			},
		}
	}
}

/// Resolved style of a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
	/// Number of sub-segments; `0` draws a plain straight line.
	pub segments: u32,
	/// Half-width of the uniform random perpendicular offset per joint.
	pub jitter: f64,
	/// Perpendicular wave applied to interior joints.
	pub wave: Wave,
	/// Narrow displacement towards both anchors.
	pub taper: bool,
}

impl Default for LineStyle {
	fn default() -> Self {
		Self {
			segments: 2,
			jitter: 0.0,
			wave: Wave {
				speed: 2.0,
				amplitude: 1.0,
			},
			taper: false,
		}
	}
}

fn check_jitter(jitter: f64) -> Result<f64, StyleError> {
	if jitter.is_finite() && jitter >= 0.0 {
		Ok(jitter)
	} else {
		Err(StyleError::InvalidJitter(jitter))
	}
}

/// Partial [`PointStyle`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointStyleOverride {
	jitter: Option<f64>,
	/// Wave fields to override.
	pub wave: WaveOverride,
}

impl PointStyleOverride {
	/// Sets the jitter.
	///
	/// # Errors
	///
	/// Returns [`StyleError::InvalidJitter`] for negative or non-finite values.
	pub fn with_jitter(mut self, jitter: f64) -> Result<Self, StyleError> {
		self.jitter = Some(check_jitter(jitter)?);
		Ok(self)
	}

	/// Sets the wave speed.
	pub fn with_wave_speed(mut self, speed: f64) -> Self {
		self.wave.speed = Some(speed);
		self
	}

	/// Sets the wave amplitude.
	pub fn with_wave_amplitude(mut self, amplitude: f64) -> Self {
		self.wave.amplitude = Some(amplitude);
		self
	}

	/// Overridden jitter, if any.
	pub fn jitter(&self) -> Option<f64> {
		self.jitter
	}

	/// Merges over `defaults`.
	pub fn resolve(&self, defaults: &PointStyle) -> PointStyle {
		PointStyle {
			jitter: self.jitter.unwrap_or(defaults.jitter),
			wave: self.wave.resolve(&defaults.wave),
		}
	}
}

/// Partial [`LineStyle`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineStyleOverride {
	segments: Option<u32>,
	jitter: Option<f64>,
	/// Wave fields to override.
	pub wave: WaveOverride,
	/// Overrides [`LineStyle::taper`].
	pub taper: Option<bool>,
}

impl LineStyleOverride {
	/// Sets the segment count.
	///
	/// # Errors
	///
	/// Returns [`StyleError::NegativeSegments`] for `segments < 0`.
	pub fn with_segments(mut self, segments: i64) -> Result<Self, StyleError> {
		if segments < 0 {
			return Err(StyleError::NegativeSegments(segments));
		}
		let segments =
			u32::try_from(segments).map_err(|_| StyleError::TooManySegments(segments))?;
		self.segments = Some(segments);
		Ok(self)
	}

	/// Sets the jitter.
	///
	/// # Errors
	///
	/// Returns [`StyleError::InvalidJitter`] for negative or non-finite values.
	pub fn with_jitter(mut self, jitter: f64) -> Result<Self, StyleError> {
		self.jitter = Some(check_jitter(jitter)?);
		Ok(self)
	}

	/// Sets the wave speed.
	pub fn with_wave_speed(mut self, speed: f64) -> Self {
		self.wave.speed = Some(speed);
		self
	}

	/// Sets the wave amplitude.
	pub fn with_wave_amplitude(mut self, amplitude: f64) -> Self {
		self.wave.amplitude = Some(amplitude);
		self
	}

	/// Enables or disables tapering.
	pub fn with_taper(mut self, taper: bool) -> Self {
		self.taper = Some(taper);
		self
	}

	/// Overridden segment count, if any.
	pub fn segments(&self) -> Option<u32> {
		self.segments
	}

	/// Overridden jitter, if any.
	pub fn jitter(&self) -> Option<f64> {
		self.jitter
	}

	/// Merges over `defaults`.
	pub fn resolve(&self, defaults: &LineStyle) -> LineStyle {
		LineStyle {
			segments: self.segments.unwrap_or(defaults.segments),
			jitter: self.jitter.unwrap_or(defaults.jitter),
			wave: self.wave.resolve(&defaults.wave),
			taper: self.taper.unwrap_or(defaults.taper),
		}
	}
}

/// Any element of a sketch that can carry a style override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
	/// A point.
	Node(NodeId),
	/// A link.
	Edge(EdgeId),
}

/// A stored override of either kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleOverride {
	/// Override for a point.
	Point(PointStyleOverride),
	/// Override for a line.
	Line(LineStyleOverride),
}

/// Defaults plus per-element overrides.
#[derive(Clone, Debug, Default)]
pub struct StyleTable {
	point_defaults: PointStyle,
	line_defaults: LineStyle,
	points: HashMap<NodeId, PointStyleOverride>,
	lines: HashMap<EdgeId, LineStyleOverride>,
}

impl StyleTable {
	/// Empty table with the stock defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty table with custom defaults.
	///
	/// # Errors
	///
	/// Returns [`StyleError::InvalidJitter`] if either default carries a
	/// negative or non-finite jitter.
	pub fn with_defaults(
		point_defaults: PointStyle,
		line_defaults: LineStyle,
	) -> Result<Self, StyleError> {
		check_jitter(point_defaults.jitter)?;
		check_jitter(line_defaults.jitter)?;
		Ok(Self {
			point_defaults,
			line_defaults,
			..Self::default()
		})
	}

	/// Point defaults every override merges over.
	pub fn point_defaults(&self) -> &PointStyle {
		&self.point_defaults
	}

	/// Line defaults every override merges over.
	pub fn line_defaults(&self) -> &LineStyle {
		&self.line_defaults
	}

	/// Stores a point override, replacing any previous one.
	pub fn set_point(&mut self, id: NodeId, style: PointStyleOverride) {
		self.points.insert(id, style);
	}

	/// Stores a line override, replacing any previous one.
	pub fn set_line(&mut self, id: EdgeId, style: LineStyleOverride) {
		self.lines.insert(id, style);
	}

	/// Point override, if any.
	pub fn point(&self, id: NodeId) -> Option<&PointStyleOverride> {
		self.points.get(&id)
	}

	/// Line override, if any.
	pub fn line(&self, id: EdgeId) -> Option<&LineStyleOverride> {
		self.lines.get(&id)
	}

	/// Override for any element.
	pub fn get(&self, id: ElementId) -> Option<StyleOverride> {
		match id {
			ElementId::Node(id) => self.point(id).copied().map(StyleOverride::Point),
			ElementId::Edge(id) => self.line(id).copied().map(StyleOverride::Line),
		}
	}

	/// Effective point style.
	pub fn resolve_point(&self, id: NodeId) -> PointStyle {
		self.point(id)
			.map_or(self.point_defaults, |o| o.resolve(&self.point_defaults))
	}

	/// Effective line style.
	pub fn resolve_line(&self, id: EdgeId) -> LineStyle {
		self.line(id)
			.map_or(self.line_defaults, |o| o.resolve(&self.line_defaults))
	}

	/// Drops a point override.
	pub fn remove_point(&mut self, id: NodeId) -> Option<PointStyleOverride> {
		self.points.remove(&id)
	}

	/// Drops a line override.
	pub fn remove_line(&mut self, id: EdgeId) -> Option<LineStyleOverride> {
		self.lines.remove(&id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use slotmap::SlotMap;

	use super::*;

	fn ids() -> (NodeId, NodeId) {
		let mut keys = SlotMap::<NodeId, ()>::with_key();
		(keys.insert(()), keys.insert(()))
	}

	#[test]
	fn defaults() {
		let line = LineStyle::default();
		assert_eq!(line.segments, 2);
		assert_eq!(line.jitter, 0.0);
		assert_eq!(line.wave, Wave { speed: 2.0, amplitude: 1.0 });
		assert!(!line.taper);

		let point = PointStyle::default();
		assert_eq!(point.jitter, 2.0);
		assert_eq!(point.wave, Wave { speed: 1.0, amplitude: 1.0 });
	}

	#[test]
	fn unspecified_fields_fall_back_to_defaults() {
		let style = LineStyleOverride::default()
			.with_segments(7)
			.unwrap()
			.resolve(&LineStyle::default());
		assert_eq!(style.segments, 7);
		assert_eq!(style.jitter, 0.0);
		assert_eq!(style.wave, LineStyle::default().wave);
		assert!(!style.taper);
	}

	#[test]
	fn partial_wave_override_keeps_other_field() {
		let line = LineStyleOverride::default()
			.with_wave_speed(9.0)
			.resolve(&LineStyle::default());
		assert_eq!(line.wave, Wave { speed: 9.0, amplitude: 1.0 });

		let point = PointStyleOverride::default()
			.with_wave_amplitude(4.0)
			.resolve(&PointStyle::default());
		assert_eq!(point.wave, Wave { speed: 1.0, amplitude: 4.0 });
	}

	#[test]
	fn invalid_values_are_rejected() {
		assert_eq!(
			LineStyleOverride::default().with_segments(-1),
			Err(StyleError::NegativeSegments(-1))
		);
		assert_eq!(
			LineStyleOverride::default().with_segments(i64::MAX),
			Err(StyleError::TooManySegments(i64::MAX))
		);
		assert!(LineStyleOverride::default().with_jitter(-0.5).is_err());
		assert!(PointStyleOverride::default().with_jitter(f64::NAN).is_err());
		assert!(LineStyleOverride::default().with_segments(0).is_ok());
	}

	#[test]
	fn table_resolves_per_element() {
		let (a, b) = ids();
		let edge = EdgeId::new(a, b);
		let mut table = StyleTable::new();
		table.set_point(a, PointStyleOverride::default().with_jitter(0.0).unwrap());
		table.set_line(edge, LineStyleOverride::default().with_taper(true));

		assert_eq!(table.resolve_point(a).jitter, 0.0);
		assert_eq!(table.resolve_point(b), PointStyle::default());
		assert!(table.resolve_line(EdgeId::new(b, a)).taper);
		assert!(matches!(
			table.get(ElementId::Edge(edge)),
			Some(StyleOverride::Line(_))
		));
		assert_eq!(table.get(ElementId::Node(b)), None);

		table.remove_line(edge);
		assert_eq!(table.resolve_line(edge), LineStyle::default());
	}

	#[test]
	fn custom_defaults_apply_to_unstyled_elements() {
		let (a, _) = ids();
		let point_defaults = PointStyle {
			jitter: 0.0,
			..PointStyle::default()
		};
		let table = StyleTable::with_defaults(point_defaults, LineStyle::default()).unwrap();
		assert_eq!(table.resolve_point(a), point_defaults);
		assert_eq!(table.line_defaults(), &LineStyle::default());
	}

	#[test]
	fn invalid_defaults_are_rejected() {
		let negative = PointStyle {
			jitter: -1.0,
			..PointStyle::default()
		};
		assert_eq!(
			StyleTable::with_defaults(negative, LineStyle::default()).err(),
			Some(StyleError::InvalidJitter(-1.0))
		);

		let infinite = LineStyle {
			jitter: f64::INFINITY,
			..LineStyle::default()
		};
		assert!(StyleTable::with_defaults(PointStyle::default(), infinite).is_err());
	}
}
