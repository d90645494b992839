use crate::sketch::{LineStyleOverride, PointStyleOverride};

#[derive(Clone, Debug)]
pub struct SketchPoint {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub style: Option<PointStyleOverride>,
}

#[derive(Clone, Debug)]
pub struct SketchLink {
	pub source: String,
	pub target: String,
	pub style: Option<LineStyleOverride>,
}

#[derive(Clone, Debug, Default)]
pub struct SketchData {
	pub points: Vec<SketchPoint>,
	pub links: Vec<SketchLink>,
}
