mod component;
mod render;
mod state;
mod types;

pub use component::SketchCanvas;
pub use types::{SketchData, SketchLink, SketchPoint};
