//! Host-independent sketch core: geometry, the point/link graph, styles and
//! the hand-drawn renderer.

pub mod clock;
pub mod drawing;
pub mod effects;
pub mod error;
pub mod graph;
pub mod renderer;
pub mod stroke;
pub mod style;
pub mod surface;
pub mod vector;

pub use clock::{Clock, FRAME_STEP};
pub use drawing::Drawing;
pub use error::{GraphError, Result, SketchError, StyleError};
pub use graph::{Edge, EdgeId, Graph, MoveMode, NodeId, Rect};
pub use renderer::{FrameStats, Renderer, RendererConfig};
pub use style::{
	ElementId, LineStyle, LineStyleOverride, PointStyle, PointStyleOverride, StyleOverride,
	StyleTable, Wave, WaveOverride,
};
pub use surface::{RecordingSurface, StrokeStyle, Surface, SurfaceOp};
pub use vector::Vector2;
