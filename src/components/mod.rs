pub mod sketch_canvas;
