pub mod border_spec;
pub mod canvas_compositor;
pub mod geometry;
