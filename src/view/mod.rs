//! Rule-set consumers for the render pass

pub mod line_paint;

pub use line_paint::paint_line;
