pub mod model;
pub mod view;

pub use model::{Frame, FrameRenderer, Marker};
pub use view::paint;

pub const FONT_FACE: &str = "Sans";
pub const FONT_SIZE: f64 = 16.0;
