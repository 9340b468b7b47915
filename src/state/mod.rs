pub mod double_tap;
pub mod gesture;
pub mod touch;
pub mod transform;

pub use gesture::{GestureMapper, Response};
pub use touch::TouchPoint;
pub use transform::ViewTransform;
