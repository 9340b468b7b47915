pub mod app;
pub mod lightbox;

pub use app::App;
