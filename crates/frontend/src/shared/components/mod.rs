pub mod lazy_image;
pub mod ui;

pub use lazy_image::LazyImage;
