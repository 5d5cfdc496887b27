pub mod color;
pub mod dataset;
pub mod format;
pub mod geometry;
pub mod pack;

pub use color::Rgb;
pub use dataset::{Category, Dataset};
pub use geometry::Point;
pub use pack::PackedCircle;
