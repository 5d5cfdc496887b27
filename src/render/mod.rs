pub mod component;
pub mod svg;

pub use component::{Document, RenderedComponent};
