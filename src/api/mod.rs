//! Public configuration and composition surface.

mod chart_config;
mod container;

pub use chart_config::{ChartConfig, ChartKind};
pub use container::{ContainerConfig, compose};
