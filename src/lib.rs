//! activity-cards: SVG chart and badge rendering engine.
//!
//! This crate turns a one-dimensional categorical time series (a `Dataset`)
//! into small self-contained SVG "cards": bar, horizontal-bar, line, area,
//! radar, bubble, donut and spiral charts, plus gauge and tier-badge variants.
//! Renderers produce `RenderedComponent` fragments that the container
//! composer stacks into one final document.

pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartKind, ContainerConfig, compose};
pub use charts::{
    DonutTuning, GaugeConfig, GaugeStats, TierConfig, TierStanding, render, render_donut_tuned,
};
pub use core::{Category, Dataset};
pub use error::{CardError, CardResult};
pub use render::{Document, RenderedComponent};
