//! xyplot-nav: interactivity core for static x/y vector plots.
//!
//! The crate maps between device and logical coordinates, plans readable
//! `{1,2,5} x 10^k` axis labels for the visible range, and drives pan, zoom
//! and cursor readout from host pointer events. Drawing goes through the
//! [`render::Renderer`] trait so hosts can plug in any surface.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotController};
pub use error::{PlotError, PlotResult};
