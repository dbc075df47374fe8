mod axis_frame_builder;
mod layout_helpers;
mod plot_config;
mod plot_controller;
mod plot_init;
mod plot_snapshot;
mod pointer_controller;
mod snapshot_controller;
mod view_controller;

pub use layout_helpers::{DrawnOrigins, PlotLayout};
pub use plot_config::{PlotConfig, PlotMargins};
pub use plot_controller::PlotController;
pub use plot_snapshot::{AxisLabelsSnapshot, PlotSnapshot};
