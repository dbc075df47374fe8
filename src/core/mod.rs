pub mod label_format;
pub mod label_planner;
pub mod labels;
pub mod mapper;
pub mod nice_step;
pub mod types;

pub use label_format::{DEFAULT_SIGNIFICANT_DIGITS, format_significant};
pub use label_planner::{AxisLabelPlanner, LabelPlan, suggest_ticks};
pub use labels::{
    HorizontalTextMeasure, Label, LabelMeasure, LabelSet, VerticalStackMeasure,
    estimate_text_width_px,
};
pub use mapper::{AxisAffine, ViewTransform};
pub use nice_step::NiceStep;
pub use types::{
    Axis, DevicePoint, DeviceRect, LogicalPoint, LogicalRange, LogicalViewport, SurfaceSize,
};
