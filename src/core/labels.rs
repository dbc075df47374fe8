use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::label_format::format_significant;

/// One tick: its logical coordinate and rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub value: f64,
    pub text: String,
}

/// Ordered tick labels for one axis, unique by rendered text.
///
/// Values must be pushed in ascending order. When a new value renders to an
/// existing text, the entry keeps its position and takes the newer value, so
/// two ticks that round alike collapse into one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelSet {
    entries: IndexMap<String, f64>,
    precision: u8,
}

impl LabelSet {
    #[must_use]
    pub fn new(precision: u8) -> Self {
        Self {
            entries: IndexMap::new(),
            precision,
        }
    }

    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>, precision: u8) -> Self {
        let mut labels = Self::new(precision);
        for value in values {
            labels.push(value);
        }
        labels
    }

    /// Adds `value`; returns `false` when it collapsed into an existing label.
    pub fn push(&mut self, value: f64) -> bool {
        let text = format_significant(value, self.precision);
        self.entries.insert(text, value).is_none()
    }

    #[must_use]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<f64> {
        self.entries.get(text).copied()
    }

    /// `(text, value)` pairs in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(text, value)| (text.as_str(), *value))
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.values().copied().collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn to_labels(&self) -> Vec<Label> {
        self.iter()
            .map(|(text, value)| Label {
                value,
                text: text.to_owned(),
            })
            .collect()
    }
}

/// Device-space size a candidate label set would occupy along its axis.
///
/// The planner only compares the result against a budget; a non-finite
/// result is read as "does not fit".
pub trait LabelMeasure {
    fn measure(&self, labels: &LabelSet) -> f64;
}

impl<F> LabelMeasure for F
where
    F: Fn(&LabelSet) -> f64,
{
    fn measure(&self, labels: &LabelSet) -> f64 {
        self(labels)
    }
}

/// Width estimate for labels laid side by side along a horizontal axis.
///
/// Each label is charged for `separator + text`, which leaves breathing room
/// between neighbours.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalTextMeasure {
    pub font_size_px: f64,
    pub separator: String,
}

impl HorizontalTextMeasure {
    #[must_use]
    pub fn new(font_size_px: f64, separator: impl Into<String>) -> Self {
        Self {
            font_size_px,
            separator: separator.into(),
        }
    }
}

impl LabelMeasure for HorizontalTextMeasure {
    fn measure(&self, labels: &LabelSet) -> f64 {
        let separator_px = estimate_text_width_px(&self.separator, self.font_size_px);
        labels
            .iter()
            .map(|(text, _)| separator_px + estimate_text_width_px(text, self.font_size_px))
            .sum()
    }
}

/// Height estimate for labels stacked along a vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStackMeasure {
    pub line_height_px: f64,
    pub lines_per_label: f64,
}

impl VerticalStackMeasure {
    #[must_use]
    pub fn new(line_height_px: f64, lines_per_label: f64) -> Self {
        Self {
            line_height_px,
            lines_per_label,
        }
    }
}

impl LabelMeasure for VerticalStackMeasure {
    fn measure(&self, labels: &LabelSet) -> f64 {
        labels.len() as f64 * self.lines_per_label * self.line_height_px
    }
}

/// Deterministic, backend-independent text width estimate.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' => 0.42,
            '_' => 0.5,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}
