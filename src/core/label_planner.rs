use tracing::{debug, trace, warn};

use crate::core::label_format::{DEFAULT_SIGNIFICANT_DIGITS, validate_precision};
use crate::core::labels::{LabelMeasure, LabelSet};
use crate::core::nice_step::NiceStep;
use crate::core::types::LogicalRange;
use crate::error::{PlotError, PlotResult};

pub const DEFAULT_MAX_REFINEMENTS: usize = 64;
pub const DEFAULT_MAX_LABELS: usize = 1_000;

/// Outcome of one planning pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlan {
    pub labels: LabelSet,
    /// Spacing of the accepted tick set; `None` for the endpoint and
    /// single-label fallbacks.
    pub step: Option<NiceStep>,
}

/// Why the refinement loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Overflow,
    Collapsed,
    TooManyLabels,
    RefinementLimit,
}

/// Chooses the densest `{1,2,5} x 10^k` tick set whose labels fit a budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLabelPlanner {
    precision: u8,
    max_refinements: usize,
    max_labels: usize,
}

impl Default for AxisLabelPlanner {
    fn default() -> Self {
        Self {
            precision: DEFAULT_SIGNIFICANT_DIGITS,
            max_refinements: DEFAULT_MAX_REFINEMENTS,
            max_labels: DEFAULT_MAX_LABELS,
        }
    }
}

impl AxisLabelPlanner {
    pub fn new(precision: u8) -> PlotResult<Self> {
        Ok(Self {
            precision: validate_precision(precision)?,
            ..Self::default()
        })
    }

    pub fn with_max_refinements(mut self, max_refinements: usize) -> PlotResult<Self> {
        if max_refinements == 0 {
            return Err(PlotError::InvalidData(
                "planner max refinements must be >= 1".to_owned(),
            ));
        }
        self.max_refinements = max_refinements;
        Ok(self)
    }

    pub fn with_max_labels(mut self, max_labels: usize) -> PlotResult<Self> {
        if max_labels < 2 {
            return Err(PlotError::InvalidData(
                "planner max labels must be >= 2".to_owned(),
            ));
        }
        self.max_labels = max_labels;
        Ok(self)
    }

    #[must_use]
    pub fn precision(self) -> u8 {
        self.precision
    }

    /// Plans labels for `range` within `budget` device units.
    ///
    /// Never returns an empty set: `lo == hi` yields that single value, and when
    /// even the two endpoints overflow the budget only `lo` is kept.
    pub fn plan(
        self,
        range: LogicalRange,
        budget: f64,
        measure: &dyn LabelMeasure,
    ) -> PlotResult<LabelPlan> {
        if !range.is_finite() {
            return Err(PlotError::NonFiniteRange {
                min: range.min,
                max: range.max,
            });
        }
        if !budget.is_finite() || budget < 0.0 {
            return Err(PlotError::InvalidData(
                "label budget must be finite and >= 0".to_owned(),
            ));
        }

        let LogicalRange { min: lo, max: hi } = range.normalized();
        let single = LabelSet::from_values([lo], self.precision);
        if lo == hi {
            return Ok(LabelPlan {
                labels: single,
                step: None,
            });
        }

        let endpoints = LabelSet::from_values([lo, hi], self.precision);
        if endpoints.len() < 2 {
            debug!(lo, hi, "endpoints render alike, keeping one label");
            return Ok(LabelPlan {
                labels: single,
                step: None,
            });
        }
        if !fits(measure, &endpoints, budget) {
            debug!(lo, hi, budget, "endpoint labels overflow, keeping one label");
            return Ok(LabelPlan {
                labels: single,
                step: None,
            });
        }

        let mut accepted = LabelPlan {
            labels: endpoints,
            step: None,
        };
        let span = hi - lo;
        if !span.is_finite() {
            debug!(lo, hi, "range span overflows f64, keeping endpoint labels");
            return Ok(accepted);
        }
        let mut step = NiceStep::covering(span)?;
        let mut stop = StopReason::RefinementLimit;

        for _ in 0..self.max_refinements {
            let pad = step.value() / 4.0;
            let (padded_lo, padded_hi) = (lo - pad, hi + pad);
            let count = step.count_within(padded_lo, padded_hi);
            if count > self.max_labels as f64 {
                stop = StopReason::TooManyLabels;
                break;
            }

            let mut candidate = LabelSet::new(self.precision);
            let mut collapsed = false;
            for value in step.multiples_within(padded_lo, padded_hi) {
                collapsed |= !candidate.push(value);
            }
            if collapsed {
                stop = StopReason::Collapsed;
                break;
            }

            let size = measure.measure(&candidate);
            trace!(%step, labels = candidate.len(), size, budget, "label candidate");
            if !within_budget(size, budget) {
                stop = StopReason::Overflow;
                break;
            }

            // A fitting but sparser candidate is skipped so that a larger
            // budget never yields fewer labels.
            if candidate.len() >= accepted.labels.len() {
                accepted = LabelPlan {
                    labels: candidate,
                    step: Some(step),
                };
            }
            step = step.finer();
        }

        match stop {
            StopReason::Overflow => {}
            reason => warn!(
                ?reason,
                lo,
                hi,
                %step,
                "label refinement stopped before overflowing budget"
            ),
        }
        debug!(
            lo,
            hi,
            budget,
            labels = accepted.labels.len(),
            step = ?accepted.step,
            "axis labels planned"
        );
        Ok(accepted)
    }
}

/// Ticks splitting `[lo, hi]` into at least `min_intervals` nice steps.
///
/// Unlike [`AxisLabelPlanner::plan`] there is no padding: only multiples
/// inside the closed interval are returned.
pub fn suggest_ticks(
    lo: f64,
    hi: f64,
    min_intervals: usize,
    precision: u8,
) -> PlotResult<LabelPlan> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(PlotError::NonFiniteRange { min: lo, max: hi });
    }
    if hi <= lo {
        return Err(PlotError::InvalidData(
            "upper bound must be greater than lower bound".to_owned(),
        ));
    }
    let precision = validate_precision(precision)?;

    let step = NiceStep::for_min_intervals(hi - lo, min_intervals)?;
    if step.count_within(lo, hi) > DEFAULT_MAX_LABELS as f64 {
        return Err(PlotError::InvalidData(format!(
            "{min_intervals} intervals would exceed {DEFAULT_MAX_LABELS} ticks"
        )));
    }

    let labels = LabelSet::from_values(step.multiples_within(lo, hi), precision);
    debug!(lo, hi, min_intervals, %step, labels = labels.len(), "ticks suggested");
    Ok(LabelPlan {
        labels,
        step: Some(step),
    })
}

fn fits(measure: &dyn LabelMeasure, labels: &LabelSet, budget: f64) -> bool {
    within_budget(measure.measure(labels), budget)
}

/// NaN sizes never fit.
fn within_budget(size: f64, budget: f64) -> bool {
    size <= budget
}
