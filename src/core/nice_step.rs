use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Largest power of ten that is exact in `f64`.
const MAX_EXACT_POW10: i32 = 22;
/// Index bounds beyond this lose integer precision in `f64`.
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;
/// Relative slack (in steps) when deciding whether a multiple lies on a bound.
const BOUND_SLACK_STEPS: f64 = 1e-9;
/// Enough refinements to walk from `f64::MAX` down to subnormals.
const MAX_REFINEMENT_STEPS: usize = 3 * 650;

/// Tick spacing restricted to `{1, 2, 5} x 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NiceStep {
    mantissa: u8,
    exponent: i32,
}

impl NiceStep {
    pub fn new(mantissa: u8, exponent: i32) -> PlotResult<Self> {
        if !matches!(mantissa, 1 | 2 | 5) {
            return Err(PlotError::InvalidData(format!(
                "nice step mantissa must be 1, 2 or 5, got {mantissa}"
            )));
        }
        Ok(Self { mantissa, exponent })
    }

    /// Smallest power of ten that is `>= span`.
    pub fn covering(span: f64) -> PlotResult<Self> {
        if !span.is_finite() || span <= 0.0 {
            return Err(PlotError::InvalidData(
                "step span must be finite and > 0".to_owned(),
            ));
        }

        // `log10` can be one ulp off around exact powers.
        let mut exponent = span.log10().ceil() as i32;
        while pow10(exponent) < span {
            exponent += 1;
        }
        while pow10(exponent - 1) >= span {
            exponent -= 1;
        }
        Ok(Self {
            mantissa: 1,
            exponent,
        })
    }

    /// Coarsest step that splits `span` into at least `min_intervals` pieces.
    pub fn for_min_intervals(span: f64, min_intervals: usize) -> PlotResult<Self> {
        if min_intervals == 0 {
            return Err(PlotError::InvalidData(
                "minimum interval count must be >= 1".to_owned(),
            ));
        }

        let target = min_intervals as f64;
        let mut step = Self::covering(span)?;
        for _ in 0..MAX_REFINEMENT_STEPS {
            if (span / step.value()).ceil() >= target {
                return Ok(step);
            }
            step = step.finer();
        }
        Err(PlotError::InvalidData(format!(
            "no step splits span {span} into {min_intervals} intervals"
        )))
    }

    #[must_use]
    pub fn mantissa(self) -> u8 {
        self.mantissa
    }

    #[must_use]
    pub fn exponent(self) -> i32 {
        self.exponent
    }

    /// Next step in the `10 -> 5 -> 2 -> 1` cycle.
    #[must_use]
    pub fn finer(self) -> Self {
        match self.mantissa {
            1 => Self {
                mantissa: 5,
                exponent: self.exponent - 1,
            },
            5 => Self {
                mantissa: 2,
                exponent: self.exponent,
            },
            _ => Self {
                mantissa: 1,
                exponent: self.exponent,
            },
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.multiple(1)
    }

    /// `index * step`, rounded once from the exact decimal value when the
    /// exponent allows it.
    #[must_use]
    pub fn multiple(self, index: i64) -> f64 {
        let units = index as f64 * f64::from(self.mantissa);
        if self.exponent >= 0 {
            units * pow10(self.exponent)
        } else if self.exponent >= -MAX_EXACT_POW10 {
            units / pow10(-self.exponent)
        } else {
            units * pow10(self.exponent)
        }
    }

    /// Number of multiples inside `[lo, hi]`; may exceed the `i64` range.
    #[must_use]
    pub fn count_within(self, lo: f64, hi: f64) -> f64 {
        let (first, last) = self.index_bounds(lo, hi);
        (last - first + 1.0).max(0.0)
    }

    /// Multiples of the step inside `[lo, hi]`, ascending.
    ///
    /// Returns an empty list when the bounds cannot be indexed exactly; callers
    /// bound the size beforehand with [`NiceStep::count_within`].
    #[must_use]
    pub fn multiples_within(self, lo: f64, hi: f64) -> Vec<f64> {
        let (first, last) = self.index_bounds(lo, hi);
        if !first.is_finite()
            || !last.is_finite()
            || first.abs() > MAX_EXACT_INDEX
            || last.abs() > MAX_EXACT_INDEX
            || last < first
        {
            return Vec::new();
        }

        (first as i64..=last as i64)
            .map(|index| self.multiple(index))
            .collect()
    }

    fn index_bounds(self, lo: f64, hi: f64) -> (f64, f64) {
        let step = self.value();
        let first = (lo / step - BOUND_SLACK_STEPS).ceil();
        let last = (hi / step + BOUND_SLACK_STEPS).floor();
        (first, last)
    }
}

impl fmt::Display for NiceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.mantissa, self.exponent)
    }
}

fn pow10(exponent: i32) -> f64 {
    10_f64.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_picks_power_at_or_above_span() {
        assert_eq!(NiceStep::covering(97.0).expect("step").value(), 100.0);
        assert_eq!(NiceStep::covering(100.0).expect("step").value(), 100.0);
        assert_eq!(NiceStep::covering(100.5).expect("step").value(), 1000.0);
        assert_eq!(NiceStep::covering(0.03).expect("step").exponent(), -1);
    }

    #[test]
    fn finer_cycles_through_five_two_one() {
        let mut step = NiceStep::new(1, 1).expect("step");
        let mut seen = Vec::new();
        for _ in 0..6 {
            step = step.finer();
            seen.push(step.value());
        }
        assert_eq!(seen, vec![5.0, 2.0, 1.0, 0.5, 0.2, 0.1]);
    }

    #[test]
    fn decimal_multiples_are_not_accumulated() {
        let step = NiceStep::new(1, -1).expect("step");
        assert_eq!(step.multiple(3), 0.3);
        assert_eq!(step.multiples_within(0.0, 0.3), vec![0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn zero_is_rejected_as_span() {
        assert!(NiceStep::covering(0.0).is_err());
        assert!(NiceStep::covering(f64::INFINITY).is_err());
        assert!(NiceStep::new(3, 0).is_err());
    }
}
