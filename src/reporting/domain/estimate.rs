use std::fmt;

/// Label shown wherever a remote record carries no estimate.
pub const NOT_AVAILABLE: &str = "N/A";

/// A story-point estimate attached to an issue or epic.
///
/// Boards allow fractional points, so the value is kept as `f64`. Whole
/// values display without a fractional part (`8`, not `8.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Estimate(f64);

impl Estimate {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Display text for an optional estimate; absence becomes `"N/A"`.
    pub fn label(estimate: Option<Estimate>) -> String {
        match estimate {
            Some(estimate) => estimate.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Sums the estimates that are present, skipping the rest.
    pub fn total<I>(estimates: I) -> Estimate
    where
        I: IntoIterator<Item = Option<Estimate>>,
    {
        // fold from +0.0: an empty float `sum()` is -0.0 and would print "-0"
        Estimate(estimates.into_iter().flatten().fold(0.0, |acc, e| acc + e.0))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
