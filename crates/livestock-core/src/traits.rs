/// Shared parameter contract for every model entry point.
///
/// Each parameter struct lists its bounded numeric fields once
/// (`PARAM_NAMES` + `PARAM_BOUNDS`) and gets `validate()` for free.
use crate::error::ModelError;

/// Allowed range for a numeric parameter.
///
/// `open` excludes both endpoints. Non-finite values are always rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub open: bool,
}

impl Bounds {
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            open: false,
        }
    }

    pub const fn open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            open: true,
        }
    }

    /// Strictly positive, finite.
    pub const fn positive() -> Self {
        Self::open(0.0, f64::INFINITY)
    }

    /// Zero or positive, finite.
    pub const fn non_negative() -> Self {
        Self::closed(0.0, f64::INFINITY)
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        if self.open {
            value > self.min && value < self.max
        } else {
            value >= self.min && value <= self.max
        }
    }

    /// Human-readable constraint, used in error messages.
    pub fn describe(&self) -> String {
        match (self.open, self.max.is_infinite()) {
            (true, true) => format!("must be a finite value > {}", self.min),
            (false, true) => format!("must be a finite value >= {}", self.min),
            (true, false) => format!("must lie in ({}, {})", self.min, self.max),
            (false, false) => format!("must lie in [{}, {}]", self.min, self.max),
        }
    }
}

/// Parameter structs with declared numeric bounds.
pub trait ModelParams {
    /// Names of the bounded fields, in `PARAM_BOUNDS` order.
    const PARAM_NAMES: &'static [&'static str];
    const PARAM_BOUNDS: &'static [Bounds];

    /// Current values of the bounded fields, in `PARAM_NAMES` order.
    fn to_array(&self) -> Vec<f64>;

    /// Check every bounded field, failing on the first violation.
    fn validate(&self) -> Result<(), ModelError> {
        let values = self.to_array();
        debug_assert_eq!(values.len(), Self::PARAM_NAMES.len());
        for ((name, bounds), value) in Self::PARAM_NAMES
            .iter()
            .zip(Self::PARAM_BOUNDS)
            .zip(values)
        {
            if !bounds.contains(value) {
                return Err(ModelError::invalid(*name, value, bounds.describe()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        weight: f64,
        share: f64,
    }

    impl ModelParams for Pair {
        const PARAM_NAMES: &'static [&'static str] = &["weight", "share"];
        const PARAM_BOUNDS: &'static [Bounds] = &[Bounds::positive(), Bounds::closed(0.0, 1.0)];

        fn to_array(&self) -> Vec<f64> {
            vec![self.weight, self.share]
        }
    }

    #[test]
    fn open_bounds_exclude_endpoints() {
        let b = Bounds::open(0.0, 1.0);
        assert!(!b.contains(0.0));
        assert!(!b.contains(1.0));
        assert!(b.contains(0.5));
    }

    #[test]
    fn closed_bounds_include_endpoints() {
        let b = Bounds::closed(0.0, 100.0);
        assert!(b.contains(0.0));
        assert!(b.contains(100.0));
        assert!(!b.contains(100.1));
    }

    #[test]
    fn non_finite_always_rejected() {
        assert!(!Bounds::non_negative().contains(f64::INFINITY));
        assert!(!Bounds::positive().contains(f64::NAN));
    }

    #[test]
    fn validate_reports_first_violation() {
        let err = Pair {
            weight: 0.0,
            share: 2.0,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "weight");
    }

    #[test]
    fn validate_accepts_in_range() {
        assert!(Pair {
            weight: 450.0,
            share: 1.0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn describe_positive() {
        assert_eq!(Bounds::positive().describe(), "must be a finite value > 0");
    }
}
