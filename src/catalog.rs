//! Catalog of well-known mathematical constants and the literal matcher.
//!
//! Each entry pairs a constant from `std::f64::consts` with the number of
//! decimal digits a literal must share with it before we call the literal an
//! approximation. Cheap-to-collide constants need more digits: `3.14` is
//! almost certainly pi, but `1.41` is as likely a price as sqrt(2).

use std::sync::LazyLock;

/// One recognized named constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEntry {
    /// Name under `std::f64::consts` / `std::f32::consts` (e.g. `"PI"`).
    pub name: &'static str,
    /// Full-precision reference value.
    pub value: f64,
    /// Decimal digits after the point that must match.
    pub min_digits: u32,
    tolerance: f64,
}

impl ConstantEntry {
    /// # Panics
    ///
    /// Panics if `min_digits` is zero. A zero-digit tolerance would match
    /// whole integer neighborhoods, so it is rejected when the catalog is
    /// built rather than silently producing garbage matches later.
    pub fn new(name: &'static str, value: f64, min_digits: u32) -> Self {
        assert!(
            min_digits >= 1,
            "constant {name} must require at least one matching digit"
        );
        Self {
            name,
            value,
            min_digits,
            tolerance: 10f64.powi(-(min_digits as i32)),
        }
    }

    /// Absolute difference below which a value counts as this constant.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether `value` approximates this constant.
    ///
    /// NaN and infinities never match: the comparison is simply false for
    /// them against any finite reference.
    pub fn matches(&self, value: f64) -> bool {
        (value - self.value).abs() < self.tolerance
    }
}

/// The constants we recognize, in match-priority order.
///
/// Reference values are derived from `std::f64::consts` and floating-point
/// arithmetic, never from typed-out digit strings, so tolerances are measured
/// against full double precision.
pub static KNOWN_CONSTS: LazyLock<Vec<ConstantEntry>> = LazyLock::new(|| {
    use std::f64::consts::{E, PI};
    vec![
        ConstantEntry::new("E", E, 4),
        ConstantEntry::new("FRAC_1_PI", 1.0 / PI, 4),
        ConstantEntry::new("FRAC_1_SQRT_2", 1.0 / 2f64.sqrt(), 5),
        ConstantEntry::new("FRAC_2_PI", 2.0 / PI, 5),
        ConstantEntry::new("FRAC_2_SQRT_PI", 2.0 / PI.sqrt(), 5),
        ConstantEntry::new("FRAC_PI_2", PI / 2.0, 5),
        ConstantEntry::new("FRAC_PI_3", PI / 3.0, 5),
        ConstantEntry::new("FRAC_PI_4", PI / 4.0, 5),
        ConstantEntry::new("FRAC_PI_6", PI / 6.0, 5),
        ConstantEntry::new("FRAC_PI_8", PI / 8.0, 5),
        ConstantEntry::new("LN_10", 10f64.ln(), 5),
        ConstantEntry::new("LN_2", 2f64.ln(), 5),
        ConstantEntry::new("LOG10_E", E.log10(), 5),
        ConstantEntry::new("LOG2_E", E.log2(), 5),
        ConstantEntry::new("PI", PI, 3),
        ConstantEntry::new("SQRT_2", 2f64.sqrt(), 5),
    ]
});

/// Find the constant that `value` approximates, if any.
///
/// First match in catalog order wins; this is a linear scan, not a
/// nearest-match search.
pub fn find_match(value: f64) -> Option<&'static ConstantEntry> {
    first_match(&KNOWN_CONSTS, value)
}

/// First entry in `entries` whose tolerance window contains `value`.
pub fn first_match<'a>(entries: &'a [ConstantEntry], value: f64) -> Option<&'a ConstantEntry> {
    entries.iter().find(|entry| entry.matches(value))
}
