//! Fixed-point precision handling for distance computations.
//!
//! The precision is an explicit value handed to each call site rather than
//! a process-wide setting, so every caller can carry its own.

/// Decimal digits used by `Precision::default()`.
const DEFAULT_DIGITS: u32 = 5;

/// Converts between floating-point values and a scaled integer
/// representation at a configurable accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    scale: i64,
}

impl Precision {
    /// Precision from the smallest representable difference, e.g. `0.0001`.
    pub fn new(accurate_to: f64) -> Self {
        Self {
            scale: (1.0 / accurate_to) as i64,
        }
    }

    /// Precision from a number of decimal digits, e.g. `4` for `0.0001`.
    pub fn from_digits(digits: u32) -> Self {
        Self {
            scale: 10_i64.pow(digits),
        }
    }

    /// The smallest difference this precision can represent.
    pub fn accurate_to(&self) -> f64 {
        1.0 / self.scale as f64
    }

    /// Scales a float into its fixed-point representation.
    pub fn to_fixed(&self, value: f64) -> i64 {
        (value * self.scale as f64) as i64
    }

    /// Inverse of [`to_fixed`](Self::to_fixed).
    pub fn from_fixed(&self, fixed: i64) -> f64 {
        fixed as f64 / self.scale as f64
    }

    /// Truncates a value to the configured precision.
    pub fn round(&self, value: f64) -> f64 {
        self.from_fixed(self.to_fixed(value))
    }

    /// Two values are identical when their fixed-point representations are.
    pub fn identical(&self, a: f64, b: f64) -> bool {
        self.to_fixed(a) == self.to_fixed(b)
    }

    /// `x` as a percentage of `y`, truncated to two decimals.
    /// Any share of nothing is zero percent.
    pub fn percentage(&self, x: f64, y: f64) -> f64 {
        if y == 0.0 {
            return 0.0;
        }
        (self.round(x / y) * 100.0 * 100.0) as i64 as f64 / 100.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::from_digits(DEFAULT_DIGITS)
    }
}
