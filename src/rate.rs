//! Fixed-precision rates for the report.
//!
//! Quotients are taken in `f64`, the way a spreadsheet or a quick script
//! would compute them, and the exact binary value is then rounded
//! half-to-even with `rust_decimal`. A quotient such as `7 / 20` is stored as
//! a hair under `0.35` and so rounds down.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// A ratio rounded to `DP` decimal places and always displayed with exactly
/// `DP` decimals.
///
/// # Examples
///
/// ```
/// use mahjong_ledger::{Average, Percentage};
///
/// assert_eq!(Average::ratio(320, 6).to_string(), "53.3");
/// assert_eq!(Average::ratio(192, 6).to_string(), "32.0");
/// assert_eq!(Percentage::percent(1, 6).to_string(), "17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rate<const DP: u32>(Decimal);

/// Whole-number percentage.
pub type Percentage = Rate<0>;

/// Average to one decimal place.
pub type Average = Rate<1>;

impl<const DP: u32> Rate<DP> {
    /// Zero value.
    pub const ZERO: Self = Rate(Decimal::ZERO);

    /// `numerator / denominator`, rounded; zero when the denominator is zero.
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }

        Self::from_f64(numerator as f64 / denominator as f64)
    }

    /// `part / whole * 100`, rounded; zero when `whole` is zero.
    pub fn percent(part: i64, whole: i64) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }

        Self::from_f64(part as f64 / whole as f64 * 100.0)
    }

    fn from_f64(quotient: f64) -> Self {
        match Decimal::from_f64_retain(quotient) {
            Some(exact) => {
                let mut rounded =
                    exact.round_dp_with_strategy(DP, RoundingStrategy::MidpointNearestEven);
                rounded.rescale(DP);
                Rate(rounded)
            }
            None => Self::ZERO,
        }
    }
}

impl<const DP: u32> fmt::Display for Rate<DP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DP as usize, self.0)
    }
}

impl<const DP: u32> Serialize for Rate<DP> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
