//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    100 × (1 + 0.1) = 110.00000000000001  ❌                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                            │
//! │    10000 cents × 1000 bps / 10000 = 1000 cents of tax                  │
//! │    10000 + 1000 = 11000 cents = $110.00 exactly                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use price_core::money::Money;
//! use price_core::rate::Rate;
//!
//! let price = Money::from_major(100);
//! let tax = price.apply_rate(Rate::from_bps(1000));
//! assert_eq!((price + tax).cents(), 11000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::rate::{Rate, BPS_PER_UNIT};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that results of permissive inputs (discounts of 100% or more,
/// negative tax rates) stay representable. Arithmetic saturates at the i64
/// bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use price_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units (dollars).
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(100))
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50. Saturates at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use price_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        let scaled = major.saturating_mul(100);
        if major < 0 {
            Money(scaled.saturating_sub(minor))
        } else {
            Money(scaled.saturating_add(minor))
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies this amount by a rate, rounding to the nearest cent.
    ///
    /// ## Rounding
    /// Half away from zero: 82.5 → 83, -82.5 → -83. The product is formed
    /// in i128, so the only loss is the final rounding step. Results beyond
    /// the i64 range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use price_core::money::Money;
    /// use price_core::rate::Rate;
    ///
    /// let price = Money::from_cents(1000);   // $10.00
    /// let tax = price.apply_rate(Rate::from_bps(825)); // 8.25%
    /// // $10.00 × 8.25% = $0.825 → $0.83
    /// assert_eq!(tax.cents(), 83);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money::from_wide(mul_rate_wide(self.0 as i128, rate.bps() as i128))
    }

    /// Converts a widened intermediate back, saturating at the i64 bounds.
    #[inline]
    pub(crate) fn from_wide(cents: i128) -> Self {
        Money(saturate_i64(cents))
    }
}

/// `amount × bps / 10000` rounded half away from zero, without narrowing.
///
/// Callers keep chained steps in i128 and narrow once at the end.
pub(crate) fn mul_rate_wide(amount: i128, bps: i128) -> i128 {
    div_round_half_away(amount * bps, BPS_PER_UNIT as i128)
}

/// Integer division rounding half away from zero. `divisor` must be positive.
fn div_round_half_away(dividend: i128, divisor: i128) -> i128 {
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + dividend.signum()
    } else {
        quotient
    }
}

fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented formatting (`$110.00`, `-$5.50`). Localized display is the
/// caller's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
