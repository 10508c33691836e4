//! # Rate Module
//!
//! Fractional rates (tax, discount) stored as signed basis points.
//!
//! ## Why Basis Points?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 basis point = 0.01% = 1/10000                                        │
//! │                                                                         │
//! │    0.1   (10%)   → 1000 bps                                            │
//! │    0.0825 (8.25%) →  825 bps                                            │
//! │    1.0   (100%)  → 10000 bps                                           │
//! │                                                                         │
//! │  Integer rates keep every multiplication exact until it is rounded     │
//! │  to the cent.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rates are signed and unbounded (within i32). A negative tax rate or a
//! discount of 100% or more is representable; only strict mode rejects them.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Basis points in one whole (100%).
pub const BPS_PER_UNIT: i32 = 10_000;

/// A fractional rate in basis points.
///
/// ## Example
/// ```rust
/// use price_core::rate::Rate;
///
/// let tax = Rate::from_fraction(0.1);
/// assert_eq!(tax.bps(), 1000);
/// assert_eq!(tax.percentage(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(i32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: i32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a fraction (0.1 → 1000 bps).
    ///
    /// Rounds to the nearest basis point. Values beyond the i32 range
    /// saturate and NaN becomes zero.
    pub fn from_fraction(fraction: f64) -> Self {
        Rate((fraction * BPS_PER_UNIT as f64).round() as i32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> i32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the rate as a fraction (for display only).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / BPS_PER_UNIT as f64
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// The whole (100%).
    #[inline]
    pub const fn one() -> Self {
        Rate(BPS_PER_UNIT)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns `1 - self`, the share that remains after a discount.
    ///
    /// Exact for every non-negative rate. Saturates only for rates near `i32::MIN`.
    ///
    /// ## Example
    /// ```rust
    /// use price_core::rate::Rate;
    ///
    /// assert_eq!(Rate::from_bps(2500).complement().bps(), 7500);
    /// assert_eq!(Rate::from_bps(15000).complement().bps(), -5000);
    /// ```
    #[inline]
    pub const fn complement(&self) -> Self {
        Rate(BPS_PER_UNIT.saturating_sub(self.0))
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
