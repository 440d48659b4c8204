//! # Money Module
//!
//! Provides the `Money` type for handling lesson prices safely.
//!
//! ## Why Integer Pence?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE HALF-POUND RATE                                                    │
//! │                                                                         │
//! │  The 20+ hour rate is £28.50 per hour. In floating point:               │
//! │    21 × 28.5 = 598.5  → round() depends on representation               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    21 × 2850 = 59850 pence → exactly half a pound over 598              │
//! │    Rounding to whole pounds is an integer operation we control          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roadready_core::money::Money;
//!
//! let rate = Money::from_pence(2850); // £28.50
//! let total = rate.multiply_hours(21);
//! assert_eq!(total.pence(), 59850);
//! assert_eq!(total.round_half_up(), 599);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Pence in one pound.
const PENCE_PER_POUND: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the smallest GBP unit).
///
/// ## Where Money is Used
/// ```text
/// hours × rate ──► baseline / discounted price ──► + add-ons
///                                                      │
///                                                      ▼
///                                   round_half_up() ──► whole pounds shown
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::money::Money;
    ///
    /// let price = Money::from_pence(2850); // £28.50
    /// assert_eq!(price.pence(), 2850);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from whole pounds.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::money::Money;
    ///
    /// assert_eq!(Money::from_pounds(45).pence(), 4500);
    /// ```
    #[inline]
    pub const fn from_pounds(pounds: i64) -> Self {
        Money(pounds * PENCE_PER_POUND)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole-pound portion (truncated toward zero).
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / PENCE_PER_POUND
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % PENCE_PER_POUND).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies an hourly rate by a number of lesson hours.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::money::Money;
    ///
    /// let hourly = Money::from_pounds(30);
    /// assert_eq!(hourly.multiply_hours(12), Money::from_pounds(360));
    /// ```
    #[inline]
    pub const fn multiply_hours(&self, hours: u32) -> Self {
        Money(self.0 * hours as i64)
    }

    /// Rounds to the nearest whole pound, halves rounding away from zero.
    ///
    /// ## Rounding Policy
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  HALF-UP (the price shown on the website)                           │
    /// │                                                                     │
    /// │    £598.49 → 598     £598.50 → 599     £598.51 → 599                │
    /// │    £31.50  → 32      £30.00  → 30                                   │
    /// │                                                                     │
    /// │  Negative values mirror positive ones: -£0.50 → -1                  │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Integer math: `(pence + 50) / 100` on the magnitude, sign restored.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(59850).round_half_up(), 599);
    /// assert_eq!(Money::from_pence(59849).round_half_up(), 598);
    /// ```
    pub const fn round_half_up(&self) -> i64 {
        let half = PENCE_PER_POUND / 2;
        if self.0 < 0 {
            -((-self.0 + half) / PENCE_PER_POUND)
        } else {
            (self.0 + half) / PENCE_PER_POUND
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `£12.34`.
///
/// ## Note
/// For debugging and logs. The shell renders whole pounds through its
/// configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}£{}.{:02}",
            sign,
            self.pounds().abs(),
            self.pence_part()
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by an hour count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, hours: u32) -> Self {
        self.multiply_hours(hours)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
