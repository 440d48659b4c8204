//! # Pricing Module
//!
//! The custom lesson package calculator: tiered bulk discount plus flat
//! add-ons.
//!
//! ## Tier Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tiered Discount (highest first)                     │
//! │                                                                         │
//! │  hours >= 20 ──► ReducedRate   price = hours × £28.50                   │
//! │                                savings = hours × £30 − price            │
//! │                                                                         │
//! │  hours >= 10 ──► FlatDiscount  price = hours × £30 − £50                │
//! │                                savings = £50                            │
//! │                                                                         │
//! │  otherwise   ──► Standard      price = hours × £30                      │
//! │                                savings = £0                             │
//! │                                                                         │
//! │  Then:  + £30 theory support   + £45 mock test   (savings unchanged)    │
//! │  Then:  round price and savings to whole pounds, half-up                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tiers never stack: 20+ hours gets the reduced rate and not the £50 off.
//!
//! ## Example
//! ```rust
//! use roadready_core::{compute_pricing, PricingInput};
//!
//! let input = PricingInput::new(20)
//!     .with_theory_support(true)
//!     .with_mock_test(true);
//! let result = compute_pricing(input);
//!
//! assert_eq!(result.total_price, 645);
//! assert_eq!(result.savings, 30);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{AddOn, PricingInput, PricingResult};

// =============================================================================
// Rate Constants
// =============================================================================

/// Standard price per lesson hour.
pub const BASE_HOURLY_RATE: Money = Money::from_pounds(30);

/// Per-hour price once the package reaches [`REDUCED_RATE_MIN_HOURS`].
pub const REDUCED_HOURLY_RATE: Money = Money::from_pence(2850);

/// Flat amount taken off packages of [`FLAT_DISCOUNT_MIN_HOURS`] to 19 hours.
pub const FLAT_DISCOUNT: Money = Money::from_pounds(50);

/// Smallest package that gets the flat discount.
pub const FLAT_DISCOUNT_MIN_HOURS: u32 = 10;

/// Smallest package that gets the reduced hourly rate.
pub const REDUCED_RATE_MIN_HOURS: u32 = 20;

/// Theory test support add-on.
pub const THEORY_SUPPORT_PRICE: Money = Money::from_pounds(30);

/// Mock driving test add-on.
pub const MOCK_TEST_PRICE: Money = Money::from_pounds(45);

// =============================================================================
// Discount Tier
// =============================================================================

/// Which discount rule applies to an hour count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Under 10 hours: full price.
    Standard,
    /// 10 to 19 hours: £50 off.
    FlatDiscount,
    /// 20 hours or more: £28.50 per hour.
    ReducedRate,
}

impl DiscountTier {
    /// Picks the tier, checking the highest threshold first.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::pricing::DiscountTier;
    ///
    /// assert_eq!(DiscountTier::for_hours(9), DiscountTier::Standard);
    /// assert_eq!(DiscountTier::for_hours(10), DiscountTier::FlatDiscount);
    /// assert_eq!(DiscountTier::for_hours(20), DiscountTier::ReducedRate);
    /// ```
    pub const fn for_hours(hours: u32) -> Self {
        if hours >= REDUCED_RATE_MIN_HOURS {
            DiscountTier::ReducedRate
        } else if hours >= FLAT_DISCOUNT_MIN_HOURS {
            DiscountTier::FlatDiscount
        } else {
            DiscountTier::Standard
        }
    }

    /// Short description for the pricing summary.
    pub const fn description(&self) -> &'static str {
        match self {
            DiscountTier::Standard => "Standard rate (£30/hour)",
            DiscountTier::FlatDiscount => "£50 off packages of 10 to 19 hours",
            DiscountTier::ReducedRate => "Reduced rate (£28.50/hour) for 20+ hours",
        }
    }

    /// Discounted lesson price and savings, before add-ons and rounding.
    fn apply(&self, hours: u32) -> (Money, Money) {
        let baseline = baseline_price(hours);
        match self {
            DiscountTier::ReducedRate => {
                let price = REDUCED_HOURLY_RATE.multiply_hours(hours);
                (price, baseline - price)
            }
            DiscountTier::FlatDiscount => (baseline - FLAT_DISCOUNT, FLAT_DISCOUNT),
            DiscountTier::Standard => (baseline, Money::zero()),
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Undiscounted lesson price: `hours × £30`.
#[inline]
pub const fn baseline_price(hours: u32) -> Money {
    BASE_HOURLY_RATE.multiply_hours(hours)
}

/// Computes the total price and savings for a custom lesson package.
///
/// Total over every `hours` value (including 0 and anything above the
/// slider's 40), deterministic, and free of side effects.
///
/// ## Example
/// ```rust
/// use roadready_core::{compute_pricing, PricingInput};
///
/// let result = compute_pricing(PricingInput::new(10).with_theory_support(true));
/// assert_eq!(result.total_price, 280);
/// assert_eq!(result.savings, 50);
/// ```
pub fn compute_pricing(input: PricingInput) -> PricingResult {
    let tier = DiscountTier::for_hours(input.hours);
    let (mut price, savings) = tier.apply(input.hours);

    for add_on in AddOn::ALL {
        if input.includes(add_on) {
            price += add_on.price();
        }
    }

    PricingResult {
        total_price: price.round_half_up(),
        savings: savings.round_half_up(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(hours: u32, theory: bool, mock: bool) -> PricingResult {
        compute_pricing(
            PricingInput::new(hours)
                .with_theory_support(theory)
                .with_mock_test(mock),
        )
    }

    #[test]
    fn test_standard_tier_has_no_savings() {
        for hours in 1..=9 {
            let result = quote(hours, false, false);
            assert_eq!(result.savings, 0, "hours={hours}");
            assert_eq!(result.total_price, hours as i64 * 30, "hours={hours}");
        }
    }

    #[test]
    fn test_flat_discount_tier() {
        for hours in 10..=19 {
            let result = quote(hours, false, false);
            assert_eq!(result.savings, 50, "hours={hours}");
            assert_eq!(result.total_price, hours as i64 * 30 - 50, "hours={hours}");
        }
    }

    #[test]
    fn test_reduced_rate_tier() {
        for hours in 20..=40 {
            let result = quote(hours, false, false);
            // hours × 28.5 and hours × 1.5, half-up, in integer arithmetic
            let expected_total = (hours as i64 * 57 + 1) / 2;
            let expected_savings = (hours as i64 * 3 + 1) / 2;
            assert_eq!(result.total_price, expected_total, "hours={hours}");
            assert_eq!(result.savings, expected_savings, "hours={hours}");
        }
    }

    #[test]
    fn test_odd_hours_round_half_up() {
        // 21 × 28.5 = 598.5, savings 31.5
        let result = quote(21, false, false);
        assert_eq!(result.total_price, 599);
        assert_eq!(result.savings, 32);
    }

    #[test]
    fn test_tiers_do_not_stack() {
        // The £50 flat discount must not be applied on top of the reduced rate
        let result = quote(20, false, false);
        assert_eq!(result.total_price, 570);
        assert_ne!(result.total_price, 520);
    }

    #[test]
    fn test_theory_support_adds_thirty() {
        for hours in 0..=40 {
            for mock in [false, true] {
                let without = quote(hours, false, mock);
                let with = quote(hours, true, mock);
                assert_eq!(with.total_price - without.total_price, 30, "hours={hours}");
                assert_eq!(with.savings, without.savings, "hours={hours}");
            }
        }
    }

    #[test]
    fn test_mock_test_adds_forty_five() {
        for hours in 0..=40 {
            for theory in [false, true] {
                let without = quote(hours, theory, false);
                let with = quote(hours, theory, true);
                assert_eq!(with.total_price - without.total_price, 45, "hours={hours}");
                assert_eq!(with.savings, without.savings, "hours={hours}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for hours in 0..=40 {
            let input = PricingInput::new(hours).with_theory_support(hours % 2 == 0);
            assert_eq!(compute_pricing(input), compute_pricing(input));
        }
    }

    #[test]
    fn test_concrete_scenarios() {
        let cases = [
            (1, false, false, 30, 0),
            (10, false, false, 250, 50),
            (10, true, false, 280, 50),
            (20, false, false, 570, 30),
            (20, true, true, 645, 30),
            (40, false, false, 1140, 60),
        ];

        for (hours, theory, mock, total, savings) in cases {
            let result = quote(hours, theory, mock);
            assert_eq!(result.total_price, total, "hours={hours}");
            assert_eq!(result.savings, savings, "hours={hours}");
        }
    }

    #[test]
    fn test_zero_hours_is_defined() {
        let result = quote(0, false, false);
        assert_eq!(result, PricingResult { total_price: 0, savings: 0 });

        let result = quote(0, true, true);
        assert_eq!(result.total_price, 75);
    }

    #[test]
    fn test_outputs_never_negative_above_slider_range() {
        for hours in [41, 100, 1_000, u32::MAX] {
            let result = quote(hours, true, true);
            assert!(result.total_price > 0);
            assert!(result.savings > 0);
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(DiscountTier::for_hours(0), DiscountTier::Standard);
        assert_eq!(DiscountTier::for_hours(9), DiscountTier::Standard);
        assert_eq!(DiscountTier::for_hours(10), DiscountTier::FlatDiscount);
        assert_eq!(DiscountTier::for_hours(19), DiscountTier::FlatDiscount);
        assert_eq!(DiscountTier::for_hours(20), DiscountTier::ReducedRate);
        assert_eq!(DiscountTier::for_hours(40), DiscountTier::ReducedRate);
    }

    #[test]
    fn test_tier_descriptions_name_their_own_range() {
        assert_eq!(
            DiscountTier::FlatDiscount.description(),
            "£50 off packages of 10 to 19 hours"
        );
        assert!(DiscountTier::ReducedRate.description().contains("20+ hours"));
        assert!(!DiscountTier::ReducedRate.description().contains("£50"));
    }
}
