//! # Domain Types
//!
//! Core domain types used by the lesson pricing calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │    PricingInput      │        │    PricingResult     │              │
//! │  │  ──────────────────  │ ─────► │  ──────────────────  │              │
//! │  │  hours (u32)         │compute │  total_price (£)     │              │
//! │  │  include_theory_...  │        │  savings (£)         │              │
//! │  │  include_mock_test   │        │                      │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │       AddOn          │        │    LessonPackage     │              │
//! │  │  ──────────────────  │        │  ──────────────────  │              │
//! │  │  TheorySupport £30   │        │  fixed bundle price  │              │
//! │  │  MockTest      £45   │        │  (separate scheme)   │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are ephemeral: built on every recalculation, never stored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::{MOCK_TEST_PRICE, THEORY_SUPPORT_PRICE};

// =============================================================================
// Pricing Input
// =============================================================================

/// What the slider and the two checkboxes currently say.
///
/// `hours` is unsigned, so negative counts cannot reach the calculator.
/// The [1, 40] range is the input control's job, see
/// [`crate::validation::validate_hours`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    /// Lesson hours in the custom package.
    pub hours: u32,

    /// Theory test support add-on.
    pub include_theory_support: bool,

    /// Mock driving test add-on.
    pub include_mock_test: bool,
}

impl PricingInput {
    /// Creates an input with no add-ons selected.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::PricingInput;
    ///
    /// let input = PricingInput::new(12).with_mock_test(true);
    /// assert_eq!(input.hours, 12);
    /// assert!(!input.include_theory_support);
    /// assert!(input.include_mock_test);
    /// ```
    pub const fn new(hours: u32) -> Self {
        PricingInput {
            hours,
            include_theory_support: false,
            include_mock_test: false,
        }
    }

    /// Sets the theory support flag.
    pub fn with_theory_support(mut self, include: bool) -> Self {
        self.include_theory_support = include;
        self
    }

    /// Sets the mock test flag.
    pub fn with_mock_test(mut self, include: bool) -> Self {
        self.include_mock_test = include;
        self
    }

    /// Whether the given add-on is selected.
    pub const fn includes(&self, add_on: AddOn) -> bool {
        match add_on {
            AddOn::TheorySupport => self.include_theory_support,
            AddOn::MockTest => self.include_mock_test,
        }
    }

    /// Sets the flag for the given add-on.
    pub fn set_add_on(&mut self, add_on: AddOn, include: bool) {
        match add_on {
            AddOn::TheorySupport => self.include_theory_support = include,
            AddOn::MockTest => self.include_mock_test = include,
        }
    }

    /// Selected add-ons, in display order.
    pub fn add_ons(&self) -> Vec<AddOn> {
        AddOn::ALL
            .into_iter()
            .filter(|add_on| self.includes(*add_on))
            .collect()
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// Total and savings, both in whole pounds.
///
/// ## Serialization
/// ```json
/// { "totalPrice": 645, "savings": 30 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Final price including add-ons, rounded half-up.
    pub total_price: i64,

    /// Discount against the £30/hour baseline, rounded half-up.
    pub savings: i64,
}

impl PricingResult {
    /// Whether the "You Save" line should be shown.
    #[inline]
    pub const fn has_savings(&self) -> bool {
        self.savings > 0
    }
}

// =============================================================================
// Add-ons
// =============================================================================

/// Optional flat-fee extras. They never affect savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    /// Theory test support materials and sessions.
    TheorySupport,
    /// A full mock driving test with an examiner-style debrief.
    MockTest,
}

impl AddOn {
    /// Every add-on, in display order.
    pub const ALL: [AddOn; 2] = [AddOn::TheorySupport, AddOn::MockTest];

    /// Flat price of the add-on.
    pub const fn price(&self) -> Money {
        match self {
            AddOn::TheorySupport => THEORY_SUPPORT_PRICE,
            AddOn::MockTest => MOCK_TEST_PRICE,
        }
    }

    /// Checkbox label.
    pub const fn label(&self) -> &'static str {
        match self {
            AddOn::TheorySupport => "Theory Test Support",
            AddOn::MockTest => "Mock Driving Test",
        }
    }
}

// =============================================================================
// Lesson Package
// =============================================================================

/// A fixed-price lesson bundle from the package price list.
///
/// These prices are set by the business and are NOT derived from the
/// calculator: 10 hours as a package is £300, while the calculator quotes
/// £250 for the same hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LessonPackage {
    /// Display name ("Starter", "Standard", ...).
    pub name: String,

    /// Lesson hours included.
    pub hours: u32,

    /// Bundle price.
    pub price: Money,

    /// Bullet points shown on the package card.
    pub features: Vec<String>,

    /// Highlighted as the most popular choice.
    pub popular: bool,
}

impl LessonPackage {
    /// Effective hourly price, truncated to the penny.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_core::packages::standard_packages;
    ///
    /// let starter = &standard_packages()[0];
    /// assert_eq!(starter.price_per_hour().pence(), 3000);
    /// ```
    pub fn price_per_hour(&self) -> Money {
        if self.hours == 0 {
            return self.price;
        }
        Money::from_pence(self.price.pence() / self.hours as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_to_no_add_ons() {
        let input = PricingInput::new(5);
        assert!(!input.include_theory_support);
        assert!(!input.include_mock_test);
        assert!(input.add_ons().is_empty());
    }

    #[test]
    fn test_input_add_ons_in_display_order() {
        let input = PricingInput::new(5)
            .with_mock_test(true)
            .with_theory_support(true);
        assert_eq!(input.add_ons(), vec![AddOn::TheorySupport, AddOn::MockTest]);
    }

    #[test]
    fn test_set_add_on() {
        let mut input = PricingInput::new(5);
        input.set_add_on(AddOn::MockTest, true);
        assert!(input.includes(AddOn::MockTest));
        assert!(!input.includes(AddOn::TheorySupport));

        input.set_add_on(AddOn::MockTest, false);
        assert!(!input.includes(AddOn::MockTest));
    }

    #[test]
    fn test_add_on_prices() {
        assert_eq!(AddOn::TheorySupport.price(), Money::from_pounds(30));
        assert_eq!(AddOn::MockTest.price(), Money::from_pounds(45));
    }

    #[test]
    fn test_has_savings() {
        assert!(!PricingResult { total_price: 30, savings: 0 }.has_savings());
        assert!(PricingResult { total_price: 250, savings: 50 }.has_savings());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let input = PricingInput::new(20).with_theory_support(true);
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["hours"], 20);
        assert_eq!(json["includeTheorySupport"], true);
        assert_eq!(json["includeMockTest"], false);

        let result = PricingResult { total_price: 645, savings: 30 };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"totalPrice":645,"savings":30}"#);
    }

    #[test]
    fn test_price_per_hour_zero_hours() {
        let package = LessonPackage {
            name: "Empty".to_string(),
            hours: 0,
            price: Money::from_pounds(10),
            features: Vec::new(),
            popular: false,
        };
        assert_eq!(package.price_per_hour(), Money::from_pounds(10));
    }
}
