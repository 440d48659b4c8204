//! # Pricing State
//!
//! The calculator widget's state: current inputs plus the derived result.
//!
//! ## Recompute on Every Change
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pricing State Operations                             │
//! │                                                                         │
//! │  User Action              Handler                 State Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  Drag slider ───────────► set_hours(n) ─────────► input.hours = n      │
//! │                                                        │               │
//! │  Tick theory ───────────► set_add_on(Theory) ───►      │               │
//! │                                                        ▼               │
//! │  Tick mock test ────────► set_add_on(Mock) ─────► recompute()          │
//! │                                                        │               │
//! │                                                        ▼               │
//! │                                          result = compute_pricing(input)│
//! │                                                                         │
//! │  NOTE: result is never stale. Every setter recomputes synchronously.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Owned by a single command handler. No `Arc`, no `Mutex`: nothing else
//! reads or writes it concurrently.

use serde::Serialize;
use tracing::debug;

use roadready_core::{compute_pricing, AddOn, DiscountTier, PricingInput, PricingResult};

/// Current calculator inputs and their derived price.
///
/// ## Invariants
/// - `result == compute_pricing(input)` at all times
/// - `tier == DiscountTier::for_hours(input.hours)` at all times
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingState {
    input: PricingInput,
    result: PricingResult,
    tier: DiscountTier,
}

impl PricingState {
    /// Creates state for the given hours with no add-ons ticked.
    pub fn new(hours: u32) -> Self {
        Self::from_input(PricingInput::new(hours))
    }

    /// Creates state from a complete input.
    pub fn from_input(input: PricingInput) -> Self {
        let mut state = PricingState {
            input,
            result: PricingResult::default(),
            tier: DiscountTier::Standard,
        };
        state.recompute();
        state
    }

    /// Current inputs.
    pub fn input(&self) -> PricingInput {
        self.input
    }

    /// Price for the current inputs.
    pub fn result(&self) -> PricingResult {
        self.result
    }

    /// Discount tier for the current hours.
    pub fn tier(&self) -> DiscountTier {
        self.tier
    }

    /// Moves the hours slider.
    pub fn set_hours(&mut self, hours: u32) -> PricingResult {
        self.input.hours = hours;
        self.recompute()
    }

    /// Ticks or unticks the theory support checkbox.
    pub fn set_theory_support(&mut self, include: bool) -> PricingResult {
        self.set_add_on(AddOn::TheorySupport, include)
    }

    /// Ticks or unticks the mock test checkbox.
    pub fn set_mock_test(&mut self, include: bool) -> PricingResult {
        self.set_add_on(AddOn::MockTest, include)
    }

    /// Sets an add-on checkbox.
    pub fn set_add_on(&mut self, add_on: AddOn, include: bool) -> PricingResult {
        self.input.set_add_on(add_on, include);
        self.recompute()
    }

    /// Flips an add-on checkbox.
    pub fn toggle(&mut self, add_on: AddOn) -> PricingResult {
        let include = !self.input.includes(add_on);
        self.set_add_on(add_on, include)
    }

    fn recompute(&mut self) -> PricingResult {
        self.result = compute_pricing(self.input);
        self.tier = DiscountTier::for_hours(self.input.hours);
        debug!(
            hours = self.input.hours,
            theory = self.input.include_theory_support,
            mock_test = self.input.include_mock_test,
            total = self.result.total_price,
            savings = self.result.savings,
            "pricing recomputed"
        );
        self.result
    }
}
