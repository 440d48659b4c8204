//! # roadready-core: Pure Pricing Logic for RoadReady
//!
//! This crate holds the driving school's lesson pricing rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RoadReady Pricing                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation Shell (quote-cli)                   │   │
//! │  │    hours slider ──► add-on toggles ──► "Total Price / You Save" │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PricingInput (by value)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ roadready-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ packages  │  │   │
//! │  │   │  Input    │  │   Money   │  │   tiers   │  │  bundles  │  │   │
//! │  │   │  Result   │  │  rounding │  │  add-ons  │  │  catalog  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PricingInput, PricingResult, AddOn, LessonPackage)
//! - [`money`] - Money type with integer pence (no floating point!)
//! - [`pricing`] - The tiered discount calculator
//! - [`packages`] - Fixed-price lesson bundles
//! - [`error`] - Domain error types
//! - [`validation`] - Input control rules (hours range, toggles)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: no logging sinks, no environment, no files
//! 3. **Integer Money**: all intermediate values are pence (i64)
//! 4. **Total Calculator**: pricing never fails; only input checks return errors
//!
//! ## Example Usage
//!
//! ```rust
//! use roadready_core::{compute_pricing, PricingInput};
//!
//! let result = compute_pricing(PricingInput::new(40));
//! assert_eq!(result.total_price, 1140);
//! assert_eq!(result.savings, 60);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod packages;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_pricing, DiscountTier};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lower end of the hours slider on the pricing page.
pub const MIN_LESSON_HOURS: u32 = 1;

/// Upper end of the hours slider on the pricing page.
///
/// ## Business Reason
/// Larger courses are arranged in person rather than quoted online.
pub const MAX_LESSON_HOURS: u32 = 40;
