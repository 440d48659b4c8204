//! # State Module
//!
//! Application state for the quote tool.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │        PricingState          │   │        ConfigState           │   │
//! │  │                              │   │                              │   │
//! │  │  input (hours + toggles)     │   │  school_name                 │   │
//! │  │  result (always current)     │   │  currency_symbol             │   │
//! │  │  tier                        │   │  default_hours               │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  • PricingState: owned by one command, mutated through setters         │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod pricing;

pub use config::{ConfigError, ConfigState};
pub use pricing::PricingState;
