//! # Commands Module
//!
//! Everything the quote tool can be asked to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── quote.rs     ◄─── One-shot custom package price
//! ├── packages.rs  ◄─── Fixed package price list
//! └── session.rs   ◄─── Interactive slider + checkbox loop
//! ```
//!
//! Each command takes the state it needs plus a writer, so tests capture
//! output in a `Vec<u8>` instead of stdout.

pub mod packages;
pub mod quote;
pub mod session;
