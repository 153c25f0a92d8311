//! Brandazon Core - Shared types library.
//!
//! This crate provides common types used across all Brandazon components:
//! - `storefront` - The storefront engine (catalog, cart, navigation, analytics)
//! - `cli` - Command-line demo driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no randomness.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
