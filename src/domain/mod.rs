//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Barangay services and FAQs
//! - `conversation` - Chat turns, prompt composition, sanitizing, fallback
//!
//! Nothing here performs I/O.

pub mod catalog;
pub mod conversation;
pub mod foundation;
