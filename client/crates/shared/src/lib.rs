//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the client's vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for server-issued records
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the auth and workout crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
