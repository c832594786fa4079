//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the workout client:
//! - Canonical JSON form (key-sorted, compact) for integrity digests
//! - Cryptographic utilities (SHA-256, hex, constant-time comparison)
//! - HTTP client wrapper for the workout API
//! - API configuration loaded from the environment
//! - Secret strings (zeroized on drop)

pub mod canonical;
pub mod client;
pub mod config;
pub mod crypto;
pub mod secret;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
