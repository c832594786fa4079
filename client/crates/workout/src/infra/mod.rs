//! Infrastructure Layer
//!
//! HTTP implementation of the workout gateway.

pub mod dto;
pub mod http;

pub use http::HttpWorkoutGateway;
