//! Domain Layer
//!
//! Session entity, credential value objects and the gateway trait.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::session::{Session, SessionState};
pub use repository::AuthGateway;
