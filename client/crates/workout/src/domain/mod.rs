//! Domain Layer - Workout entities and integrity logic
//!
//! This layer contains:
//! - Domain entities (WorkoutTemplate, WorkoutDay, WorkoutSubmission)
//! - Domain value objects (NewTemplate, IntegrityCheck)
//! - Domain services (canonical submission digest)
//! - Gateway traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
