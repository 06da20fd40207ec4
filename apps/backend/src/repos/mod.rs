//! Repository layer: database access behind domain models and errors.

pub mod todos;
pub mod users;
