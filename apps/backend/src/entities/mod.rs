//! SeaORM entity definitions for the persisted tables.

pub mod todos;
pub mod users;
