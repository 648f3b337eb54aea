//! HTTP handlers for entity CRUD and thesis search.

pub mod entity;
pub mod search;
pub use entity::*;
pub use search::*;
