//! HTTP handlers for todo-service.

pub mod health;
pub mod todos;

pub use health::*;
pub use todos::*;
