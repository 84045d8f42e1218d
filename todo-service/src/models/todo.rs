//! Todo model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo list item. The `id` is assigned by the store on insert
/// and is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}
