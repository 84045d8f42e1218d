//! Database service for todo-service.

use crate::models::Todo;
use service_core::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

/// Database connection pool wrapper.
///
/// The pool is constructed lazily: connections are only established when
/// the first query runs, so an unreachable store surfaces as per-request
/// errors rather than a startup failure.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "todo-service"))]
    pub fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Creating PostgreSQL connection pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// List all todos ordered by ascending id. The full table is returned.
    #[instrument(skip(self))]
    pub async fn list_todos(&self) -> Result<Vec<Todo>, AppError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    /// Insert a todo and return the created row with its store-assigned id.
    #[instrument(skip(self, description), fields(title = %title))]
    pub async fn create_todo(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description
            "#,
        )
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        info!(id = todo.id, "Todo created");

        Ok(todo)
    }
}
