pub mod cache;
pub mod database;

pub use cache::CacheClient;
pub use database::Database;
