//! Todo Service - minimal todo list HTTP API backed by PostgreSQL.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
