/// Recipe Service Library
///
/// A small HTTP microservice exposing CRUD operations over recipes backed
/// by PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and request/response types
/// - `services`: Business logic layer
/// - `db`: Database pool and recipe repository
/// - `models`: Recipe entity and category enum
/// - `validators`: Schema validation helpers
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `openapi`: OpenAPI document
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
