//! recipe-server: HTTP gateway over a relational recipe store
//!
//! Maps CRUD requests for recipes, ingredients and the
//! recipe-ingredient association onto single parameterized SQL
//! statements, and shapes the results into JSON responses.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
