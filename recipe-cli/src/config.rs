//! Process configuration
//!
//! The gateway depends on two externally supplied values: the database
//! connection string and the pool size. Both come from arguments or the
//! environment, with `.env` in the working directory loaded first.

use tracing::debug;

/// Default SQLite database when nothing is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://recipes.db";

/// Load `.env` from the current directory.
///
/// dotenvy never overwrites variables already set in the environment.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }
}

/// Resolve the listen port: explicit value, then `PORT`, then 3000.
pub fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(3000)
}
