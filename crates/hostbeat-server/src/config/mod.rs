//! Server config loader (environment only).
//!
//! The process environment is the service's one configuration surface; there
//! is no config file and no CLI flags. Loading never fails: unset, empty, or
//! unparseable values fall back to defaults.

pub mod schema;

pub use schema::ServerConfig;

/// Load config from the process environment.
pub fn load_from_env() -> ServerConfig {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load config through an arbitrary lookup, for tests.
pub fn load_from_lookup<F>(lookup: F) -> ServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    ServerConfig::from_lookup(lookup)
}
