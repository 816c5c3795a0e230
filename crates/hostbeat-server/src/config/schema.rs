use std::net::{Ipv4Addr, SocketAddr};

use hostbeat_core::parse::parse_or_default;

/// Environment variable naming the listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable naming the instance label.
pub const ENV_APP_NAME: &str = "APP_NAME";

/// Runtime configuration for one server instance.
///
/// Instances are interchangeable behind a load balancer; `app_name` is the
/// only thing that tells their responses apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen port (always bound on all interfaces).
    pub port: u16,
    /// Instance label echoed in every response.
    pub app_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            app_name: default_app_name(),
        }
    }
}

impl ServerConfig {
    /// Build config through a key lookup (the environment in production,
    /// a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or_default(ENV_PORT, lookup(ENV_PORT).as_deref(), default_port());
        let app_name = lookup(ENV_APP_NAME)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_app_name);
        Self { port, app_name }
    }

    /// Socket address the server binds: all interfaces on `port`.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn default_port() -> u16 {
    3001
}

fn default_app_name() -> String {
    "App1".into()
}
