//! Top-level facade crate for hostbeat.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use hostbeat_core::*;
}

pub mod server {
    pub use hostbeat_server::*;
}
