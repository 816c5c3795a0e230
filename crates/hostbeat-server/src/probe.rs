//! `sysinfo`-backed host probe.

use hostbeat_core::host::{HostProbe, MemoryInfo};
use sysinfo::System;

/// Production [`HostProbe`] reading real OS state.
///
/// Hostname and CPU count cannot change under a running process, so they are
/// captured once at construction; memory is refreshed on every read.
pub struct SysinfoProbe {
    hostname: String,
    cpu_count: usize,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let sys = System::new_all();
        Self {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            cpu_count: sys.cpus().len(),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn platform(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn cpu_count(&self) -> usize {
        self.cpu_count
    }

    fn memory(&self) -> MemoryInfo {
        let mut sys = System::new();
        sys.refresh_memory();
        MemoryInfo {
            total_bytes: sys.total_memory(),
            free_bytes: sys.free_memory(),
        }
    }
}
