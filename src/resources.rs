//! System resource sampling
//!
//! Wraps one process-wide `sysinfo::System` behind a mutex and turns its
//! readings into the figures the dashboard and the metrics endpoint
//! report. CPU usage is computed from the delta between refreshes, so
//! the first sample after startup reads as zero.

use std::path::Path;
use std::sync::{Mutex, PoisonError};
use sysinfo::{CpuExt, DiskExt, System, SystemExt};

/// Point-in-time resource figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceUsage {
    pub cpu_percent: f64,
    pub memory_used_percent: f64,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    pub disk_used_percent: f64,
    pub disk_used_gb: f64,
    pub disk_total_gb: f64,
}

/// Shared sampler over the system handle
pub struct ResourceSampler {
    system: Mutex<System>,
    hostname: String,
    platform: String,
}

impl ResourceSampler {
    pub fn new() -> Self {
        let system = System::new_all();
        let hostname = system.host_name().unwrap_or_else(|| "unknown".to_string());
        let platform = system
            .long_os_version()
            .unwrap_or_else(|| std::env::consts::OS.to_string());
        Self {
            system: Mutex::new(system),
            hostname,
            platform,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Refresh CPU, memory, and disk readings and return a snapshot
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self) -> ResourceUsage {
        let mut sys = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        sys.refresh_cpu();
        sys.refresh_memory();
        sys.refresh_disks();

        let cpu_percent = round1(f64::from(sys.global_cpu_info().cpu_usage()));

        let mem_used = sys.used_memory() as f64;
        let mem_total = sys.total_memory() as f64;
        let memory_used_percent = if mem_total > 0.0 {
            round1(mem_used / mem_total * 100.0)
        } else {
            0.0
        };

        let (disk_total, disk_available) = root_disk_space(&sys);
        let disk_used = disk_total.saturating_sub(disk_available) as f64;
        let disk_total = disk_total as f64;
        let disk_used_percent = if disk_total > 0.0 {
            round1(disk_used / disk_total * 100.0)
        } else {
            0.0
        };

        ResourceUsage {
            cpu_percent,
            memory_used_percent,
            memory_used_mb: mem_used / (1024.0 * 1024.0),
            memory_total_mb: mem_total / (1024.0 * 1024.0),
            disk_used_percent,
            disk_used_gb: disk_used / (1024.0 * 1024.0 * 1024.0),
            disk_total_gb: disk_total / (1024.0 * 1024.0 * 1024.0),
        }
    }
}

impl Default for ResourceSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Space on the disk backing `/`, or the largest disk when no mount
/// matches, as (total, available) bytes.
fn root_disk_space(sys: &System) -> (u64, u64) {
    let root = Path::new("/");
    let mut largest: Option<(u64, u64)> = None;
    for disk in sys.disks() {
        let space = (disk.total_space(), disk.available_space());
        if disk.mount_point() == root {
            return space;
        }
        if largest.is_none_or(|(total, _)| space.0 > total) {
            largest = Some(space);
        }
    }
    largest.unwrap_or((0, 0))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
