// API type definitions module
// Response payloads for the info, health, and metrics endpoints

use serde::Serialize;

/// GET /api/info response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app_name: String,
    pub version: String,
    pub environment: String,
    pub instance_id: String,
    pub hostname: String,
    pub request_count: u64,
    pub uptime_seconds: f64,
    pub volumes: VolumeOverview,
    pub timestamp: String,
}

/// Mount overview keyed by volume role
#[derive(Debug, Serialize)]
pub struct VolumeOverview {
    pub data: VolumeMount,
    pub config: VolumeMount,
    pub logs: VolumeMount,
}

#[derive(Debug, Serialize)]
pub struct VolumeMount {
    pub path: String,
    /// True when the directory exists and can be read
    pub mounted: bool,
}

/// GET /api/health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy", mirrored by the HTTP status code
    pub status: String,
    pub checks: HealthChecks,
    pub timestamp: String,
    pub hostname: String,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub data_volume: String,
    pub config_volume: String,
    pub logs_volume: String,
}

/// GET /api/metrics response
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub system: SystemMetrics,
    pub application: ApplicationMetrics,
    pub instance: InstanceInfo,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub cpu_percent: f64,
    pub memory_used_percent: f64,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    pub disk_used_percent: f64,
    pub disk_used_gb: f64,
    pub disk_total_gb: f64,
}

#[derive(Debug, Serialize)]
pub struct ApplicationMetrics {
    pub uptime_seconds: f64,
    pub total_requests: u64,
    pub data_reads: u64,
    pub data_writes: u64,
    pub errors: u64,
}

#[derive(Debug, Serialize)]
pub struct InstanceInfo {
    pub id: String,
    pub hostname: String,
}
