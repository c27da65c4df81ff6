// Application state module
// Shared runtime state handed to every connection

use std::time::Instant;
use uuid::Uuid;

use super::metrics::RequestMetrics;
use super::Settings;
use crate::resources::ResourceSampler;

/// Application state
pub struct AppState {
    pub settings: Settings,
    /// Short random id distinguishing replicas of the same deployment
    pub instance_id: String,
    pub started_at: Instant,
    pub metrics: RequestMetrics,
    pub sampler: ResourceSampler,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let mut instance_id = Uuid::new_v4().simple().to_string();
        instance_id.truncate(8);
        Self {
            settings,
            instance_id,
            started_at: Instant::now(),
            metrics: RequestMetrics::new(),
            sampler: ResourceSampler::new(),
        }
    }

    /// Seconds since startup
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
