// API handlers module
// JSON endpoints consumed by probes and monitoring systems

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::convert::Infallible;

use super::response::json_response;
use super::types::{
    ApplicationMetrics, HealthChecks, HealthResponse, InfoResponse, InstanceInfo, MetricsResponse,
    SystemMetrics, VolumeMount, VolumeOverview,
};
use crate::config::AppState;
use crate::logger;
use crate::volumes::{is_readable, is_writable};

/// GET /api/info - deployment identity and volume overview
pub async fn handle_info(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    let settings = &state.settings;

    let volumes = VolumeOverview {
        data: VolumeMount {
            path: settings.data_path.clone(),
            mounted: is_readable(&settings.data_path).await,
        },
        config: VolumeMount {
            path: settings.config_path.clone(),
            mounted: is_readable(&settings.config_path).await,
        },
        logs: VolumeMount {
            path: settings.log_path.clone(),
            mounted: is_readable(&settings.log_path).await,
        },
    };

    let body = InfoResponse {
        app_name: settings.app_name.clone(),
        version: settings.app_version.clone(),
        environment: settings.environment.clone(),
        instance_id: state.instance_id.clone(),
        hostname: state.sampler.hostname().to_string(),
        request_count: state.metrics.request_count(),
        uptime_seconds: state.uptime_seconds(),
        volumes,
        timestamp: logger::now_iso(),
    };

    Ok(json_response(StatusCode::OK, &body))
}

/// GET /api/health - liveness and readiness probe target
///
/// Healthy means the data and config volumes are readable and the logs
/// volume is writable. An unhealthy result is reported with 503 so
/// orchestrator probes fail on it.
pub async fn handle_health(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    let settings = &state.settings;

    let data_ok = is_readable(&settings.data_path).await;
    let config_ok = is_readable(&settings.config_path).await;
    let logs_ok = is_writable(&settings.log_path).await;
    let healthy = data_ok && config_ok && logs_ok;

    logger::log_health_check(healthy);

    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        checks: HealthChecks {
            data_volume: accessible_label(data_ok).to_string(),
            config_volume: accessible_label(config_ok).to_string(),
            logs_volume: if logs_ok { "writable" } else { "not writable" }.to_string(),
        },
        timestamp: logger::now_iso(),
        hostname: state.sampler.hostname().to_string(),
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    Ok(json_response(status, &body))
}

/// GET /api/metrics - resource usage and request counters
pub async fn handle_metrics(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    let usage = state.sampler.sample();
    let counters = state.metrics.snapshot();

    logger::log_metrics_collected(usage.cpu_percent, usage.memory_used_percent);

    let body = MetricsResponse {
        system: SystemMetrics {
            cpu_percent: usage.cpu_percent,
            memory_used_percent: usage.memory_used_percent,
            memory_used_mb: usage.memory_used_mb,
            memory_total_mb: usage.memory_total_mb,
            disk_used_percent: usage.disk_used_percent,
            disk_used_gb: usage.disk_used_gb,
            disk_total_gb: usage.disk_total_gb,
        },
        application: ApplicationMetrics {
            uptime_seconds: state.uptime_seconds(),
            total_requests: counters.requests,
            data_reads: counters.data_reads,
            data_writes: counters.data_writes,
            errors: counters.errors,
        },
        instance: InstanceInfo {
            id: state.instance_id.clone(),
            hostname: state.sampler.hostname().to_string(),
        },
        timestamp: logger::now_iso(),
    };

    Ok(json_response(StatusCode::OK, &body))
}

const fn accessible_label(ok: bool) -> &'static str {
    if ok {
        "accessible"
    } else {
        "inaccessible"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use http_body_util::BodyExt;

    fn state_for(data: &str, config: &str, logs: &str) -> AppState {
        AppState::new(Settings {
            app_name: "podboard".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
            data_path: data.to_string(),
            config_path: config.to_string(),
            log_path: logs.to_string(),
            secret_key: "default-dev-key".to_string(),
            db_password: "default-password".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
        })
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_info_reports_mounted_volumes() {
        let data = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        let state = state_for(
            data.path().to_str().unwrap(),
            config.path().to_str().unwrap(),
            logs.path().to_str().unwrap(),
        );

        let response = handle_info(&state).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["app_name"], "podboard");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["instance_id"], state.instance_id.as_str());
        assert_eq!(body["request_count"], 0);
        assert_eq!(body["volumes"]["data"]["mounted"], true);
        assert_eq!(body["volumes"]["config"]["mounted"], true);
        assert_eq!(body["volumes"]["logs"]["mounted"], true);
    }

    #[tokio::test]
    async fn test_info_reports_missing_volume_as_unmounted() {
        let config = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        let state = state_for(
            "/nonexistent/podboard-data",
            config.path().to_str().unwrap(),
            logs.path().to_str().unwrap(),
        );

        let response = handle_info(&state).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["volumes"]["data"]["mounted"], false);
        assert_eq!(body["volumes"]["config"]["mounted"], true);
    }

    #[tokio::test]
    async fn test_health_passes_with_all_volumes() {
        let data = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        let state = state_for(
            data.path().to_str().unwrap(),
            config.path().to_str().unwrap(),
            logs.path().to_str().unwrap(),
        );

        let response = handle_health(&state).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["data_volume"], "accessible");
        assert_eq!(body["checks"]["config_volume"], "accessible");
        assert_eq!(body["checks"]["logs_volume"], "writable");
    }

    #[tokio::test]
    async fn test_health_fails_without_logs_volume() {
        let data = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let state = state_for(
            data.path().to_str().unwrap(),
            config.path().to_str().unwrap(),
            "/nonexistent/podboard-logs",
        );

        let response = handle_health(&state).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["checks"]["logs_volume"], "not writable");
        assert_eq!(body["checks"]["data_volume"], "accessible");
    }

    #[tokio::test]
    async fn test_metrics_reflects_request_counters() {
        let data = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        let state = state_for(
            data.path().to_str().unwrap(),
            config.path().to_str().unwrap(),
            logs.path().to_str().unwrap(),
        );
        state.metrics.record_request();
        state.metrics.record_request();
        state.metrics.record_data_write();
        state.metrics.record_error();

        let response = handle_metrics(&state).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["application"]["total_requests"], 2);
        assert_eq!(body["application"]["data_reads"], 0);
        assert_eq!(body["application"]["data_writes"], 1);
        assert_eq!(body["application"]["errors"], 1);
        assert_eq!(body["instance"]["id"], state.instance_id.as_str());
        assert!(body["system"]["memory_total_mb"].as_f64().unwrap() > 0.0);
    }
}
