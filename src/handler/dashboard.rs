// Dashboard route module
// Builds the landing page from live state on every request

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::convert::Infallible;
use std::net::SocketAddr;

use super::pages::{dashboard_page, DashboardView};
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::volumes::{VolumeKind, VolumeSnapshot};

/// GET / - the status dashboard
///
/// The page itself is always 200; a volume that fails to list is shown
/// inline in its error state and counted against the errors counter.
pub async fn handle_dashboard(
    state: &AppState,
    peer_addr: &SocketAddr,
    is_head: bool,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let request_count = state.metrics.record_request();
    logger::log_index_request(peer_addr);

    let mut volumes = Vec::with_capacity(3);
    for (kind, path) in state.settings.volume_paths() {
        let snapshot = VolumeSnapshot::capture(kind, path).await;
        if snapshot.is_error() {
            state.metrics.record_error();
        } else if kind == VolumeKind::Data {
            state.metrics.record_data_read();
        }
        volumes.push(snapshot);
    }

    let usage = state.sampler.sample();
    let view = DashboardView {
        settings: &state.settings,
        instance_id: &state.instance_id,
        hostname: state.sampler.hostname(),
        platform: state.sampler.platform(),
        uptime_seconds: state.uptime_seconds(),
        request_count,
        usage,
        volumes: &volumes,
    };

    Ok(http::build_html_response(dashboard_page(&view), is_head))
}
