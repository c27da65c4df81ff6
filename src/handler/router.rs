//! Request routing dispatch module
//!
//! Entry point for request processing: fixed route table dispatch,
//! method checks, and body collection for POSTs. Handlers receive
//! extracted inputs (query string, body bytes) rather than the raw
//! request.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use super::{dashboard, files};
use crate::api;
use crate::config::AppState;
use crate::http;
use crate::logger;

/// POST bodies above this size are rejected with 413
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Main entry point for request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: hyper::body::Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let is_head = method == Method::HEAD;

    match (method, path.as_str()) {
        (Method::GET | Method::HEAD, "/") => {
            dashboard::handle_dashboard(&state, &peer_addr, is_head).await
        }
        (Method::GET | Method::HEAD, "/view-file") => {
            files::handle_view(&state, query.as_deref(), is_head).await
        }
        (Method::GET | Method::HEAD, "/create-file") => files::handle_create_form(is_head),
        (Method::POST, "/create-file") => match collect_body(req).await {
            Ok(body) => files::handle_create(&state, &body).await,
            Err(response) => Ok(response),
        },
        (Method::GET | Method::HEAD, "/api/info") => api::handle_info(&state).await,
        (Method::GET | Method::HEAD, "/api/health") => api::handle_health(&state).await,
        (Method::GET | Method::HEAD, "/api/metrics") => api::handle_metrics(&state).await,
        (other, "/create-file") => {
            logger::log_warning(&format!("Method not allowed: {other} {path}"));
            Ok(http::build_405_response("GET, HEAD, POST"))
        }
        (other, "/" | "/view-file" | "/api/info" | "/api/health" | "/api/metrics") => {
            logger::log_warning(&format!("Method not allowed: {other} {path}"));
            Ok(http::build_405_response("GET, HEAD"))
        }
        _ => Ok(http::build_404_response()),
    }
}

/// Read the request body, enforcing the size cap up front from the
/// declared Content-Length and again on the collected bytes.
async fn collect_body<B>(req: Request<B>) -> Result<Bytes, Response<Full<Bytes>>>
where
    B: hyper::body::Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    if let Some(declared) = req
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
    {
        if declared > MAX_BODY_SIZE {
            logger::log_warning(&format!("Request body too large: {declared} bytes"));
            return Err(http::build_413_response());
        }
    }

    match req.into_body().collect().await {
        Ok(collected) => {
            let bytes = collected.to_bytes();
            if bytes.len() > MAX_BODY_SIZE {
                logger::log_warning(&format!("Request body too large: {} bytes", bytes.len()));
                return Err(http::build_413_response());
            }
            Ok(bytes)
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            Err(http::build_400_response("Failed to read request body"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use hyper::StatusCode;
    use tempfile::TempDir;

    struct Fixture {
        state: Arc<AppState>,
        _data: TempDir,
        _config: TempDir,
        _logs: TempDir,
    }

    fn fixture() -> Fixture {
        let data = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState::new(Settings {
            app_name: "podboard".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
            data_path: data.path().to_str().unwrap().to_string(),
            config_path: config.path().to_str().unwrap().to_string(),
            log_path: logs.path().to_str().unwrap().to_string(),
            secret_key: "default-dev-key".to_string(),
            db_password: "default-password".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
        }));
        Fixture {
            state,
            _data: data,
            _config: config,
            _logs: logs,
        }
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:49152".parse().unwrap()
    }

    fn request(method: Method, uri: &str, body: &[u8]) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::from(body.to_vec())))
            .unwrap()
    }

    async fn body_text(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let fx = fixture();
        let response = handle_request(
            request(Method::GET, "/missing", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405_with_allow() {
        let fx = fixture();
        let response = handle_request(
            request(Method::DELETE, "/api/info", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["Allow"], "GET, HEAD");
    }

    #[tokio::test]
    async fn test_create_file_allow_lists_post() {
        let fx = fixture();
        let response = handle_request(
            request(Method::DELETE, "/create-file", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["Allow"], "GET, HEAD, POST");
    }

    #[tokio::test]
    async fn test_post_to_dashboard_is_405() {
        let fx = fixture();
        let response = handle_request(
            request(Method::POST, "/", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_declared_oversized_body_is_413() {
        let fx = fixture();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/create-file")
            .header("content-length", "2000000")
            .body(Full::new(Bytes::from_static(b"filename=a&content=b")))
            .unwrap();
        let response = handle_request(req, Arc::clone(&fx.state), peer())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_actual_oversized_body_is_413() {
        let fx = fixture();
        let body = vec![b'a'; MAX_BODY_SIZE + 1];
        let response = handle_request(
            request(Method::POST, "/create-file", &body),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_head_is_served_like_get_without_body() {
        let fx = fixture();
        let response = handle_request(
            request(Method::HEAD, "/create-file", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_view_round_trip() {
        let fx = fixture();

        let created = handle_request(
            request(
                Method::POST,
                "/create-file",
                b"filename=roundtrip.txt&content=written+via+router",
            ),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(created.status(), StatusCode::FOUND);

        let uri = format!(
            "/view-file?path={}/roundtrip.txt",
            fx.state.settings.data_path
        );
        let viewed = handle_request(
            request(Method::GET, &uri, b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(viewed.status(), StatusCode::OK);
        assert!(body_text(viewed).await.contains("written via router"));

        let snap = fx.state.metrics.snapshot();
        assert_eq!(snap.data_writes, 1);
        assert_eq!(snap.data_reads, 1);
    }

    #[tokio::test]
    async fn test_api_routes_dispatch() {
        let fx = fixture();

        let info = handle_request(
            request(Method::GET, "/api/info", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(info.status(), StatusCode::OK);

        let health = handle_request(
            request(Method::GET, "/api/health", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let metrics = handle_request(
            request(Method::GET, "/api/metrics", b""),
            Arc::clone(&fx.state),
            peer(),
        )
        .await
        .unwrap();
        assert_eq!(metrics.status(), StatusCode::OK);
    }
}
