// File access routes module
// Viewing files on any mounted volume and creating files in the data volume

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::convert::Infallible;
use std::path::Path;

use super::pages;
use crate::config::AppState;
use crate::http;
use crate::http::query;
use crate::logger;
use crate::volumes;

/// GET /view-file?path=... - render a file from one of the mounted volumes
pub async fn handle_view(
    state: &AppState,
    query_string: Option<&str>,
    is_head: bool,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let file_path = query::query_param(query_string, "path").unwrap_or_default();

    let settings = &state.settings;
    let roots = [
        settings.data_path.as_str(),
        settings.config_path.as_str(),
        settings.log_path.as_str(),
    ];
    if !volumes::is_allowed_path(&file_path, &roots) {
        state.metrics.record_error();
        return Ok(http::build_403_response("Access denied: Invalid path"));
    }

    match tokio::fs::read_to_string(&file_path).await {
        Ok(content) => {
            state.metrics.record_data_read();
            logger::log_file_viewed(&file_path);
            let page = pages::file_view_page(&file_path, &content);
            Ok(http::build_html_response(page, is_head))
        }
        Err(e) => {
            state.metrics.record_error();
            logger::log_view_error(&file_path, &e);
            Ok(http::build_500_response(&format!("Error reading file: {e}")))
        }
    }
}

/// GET /create-file - the creation form
pub fn handle_create_form(is_head: bool) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(http::build_html_response(pages::create_form_page(), is_head))
}

/// POST /create-file - write a form-submitted file into the data volume
///
/// The write and the audit append are one operation from the client's
/// point of view: a failed append is reported as 500 even though the
/// data file was already written.
pub async fn handle_create(
    state: &AppState,
    body: &[u8],
) -> Result<Response<Full<Bytes>>, Infallible> {
    let pairs = query::parse_form(body);
    let filename = query::form_field(&pairs, "filename").unwrap_or_default();
    let content = query::form_field(&pairs, "content").unwrap_or_default();

    if !volumes::is_valid_filename(filename) {
        state.metrics.record_error();
        return Ok(http::build_400_response(
            "Invalid filename. Directory traversal not allowed.",
        ));
    }

    let file_path = Path::new(&state.settings.data_path).join(filename);
    let display_path = file_path.display().to_string();

    match tokio::fs::write(&file_path, content).await {
        Ok(()) => {
            state.metrics.record_data_write();
            logger::log_file_created(&display_path);

            match append_audit_line(&state.settings.log_path, filename).await {
                Ok(()) => Ok(http::build_redirect_response("/")),
                Err(e) => {
                    state.metrics.record_error();
                    logger::log_create_error(&display_path, &e);
                    Ok(http::build_500_response(&format!(
                        "Error creating file: {e}"
                    )))
                }
            }
        }
        Err(e) => {
            state.metrics.record_error();
            logger::log_create_error(&display_path, &e);
            Ok(http::build_500_response(&format!(
                "Error creating file: {e}"
            )))
        }
    }
}

/// Append one line to the file operations audit trail in the logs volume
async fn append_audit_line(log_path: &str, filename: &str) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let line = format!("File created: {} at {}\n", filename, logger::now_iso());
    let audit_path = Path::new(log_path).join("file_operations.log");
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&audit_path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    // tokio's File buffers writes; flush so the append (and any write
    // error) completes before the response is built
    file.flush().await
}
