//! Logger module
//!
//! Provides logging for the service including:
//! - Startup and lifecycle logging
//! - Request and file operation logging
//! - Health check and worker activity logging
//! - Tee output to stdout and the logs volume
//!
//! Lines follow the `timestamp - name - LEVEL - message` layout. Debug
//! lines are emitted only when the service runs in development mode.

pub mod writer;

use std::net::SocketAddr;

use crate::config::Settings;

/// Initialize logging from the runtime settings
///
/// Should be called once at application startup. A log file that cannot
/// be opened downgrades to stdout-only logging with a warning.
pub fn init(settings: &Settings) {
    if let Err(e) = writer::init(&settings.log_path, settings.is_development()) {
        log_warning(&format!("Log file unavailable, logging to stdout only: {e}"));
    }
}

/// Current local time in ISO 8601 format with microseconds, used for
/// response timestamps and the file operations audit trail.
pub fn now_iso() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

fn now_stamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S,%3f")
        .to_string()
}

fn write_line(level: &str, message: &str) {
    let line = format!("{} - podboard - {level} - {message}", now_stamp());
    if writer::is_initialized() {
        writer::get().write_line(&line);
    } else {
        println!("{line}");
    }
}

fn write_info(message: &str) {
    write_line("INFO", message);
}

fn write_debug(message: &str) {
    if writer::is_initialized() && writer::get().debug_enabled() {
        write_line("DEBUG", message);
    }
}

pub fn log_error(message: &str) {
    write_line("ERROR", message);
}

pub fn log_warning(message: &str) {
    write_line("WARNING", message);
}

pub fn log_startup_banner(settings: &Settings) {
    write_info(&format!(
        "Starting {} v{} in {} mode",
        settings.app_name, settings.app_version, settings.environment
    ));
}

pub fn log_server_start(addr: &SocketAddr, instance_id: &str) {
    write_info("======================================");
    write_info("Server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Instance ID: {instance_id}"));
    if writer::is_initialized() && !writer::get().has_file() {
        write_info("Log file: unavailable, stdout only");
    }
    write_info("Using Tokio runtime for concurrency");
    write_info("======================================");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_index_request(peer_addr: &SocketAddr) {
    write_info(&format!("Request to index page from {}", peer_addr.ip()));
}

pub fn log_file_viewed(path: &str) {
    write_info(&format!("File viewed: {path}"));
}

pub fn log_view_error(path: &str, err: &std::io::Error) {
    log_error(&format!("Error viewing file {path}: {err}"));
}

pub fn log_file_created(path: &str) {
    write_info(&format!("File created: {path}"));
}

pub fn log_create_error(path: &str, err: &std::io::Error) {
    log_error(&format!("Error creating file {path}: {err}"));
}

pub fn log_health_check(healthy: bool) {
    write_info(&format!(
        "Health check: {}",
        if healthy { "PASS" } else { "FAIL" }
    ));
}

pub fn log_metrics_collected(cpu_percent: f64, memory_percent: f64) {
    write_debug(&format!(
        "Metrics collected: CPU: {cpu_percent}%, Memory: {memory_percent}%"
    ));
}

pub fn log_worker_started() {
    write_info("Background worker started");
}

pub fn log_worker_tick(counter: u64) {
    write_debug(&format!("Background worker tick: {counter}"));
}
