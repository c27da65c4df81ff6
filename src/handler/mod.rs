//! Request handler module
//!
//! Responsible for request routing dispatch and the HTML-facing routes:
//! the dashboard, the file viewer, and the create-file form.

mod dashboard;
mod files;
mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
