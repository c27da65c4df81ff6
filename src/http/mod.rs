//! HTTP protocol layer module
//!
//! Response building and request decoding helpers, decoupled from the
//! business logic in the handlers.

pub mod query;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_400_response, build_403_response, build_404_response, build_405_response,
    build_413_response, build_500_response, build_html_response, build_redirect_response,
};
