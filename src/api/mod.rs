// API module entry
// JSON endpoints exposing application info, health, and metrics

mod handlers;
mod response;
mod types;

pub use handlers::{handle_health, handle_info, handle_metrics};
