//! Volume inspection
//!
//! Listing, access probing, and the path policy for the service's three
//! mounted directories.

mod policy;
mod snapshot;

pub use policy::{is_allowed_path, is_valid_filename};
pub use snapshot::{VolumeKind, VolumeSnapshot, VolumeStatus};

/// A volume counts as readable when its directory can be listed.
pub async fn is_readable(path: &str) -> bool {
    tokio::fs::read_dir(path).await.is_ok()
}

/// A volume counts as writable when it exists and its permission bits
/// allow writing. This checks metadata only, no probe file is created.
pub async fn is_writable(path: &str) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => !meta.permissions().readonly(),
        Err(_) => false,
    }
}
