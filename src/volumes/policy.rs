//! Volume access policy module
//!
//! Validation rules for the file-view and file-create routes.

/// Check whether a requested file path falls under one of the configured
/// volume roots.
///
/// The comparison is purely textual: the candidate must start with one of
/// the root strings. `..` segments are not resolved before comparing, and a
/// sibling directory whose spelling extends a root (`/data-old` for root
/// `/data`) also passes.
pub fn is_allowed_path(path: &str, roots: &[&str]) -> bool {
    roots.iter().any(|root| path.starts_with(root))
}

/// Check whether a filename is acceptable for creation under the data
/// volume.
///
/// Rejects any name containing the sequence `..` or the `/` separator.
/// An empty name passes; the subsequent write fails at the filesystem and
/// surfaces as a 500.
pub fn is_valid_filename(name: &str) -> bool {
    !name.contains("..") && !name.contains('/')
}
