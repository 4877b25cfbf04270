//! Feature slices of the Web UI.
pub mod preprint_detail;
