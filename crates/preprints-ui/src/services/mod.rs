//! HTTP client helpers (REST).
pub mod api;
