//! Typed client for the RekLink REST API.
//!
//! [`client::ApiClient`] exposes one method per backend endpoint and performs pure
//! request/response mapping: it attaches bearer tokens, serializes payloads, and
//! delegates every decode to the normalizer in [`error`], which turns non-2xx
//! responses into [`error::ApiError`] kinds callers can branch on. The client never
//! retries, caches, or touches session state; those concerns live with the caller.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, BaseUrlError, DEFAULT_API_BASE_URL, ENV_API_BASE_URL};
pub use error::ApiError;
