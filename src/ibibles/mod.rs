//! ibibles.net verse lookup.
//!
//! Provides the HTTP client for the quote endpoint and the extractor for its
//! HTML payload.

/// HTTP client for the quote endpoint
pub mod api;
/// Verse extraction from quote pages
pub mod extract;

// Re-export key components
pub use api::IbiblesClient;
pub use extract::extract_verses;
