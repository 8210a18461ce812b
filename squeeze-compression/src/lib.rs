//! HTTP Response Compression Middleware for squeeze
//!
//! This crate provides middleware that compresses HTTP response bodies with
//! gzip or deflate, chosen from the client's `Accept-Encoding` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use squeeze_compression::{CompressionMiddleware, CompressionConfig};
//!
//! // Negotiate between gzip and deflate
//! let middleware = CompressionMiddleware::new();
//!
//! // Or restrict the codings and advertise Vary
//! let config = CompressionConfig::builder()
//!     .gzip()
//!     .vary(true)
//!     .build();
//! let middleware = CompressionMiddleware::with_config(config);
//! ```
//!
//! # Negotiation
//!
//! The `Accept-Encoding` entries are ordered by quality value, highest first,
//! with ties resolved in favour of the coding the client listed first. The
//! first entry naming `gzip` or `deflate` wins. Other tokens, including `br`,
//! `identity` and `*`, are ignored, as are codings sent with `q=0`.
//!
//! The compressed body replaces the original in memory; `Content-Encoding`
//! and `Content-Length` are rewritten to match and `Content-Type` is left
//! alone. Responses without a body are never touched.

mod algorithm;
mod config;
mod error;
mod middleware;

pub use algorithm::CompressionAlgorithm;
pub use config::{CompressionConfig, CompressionConfigBuilder};
pub use error::CompressionError;
pub use middleware::CompressionMiddleware;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, CompressionError>;
