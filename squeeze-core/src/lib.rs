// Core library for the squeeze HTTP pipeline
// This module contains the request/response types, the middleware contract and
// header negotiation shared by every squeeze middleware crate

pub mod content_negotiation;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;

// Re-export commonly used types
pub use content_negotiation::{AcceptEncoding, EncodingPreference};
pub use error::*;
pub use http::*;
pub use middleware::*;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
