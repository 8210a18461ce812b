// squeeze - transparent response compression for HTTP middleware pipelines
//
// The core crate supplies the request/response types and the middleware
// contract; the compression crate supplies the Accept-Encoding driven
// compression middleware built on top of it.

// Re-export core functionality
pub use squeeze_core::*;

#[cfg(feature = "compression")]
pub use squeeze_compression;

#[cfg(feature = "compression")]
pub use squeeze_compression::{CompressionAlgorithm, CompressionConfig, CompressionMiddleware};

// Re-export commonly used external crates
pub use async_trait::async_trait;
pub use serde;
pub use serde_json;
pub use tokio;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, LogOutput};
    pub use crate::{
        Error, HandlerFn, HttpRequest, HttpResponse, Json, Middleware, MiddlewareChain, Next,
        handler_fn,
    };

    #[cfg(feature = "compression")]
    pub use crate::{CompressionAlgorithm, CompressionConfig, CompressionMiddleware};

    pub use async_trait::async_trait;
}
