//! Compression middleware implementation

use crate::{CompressionAlgorithm, CompressionConfig};
use async_trait::async_trait;
use squeeze_core::{AcceptEncoding, Error, HttpRequest, HttpResponse, Middleware, Next};
use tracing::{debug, trace, warn};

/// HTTP response compression middleware
///
/// Forwards the request to the next handler, then compresses the response
/// body with the coding the client prefers among gzip and deflate. Responses
/// without a body, and requests that name no supported coding, pass through
/// untouched.
///
/// A codec failure fails the whole call: a response is either fully encoded
/// with matching headers or not encoded at all.
///
/// # Example
///
/// ```rust,no_run
/// use squeeze_compression::{CompressionMiddleware, CompressionConfig};
///
/// // Negotiate gzip or deflate
/// let middleware = CompressionMiddleware::new();
///
/// // Only ever answer with deflate, and mark responses as varying
/// let config = CompressionConfig::builder()
///     .deflate()
///     .vary(true)
///     .build();
/// let middleware = CompressionMiddleware::with_config(config);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompressionMiddleware {
    config: CompressionConfig,
}

impl CompressionMiddleware {
    /// Create a new compression middleware with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compression middleware with custom configuration
    pub fn with_config(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Determine the compression algorithm to use for a request
    fn select_algorithm(&self, accept: &AcceptEncoding) -> Option<CompressionAlgorithm> {
        CompressionAlgorithm::negotiate(accept, &self.config.algorithms)
    }

    /// Check if a response should be compressed
    fn should_compress(&self, response: &HttpResponse) -> bool {
        if !response.has_body() {
            trace!(status = response.status, "No response body, skipping compression");
            return false;
        }

        // Never stack a second coding on an encoded body
        if let Some(encoding) = response.header("Content-Encoding")
            && !encoding.trim().is_empty()
            && !encoding.trim().eq_ignore_ascii_case("identity")
        {
            trace!(%encoding, "Response already encoded, skipping compression");
            return false;
        }

        true
    }

    /// Negotiate and, when applicable, encode a response returned by `next`
    fn process_response<F>(
        &self,
        accept: &AcceptEncoding,
        response: HttpResponse,
        codec: F,
    ) -> Result<HttpResponse, Error>
    where
        F: FnOnce(CompressionAlgorithm, &[u8]) -> crate::Result<Vec<u8>>,
    {
        let Some(algorithm) = self.select_algorithm(accept) else {
            trace!("No supported content coding requested");
            return Ok(response);
        };

        if !self.should_compress(&response) {
            return Ok(response);
        }

        self.compress_response(response, algorithm, codec)
    }

    /// Compress the response body and rewrite the entity headers.
    ///
    /// The body is encoded before anything on the response changes, so a
    /// codec error drops the response instead of returning it half rewritten.
    fn compress_response<F>(
        &self,
        mut response: HttpResponse,
        algorithm: CompressionAlgorithm,
        codec: F,
    ) -> Result<HttpResponse, Error>
    where
        F: FnOnce(CompressionAlgorithm, &[u8]) -> crate::Result<Vec<u8>>,
    {
        let body = response.body_bytes();
        let original_len = body.len();

        let compressed = codec(algorithm, body).inspect_err(|e| {
            warn!(encoding = %algorithm, error = %e, "Response compression failed");
        })?;

        debug!(
            encoding = %algorithm,
            original = original_len,
            compressed = compressed.len(),
            "Compressed response body"
        );

        let content_length = compressed.len();
        response.body = Some(compressed);

        response.set_header("Content-Encoding", algorithm.encoding_name());
        response.set_header("Content-Length", content_length.to_string());

        if self.config.vary {
            let vary = response.remove_header("Vary").unwrap_or_default();
            let already_listed = vary
                .split(',')
                .any(|v| v.trim().eq_ignore_ascii_case("accept-encoding") || v.trim() == "*");
            let vary = match (vary.trim().is_empty(), already_listed) {
                (true, _) => "Accept-Encoding".to_string(),
                (false, true) => vary,
                (false, false) => format!("{}, Accept-Encoding", vary.trim()),
            };
            response.set_header("Vary", vary);
        }

        Ok(response)
    }
}

#[async_trait]
impl Middleware for CompressionMiddleware {
    async fn handle(&self, req: HttpRequest, next: Next) -> Result<HttpResponse, Error> {
        // Read negotiation headers before handing the request off
        let accept = req.accept_encoding();

        let response = next(req).await?;

        self.process_response(&accept, response, |algorithm, body| algorithm.compress(body))
    }
}
