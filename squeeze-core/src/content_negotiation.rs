//! Content negotiation for HTTP requests.
//!
//! Parses the `Accept-Encoding` request header into an ordered list of
//! content-coding preferences. Entries are ordered by quality value, highest
//! first; entries with equal quality keep the order in which the client
//! listed them.
//!
//! # Examples
//!
//! ```
//! use squeeze_core::content_negotiation::AcceptEncoding;
//!
//! let accept = AcceptEncoding::parse("deflate;q=0.5, gzip, br;q=0.9");
//! let codings: Vec<&str> = accept.iter().map(|p| p.coding.as_str()).collect();
//! assert_eq!(codings, vec!["gzip", "br", "deflate"]);
//! ```

use crate::HttpRequest;
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Accept-Encoding Header
// ============================================================================

/// A single `Accept-Encoding` entry: a content-coding token and its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingPreference {
    /// Lower-cased content-coding token (e.g. `gzip`, `deflate`, `*`)
    pub coding: String,
    /// Quality value in `[0, 1]`; `0` means "not acceptable"
    pub quality: f32,
}

impl EncodingPreference {
    pub fn new(coding: impl Into<String>, quality: f32) -> Self {
        Self {
            coding: coding.into().to_ascii_lowercase(),
            quality: quality.clamp(0.0, 1.0),
        }
    }

    /// Whether the client allows this coding at all
    pub fn is_acceptable(&self) -> bool {
        self.quality > 0.0
    }
}

impl fmt::Display for EncodingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quality < 1.0 {
            write!(f, "{};q={}", self.coding, self.quality)
        } else {
            write!(f, "{}", self.coding)
        }
    }
}

/// Represents a parsed `Accept-Encoding` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptEncoding {
    /// Encodings with their quality values, sorted by preference.
    pub encodings: Vec<EncodingPreference>,
}

impl AcceptEncoding {
    /// Parse an Accept-Encoding header string.
    ///
    /// Unknown tokens are kept; deciding which codings are supported is up to
    /// the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use squeeze_core::content_negotiation::AcceptEncoding;
    ///
    /// let accept = AcceptEncoding::parse("gzip, deflate, br;q=0.9");
    /// assert_eq!(accept.encodings.len(), 3);
    /// ```
    pub fn parse(header: &str) -> Self {
        let mut encodings: Vec<EncodingPreference> = header
            .split(',')
            .filter_map(|part| {
                let part = part.trim();
                if part.is_empty() {
                    return None;
                }

                let (coding, quality) = Self::extract_quality(part);
                if coding.is_empty() {
                    return None;
                }
                Some(EncodingPreference::new(coding, quality))
            })
            .collect();

        // Stable sort: equal weights keep the listed order
        encodings.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));

        Self { encodings }
    }

    fn extract_quality(s: &str) -> (&str, f32) {
        let mut params = s.split(';');
        let coding = params.next().unwrap_or_default().trim();

        let quality = params
            .filter_map(|param| param.split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("q"))
            .and_then(|(_, value)| value.trim().parse::<f32>().ok())
            .filter(|q| q.is_finite())
            .unwrap_or(1.0);

        (coding, quality)
    }

    /// Iterate preferences from most to least preferred.
    pub fn iter(&self) -> impl Iterator<Item = &EncodingPreference> {
        self.encodings.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.encodings.is_empty()
    }
}

// ============================================================================
// HttpRequest Extensions
// ============================================================================

/// Extension methods for HttpRequest to support content negotiation.
impl HttpRequest {
    /// Get the Accept-Encoding header parsed into encodings.
    ///
    /// A missing header yields an empty preference list.
    pub fn accept_encoding(&self) -> AcceptEncoding {
        self.header("Accept-Encoding")
            .map(|h| AcceptEncoding::parse(h))
            .unwrap_or_default()
    }
}
