//! Compression algorithm implementations

use crate::{CompressionError, Result};
use flate2::Compression;
use flate2::write::{GzEncoder, ZlibEncoder};
use squeeze_core::AcceptEncoding;
use std::io::Write;

/// Supported content codings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionAlgorithm {
    /// Gzip compression (RFC 1952)
    Gzip,

    /// HTTP `deflate`: a zlib-wrapped deflate stream (RFC 1950)
    Deflate,
}

impl CompressionAlgorithm {
    /// Every algorithm this crate can apply
    pub const ALL: [CompressionAlgorithm; 2] = [Self::Gzip, Self::Deflate];

    /// Get the Content-Encoding header value for this algorithm
    pub fn encoding_name(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
        }
    }

    /// Map a content-coding token onto an algorithm.
    ///
    /// Matching is exact (ignoring ASCII case) so the emitted
    /// `Content-Encoding` always echoes a token the client sent.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.encoding_name().eq_ignore_ascii_case(token.trim()))
    }

    /// Pick the client's most preferred coding among `enabled`.
    ///
    /// Preferences are walked in the order produced by
    /// [`AcceptEncoding::parse`]: highest quality first, ties in listed order.
    /// Codings with `q=0` and tokens outside `enabled` are skipped.
    pub fn negotiate(accept: &AcceptEncoding, enabled: &[CompressionAlgorithm]) -> Option<Self> {
        accept
            .iter()
            .filter(|pref| pref.is_acceptable())
            .filter_map(|pref| Self::from_token(&pref.coding))
            .find(|algo| enabled.contains(algo))
    }

    /// Select from a raw Accept-Encoding header value
    pub fn select_from_accept_encoding(accept_encoding: &str) -> Option<Self> {
        Self::negotiate(&AcceptEncoding::parse(accept_encoding), &Self::ALL)
    }

    /// Compress data using this algorithm
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.compress_into(data, Vec::with_capacity(data.len() / 2 + 32))
    }

    /// Compress `data` into `sink`, returning the sink once the stream is finished
    pub fn compress_into<W: Write>(&self, data: &[u8], sink: W) -> Result<W> {
        let result = match self {
            Self::Gzip => {
                let mut encoder = GzEncoder::new(sink, Compression::default());
                encoder.write_all(data).and_then(|_| encoder.finish())
            }
            Self::Deflate => {
                let mut encoder = ZlibEncoder::new(sink, Compression::default());
                encoder.write_all(data).and_then(|_| encoder.finish())
            }
        };

        result.map_err(|e| CompressionError::CompressionFailed(format!("{}: {}", self, e)))
    }
}

impl std::fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.encoding_name())
    }
}

impl std::str::FromStr for CompressionAlgorithm {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s).ok_or_else(|| CompressionError::UnsupportedAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::{GzDecoder, ZlibDecoder};
    use std::io::{self, Read};

    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(format!("{}", CompressionAlgorithm::Gzip), "gzip");
        assert_eq!(format!("{}", CompressionAlgorithm::Deflate), "deflate");
    }

    #[test]
    fn test_from_token() {
        assert_eq!(
            CompressionAlgorithm::from_token("gzip"),
            Some(CompressionAlgorithm::Gzip)
        );
        assert_eq!(
            CompressionAlgorithm::from_token("Deflate"),
            Some(CompressionAlgorithm::Deflate)
        );
        assert_eq!(CompressionAlgorithm::from_token("x-gzip"), None);
        assert_eq!(CompressionAlgorithm::from_token("br"), None);
        assert_eq!(CompressionAlgorithm::from_token("*"), None);
        assert_eq!(CompressionAlgorithm::from_token("identity"), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "zstd".parse::<CompressionAlgorithm>().unwrap_err();
        assert!(matches!(err, CompressionError::UnsupportedAlgorithm(ref s) if s == "zstd"));
        assert_eq!(
            "gzip".parse::<CompressionAlgorithm>().unwrap(),
            CompressionAlgorithm::Gzip
        );
    }

    #[test]
    fn test_select_from_accept_encoding() {
        assert_eq!(
            CompressionAlgorithm::select_from_accept_encoding("gzip, deflate"),
            Some(CompressionAlgorithm::Gzip)
        );

        // First listed wins on a tie
        assert_eq!(
            CompressionAlgorithm::select_from_accept_encoding("deflate, gzip"),
            Some(CompressionAlgorithm::Deflate)
        );

        // Quality outranks position
        assert_eq!(
            CompressionAlgorithm::select_from_accept_encoding("gzip;q=0.5, deflate"),
            Some(CompressionAlgorithm::Deflate)
        );

        // Unsupported tokens are skipped rather than ending negotiation
        assert_eq!(
            CompressionAlgorithm::select_from_accept_encoding("br, zstd;q=0.9, gzip;q=0.1"),
            Some(CompressionAlgorithm::Gzip)
        );

        assert_eq!(CompressionAlgorithm::select_from_accept_encoding("br"), None);
        assert_eq!(CompressionAlgorithm::select_from_accept_encoding(""), None);
        assert_eq!(CompressionAlgorithm::select_from_accept_encoding("*"), None);
    }

    #[test]
    fn test_zero_quality_is_never_selected() {
        assert_eq!(
            CompressionAlgorithm::select_from_accept_encoding("gzip;q=0"),
            None
        );
        assert_eq!(
            CompressionAlgorithm::select_from_accept_encoding("gzip;q=0, deflate;q=0.2"),
            Some(CompressionAlgorithm::Deflate)
        );
    }

    #[test]
    fn test_negotiate_respects_enabled_set() {
        let accept = AcceptEncoding::parse("gzip, deflate");
        assert_eq!(
            CompressionAlgorithm::negotiate(&accept, &[CompressionAlgorithm::Deflate]),
            Some(CompressionAlgorithm::Deflate)
        );
        assert_eq!(CompressionAlgorithm::negotiate(&accept, &[]), None);
    }

    #[test]
    fn test_gzip_compression() {
        let data = b"Hello, World! This is a test string for compression.";
        let compressed = CompressionAlgorithm::Gzip.compress(data).unwrap();

        assert_ne!(compressed, data.to_vec());
        // gzip magic
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

        let mut decoder = GzDecoder::new(&compressed[..]);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).unwrap();
        assert_eq!(decompressed, data.to_vec());
    }

    #[test]
    fn test_deflate_compression() {
        let data = b"Hello, World! This is a test string for compression.";
        let compressed = CompressionAlgorithm::Deflate.compress(data).unwrap();

        assert_ne!(compressed, data.to_vec());

        let mut decoder = ZlibDecoder::new(&compressed[..]);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).unwrap();
        assert_eq!(decompressed, data.to_vec());
    }

    #[test]
    fn test_compress_into_failing_sink() {
        for algo in CompressionAlgorithm::ALL {
            let err = algo.compress_into(b"payload", BrokenPipe).unwrap_err();
            match err {
                CompressionError::CompressionFailed(msg) => {
                    assert!(msg.starts_with(algo.encoding_name()));
                    assert!(msg.contains("sink closed"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
