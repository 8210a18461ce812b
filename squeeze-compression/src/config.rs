//! Configuration for compression middleware

use crate::CompressionAlgorithm;

/// Configuration for the compression middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionConfig {
    /// Algorithms this middleware may negotiate (default: gzip and deflate)
    pub algorithms: Vec<CompressionAlgorithm>,

    /// Append `Vary: Accept-Encoding` to compressed responses
    pub vary: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            algorithms: CompressionAlgorithm::ALL.to_vec(),
            vary: false,
        }
    }
}

impl CompressionConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for configuration
    pub fn builder() -> CompressionConfigBuilder {
        CompressionConfigBuilder::new()
    }

    /// Check if an algorithm may be negotiated
    pub fn is_enabled(&self, algorithm: CompressionAlgorithm) -> bool {
        self.algorithms.contains(&algorithm)
    }
}

/// Builder for CompressionConfig
#[derive(Debug, Clone, Default)]
pub struct CompressionConfigBuilder {
    config: CompressionConfig,
}

impl CompressionConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: CompressionConfig::default(),
        }
    }

    /// Replace the set of negotiable algorithms
    pub fn algorithms(mut self, algorithms: impl IntoIterator<Item = CompressionAlgorithm>) -> Self {
        self.config.algorithms.clear();
        for algorithm in algorithms {
            if !self.config.algorithms.contains(&algorithm) {
                self.config.algorithms.push(algorithm);
            }
        }
        self
    }

    /// Only negotiate gzip
    pub fn gzip(self) -> Self {
        self.algorithms([CompressionAlgorithm::Gzip])
    }

    /// Only negotiate deflate
    pub fn deflate(self) -> Self {
        self.algorithms([CompressionAlgorithm::Deflate])
    }

    /// Set whether compressed responses carry `Vary: Accept-Encoding`
    pub fn vary(mut self, vary: bool) -> Self {
        self.config.vary = vary;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CompressionConfig {
        self.config
    }
}
