//! Extraction options and configuration.
//!
//! This module provides the [`ExtractOptions`] struct for configuring
//! dominant-color extraction.

use crate::error::{EngineError, Result};

/// Largest accepted cluster count.
pub const MAX_CLUSTERS: usize = 64;

/// Configuration options for dominant-color extraction.
///
/// # Defaults
///
/// - k: 6 clusters
/// - Sample cap: 400 000 pixels fed to clustering
/// - Max side: 1024 px before area downscaling
/// - Seed: 42
/// - Termination: 40 iterations or a center shift of at most 0.2
/// - Attempts: 3 independent runs, lowest compactness wins
///
/// # Example
///
/// ```
/// use hue_engine::ExtractOptions;
///
/// let options = ExtractOptions::new().k(8).seed(7).max_side(512);
/// assert_eq!(options.k, 8);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Number of clusters (1..=64).
    pub k: usize,

    /// Maximum number of pixels used for clustering. Weighting always uses
    /// the whole (downscaled) frame.
    pub sample_cap: usize,

    /// Longest side allowed before the image is area-downscaled.
    pub max_side: usize,

    /// Seed for subsampling and center initialization.
    pub seed: u64,

    /// Iteration bound for a single k-means run.
    pub max_iterations: usize,

    /// Stop a run once no center moves farther than this (RGB units).
    pub epsilon: f64,

    /// Independent k-means runs.
    pub attempts: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            k: 6,
            sample_cap: 400_000,
            max_side: 1024,
            seed: 42,
            max_iterations: 40,
            epsilon: 0.2,
            attempts: 3,
        }
    }
}

impl ExtractOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster count.
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the clustering sample cap.
    #[inline]
    pub fn sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    /// Set the longest side before downscaling.
    #[inline]
    pub fn max_side(mut self, side: usize) -> Self {
        self.max_side = side;
        self
    }

    /// Set the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-run iteration bound.
    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the convergence threshold.
    #[inline]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the number of independent runs.
    #[inline]
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        fn invalid(name: &'static str, reason: String) -> Result<()> {
            Err(EngineError::InvalidParameter { name, reason })
        }

        if !(1..=MAX_CLUSTERS).contains(&self.k) {
            return invalid("k", format!("{} is outside 1..={MAX_CLUSTERS}", self.k));
        }
        if self.sample_cap == 0 {
            return invalid("sample_cap", "must be at least 1".into());
        }
        if self.max_side == 0 {
            return invalid("max_side", "must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations", "must be at least 1".into());
        }
        if self.attempts == 0 {
            return invalid("attempts", "must be at least 1".into());
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return invalid("epsilon", format!("{} is not a finite value >= 0", self.epsilon));
        }
        Ok(())
    }
}
