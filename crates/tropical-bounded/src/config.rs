//! Query and sampling configuration.

use std::time::Duration;

use crate::error::{BoundednessError, Result};

/// Configuration for searches that depend on a converged semi-decision.
///
/// ```
/// use std::time::Duration;
/// use tropical_bounded::SearchConfig;
///
/// let config = SearchConfig::default().timeout(Duration::from_millis(250));
/// assert_eq!(config.get_timeout(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    timeout: Duration,
}

impl SearchConfig {
    /// Timeout used when none is given.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a configuration with the given timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Create a configuration from a timeout in seconds.
    pub fn from_secs_f64(seconds: f64) -> Result<Self> {
        Duration::try_from_secs_f64(seconds)
            .map(Self::new)
            .map_err(|_| BoundednessError::InvalidTimeout(seconds))
    }

    /// Set the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured timeout.
    #[inline]
    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

/// Distribution of randomly sampled tropical matrices.
///
/// Each entry is independently 0 with probability `zero_chance`,
/// infinite with probability `inf_chance`, and otherwise uniform in
/// `1..=cap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    dimension: usize,
    cap: u32,
    zero_chance: f64,
    inf_chance: f64,
}

impl SamplingConfig {
    /// Create a configuration for `dimension`×`dimension` matrices with the
    /// default distribution (cap 1, a third zeros, a third infinities).
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cap: 1,
            zero_chance: 0.333,
            inf_chance: 0.333,
        }
    }

    /// Set the largest finite value.
    pub fn cap(mut self, cap: u32) -> Self {
        self.cap = cap;
        self
    }

    /// Set the probability of an exact zero.
    pub fn zero_chance(mut self, p: f64) -> Self {
        self.zero_chance = p;
        self
    }

    /// Set the probability of infinity.
    pub fn inf_chance(mut self, p: f64) -> Self {
        self.inf_chance = p;
        self
    }

    #[inline]
    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn get_cap(&self) -> u32 {
        self.cap
    }

    #[inline]
    pub fn get_zero_chance(&self) -> f64 {
        self.zero_chance
    }

    #[inline]
    pub fn get_inf_chance(&self) -> f64 {
        self.inf_chance
    }

    /// Check the dimension, cap and probabilities.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(BoundednessError::EmptyMatrix);
        }
        if self.cap == 0 {
            return Err(BoundednessError::InvalidCap);
        }
        check_probability("zero_chance", self.zero_chance)?;
        check_probability("inf_chance", self.inf_chance)?;
        if self.zero_chance + self.inf_chance > 1.0 {
            return Err(BoundednessError::InvalidProbability(format!(
                "zero_chance + inf_chance = {} exceeds 1",
                self.zero_chance + self.inf_chance
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_probability(name: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(BoundednessError::InvalidProbability(format!(
            "{} = {} is not in [0, 1]",
            name, p
        )))
    }
}
