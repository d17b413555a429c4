//! Random and exhaustive instance generation.
//!
//! Sampling takes any [`rand::Rng`], so experiments are reproducible with
//! a seeded generator such as `rand_chacha::ChaCha8Rng`.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::config::{check_probability, SamplingConfig};
use crate::error::{BoundednessError, Result};
use crate::types::{TropicalAndOr, TropicalMinPlus, Weight};
use crate::{Mat, TropicalMatrix};

/// Largest number of matrices [`all_matrices`] will materialise.
pub const ENUMERATION_LIMIT: u128 = 1 << 24;

impl Mat<TropicalMinPlus> {
    /// Sample a matrix entry by entry from `config`'s distribution.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use tropical_bounded::{SamplingConfig, TropicalMatrix};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let m = TropicalMatrix::random(&SamplingConfig::new(3).cap(4), &mut rng).unwrap();
    /// assert_eq!(m.size(), 3);
    /// assert!(m.max_value() <= 4);
    /// ```
    pub fn random<R: Rng + ?Sized>(config: &SamplingConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        Ok(Self::random_unchecked(config, rng))
    }

    fn random_unchecked<R: Rng + ?Sized>(config: &SamplingConfig, rng: &mut R) -> Self {
        let zero = config.get_zero_chance();
        let inf = config.get_inf_chance();
        let cap = config.get_cap();
        Self::from_fn(config.get_dimension(), |_, _| {
            // r is in (0, 1], so a zero probability never fires
            let r = 1.0 - rng.gen::<f64>();
            let weight = if r <= zero {
                Weight::ZERO
            } else if r <= zero + inf {
                Weight::Infinite
            } else {
                Weight::Finite(rng.gen_range(1..=cap))
            };
            TropicalMinPlus(weight)
        })
    }
}

impl Mat<TropicalAndOr> {
    /// Sample an `n`×`n` boolean matrix whose entries are 1 with
    /// probability `one_chance`.
    pub fn random<R: Rng + ?Sized>(n: usize, one_chance: f64, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(BoundednessError::EmptyMatrix);
        }
        check_probability("one_chance", one_chance)?;
        Ok(Self::from_fn(n, |_, _| TropicalAndOr(rng.gen_bool(one_chance))))
    }
}

/// Number of distinct matrices `config` can produce, saturating at
/// `u128::MAX`.
fn sample_space(config: &SamplingConfig) -> u128 {
    let zero = config.get_zero_chance();
    let inf = config.get_inf_chance();
    let mut values = 0u128;
    if zero > 0.0 {
        values += 1;
    }
    if inf > 0.0 {
        values += 1;
    }
    if zero + inf < 1.0 {
        values += u128::from(config.get_cap());
    }
    let entries = config.get_dimension().saturating_mul(config.get_dimension());
    u32::try_from(entries)
        .ok()
        .and_then(|e| values.checked_pow(e))
        .unwrap_or(u128::MAX)
}

/// Sample `count` pairwise distinct matrices.
///
/// Fails with [`BoundednessError::TooManyDistinct`] when the distribution
/// cannot produce `count` distinct matrices.
pub fn random_generators<R: Rng + ?Sized>(
    count: usize,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<Vec<TropicalMatrix>> {
    config.validate()?;
    let available = sample_space(config);
    if count as u128 > available {
        return Err(BoundednessError::TooManyDistinct {
            requested: count,
            available,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut generators = Vec::with_capacity(count);
    let mut draws = 0usize;
    while generators.len() < count {
        let m = TropicalMatrix::random_unchecked(config, rng);
        draws += 1;
        if seen.insert(m.clone()) {
            generators.push(m);
        }
    }
    debug!(count, draws, dimension = config.get_dimension(), "sampled generators");
    Ok(generators)
}

/// Every `dimension`×`dimension` matrix over `{0, …, max_value, ∞}`.
///
/// Matrix `i` reads `i` as base-`max_value + 2` digits, least significant
/// first, one digit per row-major entry: the first entry varies fastest and
/// digit `max_value + 1` stands for ∞.
pub fn all_matrices(dimension: usize, max_value: u32) -> Result<Vec<TropicalMatrix>> {
    if dimension == 0 {
        return Err(BoundednessError::EmptyMatrix);
    }
    let too_large = BoundednessError::EnumerationTooLarge {
        dimension,
        max_value,
    };
    let values = u128::from(max_value) + 2;
    let entries = dimension * dimension;
    let total = u32::try_from(entries)
        .ok()
        .and_then(|e| values.checked_pow(e))
        .filter(|&t| t <= ENUMERATION_LIMIT);
    let Some(total) = total else {
        return Err(too_large);
    };

    let alphabet: Vec<Weight> = (0..=max_value)
        .map(Weight::Finite)
        .chain(std::iter::once(Weight::Infinite))
        .collect();
    let mut digits = vec![0usize; entries];
    let mut all = Vec::with_capacity(total as usize);
    for _ in 0..total {
        all.push(TropicalMatrix::from_fn(dimension, |i, j| {
            TropicalMinPlus(alphabet[digits[i * dimension + j]])
        }));
        for digit in digits.iter_mut() {
            *digit += 1;
            if *digit < alphabet.len() {
                break;
            }
            *digit = 0;
        }
    }
    Ok(all)
}
