use std::cmp::Ordering;

use ndarray::Array1;
use rand::Rng;

use crate::error::SampleError;
use crate::{PROB_FLOOR, SOFTMAX_EPSILON};

/// Stochastic next-token selection from a predicted probability distribution.
///
/// Plain arg-max decoding is deterministic and collapses to the mode of the
/// distribution under any amount of training skew: the classic
/// always-predict-the-most-frequent-word failure. The sampler instead
/// reshapes the distribution by temperature and draws from it, and its
/// contract forbids any silent deterministic fallback. Callers who want
/// greedy decoding must ask for it explicitly via [`TemperatureSampler::greedy`].
pub struct TemperatureSampler {
    vocab_size: usize,
}

impl TemperatureSampler {
    /// A sampler validating distributions against `vocab_size`.
    pub fn new(vocab_size: usize) -> Self {
        Self { vocab_size }
    }

    /// Draw one vocabulary index from `distribution` reshaped by `temperature`.
    ///
    /// The reshape re-derives logits from the probabilities: each weight is
    /// clamped to [`PROB_FLOOR`] (exact zeros would become `-inf` logits),
    /// logged, divided by the temperature, and pushed back through a
    /// numerically stable softmax. A single multinomial trial against the
    /// caller's random source picks the index, so results are reproducible
    /// under a seeded RNG.
    ///
    /// Temperature below 1 sharpens the distribution toward its mode,
    /// above 1 flattens it toward uniform, and exactly 1 reproduces the
    /// original distribution up to the floor correction.
    pub fn sample<R: Rng>(
        &self,
        distribution: &Array1<f32>,
        temperature: f32,
        rng: &mut R,
    ) -> Result<usize, SampleError> {
        if !(temperature > 0.0) || !temperature.is_finite() {
            return Err(SampleError::InvalidTemperature(temperature));
        }
        self.check_dimension(distribution)?;

        let mass: f32 = distribution.sum();
        if (mass - 1.0).abs() > 0.05 {
            log::warn!("distribution mass {mass:.4} far from 1.0; renormalizing through softmax");
        }

        let logits = distribution.mapv(|p| p.max(PROB_FLOOR).ln() / temperature);

        let max_logit = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mut weights = logits.mapv(|x| (x - max_logit).exp());
        let sum: f32 = weights.sum();
        weights.mapv_inplace(|w| w / sum.max(SOFTMAX_EPSILON));

        // Single multinomial trial: walk the cumulative distribution until
        // the uniform draw falls inside a bucket.
        let draw: f32 = rng.random();
        let mut cumulative = 0.0;
        for (index, &weight) in weights.iter().enumerate() {
            cumulative += weight;
            if draw <= cumulative {
                return Ok(index);
            }
        }

        // Floating-point rounding can leave the cumulative sum a hair under
        // the drawn value; the mass belongs to the last bucket.
        Ok(self.vocab_size.saturating_sub(1))
    }

    /// Explicit deterministic arg-max decoding.
    ///
    /// Kept separate from [`TemperatureSampler::sample`] on purpose: greedy
    /// selection is never a fallback of temperature sampling.
    pub fn greedy(&self, distribution: &Array1<f32>) -> Result<usize, SampleError> {
        self.check_dimension(distribution)?;

        distribution
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(index, _)| index)
            .ok_or(SampleError::DimensionMismatch {
                expected: self.vocab_size,
                actual: 0,
            })
    }

    fn check_dimension(&self, distribution: &Array1<f32>) -> Result<(), SampleError> {
        if distribution.len() != self.vocab_size {
            return Err(SampleError::DimensionMismatch {
                expected: self.vocab_size,
                actual: distribution.len(),
            });
        }
        Ok(())
    }
}
