use ndarray::{Array1, Array2};

use crate::vocab::PAD_TOKEN_ID;
use crate::windower::TrainingPair;

/// Boundary to the model subsystem.
///
/// A scorer maps a fixed-length context window of token indices to a
/// probability distribution over the vocabulary. The pipeline never
/// constructs one; any concrete model is injected through this trait, so the
/// windowing and sampling logic stays independent of the architecture behind
/// it. The call is assumed potentially expensive (a forward pass) and blocks
/// until the distribution is ready.
pub trait Scorer {
    /// Probability distribution over the vocabulary for the next token.
    ///
    /// The returned vector is indexed identically to the vocabulary and is
    /// expected to have `vocab_size` entries; the sampler validates the
    /// length rather than trusting it.
    fn score(&self, context_window: &[usize]) -> Array1<f32>;
}

/// Count-based next-token scorer conditioned on the last context token.
///
/// Exists so the demo binary and the integration tests can drive the full
/// pipeline without a neural network. It is deliberately crude: a single
/// count matrix, no smoothing beyond a uniform fallback for unseen contexts.
pub struct BigramScorer {
    counts: Array2<f32>,
}

impl BigramScorer {
    /// Accumulate next-token counts from training pairs.
    ///
    /// Only the last prefix token conditions the count; longer context is the
    /// job of a real model on the other side of the [`Scorer`] boundary.
    pub fn fit(pairs: &[TrainingPair], vocab_size: usize) -> Self {
        let mut counts = Array2::<f32>::zeros((vocab_size, vocab_size));

        for pair in pairs {
            if let Some(&last) = pair.prefix.last()
                && last < vocab_size
                && pair.next < vocab_size
            {
                counts[[last, pair.next]] += 1.0;
            }
        }

        Self { counts }
    }
}

impl Scorer for BigramScorer {
    fn score(&self, context_window: &[usize]) -> Array1<f32> {
        let vocab_size = self.counts.nrows();
        let last = context_window.last().copied().unwrap_or(PAD_TOKEN_ID);

        if last < vocab_size {
            let row = self.counts.row(last).to_owned();
            let total: f32 = row.sum();
            if total > 0.0 {
                return row / total;
            }
        }

        // Unseen context: uniform over the vocabulary.
        Array1::from_elem(vocab_size, 1.0 / vocab_size.max(1) as f32)
    }
}
