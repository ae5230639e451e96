use rand::Rng;

use crate::error::PipelineError;
use crate::sampler::TemperatureSampler;
use crate::scorer::Scorer;
use crate::vocab::Vocab;
use crate::windower::pad_context;

/// Drives repeated score-and-sample rounds to extend a seed by a fixed number
/// of tokens, maintaining a sliding context window of fixed width.
///
/// The generator owns its window exclusively; nothing is shared across
/// concurrent generations except the read-only vocabulary, and the random
/// source is supplied per call so each run stays reproducible.
pub struct Generator<S: Scorer> {
    vocab: Vocab,
    scorer: S,
    sampler: TemperatureSampler,
    max_context_length: usize,
}

impl<S: Scorer> Generator<S> {
    pub fn new(vocab: Vocab, scorer: S, max_context_length: usize) -> Self {
        let sampler = TemperatureSampler::new(vocab.len());
        Self {
            vocab,
            scorer,
            sampler,
            max_context_length,
        }
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Width of the window fed to the scorer: one less than the maximum
    /// context length, the slot the predicted token would occupy.
    fn window_width(&self) -> usize {
        self.max_context_length.saturating_sub(1).max(1)
    }

    /// Extend `seed` by `steps` sampled tokens.
    ///
    /// The initial window is `seed` shaped to the fixed width (left-padded or
    /// truncated to its most recent tokens). Each step scores the window,
    /// samples one index at the given temperature, appends it to the output,
    /// and slides the window forward by one. With `steps = 0` the seed comes
    /// back unchanged.
    ///
    /// There is no early stop on any designated end token here; callers that
    /// define one can check the output after each step themselves.
    pub fn generate_tokens<R: Rng>(
        &self,
        seed: &[usize],
        steps: usize,
        temperature: f32,
        rng: &mut R,
    ) -> Result<Vec<usize>, PipelineError> {
        let width = self.window_width();
        let mut window = pad_context(seed, width);
        let mut output = seed.to_vec();

        for _ in 0..steps {
            let distribution = self.scorer.score(&window);
            let next = self.sampler.sample(&distribution, temperature, rng)?;

            output.push(next);
            window.push(next);
            if window.len() > width {
                window.remove(0);
            }
        }

        Ok(output)
    }

    /// Caller-facing entry point: seed text in, generated text out.
    ///
    /// Tokenizes and encodes the seed through the vocabulary, delegates to
    /// [`Generator::generate_tokens`], then decodes and joins with spaces.
    pub fn generate<R: Rng>(
        &self,
        seed_text: &str,
        steps: usize,
        temperature: f32,
        rng: &mut R,
    ) -> Result<String, PipelineError> {
        let seed_ids = self.vocab.encode_sequence(seed_text);
        let token_ids = self.generate_tokens(&seed_ids, steps, temperature, rng)?;
        let words = self.vocab.decode_sequence(&token_ids)?;
        Ok(words.join(" "))
    }
}
