use serde::{Deserialize, Serialize};

use crate::vocab::PAD_TOKEN_ID;

/// One supervised example: a growing context prefix and the token that
/// follows it in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    /// Context prefix, variable length (at least `min_context` tokens).
    pub prefix: Vec<usize>,
    /// The token to predict.
    pub next: usize,
}

/// Generate growing-prefix training pairs over an entire token stream.
///
/// Pair `i` (for `i` in `min_context..len-1`) is `(stream[..i], stream[i])`,
/// so a stream of length `n` yields exactly `max(0, n - min_context - 1)`
/// pairs, each with a prefix of at least `min_context` tokens.
///
/// The stream is the *whole* corpus flattened into one sequence. Windows are
/// never reset at line or sentence boundaries, so a prefix may span what were
/// originally two separate lines. Line-scoped windowing loses exactly that
/// cross-boundary context, which starves the model of most of its training
/// signal.
///
/// A stream shorter than `min_context + 1` yields no pairs; that is not an
/// error.
///
/// `min_context` below 1 is clamped to 1: a pair with an empty prefix has
/// nothing to condition on and is meaningless as a training example.
pub fn make_training_pairs(stream: &[usize], min_context: usize) -> Vec<TrainingPair> {
    let min_context = min_context.max(1);

    (min_context..stream.len().saturating_sub(1))
        .map(|i| TrainingPair {
            prefix: stream[..i].to_vec(),
            next: stream[i],
        })
        .collect()
}

/// Shape a token sequence into a fixed-width context window.
///
/// Shorter sequences are left-padded with [`PAD_TOKEN_ID`]; longer ones keep
/// only the most recent `width` tokens.
pub fn pad_context(tokens: &[usize], width: usize) -> Vec<usize> {
    if tokens.len() >= width {
        tokens[tokens.len() - width..].to_vec()
    } else {
        let mut window = vec![PAD_TOKEN_ID; width - tokens.len()];
        window.extend_from_slice(tokens);
        window
    }
}
