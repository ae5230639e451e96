//! # wordlm - word-level next-token data preparation and sampling
//!
//! Training-data preparation and text-generation pipeline for a small
//! word-level sequence model. The model itself (architecture, loss,
//! optimizer) lives on the other side of the [`Scorer`] boundary and is not
//! part of this crate; everything here is the plumbing that feeds it and the
//! sampling that consumes its output.
//!
//! ## Design goals
//!
//! 1. **Cross-line context**: training windows grow over the entire flattened
//!    corpus stream, never resetting at line boundaries, so a prefix can span
//!    two original lines.
//! 2. **No degenerate decoding**: generation draws from a temperature-reshaped
//!    distribution. The sampler's contract forbids a silent arg-max fallback,
//!    which is what previously collapsed output onto the single most frequent
//!    word. Greedy decoding exists, but only as an explicit separate call.
//! 3. **Explicit state**: the vocabulary is an immutable value built once and
//!    passed to whoever needs it. No globals, no ambient lookup, no index
//!    drift between runs.
//!
//! ## Module organization
//!
//! ### Core pipeline
//! - `vocab`: word/index bijection, tokenization, vocabulary persistence
//! - `windower`: growing-prefix training pairs and fixed-width window shaping
//! - `sampler`: temperature sampling (plus explicit greedy decoding)
//! - `generator`: the sliding-window generation loop and text entry point
//!
//! ### Boundaries and tooling
//! - `scorer`: the `Scorer` trait (model boundary) and a count-based demo scorer
//! - `dataset_loader`: JSON corpus loading and corpus-to-stream flattening
//! - `error`: the error taxonomy
//! - `performance_monitor`: phase timing for the demo binary

// ============================================================================
// Module declarations
// ============================================================================

pub mod dataset_loader; // Corpus loading: JSON lines in, continuous token stream out
pub mod error; // Error taxonomy: vocabulary, sampling, pipeline
pub mod generator; // Generation loop: score -> sample -> slide
pub mod performance_monitor; // Phase timing for the demo binary
pub mod sampler; // Temperature sampling and explicit greedy decoding
pub mod scorer; // Scorer boundary trait + bigram demo scorer
pub mod vocab; // Vocabulary: word <-> index mapping and tokenization
pub mod windower; // Sequence windower: growing-prefix training pairs

// ============================================================================
// Re-exports of the core types
// ============================================================================

pub use dataset_loader::Dataset;
pub use error::{PipelineError, SampleError, VocabError};
pub use generator::Generator;
pub use performance_monitor::PerformanceMonitor;
pub use sampler::TemperatureSampler;
pub use scorer::{BigramScorer, Scorer};
pub use vocab::{PAD_TOKEN, PAD_TOKEN_ID, Vocab};
pub use windower::{TrainingPair, make_training_pairs, pad_context};

// ============================================================================
// Pipeline constants
// ============================================================================

/// **Default maximum context length**
///
/// Upper bound on the token window the pipeline maintains during generation.
/// The window actually fed to the scorer is one token narrower
/// (`MAX_CONTEXT_LEN - 1`), leaving the slot the predicted token will fill.
///
/// **Why 128?**
/// - A word-level vocabulary makes each token carry a lot of context; 128
///   words comfortably covers a paragraph of seed text
/// - Scorer cost typically grows at least linearly in window length, so the
///   default stays modest
///
/// Callers with different scorers pass their own length to
/// [`Generator::new`]; this is only the default the demo binary uses.
pub const MAX_CONTEXT_LEN: usize = 128;

/// **Probability floor for temperature reshaping**
///
/// Each incoming probability is clamped to this value before its logarithm is
/// taken. An exact zero would become a `-inf` logit and poison the softmax
/// that follows.
///
/// **Why 1e-7?**
/// - Small enough that floored entries stay negligible at any temperature a
///   caller would reasonably use
/// - Large enough that `ln` of it stays well inside `f32` range after
///   division by small temperatures
pub const PROB_FLOOR: f32 = 1e-7;

/// **Softmax normalization guard**
///
/// Divisor floor when renormalizing the reshaped weights, avoiding a division
/// by zero if every weight underflows. Smaller than [`PROB_FLOOR`] because
/// softmax outputs can legitimately get much closer to zero than its inputs.
pub const SOFTMAX_EPSILON: f32 = 1e-12;
