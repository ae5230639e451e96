//! Error types for vocabulary construction, sampling, and generation.

use std::error::Error;
use std::fmt;

/// Errors from building or querying a [`Vocab`](crate::Vocab).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    /// The corpus contained zero tokens, so no vocabulary can be built.
    EmptyCorpus,
    /// A decode index outside `[0, vocab_size)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Size of the vocabulary it was checked against.
        vocab_size: usize,
    },
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "cannot build a vocabulary from an empty corpus"),
            Self::IndexOutOfRange { index, vocab_size } => {
                write!(f, "token index {index} out of range for vocabulary of size {vocab_size}")
            }
        }
    }
}

impl Error for VocabError {}

/// Errors from the temperature sampler's caller contract.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// Temperature must be strictly positive and finite.
    InvalidTemperature(f32),
    /// Distribution length does not match the vocabulary size.
    DimensionMismatch {
        /// Expected length (the vocabulary size).
        expected: usize,
        /// Length of the distribution actually supplied.
        actual: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemperature(t) => {
                write!(f, "invalid temperature {t} (must be > 0)")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "distribution has length {actual}, expected vocabulary size {expected}")
            }
        }
    }
}

impl Error for SampleError {}

/// Composite error for the generation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Vocabulary lookup failed.
    Vocab(VocabError),
    /// Sampling failed.
    Sample(SampleError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vocab(e) => write!(f, "vocabulary error: {e}"),
            Self::Sample(e) => write!(f, "sampling error: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vocab(e) => Some(e),
            Self::Sample(e) => Some(e),
        }
    }
}

impl From<VocabError> for PipelineError {
    fn from(e: VocabError) -> Self {
        Self::Vocab(e)
    }
}

impl From<SampleError> for PipelineError {
    fn from(e: SampleError) -> Self {
        Self::Sample(e)
    }
}
