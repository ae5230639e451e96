use std::collections::HashMap;

use bincode::{Decode, Encode};

use crate::error::VocabError;

/// Token reserved at index 0, shared between padding and unknown words.
pub const PAD_TOKEN: &str = "<|pad|>";

/// Index of [`PAD_TOKEN`]. Encoding an out-of-vocabulary word resolves here.
pub const PAD_TOKEN_ID: usize = 0;

/// Bidirectional word/index mapping, built once from a corpus and immutable
/// for the rest of the run. Indices are assigned in first-seen order, with
/// index 0 reserved for [`PAD_TOKEN`], so the mapping is a bijection over
/// `[0, vocab_size)`.
#[derive(Clone, Encode, Decode)]
pub struct Vocab {
    pub encode: HashMap<String, usize>,
    pub decode: HashMap<usize, String>,
    pub words: Vec<String>,
}

impl Vocab {
    /// Build a vocabulary from an ordered corpus token list.
    ///
    /// Duplicate tokens keep their first-seen index. Fails with
    /// [`VocabError::EmptyCorpus`] when the corpus has zero tokens.
    pub fn build<S: AsRef<str>>(corpus_tokens: &[S]) -> Result<Self, VocabError> {
        if corpus_tokens.is_empty() {
            return Err(VocabError::EmptyCorpus);
        }

        let mut encode = HashMap::new();
        let mut decode = HashMap::new();
        let mut words = Vec::new();

        encode.insert(PAD_TOKEN.to_string(), PAD_TOKEN_ID);
        decode.insert(PAD_TOKEN_ID, PAD_TOKEN.to_string());
        words.push(PAD_TOKEN.to_string());

        for token in corpus_tokens {
            let token = token.as_ref();
            if !encode.contains_key(token) {
                let id = words.len();
                encode.insert(token.to_string(), id);
                decode.insert(id, token.to_string());
                words.push(token.to_string());
            }
        }

        Ok(Vocab { encode, decode, words })
    }

    /// Convert a word to its token index.
    ///
    /// Unknown words resolve to [`PAD_TOKEN_ID`]; this is an expected case,
    /// not an error.
    pub fn encode(&self, word: &str) -> usize {
        self.encode.get(word).copied().unwrap_or(PAD_TOKEN_ID)
    }

    /// Convert a token index back to a word.
    pub fn decode(&self, token_id: usize) -> Result<&str, VocabError> {
        self.decode
            .get(&token_id)
            .map(String::as_str)
            .ok_or(VocabError::IndexOutOfRange {
                index: token_id,
                vocab_size: self.len(),
            })
    }

    /// Number of entries, padding token included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split raw text into word tokens: whitespace-separated, lowercased,
    /// ASCII punctuation stripped.
    pub fn tokenize(text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.split_whitespace() {
            let cleaned: String = word
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .flat_map(char::to_lowercase)
                .collect();
            if !cleaned.is_empty() {
                tokens.push(cleaned);
            }
        }

        tokens
    }

    /// Tokenize text and encode every word.
    pub fn encode_sequence(&self, text: &str) -> Vec<usize> {
        Self::tokenize(text)
            .iter()
            .map(|word| self.encode(word))
            .collect()
    }

    /// Decode a token index sequence back to words.
    pub fn decode_sequence(&self, token_ids: &[usize]) -> Result<Vec<String>, VocabError> {
        token_ids
            .iter()
            .map(|&id| self.decode(id).map(str::to_string))
            .collect()
    }

    /// Persist the vocabulary as a bincode blob.
    pub fn save_binary(&self, path: &str) -> std::io::Result<()> {
        let bytes = bincode::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        std::fs::write(path, bytes)
    }

    /// Load a vocabulary previously written by [`Vocab::save_binary`].
    pub fn load_binary(path: &str) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let (vocab, _) = bincode::decode_from_slice(&bytes, bincode::config::standard())
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(vocab)
    }
}
