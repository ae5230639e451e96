use std::fs;

use crate::vocab::Vocab;

/// Training corpus: an ordered list of text lines loaded from disk.
pub struct Dataset {
    pub training_data: Vec<String>,
}

impl Dataset {
    /// Load a corpus from a JSON array of strings.
    pub fn new(training_data_path: String) -> Self {
        let training_data = get_data_from_json(&training_data_path);

        Dataset { training_data }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Dataset { training_data: lines }
    }

    /// Every corpus word in order, for vocabulary construction.
    pub fn corpus_tokens(&self) -> Vec<String> {
        self.training_data
            .iter()
            .flat_map(|line| Vocab::tokenize(line))
            .collect()
    }

    /// Encode the whole corpus as one continuous token-index stream.
    ///
    /// Lines are flattened back to back with no break token injected, so a
    /// training window built over this stream may span what were originally
    /// two separate lines. Resetting at line boundaries is exactly the defect
    /// this loader avoids.
    pub fn token_stream(&self, vocab: &Vocab) -> Vec<usize> {
        self.training_data
            .iter()
            .flat_map(|line| vocab.encode_sequence(line))
            .collect()
    }
}

fn get_data_from_json(path: &str) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(data_json) => match serde_json::from_str::<Vec<String>>(&data_json) {
            Ok(data) => data,
            Err(e) => {
                log::error!("failed to parse JSON corpus ({}): {}", path, e);
                Vec::new()
            }
        },
        Err(e) => {
            log::error!("failed to read corpus file ({}): {}", path, e);
            Vec::new()
        }
    }
}
