use wordlm::{Dataset, Vocab};

#[test]
fn test_dataset_new_json() {
    let path = std::env::temp_dir().join("wordlm_corpus_test.json");
    std::fs::write(
        &path,
        r#"["to be or not to be", "that is the question"]"#,
    )
    .unwrap();

    let dataset = Dataset::new(path.to_str().unwrap().to_string());
    assert_eq!(dataset.training_data.len(), 2);
    assert_eq!(dataset.training_data[0], "to be or not to be");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_dataset_missing_file_yields_empty() {
    let dataset = Dataset::new(String::from("data/does_not_exist.json"));
    assert!(dataset.training_data.is_empty());
}

#[test]
fn test_dataset_malformed_json_yields_empty() {
    let path = std::env::temp_dir().join("wordlm_corpus_bad_test.json");
    std::fs::write(&path, "{ not json ]").unwrap();

    let dataset = Dataset::new(path.to_str().unwrap().to_string());
    assert!(dataset.training_data.is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_token_stream_is_continuous_across_lines() {
    let dataset = Dataset::from_lines(vec![
        String::from("the sun rises"),
        String::from("the sun sets"),
    ]);

    let vocab = Vocab::build(&dataset.corpus_tokens()).unwrap();
    let stream = dataset.token_stream(&vocab);

    // Six tokens in one stream, no break markers between lines.
    assert_eq!(stream.len(), 6);
    assert_eq!(
        vocab.decode_sequence(&stream).unwrap(),
        vec!["the", "sun", "rises", "the", "sun", "sets"]
    );
}

#[test]
fn test_corpus_tokens_feed_vocab_build() {
    let dataset = Dataset::from_lines(vec![String::from("To be, or not to be!")]);
    let tokens = dataset.corpus_tokens();
    assert_eq!(tokens, vec!["to", "be", "or", "not", "to", "be"]);

    let vocab = Vocab::build(&tokens).unwrap();
    assert_eq!(vocab.len(), 5); // 4 distinct words + padding
}
