use rand::SeedableRng;
use rand::rngs::StdRng;

use wordlm::{
    BigramScorer, Dataset, Generator, MAX_CONTEXT_LEN, PerformanceMonitor, Vocab,
    make_training_pairs,
};

// CLI parsing helpers
fn arg_has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_usize_arg(args: &[String], key: &str) -> Option<usize> {
    let prefix = format!("{}=", key);
    for a in args {
        if a.starts_with(&prefix) {
            if let Ok(v) = a[prefix.len()..].parse::<usize>() {
                return Some(v);
            }
        }
    }
    None
}

fn parse_f32_arg(args: &[String], key: &str) -> Option<f32> {
    let prefix = format!("{}=", key);
    for a in args {
        if a.starts_with(&prefix) {
            if let Ok(v) = a[prefix.len()..].parse::<f32>() {
                return Some(v);
            }
        }
    }
    None
}

fn parse_string_arg(args: &[String], key: &str) -> Option<String> {
    let prefix = format!("{}=", key);
    args.iter()
        .find(|a| a.starts_with(&prefix))
        .map(|a| a[prefix.len()..].to_string())
}

fn main() {
    if let Err(e) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
    {
        eprintln!("failed to initialize logging: {}", e);
    }

    let args: Vec<String> = std::env::args().collect();

    let corpus_path =
        parse_string_arg(&args, "--corpus").unwrap_or_else(|| String::from("data/corpus.json"));
    let prompt = parse_string_arg(&args, "--prompt").unwrap_or_else(|| String::from("to be"));
    let min_context = parse_usize_arg(&args, "--min-context").unwrap_or(1);
    let max_context = parse_usize_arg(&args, "--max-context").unwrap_or(MAX_CONTEXT_LEN);
    let steps = parse_usize_arg(&args, "--steps").unwrap_or(20);
    let temperature = parse_f32_arg(&args, "--temperature").unwrap_or(0.8);
    let rng_seed = parse_usize_arg(&args, "--seed").unwrap_or(42) as u64;

    let mut perf_monitor = PerformanceMonitor::new();

    perf_monitor.start("load corpus");
    let dataset = Dataset::new(corpus_path);
    perf_monitor.stop("load corpus");
    println!("corpus: {} lines", dataset.training_data.len());

    perf_monitor.start("build vocabulary");
    let corpus_tokens = dataset.corpus_tokens();
    let vocab = match Vocab::build(&corpus_tokens) {
        Ok(vocab) => vocab,
        Err(e) => {
            log::error!("vocabulary construction failed: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    perf_monitor.stop("build vocabulary");
    println!("vocabulary: {} entries (padding included)", vocab.len());

    perf_monitor.start("window training pairs");
    let token_stream = dataset.token_stream(&vocab);
    let pairs = make_training_pairs(&token_stream, min_context);
    perf_monitor.stop("window training pairs");
    println!(
        "token stream: {} tokens -> {} training pairs (min context {})",
        token_stream.len(),
        pairs.len(),
        min_context
    );

    // Training pairs are consumed by an external trainer; --dump-pairs writes
    // them out for it.
    if let Some(path) = parse_string_arg(&args, "--dump-pairs") {
        match serde_json::to_string(&pairs) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::error!("failed to write training pairs ({}): {}", path, e);
                } else {
                    println!("training pairs written to {path}");
                }
            }
            Err(e) => log::error!("failed to serialize training pairs: {e}"),
        }
    }

    if let Some(path) = parse_string_arg(&args, "--save-vocab") {
        if let Err(e) = vocab.save_binary(&path) {
            log::error!("failed to save vocabulary ({}): {}", path, e);
        } else {
            println!("vocabulary written to {path}");
        }
    }

    perf_monitor.start("fit bigram scorer");
    let scorer = BigramScorer::fit(&pairs, vocab.len());
    perf_monitor.stop("fit bigram scorer");

    let generator = Generator::new(vocab, scorer, max_context);
    let mut rng = StdRng::seed_from_u64(rng_seed);

    perf_monitor.start("generate");
    match generator.generate(&prompt, steps, temperature, &mut rng) {
        Ok(text) => {
            perf_monitor.stop("generate");
            println!("\nseed:      {prompt}");
            println!("generated: {text}");
        }
        Err(e) => {
            log::error!("generation failed: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    if arg_has_flag(&args, "--report") {
        perf_monitor.print_report();
    }
}
