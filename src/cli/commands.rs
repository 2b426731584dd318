//! Command implementations for the Xyston CLI.

use std::fs;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, XystonError};
use crate::index::{ForwardIndex, InvertedIndex, load_partitions};
use crate::query::{SearchMode, Searcher, parse_queries, query_words};

/// Execute a CLI command.
pub fn execute_command(args: XystonArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Preview(preview_args) => run_preview(preview_args.clone(), &args),
        Command::Stopwords(stopwords_args) => run_stopwords(stopwords_args.clone(), &args),
    }
}

/// Load the indexes, parse the raw tokens, and evaluate each expression.
fn run_search(cmd: SearchArgs, args: &XystonArgs) -> Result<()> {
    let config = PresentationConfig {
        snippet_radius: cmd.snippet_radius,
        color: !args.no_color,
        ..Default::default()
    };

    if args.verbosity() > 0 {
        println!("Loading the inverted index from {}...", cmd.index_dir.display());
    }
    let records = load_partitions(&cmd.index_dir)?;
    let inverted = InvertedIndex::build(&records)?;
    let forward = ForwardIndex::build(&records)?;

    if cmd.preview {
        println!("Inverted index ({} terms):", inverted.len());
        print_index_preview(
            inverted.terms(),
            |term| format!("{:?}", inverted.postings(term).unwrap_or_default()),
            &config,
        );
        println!("Forward index ({} files):", forward.len());
        print_index_preview(
            forward.files(),
            |file| {
                forward
                    .file_entry(file)
                    .map(|entry| format!("{entry:?}"))
                    .unwrap_or_default()
            },
            &config,
        );
    }

    let expressions = parse_queries(&cmd.query);
    if args.verbosity() > 1 {
        println!("Given tokens: {:?}", cmd.query);
        println!("Parsed into search queries: {expressions:?}");
        println!();
    }

    let searcher = Searcher::new(&inverted);
    for expression in &expressions {
        let mode = SearchMode::detect(expression);
        let words = query_words(expression, mode);
        let result = searcher.search(&words, mode);

        let report = QueryReport::new(expression, mode.as_str(), &words, &result);
        print_query_report(&report, args, &config, cmd.input_dir.as_deref())?;
    }
    Ok(())
}

/// Preview both indexes without running a query.
fn run_preview(cmd: PreviewArgs, args: &XystonArgs) -> Result<()> {
    let config = PresentationConfig {
        preview_entries: cmd.entries,
        preview_width: cmd.width,
        color: !args.no_color,
        ..Default::default()
    };

    let records = load_partitions(&cmd.index_dir)?;
    let inverted = InvertedIndex::build(&records)?;
    let forward = ForwardIndex::build(&records)?;

    println!("Inverted index ({} terms):", inverted.len());
    print_index_preview(
        inverted.terms(),
        |term| format!("{:?}", inverted.postings(term).unwrap_or_default()),
        &config,
    );
    println!("Forward index ({} files):", forward.len());
    print_index_preview(
        forward.files(),
        |file| {
            forward
                .file_entry(file)
                .map(|entry| format!("{entry:?}"))
                .unwrap_or_default()
        },
        &config,
    );
    Ok(())
}

/// Print every term whose count exceeds mean + sigma standard deviations.
fn run_stopwords(cmd: StopwordsArgs, args: &XystonArgs) -> Result<()> {
    let contents = fs::read_to_string(&cmd.freq_file)?;

    let mut terms: Vec<&str> = Vec::new();
    let mut counts: Vec<f64> = Vec::new();
    for line in contents.lines() {
        let (term, count) = line.split_once('\t').ok_or_else(|| {
            XystonError::index(format!("frequency line has no tab separator: {line:?}"))
        })?;
        let count: f64 = count.trim().parse().map_err(|_| {
            XystonError::index(format!("frequency count is not a number: {line:?}"))
        })?;
        terms.push(term);
        counts.push(count);
    }
    if counts.is_empty() {
        return Ok(());
    }

    let threshold = stopword_threshold(&counts, cmd.sigma);
    if args.verbosity() > 1 {
        println!("Threshold: counts above {threshold:.2}");
    }
    for (term, count) in terms.iter().zip(&counts) {
        if *count > threshold {
            println!("{term}");
        }
    }
    Ok(())
}

/// `mean + sigma * stddev` over the counts (population standard deviation).
fn stopword_threshold(counts: &[f64], sigma: f64) -> f64 {
    let mean = counts.iter().sum::<f64>() / counts.len() as f64;
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / counts.len() as f64;
    mean + sigma * variance.sqrt()
}
