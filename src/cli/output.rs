//! Output formatting for CLI commands.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, XystonArgs};
use crate::error::Result;
use crate::location::DocLocation;
use crate::query::SearchResult;

// ANSI escape sequences for terminal colors.
const HEADER: &str = "\x1b[95m";
const GREEN: &str = "\x1b[92m";
const BLUE: &str = "\x1b[94m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

const INDENT: &str = "    ";

/// Presentation knobs, passed explicitly into the rendering functions.
/// The evaluator and the index builders take none of these.
#[derive(Debug, Clone)]
pub struct PresentationConfig {
    /// Number of index entries shown in a preview.
    pub preview_entries: usize,
    /// Maximum characters of each previewed entry.
    pub preview_width: usize,
    /// Fields shown on each side of a matched field in a snippet.
    pub snippet_radius: usize,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        PresentationConfig {
            preview_entries: 10,
            preview_width: 75,
            snippet_radius: 4,
            color: true,
        }
    }
}

impl PresentationConfig {
    fn paint(&self, code: &'static str) -> &'static str {
        if self.color { code } else { "" }
    }
}

/// One evaluated query expression, for structured output.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryReport {
    /// The expression as grouped by the parser.
    pub expression: String,
    /// Detected boolean mode.
    pub mode: String,
    /// Lowercased query words.
    pub words: Vec<String>,
    /// False when a required term is absent from the index.
    pub satisfiable: bool,
    /// Matched locations; empty when unsatisfiable.
    pub matches: Vec<DocLocation>,
}

impl QueryReport {
    /// Assemble a report from an evaluated expression.
    pub fn new(
        expression: &str,
        mode: &str,
        words: &[String],
        result: &SearchResult,
    ) -> Self {
        QueryReport {
            expression: expression.to_string(),
            mode: mode.to_string(),
            words: words.to_vec(),
            satisfiable: !result.is_unsatisfiable(),
            matches: result.matches().unwrap_or_default().to_vec(),
        }
    }
}

/// Print one query report in the requested format.
///
/// Human output prints `NOT found` for both an unsatisfiable query and a
/// satisfiable one with zero matches; the JSON report keeps the two
/// distinct through its `satisfiable` flag.
pub fn print_query_report(
    report: &QueryReport,
    args: &XystonArgs,
    config: &PresentationConfig,
    input_dir: Option<&Path>,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        }
        OutputFormat::Human => print_query_report_human(report, args, config, input_dir),
    }
}

fn print_query_report_human(
    report: &QueryReport,
    args: &XystonArgs,
    config: &PresentationConfig,
    input_dir: Option<&Path>,
) -> Result<()> {
    println!(
        "{}{}{}",
        config.paint(HEADER),
        report.expression,
        config.paint(RESET)
    );
    if args.verbosity() > 1 {
        println!("{INDENT}Terms in this query: {:?}", report.words);
        println!("{INDENT}Mode: {}", report.mode);
    }

    if report.matches.is_empty() {
        println!("{INDENT}{}NOT found{}", config.paint(RED), config.paint(RESET));
    } else {
        for location in &report.matches {
            print!(
                "{INDENT}found in {}, line {}",
                location.file, location.line
            );
            if location.has_field() {
                print!(", field {}", location.field);
            }
            if let Some(dir) = input_dir {
                print_snippet(dir, location, config)?;
            }
            println!();
        }
    }
    println!();
    Ok(())
}

/// Render a short window of the matched line around the matched field.
///
/// The line is split on single spaces into fields; up to `snippet_radius`
/// fields each side of the match are shown, the matched field painted
/// blue. A sentinel field renders a default-width window from the start
/// of the line with no highlight.
pub fn print_snippet(
    input_dir: &Path,
    location: &DocLocation,
    config: &PresentationConfig,
) -> Result<()> {
    let contents = fs::read_to_string(input_dir.join(&location.file))?;
    let Some(line_index) = (location.line as usize).checked_sub(1) else {
        return Ok(());
    };
    let Some(line) = contents.lines().nth(line_index) else {
        return Ok(());
    };
    let fields: Vec<&str> = line.split(' ').collect();

    let radius = config.snippet_radius;
    let (begin, end) = if location.has_field() {
        let field = location.field as usize;
        (field.saturating_sub(radius), (field + radius).min(fields.len()))
    } else {
        (0, radius.min(fields.len()))
    };

    print!(": \"...{}", config.paint(GREEN));
    for (i, field) in fields.iter().enumerate().take(end).skip(begin) {
        // Fields are 1-based; paint only the matched one.
        if location.has_field() && i + 1 == location.field as usize {
            print!("{}", config.paint(BLUE));
        }
        print!("{field} {}", config.paint(GREEN));
    }
    print!("{}... \"", config.paint(RESET));
    Ok(())
}

/// Print a preview of an index: the first few keys in insertion order,
/// each value truncated to the configured width.
pub fn print_index_preview<F>(keys: &[String], render: F, config: &PresentationConfig)
where
    F: Fn(&str) -> String,
{
    for key in keys.iter().take(config.preview_entries) {
        let value = render(key);
        let preview: String = value.chars().take(config.preview_width).collect();
        print!(
            "{INDENT}{}{key}{} {}{preview}{}",
            config.paint(HEADER),
            config.paint(RESET),
            config.paint(GREEN),
            config.paint(RESET)
        );
        if value.chars().count() > config.preview_width {
            print!(" ...");
        }
        println!();
    }

    let remaining = keys.len().saturating_sub(config.preview_entries);
    if remaining > 0 {
        println!("{INDENT}... and {remaining} more ...");
    }
    println!();
}
