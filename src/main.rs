use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordseek::errors::{LanguageError, PatternError};
use wordseek::language::Language;
use wordseek::locale::Locale;
use wordseek::ordering;
use wordseek::pattern::Pattern;
use wordseek::solver::Solver;
use wordseek::word_list::WordList;

/// Wordseek wildcard dictionary search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The pattern to search for: letters plus '?' wildcards (e.g., "f??d")
    pattern: String,

    /// Locale identifier governing folding and collation (e.g., "en", "en-NZ", "tr")
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Path to a single word-list file (one word per line)
    #[arg(short, long, conflicts_with = "words_dir")]
    word_list: Option<String>,

    /// Directory of word files named {lang}_{REGION}.txt, searched by locale
    #[arg(short = 'd', long, default_value = "words")]
    words_dir: String,
}

/// Entry point of the wordseek CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEEK_DEBUG").is_ok();
    wordseek::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PatternError
        if let Some(pattern_err) = e.downcast_ref::<PatternError>() {
            eprintln!("Error: {}", pattern_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordseek CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the corpus (single file, or discovery by locale in the words dir).
/// 3. Compile the pattern under the locale's folding rules.
/// 4. Solve and sort the matches into display order.
/// 5. Print matches on stdout and diagnostics (counts, timings) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let locale: Locale = cli.locale.parse().map_err(|e: Box<LanguageError>| *e)?;

    // 1. Load the corpus, once, before any solving
    let t_load = Instant::now();
    let solver = match &cli.word_list {
        Some(path) => Solver::new(WordList::load_from_path(path)?.words),
        None => Language::from_words_dir(&cli.words_dir, locale.clone())
            .map_err(|e| *e)?
            .solver,
    };
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Compile the pattern (validation can fail on user input)
    let pattern = Pattern::compile(&cli.pattern, &locale).map_err(|e| *e)?;

    // 3. Solve, keeping the timing for display
    let report = solver.solve_report(&pattern);

    // 4. Sort into display order and print on stdout
    let words = ordering::display_sort(report.matches, &locale);
    for word in &words {
        println!("{word}");
    }

    // 5. Diagnostics (corpus size, timings, number of results) to stderr
    eprintln!(
        "Searched {} words in {:.3}s ({} matches; corpus loaded in {:.3}s).",
        report.corpus_size,
        report.elapsed.as_secs_f64(),
        words.len(),
        load_secs,
    );

    Ok(())
}
