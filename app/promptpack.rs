//! Command-line interface for promptpack.
//!
//! Snapshots one directory into `prompt.txt`, written beside it, then prints
//! where the file went and how many whitespace-separated tokens it holds.

use clap::Parser;
use promptpack::{
    BinaryDetection, PromptpackBuilder, PromptpackOptions, count_tokens_in_file, output,
    promptpack,
};
use std::path::PathBuf;
use std::process::exit;

/// promptpack — snapshot a directory into a single prompt document
#[derive(Parser)]
#[command(name = "promptpack", version, about, long_about = None)]
struct Cli {
    /// Directory to snapshot
    root: PathBuf,

    /// Number of workers (defaults to the available hardware threads)
    #[arg(short = 'j', long, value_parser = parse_threads)]
    threads: Option<usize>,

    /// Binary detection strategy
    #[arg(long, default_value = "control", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Print debug logs to stderr
    #[cfg(feature = "logging")]
    #[arg(short, long)]
    verbose: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "control" => Ok(BinaryDetection::ControlBytes),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

fn parse_threads(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("thread count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid thread count '{}': {}", s, e)),
    }
}

impl Cli {
    fn to_options(&self) -> PromptpackOptions {
        let builder = PromptpackBuilder::new(&self.root).binary_detection(self.binary_detection);
        let builder = match self.threads {
            Some(n) => builder.num_threads(n),
            None => builder.detect_threads(),
        };
        builder.build()
    }
}

#[cfg(feature = "logging")]
fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("promptpack=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    // clap exits with 2 on usage errors; this tool reports them with 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            exit(1);
        }
        Err(e) => e.exit(),
    };

    #[cfg(feature = "logging")]
    setup_logging(cli.verbose);

    let snapshot = match promptpack(cli.to_options()) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    for skip in &snapshot.skipped {
        eprintln!("{}", skip);
    }

    let prompt_file = match output::output_path(&cli.root) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error writing to {}: {}", output::OUTPUT_FILE_NAME, e);
            exit(1);
        }
    };
    if let Err(e) = output::write_document(&snapshot, &prompt_file) {
        eprintln!("Error writing to {}: {}", output::OUTPUT_FILE_NAME, e);
        exit(1);
    }
    println!(
        "{} has been created at {}",
        output::OUTPUT_FILE_NAME,
        prompt_file.display()
    );

    match count_tokens_in_file(&prompt_file) {
        Ok(count) => println!("Number of tokens in {}: {}", output::OUTPUT_FILE_NAME, count),
        Err(e) => {
            eprintln!(
                "Error reading {} for token counting: {}",
                output::OUTPUT_FILE_NAME,
                e
            );
            exit(1);
        }
    }
}
