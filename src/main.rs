//! java-outline CLI - prints a structural outline of a Java source tree

use clap::Parser;
use java_outline::{summarize_tree, OutputFormat, SummaryOptions};
use std::io::{self, BufWriter};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Summarize classes, fields, constructors and public methods of Java sources
#[derive(Parser, Debug)]
#[command(name = "java-outline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to scan (or a single .java file)
    root: PathBuf,

    /// Omit every field bucket
    #[arg(long)]
    methods_only: bool,

    /// Process one file at a time instead of using a worker pool
    #[arg(long)]
    sequential: bool,

    /// Worker pool size (defaults to available parallelism)
    #[arg(short, long)]
    jobs: Option<NonZeroUsize>,

    /// Keep going after a file fails and report every failure at the end
    #[arg(long)]
    best_effort: bool,

    /// Group output under path-derived `# package` headers per directory
    #[arg(long)]
    group_by_directory: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Replace `Type::method` references with a placeholder before parsing
    #[arg(long)]
    normalize_method_refs: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> SummaryOptions {
        let mut options = SummaryOptions::default().with_format(self.format);
        options.methods_only = self.methods_only;
        options.normalize_method_refs = self.normalize_method_refs;
        options.jobs = self.jobs;
        if self.sequential {
            options = options.sequential();
        }
        if self.best_effort {
            options = options.best_effort();
        }
        if self.group_by_directory {
            options = options.grouped_by_directory();
        }
        options
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the outline
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let stdout = io::stdout();
    let report = match summarize_tree(&args.root, args.options(), BufWriter::new(stdout.lock())) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    for failure in &report.failures {
        match failure.location() {
            Some((line, column)) => eprintln!("error: {failure} (line {line}, column {column})"),
            None => eprintln!("error: {failure}"),
        }
        if let Some(stack) = failure.stack_context() {
            eprintln!("{stack}");
        }
    }
    if report.aborted {
        eprintln!(
            "run stopped early after {} summarized files",
            report.files_summarized
        );
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
