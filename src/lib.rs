// java-outline - structural summaries of Java source trees
//
// tree-sitter parses each compilation unit; the extractor turns the tree into
// declarations, the renderer buckets them, and the scheduler merges per-file
// output in discovery order.

use std::io::Write;
use std::path::Path;

pub mod config;
pub mod error;
pub mod extractors;
pub mod language;
pub mod registry;
pub mod render;
pub mod scheduler;
pub mod utils;
pub mod walker;

pub use config::{FailurePolicy, Layout, OutputFormat, Schedule, SummaryOptions};
pub use error::SummaryError;
pub use extractors::{CompilationUnit, Declaration, ExtractorManager};
pub use registry::{PackageRegistry, SharedRegistry};
pub use render::Renderer;
pub use scheduler::{RunReport, Scheduler};
pub use walker::{FileWalker, SourceFile};

/// Summarize every Java file under `root` (or `root` itself when it is a file)
///
/// Output goes to `out`; per-file failures are collected in the returned
/// report. An `Err` means the run could not start or `out` rejected a write.
pub fn summarize_tree<W: Write>(
    root: impl AsRef<Path>,
    options: SummaryOptions,
    out: W,
) -> anyhow::Result<RunReport> {
    let files = FileWalker::new(root)?.discover()?;
    Scheduler::new(options).run(files, out)
}
