//! Run configuration shared by the library API and the CLI.

use clap::ValueEnum;
use std::num::NonZeroUsize;

/// How files are dispatched to the extract/render pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One file at a time, output streamed per file
    Sequential,
    /// Worker pool; results joined and emitted in discovery order
    #[default]
    Concurrent,
}

/// What happens after a file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop dispatching on the first failure and report it
    #[default]
    FailFast,
    /// Summarize everything that parses, then report every failure
    BestEffort,
}

/// How file blocks are grouped in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// `# Package <declared>` once per distinct declared package
    #[default]
    Flat,
    /// `# package <path.derived>` once per directory with summaries
    ByDirectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline
    #[default]
    Text,
    /// One JSON object per compilation unit per line
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    /// Suppress every field bucket
    pub methods_only: bool,
    pub schedule: Schedule,
    /// Worker pool size; `None` uses the available parallelism
    pub jobs: Option<NonZeroUsize>,
    pub failure_policy: FailurePolicy,
    pub layout: Layout,
    pub format: OutputFormat,
    /// Elide `Type::method` references before parsing
    pub normalize_method_refs: bool,
}

impl SummaryOptions {
    pub fn sequential(mut self) -> Self {
        self.schedule = Schedule::Sequential;
        self
    }

    pub fn best_effort(mut self) -> Self {
        self.failure_policy = FailurePolicy::BestEffort;
        self
    }

    pub fn methods_only(mut self) -> Self {
        self.methods_only = true;
        self
    }

    pub fn grouped_by_directory(mut self) -> Self {
        self.layout = Layout::ByDirectory;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_jobs(mut self, jobs: NonZeroUsize) -> Self {
        self.jobs = Some(jobs);
        self
    }
}
