//! Dispatches discovered files through extract → render and writes the
//! results in discovery order.
//!
//! Workers only extract and render. Package announcement happens when a file
//! block is emitted, so the registry sees files in discovery order in both
//! scheduling modes and the output never depends on completion order.

use crate::config::{FailurePolicy, Layout, OutputFormat, Schedule, SummaryOptions};
use crate::error::SummaryError;
use crate::extractors::{CompilationUnit, ExtractorManager};
use crate::registry::{PackageRegistry, SharedRegistry};
use crate::render::{directory_header, package_header, Renderer};
use crate::utils::paths::namespace_for_directory;
use crate::walker::{Discovered, SourceFile};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// Extracted and rendered result for one file
#[derive(Debug)]
pub struct FileSummary {
    pub file: SourceFile,
    pub unit: CompilationUnit,
    /// Text outline; empty in JSON mode
    pub lines: Vec<String>,
}

/// What happened during a run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files whose summary was written (including empty ones)
    pub files_summarized: usize,
    pub failures: Vec<SummaryError>,
    /// True when the run stopped before every file was handled
    pub aborted: bool,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Scheduler {
    options: SummaryOptions,
    manager: ExtractorManager,
    renderer: Renderer,
    registry: SharedRegistry,
}

impl Scheduler {
    pub fn new(options: SummaryOptions) -> Self {
        Self::with_registry(options, PackageRegistry::shared())
    }

    pub fn with_registry(options: SummaryOptions, registry: SharedRegistry) -> Self {
        let manager =
            ExtractorManager::new().with_method_reference_elision(options.normalize_method_refs);
        let renderer = Renderer::from_options(&options);
        Self {
            options,
            manager,
            renderer,
            registry,
        }
    }

    /// Summarize `files` into `out`
    ///
    /// Per-file failures land in the report; only I/O errors on `out` and
    /// worker pool setup errors are returned as `Err`.
    pub fn run<W: Write>(&self, files: Vec<Discovered>, out: W) -> Result<RunReport> {
        info!(
            "Summarizing {} files ({:?}, {:?})",
            files.len(),
            self.options.schedule,
            self.options.failure_policy
        );

        let mut emitter = Emitter::new(out, &self.registry, self.renderer, &self.options);
        let report = match self.options.schedule {
            Schedule::Sequential => self.run_sequential(files, &mut emitter)?,
            Schedule::Concurrent => self.run_concurrent(files, &mut emitter)?,
        };
        emitter.finish()?;

        info!(
            "Summarized {} files with {} failures",
            report.files_summarized,
            report.failures.len()
        );
        Ok(report)
    }

    fn run_sequential<W: Write>(
        &self,
        files: Vec<Discovered>,
        emitter: &mut Emitter<'_, W>,
    ) -> Result<RunReport> {
        let mut report = RunReport::default();
        let total = files.len();

        for (index, slot) in files.into_iter().enumerate() {
            match self.process(slot) {
                Ok(summary) => {
                    emitter.emit(&summary)?;
                    report.files_summarized += 1;
                }
                Err(err) => {
                    let stop = self.stops_run(&err);
                    debug!("Failure in {}: {}", err.path().display(), err);
                    report.failures.push(err);
                    if stop {
                        report.aborted = index + 1 < total;
                        break;
                    }
                }
            }
        }

        Ok(report)
    }

    fn run_concurrent<W: Write>(
        &self,
        files: Vec<Discovered>,
        emitter: &mut Emitter<'_, W>,
    ) -> Result<RunReport> {
        let total = files.len();
        // Lowest index of a failure that stops the run. Files past it are
        // skipped; files before it always complete, so the emitted prefix
        // matches sequential mode.
        let first_stop = AtomicUsize::new(usize::MAX);
        let dispatch = || -> Vec<Option<crate::error::Result<FileSummary>>> {
            files
                .into_par_iter()
                .enumerate()
                .map(|(index, slot)| {
                    if index > first_stop.load(Ordering::Acquire) {
                        return None;
                    }
                    let result = self.process(slot);
                    if let Err(err) = &result {
                        if self.stops_run(err) {
                            first_stop.fetch_min(index, Ordering::AcqRel);
                        }
                    }
                    Some(result)
                })
                .collect()
        };

        let results = match self.options.jobs {
            Some(jobs) => rayon::ThreadPoolBuilder::new()
                .num_threads(jobs.get())
                .build()
                .context("Failed to build worker pool")?
                .install(dispatch),
            None => dispatch(),
        };

        let mut report = RunReport::default();
        for (index, slot) in results.into_iter().enumerate() {
            let Some(result) = slot else {
                report.aborted = true;
                break;
            };
            match result {
                Ok(summary) => {
                    emitter.emit(&summary)?;
                    report.files_summarized += 1;
                }
                Err(err) => {
                    let stop = self.stops_run(&err);
                    debug!("Failure in {}: {}", err.path().display(), err);
                    report.failures.push(err);
                    if stop {
                        report.aborted = index + 1 < total;
                        break;
                    }
                }
            }
        }

        Ok(report)
    }

    fn process(&self, slot: Discovered) -> crate::error::Result<FileSummary> {
        let file = slot?;
        let unit = self.manager.extract_file(&file.path)?;
        let lines = match self.options.format {
            OutputFormat::Text => self.renderer.render_unit(&unit),
            OutputFormat::Json => Vec::new(),
        };
        Ok(FileSummary { file, unit, lines })
    }

    fn stops_run(&self, err: &SummaryError) -> bool {
        err.is_fatal() || self.options.failure_policy == FailurePolicy::FailFast
    }
}

/// Writes file blocks with their package or directory headers
struct Emitter<'a, W: Write> {
    out: W,
    registry: &'a PackageRegistry,
    renderer: Renderer,
    layout: Layout,
    format: OutputFormat,
    current_dir: Option<String>,
    wrote_block: bool,
}

impl<'a, W: Write> Emitter<'a, W> {
    fn new(
        out: W,
        registry: &'a PackageRegistry,
        renderer: Renderer,
        options: &SummaryOptions,
    ) -> Self {
        Self {
            out,
            registry,
            renderer,
            layout: options.layout,
            format: options.format,
            current_dir: None,
            wrote_block: false,
        }
    }

    fn emit(&mut self, summary: &FileSummary) -> Result<()> {
        if summary.unit.is_empty() {
            debug!("No classes to summarize in {}", summary.file.relative_path);
            return Ok(());
        }

        match self.format {
            OutputFormat::Text => self.emit_text(summary),
            OutputFormat::Json => self.emit_json(summary),
        }
    }

    fn emit_text(&mut self, summary: &FileSummary) -> Result<()> {
        if self.wrote_block {
            writeln!(self.out)?;
        }
        self.wrote_block = true;

        match self.layout {
            Layout::Flat => {
                if let Some(package) = summary.unit.package.as_deref() {
                    if self.registry.announce(package) {
                        writeln!(self.out, "{}", package_header(package))?;
                    }
                }
            }
            Layout::ByDirectory => {
                let dir = &summary.file.relative_dir;
                let namespace = namespace_for_directory(dir);
                if self.current_dir.as_deref() != Some(dir.as_str()) {
                    writeln!(self.out, "{}", directory_header(&namespace))?;
                    self.current_dir = Some(dir.clone());
                }
                warn_on_package_mismatch(summary, &namespace);
            }
        }

        for line in &summary.lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn emit_json(&mut self, summary: &FileSummary) -> Result<()> {
        let announce = summary
            .unit
            .package
            .as_deref()
            .is_some_and(|package| self.registry.announce(package));
        let record = self
            .renderer
            .render_json(&summary.unit, &summary.file.relative_path, announce)
            .with_context(|| format!("Failed to serialize {}", summary.file.relative_path))?;
        writeln!(self.out, "{record}")?;
        self.wrote_block = true;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }
}

fn warn_on_package_mismatch(summary: &FileSummary, namespace: &str) {
    let Some(declared) = summary.unit.package.as_deref() else {
        return;
    };
    if !package_matches_namespace(declared, namespace) {
        warn!(
            "{} declares package {} but lives under {}",
            summary.file.relative_path, declared, namespace
        );
    }
}

/// True when `declared` equals `namespace` or is a dotted suffix of it
///
/// Scanning `src/main/java` makes `com.app` live under `src.main.java.com.app`
/// or, when the scan starts deeper, under exactly `com.app`.
pub fn package_matches_namespace(declared: &str, namespace: &str) -> bool {
    namespace == declared
        || namespace
            .strip_suffix(declared)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
