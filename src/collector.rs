use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::aggregate::{LicenseDocument, LicenseSet};
use crate::analyzer::go::GoAnalyzer;
use crate::analyzer::node::NodeAnalyzer;
use crate::analyzer::Analyzer;
use crate::cli::OutputFormat;
use crate::config::load_overrides;
use crate::detector::LicenseDetector;
use crate::error::CollectError;
use crate::license::spdx::LicenseTexts;
use crate::models::Dependency;
use crate::report;
use crate::resolver::Resolver;

/// Which projects to scan.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub go_project: Option<PathBuf>,
    pub npm_project: Option<PathBuf>,
    pub npm_node_modules: Option<PathBuf>,
    pub quiet: bool,
}

/// Result of the resolution pass over all ecosystems.
#[derive(Debug, Default)]
pub struct Resolved {
    pub licenses: LicenseSet,
    /// Dependencies no override or license file covered.
    pub missing: Vec<Dependency>,
    /// Ecosystem branches that failed before resolving anything.
    pub failed: Vec<anyhow::Error>,
    /// Number of ecosystem branches that ran to completion.
    pub completed: usize,
}

/// Resolve all dependencies and aggregate them into a license document.
///
/// Fails when every requested ecosystem failed, when nothing was resolved, when
/// any dependency is missing a license, or when a resolved identifier has no
/// canonical text.
pub fn collect(opts: &CollectOptions, texts: &LicenseTexts) -> Result<LicenseDocument> {
    let mut resolved = resolve_all(opts, texts)?;

    if resolved.completed == 0 && !resolved.failed.is_empty() {
        return Err(resolved.failed.remove(0));
    }

    if resolved.licenses.is_empty() {
        return Err(CollectError::NoLicensesHandled.into());
    }

    if !resolved.missing.is_empty() {
        let packages = resolved.missing.into_iter().map(|d| d.path).collect();
        return Err(CollectError::LicenseMissing { packages }.into());
    }

    Ok(resolved.licenses.build(texts)?)
}

/// Run every requested ecosystem branch; a failing branch is reported and the
/// others continue.
pub fn resolve_all(opts: &CollectOptions, texts: &LicenseTexts) -> Result<Resolved> {
    let mut analyzers: Vec<Box<dyn Analyzer>> = Vec::new();
    if let Some(dir) = &opts.go_project {
        analyzers.push(Box::new(GoAnalyzer::new(dir)));
    }
    if let Some(dir) = &opts.npm_project {
        analyzers.push(Box::new(
            NodeAnalyzer::new(dir).with_node_modules(opts.npm_node_modules.clone()),
        ));
    }

    let detector = LicenseDetector::new()?;
    let mut resolved = Resolved::default();

    for analyzer in &analyzers {
        match resolve_ecosystem(analyzer.as_ref(), &detector, texts, &mut resolved, opts.quiet) {
            Ok(()) => resolved.completed += 1,
            Err(e) => {
                if !opts.quiet {
                    eprintln!(
                        "  {} {} skipped: {:#}",
                        "⚠".yellow(),
                        analyzer.ecosystem(),
                        e
                    );
                }
                resolved.failed.push(e);
            }
        }
    }

    Ok(resolved)
}

fn resolve_ecosystem(
    analyzer: &dyn Analyzer,
    detector: &LicenseDetector,
    texts: &LicenseTexts,
    resolved: &mut Resolved,
    quiet: bool,
) -> Result<()> {
    let ecosystem = analyzer.ecosystem();
    let root = analyzer.dependency_root();
    let deps = analyzer.analyze()?;
    let overrides = load_overrides(analyzer.project_dir())?;

    if !quiet {
        eprintln!(
            "  {} {} {} dependencies in {}",
            "→".cyan(),
            ecosystem,
            deps.len(),
            root.display()
        );
        if !overrides.is_empty() {
            eprintln!("    {} manual overrides", overrides.len());
        }
    }

    let resolver = Resolver::new(&overrides, detector, &root);
    let pb = progress_bar(deps.len(), quiet)?;

    for dep in deps {
        pb.set_message(dep.path.clone());
        match resolver.resolve(&dep) {
            Some(resolution) => {
                resolved.licenses.insert(&resolution, texts);
            }
            None => {
                pb.suspend(|| {
                    eprintln!(
                        "  {} could not find license for {} ({})",
                        "✗".red(),
                        dep.path,
                        dep.ecosystem
                    )
                });
                resolved.missing.push(dep);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}

fn progress_bar(len: usize, quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Render `doc` and write it to `out`.
pub fn write_output(doc: &LicenseDocument, format: OutputFormat, out: &Path) -> Result<()> {
    let data = report::render(doc, format)?;
    std::fs::write(out, data).with_context(|| format!("failed to write {}", out.display()))
}
