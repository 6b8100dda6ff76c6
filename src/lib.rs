pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod truncate;

pub use config::{load_config, FixConfig};
pub use diagnostics::{count_tag, tag_balance, TagCount};
pub use truncate::{find_marker, truncate_after_marker, Summary, TruncateOutcome};

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read source at {}", path.display()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FixOutcome {
    /// The file was rewritten.
    Truncated {
        original_lines: usize,
        kept_lines: usize,
    },
    /// Dry run: the marker was found but nothing was written.
    WouldTruncate {
        original_lines: usize,
        kept_lines: usize,
    },
    /// Diagnostics only.
    Checked {
        lines: usize,
        marker_line: Option<usize>,
    },
    MarkerNotFound {
        lines: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub target: PathBuf,
    pub tags: Vec<TagCount>,
    pub outcome: FixOutcome,
}

impl FixReport {
    /// True only when the file was actually rewritten.
    pub fn truncated(&self) -> bool {
        matches!(self.outcome, FixOutcome::Truncated { .. })
    }

    pub fn marker_found(&self) -> bool {
        match self.outcome {
            FixOutcome::Truncated { .. } | FixOutcome::WouldTruncate { .. } => true,
            FixOutcome::Checked { marker_line, .. } => marker_line.is_some(),
            FixOutcome::MarkerNotFound { .. } => false,
        }
    }

    pub fn summary(&self) -> Option<Summary> {
        match self.outcome {
            FixOutcome::Truncated {
                original_lines,
                kept_lines,
            }
            | FixOutcome::WouldTruncate {
                original_lines,
                kept_lines,
            } => Some(Summary {
                original_lines,
                kept_lines,
            }),
            _ => None,
        }
    }
}

/// Count tags and locate the marker without touching the file.
pub fn check(config: &FixConfig) -> Result<FixReport> {
    config.validate()?;
    let content = read_source(&config.target_path)?;
    tracing::debug!(
        path = %config.target_path.display(),
        bytes = content.len(),
        "loaded source"
    );

    let tags = tag_balance(&content, &config.tracked_tags);
    let marker_line = find_marker(&content, &config.marker_text);
    let lines = truncate::split_lines(&content).len();

    Ok(FixReport {
        target: config.target_path.clone(),
        tags,
        outcome: FixOutcome::Checked { lines, marker_line },
    })
}

/// Count tags, then cut the file right after its first marker line.
///
/// The rewrite happens in place with no backup. When the marker is missing
/// the file is left alone and the outcome says so; that is not an error.
pub fn fix(config: &FixConfig, dry_run: bool) -> Result<FixReport> {
    config.validate()?;
    let path = &config.target_path;
    let content = read_source(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded source");

    let tags = tag_balance(&content, &config.tracked_tags);

    let outcome = match truncate_after_marker(&content, &config.marker_text) {
        TruncateOutcome::Truncated {
            content: kept,
            original_lines,
            kept_lines,
        } => {
            if dry_run {
                FixOutcome::WouldTruncate {
                    original_lines,
                    kept_lines,
                }
            } else {
                fs::write(path, kept)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                tracing::info!(
                    path = %path.display(),
                    original_lines,
                    kept_lines,
                    "truncated source"
                );
                FixOutcome::Truncated {
                    original_lines,
                    kept_lines,
                }
            }
        }
        TruncateOutcome::MarkerNotFound { lines } => {
            tracing::warn!(
                path = %path.display(),
                marker = %config.marker_text,
                "marker not found, file left unchanged"
            );
            FixOutcome::MarkerNotFound { lines }
        }
    };

    Ok(FixReport {
        target: path.clone(),
        tags,
        outcome,
    })
}

pub fn render_report(report: &FixReport) -> String {
    let mut out = String::new();
    for tag in &report.tags {
        out.push_str(&tag.to_string());
        out.push('\n');
    }
    match &report.outcome {
        FixOutcome::Truncated { .. } => {
            if let Some(summary) = report.summary() {
                out.push_str(&format!("{}\n", summary));
            }
        }
        FixOutcome::WouldTruncate { .. } => {
            if let Some(summary) = report.summary() {
                out.push_str(&format!("Dry run, nothing written. {}\n", summary));
            }
        }
        FixOutcome::Checked { marker_line, .. } => match marker_line {
            Some(idx) => out.push_str(&format!("Marker found on line {}\n", idx + 1)),
            None => out.push_str("Marker not found\n"),
        },
        FixOutcome::MarkerNotFound { .. } => {
            out.push_str(&format!(
                "Marker not found, {} left unchanged\n",
                report.target.display()
            ));
        }
    }
    out
}

pub fn print_report(report: &FixReport) {
    print!("{}", render_report(report));
}

pub fn print_report_json(report: &FixReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
