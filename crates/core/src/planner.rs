use crate::capture::{capture_name_regex, parse_capture_name, CaptureFile};
use crate::grouper::assign_target_names;
use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub dir: PathBuf,
    pub max_gap: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameCandidate {
    pub capture: CaptureFile,
    pub target_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenameStats {
    pub scanned_entries: usize,
    pub capture_files: usize,
    pub skipped_other: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub dir: PathBuf,
    pub candidates: Vec<RenameCandidate>,
    pub stats: RenameStats,
}

pub fn generate_plan(options: &PlanOptions) -> Result<RenamePlan> {
    if !options.dir.exists() {
        anyhow::bail!("directory does not exist: {}", options.dir.display());
    }

    let pattern = capture_name_regex()?;
    let mut stats = RenameStats::default();
    let mut names = Vec::new();

    for entry in fs::read_dir(&options.dir)
        .with_context(|| format!("could not read directory: {}", options.dir.display()))?
    {
        let entry = entry
            .with_context(|| format!("could not read entry in: {}", options.dir.display()))?;
        if entry.path().is_dir() {
            continue;
        }
        stats.scanned_entries += 1;

        let name = entry.file_name().to_string_lossy().to_string();
        if pattern.is_match(&name) {
            stats.capture_files += 1;
            names.push(name);
        } else {
            stats.skipped_other += 1;
        }
    }

    // Fixed-width zero-padded timestamp fields make byte-wise order chronological
    // within a source prefix.
    names.sort();

    let mut captures = Vec::with_capacity(names.len());
    for name in &names {
        let capture = parse_capture_name(&pattern, name)?
            .with_context(|| format!("filename stopped matching the capture pattern: {name}"))?;
        captures.push(capture);
    }

    let targets = assign_target_names(&captures, options.max_gap);
    let candidates = captures
        .into_iter()
        .zip(targets)
        .map(|(capture, target_name)| RenameCandidate {
            capture,
            target_name,
        })
        .collect();

    Ok(RenamePlan {
        dir: options.dir.clone(),
        candidates,
        stats,
    })
}
