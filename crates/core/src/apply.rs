use crate::planner::{RenameCandidate, RenamePlan};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("target file already exists: {0}")]
    TargetExists(String),
    #[error("source file no longer exists: {0}")]
    SourceMissing(String),
    #[error("duplicate target in plan: {0}")]
    DuplicateTarget(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFailure {
    pub original_name: String,
    pub target_name: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplyResult {
    pub applied: usize,
    pub failures: Vec<RenameFailure>,
}

pub fn validate_plan(plan: &RenamePlan) -> Result<(), ApplyError> {
    let mut seen_targets = HashSet::<&str>::new();

    for candidate in &plan.candidates {
        if !seen_targets.insert(candidate.target_name.as_str()) {
            return Err(ApplyError::DuplicateTarget(candidate.target_name.clone()));
        }
        if plan.dir.join(&candidate.target_name).exists() {
            return Err(ApplyError::TargetExists(candidate.target_name.clone()));
        }
        if !plan.dir.join(&candidate.capture.file_name).exists() {
            return Err(ApplyError::SourceMissing(candidate.capture.file_name.clone()));
        }
    }

    Ok(())
}

pub fn apply_plan(plan: &RenamePlan) -> Result<ApplyResult, ApplyError> {
    validate_plan(plan)?;
    Ok(execute_renames(&plan.dir, &plan.candidates))
}

// Failures after the first rename leave the set partially renamed; they are
// collected and surfaced instead of stopping the pass.
fn execute_renames(dir: &Path, candidates: &[RenameCandidate]) -> ApplyResult {
    let mut result = ApplyResult::default();

    for candidate in candidates {
        let from = dir.join(&candidate.capture.file_name);
        let to = dir.join(&candidate.target_name);
        match fs::rename(&from, &to) {
            Ok(()) => result.applied += 1,
            Err(err) => result.failures.push(RenameFailure {
                original_name: candidate.capture.file_name.clone(),
                target_name: candidate.target_name.clone(),
                error: err.to_string(),
            }),
        }
    }

    result
}
