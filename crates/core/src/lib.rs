mod apply;
mod capture;
mod config;
mod grouper;
mod planner;

pub use apply::{apply_plan, validate_plan, ApplyError, ApplyResult, RenameFailure};
pub use capture::{capture_name_regex, parse_capture_name, CaptureFile, CAPTURE_NAME_PATTERN};
pub use config::{
    max_gap_duration, resolve_gap_arg, GapArg, DEFAULT_MAX_GAP_MINUTES, MIN_MAX_GAP_MINUTES,
};
pub use grouper::assign_target_names;
pub use planner::{generate_plan, PlanOptions, RenameCandidate, RenamePlan, RenameStats};
