use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::process::ExitCode;
use vcap_renamer_core::{
    apply_plan, generate_plan, max_gap_duration, resolve_gap_arg, ApplyError, GapArg, PlanOptions,
    DEFAULT_MAX_GAP_MINUTES,
};

const USAGE: &str = "\
vcap-renamer — link consecutive capture segments by renaming them

Usage:
  vcap-renamer [max-gap-minutes]

Renames files in the current directory matching
  <sourceId> <YYYY>-<MM>-<DD> <hh>-<mm>-<ss>-<hh>.avi
into <baseName>.<NN>.avi sequences, where consecutive files from the same
source closer together than the maximum gap share one base name.

Arguments:
  max-gap-minutes      maximum gap between linked segments, in minutes
                       (default 5, minimum 1)
  h, -h, help, -help   show this help";

#[derive(Debug, Parser)]
#[command(name = "vcap-renamer", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match resolve_gap_arg(cli.args.first().map(String::as_str)) {
        GapArg::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        GapArg::TooSmall(minutes) => {
            println!("The gap must be at least 1 minute (got {minutes}).");
            ExitCode::FAILURE
        }
        GapArg::Invalid(raw) => {
            println!("Not a number: '{raw}'");
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        GapArg::Default => run_rename(DEFAULT_MAX_GAP_MINUTES),
        GapArg::Override(minutes) => {
            println!("Using a maximum gap of {minutes} minute(s).");
            run_rename(minutes)
        }
    }
}

fn run_rename(minutes: f64) -> ExitCode {
    match rename_in_current_dir(minutes) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn rename_in_current_dir(minutes: f64) -> Result<ExitCode> {
    let dir = env::current_dir().context("could not determine the current directory")?;
    let plan = generate_plan(&PlanOptions {
        dir,
        max_gap: max_gap_duration(minutes),
    })?;
    println!("Found {} capture file(s).", plan.candidates.len());

    match apply_plan(&plan) {
        Ok(result) if result.failures.is_empty() => {
            println!("Renamed {} file(s).", result.applied);
            Ok(ExitCode::SUCCESS)
        }
        Ok(result) => {
            for failure in &result.failures {
                println!(
                    "failed to rename '{}' -> '{}': {}",
                    failure.original_name, failure.target_name, failure.error
                );
            }
            println!(
                "Renamed {} of {} file(s); {} failed.",
                result.applied,
                plan.candidates.len(),
                result.failures.len()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(conflict) => {
            report_abort(&conflict);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report_abort(conflict: &ApplyError) {
    println!("{conflict}");
    println!("Aborted. No files were renamed.");
}
