use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use pledge_cli::pipeline::{RunConfig, locate_input, prepare_output_dir, run_pipeline};
use pledge_ingest::load_settings;
use pledge_model::{RunSummary, Settings};

use crate::cli::{RunArgs, SettingsArgs};
use crate::summary::{print_settings, print_settings_json};

pub fn run_settings(args: &SettingsArgs) -> Result<()> {
    let settings = load(&args.settings)?;
    if args.json {
        print_settings_json(&settings)
    } else {
        print_settings(&settings);
        Ok(())
    }
}

pub fn run_export(args: &RunArgs) -> Result<RunSummary> {
    let run_span = info_span!("run", dry_run = args.dry_run);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let settings = load(&args.settings)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.output_dir));
    let base_dir = std::env::current_dir().context("resolve working directory")?;

    let mut input = io::stdin().lock();
    let mut prompt = io::stderr();
    let csv_path = locate_input(
        args.csv.as_deref(),
        &base_dir,
        &settings.default_csv_file,
        &mut input,
        &mut prompt,
    )?;
    if !args.dry_run {
        prepare_output_dir(&output_dir, args.yes, &mut input, &mut prompt)?;
    }

    let summary = run_pipeline(RunConfig {
        csv_path: &csv_path,
        output_dir: &output_dir,
        settings: &settings,
        dry_run: args.dry_run,
        now: Utc::now(),
    })?;
    info!(
        total_paying = summary.total_paying,
        skipped = summary.skipped(),
        tier_count = summary.tiers.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );
    Ok(summary)
}

fn load(path: &Path) -> Result<Settings> {
    load_settings(path).with_context(|| format!("load settings {}", path.display()))
}
