//! Pipeline stages for a single export run.
//!
//! The operator prompts read from any [`BufRead`] and write to any [`Write`],
//! so the whole run can be driven without a terminal.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use tracing::{debug, info, info_span, trace, warn};

use pledge_core::{FilterResult, filter_patrons, group_by_tier};
use pledge_ingest::{ParsedPatrons, ensure_data_rows, parse_patrons, read_csv_rows};
use pledge_model::{Patron, RunSummary, Settings, TierGroups, TierOutput};
use pledge_report::{ExportOptions, write_tier_outputs};

use crate::logging::redact_value;

// ============================================================================
// Stage 0: Operator input
// ============================================================================

/// Resolves the export to read.
///
/// An explicit path is used as is. Otherwise `default_name` is looked up in
/// `base_dir`, and when it is missing the operator is asked for a path. The
/// resolved path must be an existing file.
pub fn locate_input<R: BufRead, W: Write>(
    explicit: Option<&Path>,
    base_dir: &Path,
    default_name: &str,
    input: &mut R,
    prompt: &mut W,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return existing_file(path.to_path_buf());
    }
    let candidate = base_dir.join(default_name);
    if candidate.is_file() {
        debug!(path = %candidate.display(), "using default CSV file");
        return Ok(candidate);
    }
    write!(
        prompt,
        "Default CSV file '{default_name}' not found. Enter path to CSV file: "
    )
    .and_then(|()| prompt.flush())
    .context("write prompt")?;
    let answer = read_answer(input)?;
    if answer.is_empty() {
        bail!("no CSV file provided");
    }
    existing_file(PathBuf::from(answer))
}

fn existing_file(path: PathBuf) -> Result<PathBuf> {
    if !path.is_file() {
        bail!("CSV file not found: {}", path.display());
    }
    Ok(path)
}

/// Makes sure `output_dir` starts out absent.
///
/// An existing directory is deleted when `assume_yes` is set or the operator
/// answers `y`. Any other answer aborts the run.
pub fn prepare_output_dir<R: BufRead, W: Write>(
    output_dir: &Path,
    assume_yes: bool,
    input: &mut R,
    prompt: &mut W,
) -> Result<()> {
    if !output_dir.exists() {
        return Ok(());
    }
    if !assume_yes {
        write!(
            prompt,
            "Output directory '{}' already exists. Delete it? [y/N]: ",
            output_dir.display()
        )
        .and_then(|()| prompt.flush())
        .context("write prompt")?;
        let answer = read_answer(input)?;
        if !answer.eq_ignore_ascii_case("y") {
            bail!(
                "aborted: output directory {} was left in place",
                output_dir.display()
            );
        }
    }
    fs::remove_dir_all(output_dir)
        .with_context(|| format!("delete output dir {}", output_dir.display()))?;
    info!(path = %output_dir.display(), "deleted existing output directory");
    Ok(())
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("read operator input")?;
    Ok(line.trim().to_string())
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads the export and parses every data row.
pub fn ingest(csv_path: &Path) -> Result<ParsedPatrons> {
    let ingest_span = info_span!("ingest", path = %csv_path.display());
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();

    let rows = read_csv_rows(csv_path)?;
    ensure_data_rows(&rows, csv_path)?;
    let parsed = parse_patrons(&rows);
    if parsed.skipped_rows > 0 {
        warn!(
            skipped_rows = parsed.skipped_rows,
            "skipped rows with too few fields"
        );
    }
    info!(
        row_count = rows.len() - 1,
        patron_count = parsed.patrons.len(),
        free_tier = parsed.free_tier,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(parsed)
}

// ============================================================================
// Stage 2: Filter
// ============================================================================

/// Keeps the paying, non-expired patrons as of `now`.
pub fn filter(patrons: Vec<Patron>, now: DateTime<Utc>) -> FilterResult {
    let filter_span = info_span!("filter", now = %now);
    let _filter_guard = filter_span.enter();
    let filter_start = Instant::now();

    let result = filter_patrons(patrons, now);
    info!(
        retained = result.retained.len(),
        expired_access = result.expired_access,
        unpaid_status = result.unpaid_status,
        duration_ms = filter_start.elapsed().as_millis(),
        "filter complete"
    );
    result
}

// ============================================================================
// Stage 3: Group
// ============================================================================

/// Groups the retained patrons by tier.
pub fn group(patrons: Vec<Patron>) -> TierGroups {
    let group_span = info_span!("group");
    let _group_guard = group_span.enter();
    let group_start = Instant::now();

    let groups = group_by_tier(patrons);
    for (tier, members) in &groups {
        debug!(tier = %tier, patron_count = members.len(), "tier group");
        for patron in members {
            trace!(tier = %tier, name = redact_value(&patron.name), "grouped patron");
        }
    }
    info!(
        tier_count = groups.len(),
        duration_ms = group_start.elapsed().as_millis(),
        "group complete"
    );
    groups
}

// ============================================================================
// Stage 4: Export
// ============================================================================

/// Writes the per-tier artifacts enabled in `settings`.
pub fn export(
    output_dir: &Path,
    groups: &TierGroups,
    settings: &Settings,
    dry_run: bool,
) -> Result<Vec<TierOutput>> {
    let export_span = info_span!("export", output_dir = %output_dir.display(), dry_run);
    let _export_guard = export_span.enter();
    let export_start = Instant::now();

    let options = ExportOptions::from_settings(settings).with_dry_run(dry_run);
    if !settings.exports_anything() {
        warn!("EXPORT_TXT and EXPORT_SVG are both disabled, no files will be written");
    }
    let outputs = write_tier_outputs(output_dir, groups, &settings.layout, options)?;
    info!(
        tier_count = outputs.len(),
        duration_ms = export_start.elapsed().as_millis(),
        "{}",
        if dry_run {
            "export skipped (dry run)"
        } else {
            "export complete"
        }
    );
    Ok(outputs)
}

// ============================================================================
// Full run
// ============================================================================

/// Everything a run needs once the input and output locations are settled.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig<'a> {
    pub csv_path: &'a Path,
    pub output_dir: &'a Path,
    pub settings: &'a Settings,
    pub dry_run: bool,
    /// Reference instant for access expiration.
    pub now: DateTime<Utc>,
}

/// Runs ingest, filter, group and export, and tallies the summary.
pub fn run_pipeline(config: RunConfig<'_>) -> Result<RunSummary> {
    let ParsedPatrons {
        patrons, free_tier, ..
    } = ingest(config.csv_path)?;
    let FilterResult {
        retained,
        expired_access,
        unpaid_status,
    } = filter(patrons, config.now);
    let groups = group(retained);
    let total_paying = groups.values().map(Vec::len).sum();
    let tiers = export(config.output_dir, &groups, config.settings, config.dry_run)?;

    Ok(RunSummary {
        output_dir: config.output_dir.to_path_buf(),
        total_paying,
        free_tier,
        expired_access,
        unpaid_status,
        tiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn explicit_missing_path_fails_without_prompting() {
        let mut input = Cursor::new("");
        let mut prompt = Vec::new();
        let error = locate_input(
            Some(Path::new("/nonexistent/elsewhere.csv")),
            Path::new("/nonexistent"),
            "pledges.csv",
            &mut input,
            &mut prompt,
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "CSV file not found: /nonexistent/elsewhere.csv"
        );
        assert!(prompt.is_empty());
    }

    #[test]
    fn empty_answer_is_rejected() {
        let mut input = Cursor::new("   \n");
        let mut prompt = Vec::new();
        let error = locate_input(
            None,
            Path::new("/nonexistent"),
            "pledges.csv",
            &mut input,
            &mut prompt,
        )
        .unwrap_err();
        assert_eq!(error.to_string(), "no CSV file provided");
    }

    #[test]
    fn missing_output_dir_needs_no_answer() {
        let mut input = Cursor::new("");
        let mut prompt = Vec::new();
        prepare_output_dir(
            Path::new("/nonexistent/output"),
            false,
            &mut input,
            &mut prompt,
        )
        .unwrap();
        assert!(prompt.is_empty());
    }
}
