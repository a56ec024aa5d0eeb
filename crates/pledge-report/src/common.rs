//! Shared helpers for report generation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// SVG namespace.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Text list extension.
pub const TXT_EXTENSION: &str = "txt";

/// Label sheet extension.
pub const SVG_EXTENSION: &str = "svg";

/// File stem for a tier label: spaces and path separators become `_`.
pub fn tier_file_stem(tier: &str) -> String {
    tier.chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

/// Path of the `extension` artifact for `tier` inside `output_dir`.
pub fn tier_output_path(output_dir: &Path, tier: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{extension}", tier_file_stem(tier)))
}

/// Escapes `& < > " '` as XML entities.
pub fn escape_xml(value: &str) -> String {
    quick_xml::escape::escape(value).into_owned()
}

/// Creates `dir` and its parents if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))
}
