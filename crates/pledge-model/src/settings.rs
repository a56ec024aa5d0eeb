//! Resolved run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::layout::LayoutParams;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_CSV_FILE: &str = "pledges.csv";

/// Everything a run needs to know, passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Write an SVG label sheet per tier.
    pub export_svg: bool,
    /// Write a plain name list per tier.
    pub export_txt: bool,
    /// Directory receiving the per-tier artifacts.
    pub output_dir: String,
    /// Export file looked up in the working directory when no path is given.
    pub default_csv_file: String,
    pub layout: LayoutParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_svg: true,
            export_txt: true,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            default_csv_file: DEFAULT_CSV_FILE.to_string(),
            layout: LayoutParams::default(),
        }
    }
}

impl Settings {
    /// Validates the layout section first, then the required paths.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if self.output_dir.trim().is_empty() {
            return Err(SettingsError::EmptyValue { key: "OUTPUT_DIR" });
        }
        if self.default_csv_file.trim().is_empty() {
            return Err(SettingsError::EmptyValue {
                key: "DEFAULT_CSV_FILE",
            });
        }
        Ok(())
    }

    /// True when at least one artifact kind is enabled.
    pub fn exports_anything(&self) -> bool {
        self.export_svg || self.export_txt
    }
}
