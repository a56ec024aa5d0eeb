use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Artifacts written for one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub txt: Option<PathBuf>,
    pub svg: Option<PathBuf>,
}

/// Per-tier line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierOutput {
    pub tier: String,
    pub patrons: usize,
    pub outputs: OutputPaths,
}

/// Counts reported to the operator at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub total_paying: usize,
    pub free_tier: usize,
    pub expired_access: usize,
    pub unpaid_status: usize,
    pub tiers: Vec<TierOutput>,
}

impl RunSummary {
    /// Records skipped by the eligibility rules (free tiers excluded).
    pub fn skipped(&self) -> usize {
        self.expired_access + self.unpaid_status
    }
}
