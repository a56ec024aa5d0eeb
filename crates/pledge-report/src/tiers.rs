//! Per-tier output generation.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use pledge_core::{layout_names, tier_names};
use pledge_model::{LayoutParams, OutputPaths, Settings, TierGroups, TierOutput};

use crate::common::{
    SVG_EXTENSION, TXT_EXTENSION, ensure_output_dir, tier_file_stem, tier_output_path,
};
use crate::svg::{render_svg, write_svg};
use crate::text::write_name_list;

/// Which artifacts to produce for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub txt: bool,
    pub svg: bool,
    /// Lay out and render everything but write nothing.
    pub dry_run: bool,
}

impl ExportOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            txt: settings.export_txt,
            svg: settings.export_svg,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Tier pairs whose file stems are equal, as `(kept, overwriting)` in tier
/// order. The later tier's files replace the earlier one's.
pub fn stem_collisions(groups: &TierGroups) -> Vec<(&str, &str)> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    let mut collisions = Vec::new();
    for tier in groups.keys() {
        match seen.entry(tier_file_stem(tier)) {
            Entry::Vacant(slot) => {
                slot.insert(tier);
            }
            Entry::Occupied(first) => collisions.push((*first.get(), tier.as_str())),
        }
    }
    collisions
}

/// Writes the enabled artifacts for every tier, in tier order.
pub fn write_tier_outputs(
    output_dir: &Path,
    groups: &TierGroups,
    layout: &LayoutParams,
    options: ExportOptions,
) -> Result<Vec<TierOutput>> {
    if !options.dry_run {
        ensure_output_dir(output_dir)?;
    }
    for (kept, overwriting) in stem_collisions(groups) {
        warn!(
            tier = %overwriting,
            other_tier = %kept,
            stem = %tier_file_stem(overwriting),
            "tier shares a file name with another tier and overwrites its files"
        );
    }
    let mut outputs = Vec::with_capacity(groups.len());
    for (tier, patrons) in groups {
        let names = tier_names(patrons);
        let mut paths = OutputPaths::default();

        if options.txt && !options.dry_run {
            let path = tier_output_path(output_dir, tier, TXT_EXTENSION);
            write_name_list(&path, &names)?;
            info!(tier = %tier, patron_count = names.len(), path = %path.display(), "wrote name list");
            paths.txt = Some(path);
        }

        if options.svg {
            let sheet = layout_names(&names, layout)
                .with_context(|| format!("lay out label sheet for tier {tier}"))?;
            if options.dry_run {
                let svg = render_svg(&sheet, layout)?;
                debug!(tier = %tier, bytes = svg.len(), "rendered label sheet (dry run)");
            } else {
                let path = tier_output_path(output_dir, tier, SVG_EXTENSION);
                write_svg(&path, &sheet, layout)?;
                info!(
                    tier = %tier,
                    patron_count = names.len(),
                    height = sheet.height,
                    path = %path.display(),
                    "wrote label sheet"
                );
                paths.svg = Some(path);
            }
        }

        outputs.push(TierOutput {
            tier: tier.clone(),
            patrons: patrons.len(),
            outputs: paths,
        });
    }
    Ok(outputs)
}
