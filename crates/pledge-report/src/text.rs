//! Plain name lists, one name per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::common::ensure_output_dir;

/// Writes `names` to `output_path`, each followed by `\n`.
pub fn write_name_list<S: AsRef<str>>(output_path: &Path, names: &[S]) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        ensure_output_dir(parent)?;
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    for name in names {
        writeln!(writer, "{}", name.as_ref())
            .with_context(|| format!("write {}", output_path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(())
}
