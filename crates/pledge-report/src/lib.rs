//! Pledge report generation.
//!
//! Two artifacts per tier:
//!
//! - **Name list** (`.txt`): one patron name per line
//! - **Label sheet** (`.svg`): names packed into columns for printing

mod common;
mod svg;
mod text;
mod tiers;

pub use svg::{render_svg, write_svg, write_svg_to};
pub use text::write_name_list;
pub use tiers::{ExportOptions, stem_collisions, write_tier_outputs};

pub use common::{
    SVG_EXTENSION, TXT_EXTENSION, ensure_output_dir, escape_xml, tier_file_stem, tier_output_path,
};
