//! Label sheet geometry: the parameters that drive the layout engine and the
//! positioned names it produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

pub const DEFAULT_WIDTH: i64 = 1161;
pub const DEFAULT_MARGIN: i64 = 26;
pub const DEFAULT_COLUMN_GAP: i64 = 54;
pub const DEFAULT_FONT_SIZE: i64 = 16;
pub const DEFAULT_LINE_HEIGHT: i64 = 20;
pub const DEFAULT_COLUMNS: i64 = 3;
pub const DEFAULT_FONT_FAMILY: &str = "Trebuchet MS, Arial, sans-serif";
pub const DEFAULT_PALETTE: [&str; 3] = ["#3aff22", "#c622ff", "#a8ff21"];

/// Parameters for packing a name list into a multi-column label sheet.
///
/// All geometry is integral, in SVG user units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Canvas width.
    pub width: i64,
    /// Distance from every canvas edge to the text area.
    pub margin: i64,
    /// Horizontal gap between adjacent columns.
    pub column_gap: i64,
    pub font_size: i64,
    /// Vertical distance between consecutive rows.
    pub line_height: i64,
    pub columns: i64,
    pub font_family: String,
    /// Fill colors picked per column, or at random.
    pub palette: Vec<String>,
    /// Pick palette colors at random instead of cycling by column.
    pub randomize_colors: bool,
    /// Exact name to color. Wins over the palette.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub color_overrides: BTreeMap<String, String>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            margin: DEFAULT_MARGIN,
            column_gap: DEFAULT_COLUMN_GAP,
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            columns: DEFAULT_COLUMNS,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            palette: DEFAULT_PALETTE.iter().map(ToString::to_string).collect(),
            randomize_colors: true,
            color_overrides: BTreeMap::new(),
        }
    }
}

impl LayoutParams {
    /// Checks the invariants the layout engine relies on.
    ///
    /// Reports the first violation found, in field order.
    pub fn validate(&self) -> Result<(), LayoutError> {
        positive("width", self.width)?;
        non_negative("margin", self.margin)?;
        non_negative("column gap", self.column_gap)?;
        positive("font size", self.font_size)?;
        positive("line height", self.line_height)?;
        if self.columns < 1 {
            return Err(LayoutError::NoColumns {
                columns: self.columns,
            });
        }
        if self.palette.is_empty() {
            return Err(LayoutError::EmptyPalette);
        }
        Ok(())
    }

    /// Override color for `name`, if any.
    pub fn override_for(&self, name: &str) -> Option<&str> {
        self.color_overrides.get(name).map(String::as_str)
    }
}

fn positive(field: &'static str, value: i64) -> Result<(), LayoutError> {
    if value <= 0 {
        return Err(LayoutError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i64) -> Result<(), LayoutError> {
    if value < 0 {
        return Err(LayoutError::Negative { field, value });
    }
    Ok(())
}

/// A name placed on the label sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedName {
    pub name: String,
    pub column: usize,
    /// Row within the column, starting at 0.
    pub row: usize,
    /// Horizontal center of the text.
    pub x: i64,
    /// Text baseline.
    pub y: i64,
    pub color: String,
}

/// The result of laying out one tier's names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub width: i64,
    pub height: i64,
    pub column_count: usize,
    /// Names in input order, which is also column-major order.
    pub names: Vec<PositionedName>,
}

impl LabelLayout {
    /// Names per column, one entry for every column including empty ones.
    pub fn columns(&self) -> Vec<Vec<&str>> {
        let mut columns = vec![Vec::new(); self.column_count];
        for placed in &self.names {
            if let Some(column) = columns.get_mut(placed.column) {
                column.push(placed.name.as_str());
            }
        }
        columns
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
