//! Label sheet layout engine.
//!
//! Packs an already sorted name list into `columns` contiguous columns,
//! filling column 0 first. Each column holds `ceil(n / columns)` names except
//! the last, which takes the remainder. Text is centered on the column axis.
//!
//! Colors are resolved per name with this precedence:
//!
//! 1. an exact entry in the override map;
//! 2. a uniform random palette pick, when randomization is on;
//! 3. the palette entry for the column, cycling through the palette.
//!
//! The random generator is seeded with the number of names, so a given list
//! length always yields the same colors. It is advanced once per name even
//! when the name is overridden.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use pledge_model::{LabelLayout, LayoutError, LayoutParams, PositionedName};

/// Lays out `names` in order. Fails only on unusable parameters.
pub fn layout_names<S: AsRef<str>>(
    names: &[S],
    params: &LayoutParams,
) -> Result<LabelLayout, LayoutError> {
    let column_count = usize::try_from(params.columns)
        .ok()
        .filter(|columns| *columns > 0)
        .ok_or(LayoutError::NoColumns {
            columns: params.columns,
        })?;
    if params.palette.is_empty() {
        return Err(LayoutError::EmptyPalette);
    }

    let grid = ColumnGrid::new(params, column_count)?;
    let per_column = names.len().div_ceil(column_count);
    let mut rng = params
        .randomize_colors
        .then(|| StdRng::seed_from_u64(names.len() as u64));
    let mut rows_used = vec![0usize; column_count];
    let mut placed = Vec::with_capacity(names.len());

    for (idx, name) in names.iter().enumerate() {
        let name = name.as_ref();
        let column = (idx / per_column).min(column_count - 1);
        let row = rows_used[column];
        rows_used[column] += 1;

        let drawn = rng
            .as_mut()
            .map(|rng| params.palette[rng.random_range(0..params.palette.len())].as_str());
        let color = params
            .override_for(name)
            .or(drawn)
            .unwrap_or_else(|| params.palette[column % params.palette.len()].as_str());

        placed.push(PositionedName {
            name: name.to_string(),
            column,
            row,
            x: grid.x(column).ok_or(LayoutError::Overflow)?,
            y: grid.y(row).ok_or(LayoutError::Overflow)?,
            color: color.to_string(),
        });
    }

    let max_rows = rows_used.iter().copied().max().unwrap_or(0);
    let height = as_coord(max_rows)
        .checked_mul(params.line_height)
        .and_then(|rows| params.margin.checked_mul(2)?.checked_add(rows))
        .ok_or(LayoutError::Overflow)?;
    debug!(
        name_count = placed.len(),
        column_count,
        per_column,
        height,
        "laid out label sheet"
    );
    Ok(LabelLayout {
        width: params.width,
        height,
        column_count,
        names: placed,
    })
}

/// Column and row geometry derived from the layout parameters.
struct ColumnGrid {
    margin: i64,
    column_gap: i64,
    column_width: i64,
    font_size: i64,
    line_height: i64,
}

impl ColumnGrid {
    fn new(params: &LayoutParams, column_count: usize) -> Result<Self, LayoutError> {
        let columns = as_coord(column_count);
        let usable = params
            .margin
            .checked_mul(2)
            .and_then(|edges| params.width.checked_sub(edges))
            .and_then(|rest| rest.checked_sub(params.column_gap.checked_mul(columns - 1)?))
            .ok_or(LayoutError::Overflow)?;
        Ok(Self {
            margin: params.margin,
            column_gap: params.column_gap,
            column_width: usable / columns,
            font_size: params.font_size,
            line_height: params.line_height,
        })
    }

    /// Center of `column`, `None` on overflow.
    fn x(&self, column: usize) -> Option<i64> {
        let pitch = self.column_width.checked_add(self.column_gap)?;
        as_coord(column)
            .checked_mul(pitch)?
            .checked_add(self.margin)?
            .checked_add(self.column_width / 2)
    }

    /// Baseline of `row`, `None` on overflow.
    fn y(&self, row: usize) -> Option<i64> {
        as_coord(row)
            .checked_mul(self.line_height)?
            .checked_add(self.margin)?
            .checked_add(self.font_size)
    }
}

fn as_coord(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
