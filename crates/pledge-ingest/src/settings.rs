//! `settings.conf` loading.
//!
//! The file is a list of `KEY=VALUE` lines. Blank lines, `#` comments, lines
//! without `=` and unknown keys are ignored. A missing file means defaults.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use pledge_model::{Settings, SettingsError};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "settings.conf";

/// Loads and validates settings from `path`, falling back to defaults when the
/// file does not exist.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no settings file found, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    info!(path = %path.display(), "loading settings");
    let settings = parse_settings(&contents);
    settings.validate()?;
    Ok(settings)
}

/// Applies every recognized line of `contents` on top of the defaults.
///
/// Does not validate; see [`Settings::validate`].
pub fn parse_settings(contents: &str) -> Settings {
    let mut settings = Settings::default();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            debug!(line, "ignoring settings line without '='");
            continue;
        };
        apply_setting(&mut settings, key.trim(), value.trim());
    }
    settings
}

fn apply_setting(settings: &mut Settings, key: &str, value: &str) {
    let layout = &mut settings.layout;
    match key {
        "EXPORT_SVG" => settings.export_svg = parse_bool(value),
        "EXPORT_TXT" => settings.export_txt = parse_bool(value),
        "OUTPUT_DIR" => settings.output_dir = value.to_string(),
        "DEFAULT_CSV_FILE" => settings.default_csv_file = value.to_string(),
        "SVG_WIDTH" => set_int(key, value, &mut layout.width),
        "SVG_MARGIN_TO_EDGE" => set_int(key, value, &mut layout.margin),
        "SVG_COLUMN_GAP" => set_int(key, value, &mut layout.column_gap),
        "SVG_FONTSIZE" => set_int(key, value, &mut layout.font_size),
        "SVG_LINEHEIGHT" => set_int(key, value, &mut layout.line_height),
        "SVG_COLUMNS" => set_int(key, value, &mut layout.columns),
        "SVG_FONTFAMILY" => layout.font_family = value.to_string(),
        "SVG_COLUMN_COLORS" => layout.palette = parse_color_list(value),
        "SVG_RANDOMIZE_COLORS" => layout.randomize_colors = parse_bool(value),
        "USER_COLOR_MAP" => layout.color_overrides = parse_color_map(value),
        _ => debug!(key, "ignoring unknown setting"),
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn set_int(key: &str, value: &str, target: &mut i64) {
    match value.parse::<i64>() {
        Ok(parsed) => *target = parsed,
        Err(_) => warn!(key, value, default = *target, "invalid integer, keeping default"),
    }
}

/// Splits `#111, #222,#333` into trimmed, non-empty colors.
pub fn parse_color_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `alice:#fff,bob:#000`. Pairs without `:` are skipped.
pub fn parse_color_map(value: &str) -> BTreeMap<String, String> {
    value
        .split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(name, color)| (name.trim().to_string(), color.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values_are_case_insensitive() {
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("true"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn invalid_integer_keeps_default() {
        let settings = parse_settings("SVG_WIDTH=wide\nSVG_COLUMNS=4\n");
        assert_eq!(settings.layout.width, 1161);
        assert_eq!(settings.layout.columns, 4);
    }

    #[test]
    fn color_map_skips_pairs_without_separator() {
        let map = parse_color_map("alice:#fff, broken ,bob : #000");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("alice").map(String::as_str), Some("#fff"));
        assert_eq!(map.get("bob").map(String::as_str), Some("#000"));
    }

    #[test]
    fn color_value_may_contain_colons() {
        let map = parse_color_map("carol:rgb(1:2:3)");
        assert_eq!(map.get("carol").map(String::as_str), Some("rgb(1:2:3)"));
    }

    #[test]
    fn color_list_trims_and_drops_blanks() {
        assert_eq!(parse_color_list("#111, #222,,#333 "), vec!["#111", "#222", "#333"]);
        assert!(parse_color_list("").is_empty());
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let settings = parse_settings("SVG_FONTFAMILY=a=b\n");
        assert_eq!(settings.layout.font_family, "a=b");
    }
}
