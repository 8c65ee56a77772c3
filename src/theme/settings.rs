//! Settings access: parse `settings.conf`, writing a commented skeleton on
//! first run so users have something to edit.

use std::fs;

use crate::state::ViewMode;

use super::paths::settings_path;
use super::types::{PriceGapMode, Settings};

/// Skeleton written when no settings file exists yet.
pub(crate) const SETTINGS_SKELETON: &str = "\
# Blossi settings\n\
#\n\
# default_view: surface shown at startup; table or cards\n\
default_view = table\n\
#\n\
# price_gap_mode: minimum distance kept between the two price bounds;\n\
#   fixed   = price_gap_fixed kronur\n\
#   percent = 10% of the observed catalog price range\n\
price_gap_mode = fixed\n\
price_gap_fixed = 100\n\
";

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check.
///
/// Output: `true` for empty lines and `#`/`//`/`;` comments.
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a `key = value` line.
///
/// Inputs:
/// - `line`: Raw line.
///
/// Output: Trimmed `(key, value)` pair, or `None` without an `=`.
fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, '=');
    let key = parts.next()?.trim().to_lowercase().replace(['.', '-', ' '], "_");
    let value = parts.next()?.trim().to_string();
    Some((key, value))
}

/// What: Apply one settings line onto the output struct.
///
/// Inputs:
/// - `out`: Settings being built.
/// - `key`, `val`: Parsed pair.
///
/// Output: none; unknown keys and unparsable values are ignored so a stale
/// file never breaks startup.
fn apply_setting(out: &mut Settings, key: &str, val: &str) {
    match key {
        "default_view" => match val.to_lowercase().as_str() {
            "cards" | "card" => out.default_view = ViewMode::Cards,
            "table" => out.default_view = ViewMode::Table,
            _ => {}
        },
        "price_gap_mode" => match val.to_lowercase().as_str() {
            "percent" => out.price_gap_mode = PriceGapMode::Percent,
            "fixed" => out.price_gap_mode = PriceGapMode::Fixed,
            _ => {}
        },
        "price_gap_fixed" => {
            if let Ok(v) = val.parse::<u64>() {
                out.price_gap_fixed = v.max(1);
            }
        }
        _ => {}
    }
}

/// What: Load user settings, writing the skeleton when the file is missing.
///
/// Inputs: none
///
/// Output: Parsed [`Settings`]; defaults for anything missing or invalid.
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let path = settings_path();
    if !path.is_file() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        let _ = fs::write(&path, SETTINGS_SKELETON);
    }
    let Ok(content) = fs::read_to_string(&path) else {
        return out;
    };
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        if let Some((key, val)) = parse_key_value(line) {
            apply_setting(&mut out, &key, &val);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Settings lines parse and unknown keys are ignored
    ///
    /// - Input: cards view, percent gap, a junk key, a comment
    /// - Output: Parsed values applied; defaults untouched otherwise
    fn apply_setting_known_keys() {
        let mut s = Settings::default();
        for line in [
            "# athugasemd",
            "default_view = cards",
            "price_gap_mode = percent",
            "price_gap_fixed = 250",
            "nonsense = 42",
        ] {
            if skip_comment_or_empty(line) {
                continue;
            }
            if let Some((k, v)) = parse_key_value(line) {
                apply_setting(&mut s, &k, &v);
            }
        }
        assert_eq!(s.default_view, ViewMode::Cards);
        assert_eq!(s.price_gap_mode, PriceGapMode::Percent);
        assert_eq!(s.price_gap_fixed, 250);
    }

    #[test]
    /// What: First run writes the skeleton and loads defaults from it
    ///
    /// - Input: HOME pointed at an empty scratch directory
    /// - Output: settings.conf exists; parsed values equal the defaults
    fn skeleton_written_on_first_run() {
        let _guard = crate::theme::test_mutex().lock().expect("mutex");
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("HOME", base.path()) };
        let s = settings();
        assert!(super::settings_path().is_file());
        assert_eq!(s.default_view, ViewMode::Table);
        assert_eq!(s.price_gap_mode, PriceGapMode::Fixed);
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
