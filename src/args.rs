//! Command-line argument definition.

use clap::Parser;

use crate::state::ViewMode;

/// Blossi - a terminal browser for the fireworks catalog
#[derive(Parser, Debug)]
#[command(name = "blossi")]
#[command(version)]
#[command(about = "Browse, filter, and compare fireworks from a catalog file", long_about = None)]
pub struct Args {
    /// Path to the catalog JSON file
    #[arg(default_value = "catalog.json")]
    pub catalog: std::path::PathBuf,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Starting surface, overriding the configured default (table or cards)
    #[arg(long, value_parser = parse_view)]
    pub view: Option<ViewMode>,
}

/// What: Parse a `--view` value.
///
/// Inputs:
/// - `s`: Raw flag value.
///
/// Output:
/// - The matching [`ViewMode`], or an error string for anything else.
fn parse_view(s: &str) -> Result<ViewMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "table" => Ok(ViewMode::Table),
        "cards" => Ok(ViewMode::Cards),
        other => Err(format!("unknown view '{other}' (expected table or cards)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply when no flags are given
    ///
    /// - Input: Bare binary name
    /// - Output: catalog.json path, info level, no view override
    fn defaults() {
        let args = Args::parse_from(["blossi"]);
        assert_eq!(args.catalog, std::path::PathBuf::from("catalog.json"));
        assert_eq!(args.log_level, "info");
        assert!(args.view.is_none());
    }

    #[test]
    /// What: `--view` accepts both surfaces case-insensitively
    ///
    /// - Input: "--view Cards"
    /// - Output: ViewMode::Cards
    fn view_flag_parses() {
        let args = Args::parse_from(["blossi", "--view", "Cards"]);
        assert_eq!(args.view, Some(ViewMode::Cards));
    }

    #[test]
    /// What: An unknown view value is rejected
    ///
    /// - Input: "--view grid"
    /// - Output: Parse error
    fn view_flag_rejects_unknown() {
        assert!(Args::try_parse_from(["blossi", "--view", "grid"]).is_err());
    }

    #[test]
    /// What: A positional path replaces the default catalog location
    ///
    /// - Input: "blossi /tmp/x.json"
    /// - Output: That path
    fn positional_catalog_path() {
        let args = Args::parse_from(["blossi", "/tmp/x.json"]);
        assert_eq!(args.catalog, std::path::PathBuf::from("/tmp/x.json"));
    }
}
