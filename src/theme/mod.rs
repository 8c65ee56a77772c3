//! Theme palette, config paths, and user settings.

/// Path resolution for config directories.
mod paths;
/// Settings parsing and skeleton management.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::settings;
pub use types::{PriceGapMode, Settings, Theme};

/// What: Return the application's color palette.
///
/// Inputs: none
///
/// Output: The built-in palette. Kept behind an accessor so rendering code
/// does not construct palettes ad hoc.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Process-wide mutex serializing tests that mutate `HOME`.
///
/// Inputs: None
///
/// Output: Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
