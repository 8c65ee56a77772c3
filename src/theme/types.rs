//! Theme and settings type definitions.

use ratatui::style::Color;

use crate::state::ViewMode;

/// Application color palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values, suitable for direct use
/// with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind overlays.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component borders (level 1).
    pub surface1: Color,
    /// Subtle surface color for component borders (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color for interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings and focused borders.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for selection bars.
    pub lavender: Color,
}

impl Default for Theme {
    /// Built-in dark palette (Catppuccin Mocha).
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// How the minimum distance between the price bounds is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceGapMode {
    /// Fixed amount in ISK.
    Fixed,
    /// Ten percent of the observed catalog price range.
    Percent,
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Surface shown at startup.
    pub default_view: ViewMode,
    /// Gap derivation mode for the price slider pair.
    pub price_gap_mode: PriceGapMode,
    /// Fixed minimum gap in ISK, used in [`PriceGapMode::Fixed`].
    pub price_gap_fixed: u64,
}

impl Default for Settings {
    /// Table view, fixed 100 ISK gap.
    fn default() -> Self {
        Self {
            default_view: ViewMode::Table,
            price_gap_mode: PriceGapMode::Fixed,
            price_gap_fixed: 100,
        }
    }
}
