//! Color palettes for the TUI
//!
//! Two fixed palettes, resolved from the theme flag at render time. Every
//! theme-dependent attribute lives here so a toggle switches all of them
//! together.

use ratatui::style::Color;

/// Named colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Headings and primary text
    pub text_primary: Color,
    /// Secondary text (status span next to the version)
    pub text_dim: Color,
    /// Footer text
    pub footer: Color,
    /// Logo and update highlight
    pub accent: Color,
    /// Enabled recheck control
    pub control: Color,
    /// Disabled recheck control
    pub control_disabled: Color,
    /// Failure messages
    pub error: Color,
}

/// Light palette (also used while the theme flag is unset).
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(0, 0, 0),
    text_dim: Color::Rgb(102, 102, 102),
    footer: Color::Rgb(68, 68, 68),
    accent: Color::Rgb(0, 118, 255),
    control: Color::Rgb(0, 118, 255),
    control_disabled: Color::Rgb(204, 204, 204),
    error: Color::Rgb(200, 80, 80),
};

/// Dark palette.
pub const DARK: Palette = Palette {
    background: Color::Rgb(31, 31, 31),
    text_primary: Color::Rgb(255, 255, 255),
    text_dim: Color::Rgb(204, 204, 204),
    footer: Color::Rgb(204, 204, 204),
    accent: Color::Rgb(80, 150, 255),
    control: Color::Rgb(80, 150, 255),
    control_disabled: Color::Rgb(90, 90, 90),
    error: Color::Rgb(220, 110, 110),
};

/// Resolve the palette for the given dark-mode flag.
#[must_use]
pub const fn palette(dark: bool) -> &'static Palette {
    if dark { &DARK } else { &LIGHT }
}
