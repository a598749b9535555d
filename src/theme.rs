//! Dark/light theme flag.
//!
//! The flag is tri-state: until something decides otherwise it is unset,
//! which renders with the light palette. It is seeded once at startup from
//! the CLI (falling back to the config file) and toggled at runtime.

/// Tri-state dark-mode flag: unset, light (`Some(false)`) or dark
/// (`Some(true)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeFlag(Option<bool>);

impl ThemeFlag {
    /// Flag with no decision yet.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Seed the flag: an explicit CLI choice wins, then the config value.
    #[must_use]
    pub fn seed(cli: Option<bool>, config: Option<bool>) -> Self {
        Self(cli.or(config))
    }

    /// Whether the dark palette is in effect. Unset renders light.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self.0, Some(true))
    }

    /// Whether a decision has been made at all.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0.is_some()
    }

    /// Flip between dark and light. An unset flag becomes dark, since
    /// unset was rendering light.
    pub const fn toggle(&mut self) {
        self.0 = Some(!self.is_dark());
    }
}
