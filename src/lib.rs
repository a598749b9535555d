//! upcheck - Terminal about panel with release update checks
//!
//! upcheck renders a single about screen: the running version, a humanized
//! build age, and whether a newer release is published on the configured
//! endpoint. Checks run off the event loop; results from superseded checks
//! are discarded.

pub mod app;
pub mod config;
pub mod host;
pub mod paths;
pub mod theme;
pub mod tui;
pub mod update;

pub use app::{App, CheckState, Presentation};
pub use config::Config;
pub use host::{BuildStamp, HostInfo};
pub use theme::ThemeFlag;
