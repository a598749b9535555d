//! Application state
//!
//! The stored check state is deliberately minimal: pending (with the id of
//! the outstanding request), a resolved latest version, or a failure
//! message. Everything the view shows is derived from it on demand.

use chrono::{DateTime, Utc};
use semver::Version;

use crate::config::Config;
use crate::host::HostInfo;
use crate::theme::ThemeFlag;
use crate::update::CheckOutcome;

/// Stored state of the version lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckState {
    /// A lookup is outstanding; `request` identifies it.
    Pending {
        /// Id of the outstanding request.
        request: u64,
    },
    /// The endpoint reported this latest published version.
    Resolved(Version),
    /// The last lookup failed with this message.
    Failed(String),
}

/// Render-ready summary of the check, derived from [`CheckState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// A lookup is in flight; show the spinner, disable recheck.
    Checking,
    /// A strictly newer version exists.
    UpdateAvailable(Version),
    /// Running the latest version; carries the humanized build age.
    UpToDate(String),
    /// The last lookup failed; recheck is enabled.
    CheckFailed(String),
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Running version and build stamp, injected at startup
    pub host: HostInfo,

    /// Dark/light flag
    pub theme: ThemeFlag,

    /// State of the version lookup
    pub check: CheckState,

    /// Current spinner animation frame
    pub spinner_frame: usize,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Highest request id issued so far
    next_request: u64,
}

impl App {
    /// Create the app with the initial check already pending.
    ///
    /// The caller is expected to spawn the lookup for
    /// [`Self::pending_request`] right away.
    #[must_use]
    pub const fn new(config: Config, host: HostInfo, theme: ThemeFlag) -> Self {
        Self {
            config,
            host,
            theme,
            check: CheckState::Pending { request: 1 },
            spinner_frame: 0,
            should_quit: false,
            next_request: 1,
        }
    }

    /// Id of the outstanding request, if a lookup is in flight.
    #[must_use]
    pub const fn pending_request(&self) -> Option<u64> {
        match self.check {
            CheckState::Pending { request } => Some(request),
            CheckState::Resolved(_) | CheckState::Failed(_) => None,
        }
    }

    /// Whether a lookup is outstanding (the recheck control is disabled).
    #[must_use]
    pub const fn checking(&self) -> bool {
        self.pending_request().is_some()
    }

    /// Request a new version lookup.
    ///
    /// While a lookup is outstanding this is a no-op and returns `None`.
    /// Otherwise the previous result is cleared first, then a fresh request
    /// id is issued for the caller to spawn; the view observes the pending
    /// state before any network activity starts.
    pub fn recheck(&mut self) -> Option<u64> {
        if self.checking() {
            return None;
        }

        self.next_request += 1;
        self.check = CheckState::Pending {
            request: self.next_request,
        };
        Some(self.next_request)
    }

    /// Apply a delivered lookup outcome.
    ///
    /// Outcomes whose request id does not match the outstanding request are
    /// from superseded attempts and are discarded.
    pub fn on_outcome(&mut self, outcome: CheckOutcome) {
        let Some(pending) = self.pending_request() else {
            tracing::debug!(request = outcome.request, "ignoring outcome: no check pending");
            return;
        };
        if outcome.request != pending {
            tracing::debug!(
                request = outcome.request,
                pending,
                "discarding stale check outcome"
            );
            return;
        }

        self.check = match outcome.result {
            Ok(latest) => CheckState::Resolved(latest),
            Err(err) => CheckState::Failed(err.to_string()),
        };
    }

    /// Derive the render-ready presentation of the check at `now`.
    #[must_use]
    pub fn presentation(&self, now: DateTime<Utc>) -> Presentation {
        match &self.check {
            CheckState::Pending { .. } => Presentation::Checking,
            CheckState::Resolved(latest) if *latest > self.host.version => {
                Presentation::UpdateAvailable(latest.clone())
            }
            CheckState::Resolved(_) => Presentation::UpToDate(self.host.build.age(now)),
            CheckState::Failed(message) => Presentation::CheckFailed(message.clone()),
        }
    }

    /// Flip the theme flag. Never touches check state.
    pub const fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Advance the spinner animation by one frame.
    pub const fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Mark the application for shutdown.
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}
