//! Terminal User Interface for upcheck

pub mod render;

use anyhow::Result;
use ratatui::crossterm::{
    event::{KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc;

use crate::app::{App, Event, Handler};
use crate::update::{CheckOutcome, Checker};

/// Run the TUI application
///
/// Sets up the terminal, triggers the initial version check, runs the event
/// loop and restores the terminal on the way out.
///
/// # Errors
///
/// Returns an error if terminal setup, rendering or event polling fails.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let checker = Checker::new(app.config.endpoint.clone(), &app.host.version);
    let (tx, rx) = mpsc::channel();

    // The app mounts with the first check already pending; start it now.
    if let Some(request) = app.pending_request() {
        checker.spawn(request, tx.clone());
    }

    let result = run_loop(&mut terminal, &mut app, &event_handler, &checker, &tx, &rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    checker: &Checker,
    tx: &mpsc::Sender<CheckOutcome>,
    rx: &mpsc::Receiver<CheckOutcome>,
) -> Result<()> {
    loop {
        while let Ok(outcome) = rx.try_recv() {
            app.on_outcome(outcome);
        }

        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => app.tick(),
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release {
                    handle_key_event(app, checker, tx, key.code, key.modifiers);
                }
            }
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key_event(
    app: &mut App,
    checker: &Checker,
    tx: &mpsc::Sender<CheckOutcome>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('r') => {
            // No-op while a check is outstanding; otherwise the state is
            // cleared to pending before the lookup starts.
            if let Some(request) = app.recheck() {
                checker.spawn(request, tx.clone());
            }
        }
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::host::{BuildStamp, HostInfo};
    use crate::theme::ThemeFlag;
    use semver::Version;

    fn test_app() -> App {
        let host = HostInfo {
            version: Version::new(1, 0, 0),
            build: BuildStamp::Label("test".to_string()),
        };
        App::new(Config::default(), host, ThemeFlag::unset())
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = test_app();
            let checker = Checker::new("http://127.0.0.1:9", &app.host.version);
            let (tx, _rx) = mpsc::channel();
            handle_key_event(&mut app, &checker, &tx, code, KeyModifiers::NONE);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        let checker = Checker::new("http://127.0.0.1:9", &app.host.version);
        let (tx, _rx) = mpsc::channel();
        handle_key_event(
            &mut app,
            &checker,
            &tx,
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_recheck_key_is_noop_while_pending() {
        let mut app = test_app();
        let checker = Checker::new("http://127.0.0.1:9", &app.host.version);
        let (tx, rx) = mpsc::channel();

        handle_key_event(
            &mut app,
            &checker,
            &tx,
            KeyCode::Char('r'),
            KeyModifiers::NONE,
        );
        assert_eq!(app.pending_request(), Some(1));

        // No lookup was spawned for the ignored request: dropping our
        // sender leaves the channel closed.
        drop(tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_theme_key_toggles() {
        let mut app = test_app();
        let checker = Checker::new("http://127.0.0.1:9", &app.host.version);
        let (tx, _rx) = mpsc::channel();

        handle_key_event(
            &mut app,
            &checker,
            &tx,
            KeyCode::Char('t'),
            KeyModifiers::NONE,
        );
        assert!(app.theme.is_dark());
    }
}
