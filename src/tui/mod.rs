//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the form widget using Ratatui.

pub mod bmi_form;
pub mod component;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::APP_NAME;

// Re-export TUI components
pub use bmi_form::{BmiForm, BmiFormEvent, FormField, FormOutcome};
pub use component::Component;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state - single source of truth
///
/// The form owns the input and outcome state; everything here is read by the
/// renderer and only modified by [`AppState::handle_key`].
pub struct AppState {
    /// BMI form (inputs, focus, last outcome)
    pub form: BmiForm,
    /// Current UI theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Status bar message
    pub status_message: String,
    /// Whether the main loop should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new application state with an empty form.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            form: BmiForm::new(),
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            status_message: "Enter your height and weight, then press Enter.".to_string(),
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Routes a key press to the form and applies the emitted event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(event) = self.form.handle_input(key) else {
            return;
        };

        match event {
            BmiFormEvent::Calculated(result) => {
                info!(
                    bmi = %result.display_value(),
                    category = %result.category(),
                    "BMI calculated"
                );
                self.set_status(format!(
                    "BMI {} ({})",
                    result.display_value(),
                    result.category()
                ));
            }
            BmiFormEvent::Rejected(error) => {
                debug!(?error, "input rejected");
                self.set_status("Check your input.");
            }
            BmiFormEvent::Reset => {
                self.set_status("Form cleared.");
            }
            BmiFormEvent::Quit => {
                self.should_quit = true;
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("terminal UI started");

    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => state.handle_key(key),
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("terminal UI stopped");
    Ok(())
}

/// Render the whole screen: title bar, form, status bar.
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let status_height = if state.config.ui.show_key_hints { 3 } else { 2 };
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar
            Constraint::Min(10),               // Form
            Constraint::Length(status_height), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], &state.theme);
    state.form.render(f, chunks[1], &state.theme);
    StatusBar::render(f, chunks[2], state, &state.theme);
}

/// Render title bar with application name and version
fn render_title_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = format!(" {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let title_widget = Paragraph::new(title)
        .style(Style::default().fg(theme.primary).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn test_state() -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        AppState::new(config)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_state_uses_configured_theme() {
        let state = test_state();
        assert_eq!(state.theme, Theme::dark());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_calculate_flow_updates_status() {
        let mut state = test_state();
        type_text(&mut state, "170");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "70");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.status_message, "BMI 24.2 (Normal)");
        assert!(state.form.result().is_some());
    }

    #[test]
    fn test_rejected_flow_updates_status() {
        let mut state = test_state();
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.status_message, "Check your input.");
        assert!(state.form.error().is_some());
    }

    #[test]
    fn test_escape_quits() {
        let mut state = test_state();
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);
    }

    #[test]
    fn test_render_full_screen() {
        let mut state = test_state();
        state.form.set_height("180");
        state.form.set_weight("100");
        press(&mut state, KeyCode::Enter);

        let screen = screen(&state);
        assert!(screen.contains(APP_NAME));
        assert!(screen.contains("30.9"));
        assert!(screen.contains("Obese"));
        assert!(screen.contains("Ctrl+R"));
    }

    #[test]
    fn test_key_hints_can_be_hidden() {
        let mut state = test_state();
        state.config.ui.show_key_hints = false;
        assert!(!screen(&state).contains("Ctrl+R"));
    }
}
