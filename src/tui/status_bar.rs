//! Status bar widget for displaying status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Key hints shown in the status bar, as (key, action) pairs.
pub const KEY_HINTS: [(&str, &str); 5] = [
    ("Tab", "next"),
    ("Enter", "calculate"),
    ("Ctrl+R", "reset"),
    ("Esc", "quit"),
    ("Shift+Tab", "previous"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the last status message and key hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines = vec![Line::from(Span::styled(
            state.status_message.clone(),
            Style::default().fg(theme.text),
        ))];

        if state.config.ui.show_key_hints {
            let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
            for (key, action) in KEY_HINTS {
                spans.push(Span::styled(
                    key,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {action}  "),
                    Style::default().fg(theme.text_muted),
                ));
            }
            lines.push(Line::from(spans));
        }

        let status = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_muted)),
        );
        f.render_widget(status, area);
    }
}
