//! BMI form component.
//!
//! Owns the two text inputs, the focused control, and the outcome of the last
//! calculation. The outcome is either a result or a validation message, never
//! both.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use crate::bmi::{evaluate, BmiResult, ValidationError};
use crate::tui::theme::Theme;
use crate::tui::Component;

/// Focusable control in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Height input (centimeters)
    #[default]
    Height,
    /// Weight input (kilograms)
    Weight,
    /// Calculate button
    Calculate,
    /// Reset button
    Reset,
}

impl FormField {
    /// Get the next control in tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Height => Self::Weight,
            Self::Weight => Self::Calculate,
            Self::Calculate => Self::Reset,
            Self::Reset => Self::Height,
        }
    }

    /// Get the previous control in tab order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Height => Self::Reset,
            Self::Weight => Self::Height,
            Self::Calculate => Self::Weight,
            Self::Reset => Self::Calculate,
        }
    }

    /// Get the control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
            Self::Calculate => "Calculate",
            Self::Reset => "Reset",
        }
    }

    /// Placeholder shown while an input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Height => "Enter your height",
            Self::Weight => "Enter your weight",
            Self::Calculate | Self::Reset => "",
        }
    }

    /// Whether this control is a text input.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Height | Self::Weight)
    }
}

/// What the form currently displays below the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormOutcome {
    /// Nothing calculated yet, or cleared by reset
    #[default]
    Empty,
    /// Last calculation succeeded
    Result(BmiResult),
    /// Last calculation was rejected
    Error(ValidationError),
}

/// Events emitted by the BMI form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BmiFormEvent {
    /// A calculation produced a result
    Calculated(BmiResult),
    /// A calculation was rejected by validation
    Rejected(ValidationError),
    /// Inputs and outcome were cleared
    Reset,
    /// User asked to leave the application
    Quit,
}

/// BMI form component state
#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    height: String,
    weight: String,
    focus: FormField,
    outcome: FormOutcome,
    quit_requested: bool,
}

impl BmiForm {
    /// Creates an empty form with the height input focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw height text.
    #[must_use]
    pub fn height(&self) -> &str {
        &self.height
    }

    /// Raw weight text.
    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// Replaces the height text.
    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
    }

    /// Replaces the weight text.
    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    /// Currently focused control.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Moves focus to a specific control.
    pub fn focus_on(&mut self, field: FormField) {
        self.focus = field;
    }

    /// Outcome of the last calculation.
    #[must_use]
    pub const fn outcome(&self) -> &FormOutcome {
        &self.outcome
    }

    /// Last result, if the last calculation succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&BmiResult> {
        match &self.outcome {
            FormOutcome::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Last validation error, if the last calculation was rejected.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        match self.outcome {
            FormOutcome::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Move focus to the next control.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous control.
    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Text of the focused input, or `None` when a button is focused.
    fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Height => Some(&mut self.height),
            FormField::Weight => Some(&mut self.weight),
            FormField::Calculate | FormField::Reset => None,
        }
    }

    /// Appends a character to the focused input.
    ///
    /// Only characters that can appear in a decimal number are accepted.
    /// Returns `true` if the character was inserted.
    pub fn push_char(&mut self, c: char) -> bool {
        if !is_numeric_char(c) {
            return false;
        }
        match self.focused_input_mut() {
            Some(input) => {
                input.push(c);
                true
            }
            None => false,
        }
    }

    /// Removes the last character of the focused input.
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.pop();
        }
    }

    /// Evaluates the current inputs and stores the outcome.
    ///
    /// A success replaces any previous error and vice versa.
    pub fn calculate(&mut self) -> Result<BmiResult, ValidationError> {
        let outcome = evaluate(&self.height, &self.weight);
        self.outcome = match outcome {
            Ok(result) => FormOutcome::Result(result),
            Err(error) => FormOutcome::Error(error),
        };
        debug!(
            height = %self.height,
            weight = %self.weight,
            outcome = ?self.outcome,
            "calculated BMI"
        );
        outcome
    }

    /// Clears both inputs and the outcome, and focuses the height input.
    pub fn reset(&mut self) {
        self.height.clear();
        self.weight.clear();
        self.outcome = FormOutcome::Empty;
        self.focus = FormField::Height;
        debug!("form reset");
    }

    fn activate(&mut self) -> BmiFormEvent {
        if self.focus == FormField::Reset {
            self.reset();
            return BmiFormEvent::Reset;
        }
        match self.calculate() {
            Ok(result) => BmiFormEvent::Calculated(result),
            Err(error) => BmiFormEvent::Rejected(error),
        }
    }

    fn quit(&mut self) -> BmiFormEvent {
        self.quit_requested = true;
        BmiFormEvent::Quit
    }
}

/// Characters a numeric input accepts.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

impl Component for BmiForm {
    type Event = BmiFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => Some(self.quit()),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                self.reset();
                Some(BmiFormEvent::Reset)
            }
            (KeyCode::Tab | KeyCode::Down, _) => {
                self.next_field();
                None
            }
            (KeyCode::BackTab | KeyCode::Up, _) => {
                self.previous_field();
                None
            }
            (KeyCode::Left | KeyCode::Right, _) if !self.focus.is_input() => {
                self.focus = match self.focus {
                    FormField::Calculate => FormField::Reset,
                    _ => FormField::Calculate,
                };
                None
            }
            (KeyCode::Enter, _) => Some(self.activate()),
            (KeyCode::Char(' '), _) if !self.focus.is_input() => Some(self.activate()),
            (KeyCode::Char('q'), KeyModifiers::NONE) if !self.focus.is_input() => {
                Some(self.quit())
            }
            (KeyCode::Backspace, _) => {
                self.backspace();
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.push_char(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let card_area = centered_rect(60, 80, area);

        f.render_widget(Clear, card_area);

        let card = Block::default()
            .title(" BMI Calculator ")
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        let inner_area = card.inner(card_area);
        f.render_widget(card, card_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Length(3), // Height
                Constraint::Length(3), // Weight
                Constraint::Length(3), // Buttons
                Constraint::Min(3),    // Outcome
            ])
            .margin(1)
            .split(inner_area);

        let description = Paragraph::new("Enter your height and weight to calculate your BMI.")
            .style(Style::default().fg(theme.text_secondary))
            .wrap(Wrap { trim: true });
        f.render_widget(description, chunks[0]);

        self.render_input(f, chunks[1], FormField::Height, &self.height, theme);
        self.render_input(f, chunks[2], FormField::Weight, &self.weight, theme);
        self.render_buttons(f, chunks[3], theme);
        self.render_outcome(f, chunks[4], theme);
    }

    fn should_close(&self) -> bool {
        self.quit_requested
    }
}

impl BmiForm {
    fn render_input(&self, f: &mut Frame, area: Rect, field: FormField, value: &str, theme: &Theme) {
        let is_active = self.focus == field;

        let border_style = if is_active {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let text = if value.is_empty() && !is_active {
            Span::styled(field.placeholder(), Style::default().fg(theme.text_muted))
        } else if is_active {
            Span::styled(format!("{value}█"), Style::default().fg(theme.text))
        } else {
            Span::styled(value.to_string(), Style::default().fg(theme.text))
        };

        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        f.render_widget(Paragraph::new(Line::from(text)).block(block), area);
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(35),
                Constraint::Percentage(10),
                Constraint::Percentage(35),
                Constraint::Percentage(10),
            ])
            .split(area);

        for (field, column) in [(FormField::Calculate, columns[1]), (FormField::Reset, columns[3])] {
            let is_active = self.focus == field;
            let style = if is_active {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let border_style = if is_active {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_muted)
            };

            let button = Paragraph::new(field.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                );
            f.render_widget(button, column);
        }
    }

    fn render_outcome(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = match &self.outcome {
            FormOutcome::Empty => return,
            FormOutcome::Error(error) => vec![Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(theme.error),
            ))],
            FormOutcome::Result(result) => vec![
                Line::from(Span::styled(
                    result.display_value(),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    result.category().label(),
                    Style::default().fg(theme.category_color(result.category())),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(form: &mut BmiForm, text: &str) {
        for c in text.chars() {
            form.handle_input(key(KeyCode::Char(c)));
        }
    }

    fn filled_form(height: &str, weight: &str) -> BmiForm {
        let mut form = BmiForm::new();
        form.set_height(height);
        form.set_weight(weight);
        form
    }

    /// Renders the form and returns the screen, one line per terminal row.
    fn render_to_string(form: &BmiForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                form.render(f, area, &Theme::dark());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_state() {
        let form = BmiForm::new();
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
        assert_eq!(form.focus(), FormField::Height);
        assert_eq!(form.outcome(), &FormOutcome::Empty);
        assert!(!form.should_close());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = BmiForm::new();
        type_text(&mut form, "170");
        form.handle_input(key(KeyCode::Tab));
        type_text(&mut form, "70.5");

        assert_eq!(form.height(), "170");
        assert_eq!(form.weight(), "70.5");
    }

    #[test]
    fn test_non_numeric_characters_are_ignored() {
        let mut form = BmiForm::new();
        type_text(&mut form, "1a7b0 ");
        assert_eq!(form.height(), "170");
        assert!(!form.push_char('x'));
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut form = filled_form("175", "80");
        form.handle_input(key(KeyCode::Backspace));
        assert_eq!(form.height(), "17");
        assert_eq!(form.weight(), "80");
    }

    #[test]
    fn test_focus_cycles_through_controls() {
        let mut form = BmiForm::new();
        let order = [
            FormField::Weight,
            FormField::Calculate,
            FormField::Reset,
            FormField::Height,
        ];
        for expected in order {
            form.handle_input(key(KeyCode::Tab));
            assert_eq!(form.focus(), expected);
        }

        form.handle_input(key(KeyCode::BackTab));
        assert_eq!(form.focus(), FormField::Reset);
    }

    #[test]
    fn test_enter_calculates() {
        let mut form = filled_form("170", "70");
        let event = form.handle_input(key(KeyCode::Enter));

        let result = *form.result().unwrap();
        assert_eq!(event, Some(BmiFormEvent::Calculated(result)));
        assert_eq!(result.display_value(), "24.2");
        assert_eq!(result.category(), BmiCategory::Normal);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_enter_with_missing_input_reports_error() {
        let mut form = filled_form("", "70");
        let event = form.handle_input(key(KeyCode::Enter));

        assert_eq!(
            event,
            Some(BmiFormEvent::Rejected(ValidationError::MissingInput))
        );
        assert_eq!(form.error(), Some(ValidationError::MissingInput));
        assert!(form.result().is_none());
    }

    #[test]
    fn test_error_and_result_are_mutually_exclusive() {
        let mut form = filled_form("180", "100");
        form.calculate().unwrap();
        assert!(form.result().is_some());

        form.set_weight("-10");
        assert_eq!(form.calculate(), Err(ValidationError::InvalidWeight));
        assert!(form.result().is_none());
        assert_eq!(form.error(), Some(ValidationError::InvalidWeight));

        form.set_weight("100");
        form.calculate().unwrap();
        assert!(form.error().is_none());
        assert_eq!(form.result().unwrap().category(), BmiCategory::Obese);
    }

    #[test]
    fn test_reset_button_clears_everything() {
        let mut form = filled_form("150", "40");
        form.calculate().unwrap();
        form.focus_on(FormField::Reset);

        let event = form.handle_input(key(KeyCode::Enter));

        assert_eq!(event, Some(BmiFormEvent::Reset));
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
        assert_eq!(form.outcome(), &FormOutcome::Empty);
        assert_eq!(form.focus(), FormField::Height);
    }

    #[test]
    fn test_reset_clears_error_state() {
        let mut form = filled_form("0", "70");
        assert!(form.calculate().is_err());

        form.handle_input(ctrl('r'));

        assert_eq!(form.outcome(), &FormOutcome::Empty);
        assert_eq!(form.height(), "");
    }

    #[test]
    fn test_reset_on_empty_form_is_harmless() {
        let mut form = BmiForm::new();
        form.reset();
        assert_eq!(form.outcome(), &FormOutcome::Empty);
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
    }

    #[test]
    fn test_calculate_button_with_space() {
        let mut form = filled_form("180", "100");
        form.focus_on(FormField::Calculate);
        let event = form.handle_input(key(KeyCode::Char(' ')));
        assert!(matches!(event, Some(BmiFormEvent::Calculated(_))));
    }

    #[test]
    fn test_arrow_keys_switch_buttons() {
        let mut form = BmiForm::new();
        form.focus_on(FormField::Calculate);
        form.handle_input(key(KeyCode::Right));
        assert_eq!(form.focus(), FormField::Reset);
        form.handle_input(key(KeyCode::Left));
        assert_eq!(form.focus(), FormField::Calculate);
    }

    #[test]
    fn test_quit_keys() {
        let mut form = BmiForm::new();
        assert_eq!(form.handle_input(key(KeyCode::Esc)), Some(BmiFormEvent::Quit));
        assert!(form.should_close());

        let mut form = BmiForm::new();
        assert_eq!(form.handle_input(ctrl('c')), Some(BmiFormEvent::Quit));

        // 'q' is ignored as text input but quits from a button
        let mut form = BmiForm::new();
        assert_eq!(form.handle_input(key(KeyCode::Char('q'))), None);
        form.focus_on(FormField::Reset);
        assert_eq!(form.handle_input(key(KeyCode::Char('q'))), Some(BmiFormEvent::Quit));
    }

    #[test]
    fn test_render_shows_placeholders_and_labels() {
        let mut form = BmiForm::new();
        form.focus_on(FormField::Calculate);
        let screen = render_to_string(&form);

        assert!(screen.contains("BMI Calculator"));
        assert!(screen.contains("Height (cm)"));
        assert!(screen.contains("Weight (kg)"));
        // Placeholders sit right after the input border; the card description
        // also starts with "Enter your height" but is not inside a box
        assert!(screen
            .lines()
            .any(|line| line.contains("│Enter your height") && !line.contains("and weight")));
        assert!(screen.contains("│Enter your weight"));
        assert!(screen.contains("Calculate"));
        assert!(screen.contains("Reset"));
    }

    #[test]
    fn test_render_shows_result_without_error() {
        let mut form = filled_form("170", "70");
        form.calculate().unwrap();
        let screen = render_to_string(&form);

        assert!(screen.contains("24.2"));
        assert!(screen.contains("Normal"));
        assert!(!screen.contains("must be a positive number"));
    }

    #[test]
    fn test_render_shows_error_without_result() {
        let mut form = filled_form("170", "0");
        let _ = form.calculate();
        let screen = render_to_string(&form);

        assert!(screen.contains("Weight must be a positive number."));
        assert!(!screen.contains("Underweight"));
    }
}
