//! Login/signup screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{AuthMode, FieldName};
use crate::session::LoginController;
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{ROW_HEIGHT, draw_form};

/// State for the login/signup screen.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    controller: LoginController,
    focus: FieldName,
}

impl LoginState {
    /// Creates a blank login form focused on the email field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &LoginController {
        &self.controller
    }

    /// Returns the field receiving keystrokes.
    pub fn focus(&self) -> FieldName {
        self.focus
    }

    fn focus_step(&mut self, forward: bool) {
        let fields = self.controller.active_fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % fields.len()
        } else {
            (pos + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let mut value = self.controller.form().field(self.focus).value().to_string();
        edit(&mut value);
        self.controller.update_field(self.focus, &value);
    }

    fn toggle_mode(&mut self) {
        self.controller.toggle_mode();
        if !self.controller.active_fields().contains(&self.focus) {
            self.focus = FieldName::Password;
        }
    }

    fn toggle_visibility(&mut self) {
        match self.focus {
            FieldName::Password => self.controller.toggle_password_visibility(),
            FieldName::ConfirmPassword => self.controller.toggle_confirm_password_visibility(),
            FieldName::Email => {}
        }
    }
}

impl ScreenState for LoginState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('t') if ctrl => {
                self.toggle_mode();
                Action::None
            }
            KeyCode::Char('v') if ctrl => {
                self.toggle_visibility();
                Action::None
            }
            KeyCode::Char(_) if ctrl => Action::None,
            KeyCode::Char(ch) => {
                self.edit_focused(|v| v.push(ch));
                Action::None
            }
            KeyCode::Backspace => {
                self.edit_focused(|v| {
                    v.pop();
                });
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_step(true);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_step(false);
                Action::None
            }
            KeyCode::Enter if self.controller.is_submit_enabled() => Action::Submit,
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the login/signup screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_login(state: &LoginState, frame: &mut Frame, area: Rect) {
    let ctl = state.controller();
    let mode = ctl.mode();

    let block = Block::default()
        .title(format!(" {} ", mode.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = ROW_HEIGHT * ctl.active_fields().len() as u16;
    let [form_area, _gap, submit_area, switch_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(ctl, state.focus(), frame, form_area);

    let submit_style = if ctl.is_submit_enabled() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(format!("[ {} ]", mode.title()), submit_style))
            .alignment(Alignment::Center),
        submit_area,
    );

    let switch_text = match mode {
        AuthMode::Login => "Don't have an account? Ctrl+T to sign up",
        AuthMode::Signup => "Already have an account? Ctrl+T to log in",
    };
    frame.render_widget(
        Paragraph::new(Line::from(switch_text)).alignment(Alignment::Center),
        switch_area,
    );

    let footer = Paragraph::new(Line::from(
        "Tab: next field  Ctrl+V: show/hide password  Enter: submit  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
