//! Home screen shown while signed in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::session::Session;
use crate::tui::action::{Action, ScreenState};

/// State for the home screen. All content comes from the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeState;

impl ScreenState for HomeState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('l') => Action::Logout,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the home screen for `session`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(session: Option<&Session>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("Welcome!"), Line::from("")];
    if let Some(s) = session {
        lines.push(Line::from(format!("Email: {}", s.credentials.email)));
        lines.push(Line::from(format!("Signed in via: {}", s.mode.title())));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "l: logout  q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let height = lines.len() as u16 + 2;
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}
