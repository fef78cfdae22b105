//! Status bar widget: one line showing the session or the last error.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::Session;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Email of the signed-in user, if any.
    pub email: Option<String>,
    /// Mode the user signed in with.
    pub mode: Option<String>,
    /// Error from the last storage operation, if it failed.
    pub error: Option<String>,
}

impl StatusBarContext {
    /// Builds the context from the current session and last error.
    pub fn new(session: Option<&Session>, error: Option<&str>) -> Self {
        Self {
            email: session.map(|s| s.credentials.email.clone()),
            mode: session.map(|s| s.mode.to_string()),
            error: error.map(str::to_string),
        }
    }
}

/// Renders a one-line status bar.
///
/// - Error set:   `Error: <message>` in red (takes precedence)
/// - Signed in:   `a@b.com (signup)` in cyan
/// - Signed out:  `Not signed in` in dark gray
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let span = if let Some(err) = &ctx.error {
        Span::styled(format!("Error: {err}"), Style::default().fg(Color::Red))
    } else if let Some(email) = &ctx.email {
        let text = match &ctx.mode {
            Some(mode) => format!("{email} ({mode})"),
            None => email.clone(),
        };
        Span::styled(text, Style::default().fg(Color::Cyan))
    } else {
        Span::styled("Not signed in", Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(Line::from(span)), area);
}
