//! Input rows for the login/signup form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FieldName};
use crate::session::LoginController;

/// Height of one input row, borders included.
pub const ROW_HEIGHT: u16 = 3;

/// Character used to mask hidden secrets.
const MASK: char = '\u{2022}';

/// Returns the text to display for `value`, masked unless `revealed`.
pub fn display_value(value: &str, revealed: bool) -> String {
    if revealed {
        value.to_string()
    } else {
        value.chars().map(|_| MASK).collect()
    }
}

/// Returns the hint to show under `field`, if any.
///
/// Untouched fields never show a hint, so a fresh form is not covered in
/// errors before the user has typed anything.
pub fn field_hint(field: &Field) -> Option<String> {
    if !field.is_touched() || field.is_valid() {
        return None;
    }
    let hints: Vec<String> = field.rules().iter().map(ToString::to_string).collect();
    Some(hints.join("; "))
}

/// Renders the active fields of `ctl`, highlighting `focus`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(ctl: &LoginController, focus: FieldName, frame: &mut Frame, area: Rect) {
    let fields = ctl.active_fields();
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, name) in fields.iter().enumerate() {
        let field = ctl.form().field(*name);
        let is_focused = *name == focus;
        let hint = field_hint(field);

        let border_color = if hint.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else if field.is_valid() {
            Color::Green
        } else {
            Color::DarkGray
        };

        let title = if name.is_secret() {
            let state = if ctl.is_revealed(*name) { "shown" } else { "hidden" };
            format!("{} ({state})", name.label())
        } else {
            name.label().to_string()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(display_value(
            field.value(),
            ctl.is_revealed(*name),
        ))];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[i]);

        // Rows squeezed by a short terminal can push the hint past the frame.
        let hint_area = Rect {
            x: rows[i].x + 2,
            y: rows[i].y + ROW_HEIGHT.saturating_sub(1),
            width: rows[i].width.saturating_sub(4),
            height: 1,
        }
        .intersection(area);
        if let Some(hint) = hint.filter(|_| !hint_area.is_empty()) {
            let hint_line = Paragraph::new(Span::styled(hint, Style::default().fg(Color::Red)));
            frame.render_widget(hint_line, hint_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::FormState;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(ctl: &LoginController, focus: FieldName) -> String {
        render_sized(ctl, focus, 50, 10)
    }

    fn render_sized(ctl: &LoginController, focus: FieldName, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw_form(ctl, focus, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    // --- display_value ---

    #[test]
    fn revealed_value_is_plain() {
        assert_eq!(display_value("secret1", true), "secret1");
    }

    #[test]
    fn hidden_value_is_masked_per_char() {
        assert_eq!(display_value("pässwd", false), "\u{2022}".repeat(6));
    }

    #[test]
    fn hidden_empty_value_is_empty() {
        assert_eq!(display_value("", false), "");
    }

    // --- field_hint ---

    #[test]
    fn no_hint_before_touch() {
        let form = FormState::new();
        assert_eq!(field_hint(form.field(FieldName::Email)), None);
    }

    #[test]
    fn hint_when_touched_and_invalid() {
        let form = FormState::new().update_field(FieldName::Password, "123");
        assert_eq!(
            field_hint(form.field(FieldName::Password)),
            Some("must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn no_hint_when_valid() {
        let form = FormState::new().update_field(FieldName::Email, "a@b.com");
        assert_eq!(field_hint(form.field(FieldName::Email)), None);
    }

    // --- draw_form ---

    #[test]
    fn login_mode_renders_two_fields() {
        let out = render(&LoginController::new(), FieldName::Email);
        assert!(out.contains("Email"));
        assert!(out.contains("Password (hidden)"));
        assert!(!out.contains("Confirm Password"));
    }

    #[test]
    fn signup_mode_renders_confirmation() {
        let mut ctl = LoginController::new();
        ctl.toggle_mode();
        let out = render(&ctl, FieldName::Email);
        assert!(out.contains("Confirm Password (hidden)"));
    }

    #[test]
    fn password_is_masked_until_revealed() {
        let mut ctl = LoginController::new();
        ctl.update_field(FieldName::Password, "secret1");
        assert!(!render(&ctl, FieldName::Email).contains("secret1"));

        ctl.toggle_password_visibility();
        let out = render(&ctl, FieldName::Email);
        assert!(out.contains("secret1"));
        assert!(out.contains("Password (shown)"));
    }

    #[test]
    fn invalid_touched_field_shows_hint() {
        let mut ctl = LoginController::new();
        ctl.update_field(FieldName::Email, "nope");
        assert!(render(&ctl, FieldName::Password).contains("enter a valid email address"));
    }

    #[test]
    fn short_area_clips_hints_to_frame() {
        let mut ctl = LoginController::new();
        ctl.toggle_mode();
        ctl.update_field(FieldName::Email, "nope");
        ctl.update_field(FieldName::Password, "1");
        ctl.update_field(FieldName::ConfirmPassword, "2");

        let out = render_sized(&ctl, FieldName::Email, 10, 4);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn full_height_hint_sits_on_bottom_border() {
        let mut ctl = LoginController::new();
        ctl.update_field(FieldName::Email, "nope");
        let out = render(&ctl, FieldName::Password);
        let hint_row = out.lines().nth(usize::from(ROW_HEIGHT) - 1).unwrap();
        assert!(hint_row.contains("enter a valid email address"));
    }
}
