//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{COPY_KEY, INTRODUCE_SHORTCUT, QUIT_SHORTCUT};
use crate::state::FieldKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen title
pub const TITLE: &str = "Introduce Yourself";

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Keep the form a readable width, centered
    let content = chunks[1];
    let width = content.width.min(MAX_FORM_WIDTH);
    let centered = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    (chunks[0], centered, chunks[2])
}

/// Draw the screen title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if app.show_hints {
        spans.push(Span::styled(
            get_hints(app),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        if app.show_hints {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for whatever currently has input
fn get_hints(app: &App) -> String {
    if app.state.has_errors() {
        return "Enter/Esc: dismiss".to_string();
    }
    if app.state.is_introduction_open() {
        return format!("Enter/Esc: dismiss  {COPY_KEY}: copy  {QUIT_SHORTCUT}: quit");
    }

    let field_hint = match app.state.focus.kind() {
        FieldKind::Text => "type to edit",
        FieldKind::Segmented => "←→/1-4: select year",
        FieldKind::Stepper => "←/-: fewer  →/+: more",
        FieldKind::Toggle => "Space: toggle",
        FieldKind::Button => "Enter: introduce",
    };
    format!("{field_hint}  Tab: next field  {INTRODUCE_SHORTCUT}: introduce  {QUIT_SHORTCUT}: quit")
}
