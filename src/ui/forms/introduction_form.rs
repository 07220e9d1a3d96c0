//! Introduction form rendering

use super::field_renderer::{draw_text_field, focus_style};
use super::school_header::{draw_school_header, draw_school_name, header_height};
use crate::app::App;
use crate::assets::{AsciiImage, SCHOOL_LOGO};
use crate::state::{AcademicYear, FormField, FormState, PET_COUNT_MAX, PET_COUNT_MIN};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a bordered single-line field
const FIELD_HEIGHT: u16 = 3;
/// Height of the About You fields
const ABOUT_HEIGHT: u16 = FIELD_HEIGHT * 2;
/// Academic Year, Pets and the button, borders included
const LOWER_HEIGHT: u16 = 3 + 4 + BUTTON_HEIGHT;
/// Height of a section heading in the compact layout
const HEADING_HEIGHT: u16 = 1;

/// Rows the bordered layout needs with `logo` in the header
fn full_height(logo: Option<&AsciiImage>) -> u16 {
    header_height(logo)
        .saturating_add(FIELD_HEIGHT + 2)
        .saturating_add(ABOUT_HEIGHT + 2)
        .saturating_add(LOWER_HEIGHT)
}

/// Draw the whole form, one section per group of fields
///
/// Falls back to a compact layout without the logo and with one-line
/// headings in place of the top two section borders when `area` is too
/// short for the bordered one.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let logo = app.assets.image(SCHOOL_LOGO);
    let form = &app.state.form;
    let focus = app.state.focus;
    let compact = area.height < full_height(logo.as_ref());

    let (school_height, about_height) = if compact {
        (
            HEADING_HEIGHT + 1 + FIELD_HEIGHT,
            HEADING_HEIGHT + ABOUT_HEIGHT,
        )
    } else {
        (
            header_height(logo.as_ref()).saturating_add(FIELD_HEIGHT + 2),
            ABOUT_HEIGHT + 2,
        )
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(school_height), // Your School
            Constraint::Length(about_height),  // About You
            Constraint::Length(3),             // Academic Year
            Constraint::Length(4),             // Pets
            Constraint::Length(BUTTON_HEIGHT), // Introduce Self
            Constraint::Min(0),
        ])
        .split(area);

    // Your School
    let school_focused = focus == FormField::SchoolName;
    let inner = if compact {
        heading(frame, chunks[0], "Your School", school_focused)
    } else {
        section(frame, chunks[0], "Your School", school_focused)
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FIELD_HEIGHT)])
        .split(inner);
    if compact {
        draw_school_name(frame, rows[0], form.school_display_name());
    } else {
        draw_school_header(frame, rows[0], logo.as_ref(), form.school_display_name());
    }
    draw_text_field(
        frame,
        rows[1],
        FormField::SchoolName.label(),
        form.school_name(),
        school_focused,
    );

    // About You
    let about_focused = matches!(focus, FormField::FirstName | FormField::LastName);
    let inner = if compact {
        heading(frame, chunks[1], "About You", about_focused)
    } else {
        section(frame, chunks[1], "About You", about_focused)
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(FIELD_HEIGHT)])
        .split(inner);
    for (row, field) in rows.iter().zip([FormField::FirstName, FormField::LastName]) {
        draw_text_field(
            frame,
            *row,
            field.label(),
            form.text(field).unwrap_or_default(),
            focus == field,
        );
    }

    // Academic Year
    let inner = section(frame, chunks[2], "Academic Year", focus == FormField::Year);
    frame.render_widget(
        Paragraph::new(year_segments(form.year(), focus == FormField::Year))
            .alignment(Alignment::Center),
        inner,
    );

    // Pets
    let pets_focused = matches!(focus, FormField::PetCount | FormField::WantsMorePets);
    let inner = section(frame, chunks[3], "Pets", pets_focused);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    draw_row(
        frame,
        rows[0],
        FormField::PetCount,
        focus,
        stepper_spans(form, focus == FormField::PetCount),
    );
    draw_row(
        frame,
        rows[1],
        FormField::WantsMorePets,
        focus,
        toggle_spans(form.wants_more_pets(), focus == FormField::WantsMorePets),
    );

    render_button(
        frame,
        chunks[4],
        FormField::Introduce.label(),
        focus == FormField::Introduce,
    );
}

/// Draw a titled section border and return its inner area
fn section(frame: &mut Frame, area: Rect, title: &str, is_focused: bool) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Draw a one-line section title and return the area below it
fn heading(frame: &mut Frame, area: Rect, title: &str, is_focused: bool) -> Rect {
    let style = focus_style(is_focused).add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(format!(" {title} "), style)), area);
    Rect {
        y: area.y.saturating_add(HEADING_HEIGHT),
        height: area.height.saturating_sub(HEADING_HEIGHT),
        ..area
    }
}

/// Label on the left, control on the right
fn draw_row(frame: &mut Frame, area: Rect, field: FormField, focus: FormField, control: Line) {
    let is_active = field == focus;
    let prefix = if is_active { "▸ " } else { "  " };
    let label_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let label = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::styled(field.label(), label_style),
    ]);
    frame.render_widget(Paragraph::new(label), area);
    frame.render_widget(Paragraph::new(control).alignment(Alignment::Right), area);
}

fn year_segments(selected: AcademicYear, is_active: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, year) in AcademicYear::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let style = match (*year == selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Black).bg(Color::Gray),
            (false, _) => Style::default().fg(Color::Gray),
        };
        spans.push(Span::styled(format!(" {} ", year.label()), style));
    }
    Line::from(spans)
}

fn stepper_spans(form: &FormState, is_active: bool) -> Line<'static> {
    let count = form.pet_count();
    let enabled = Style::default().fg(if is_active { Color::Cyan } else { Color::Gray });
    let disabled = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled(
            format!("{count:>2} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("[-]", if count > PET_COUNT_MIN { enabled } else { disabled }),
        Span::raw(" "),
        Span::styled("[+]", if count < PET_COUNT_MAX { enabled } else { disabled }),
        Span::raw(" "),
    ])
}

fn toggle_spans(is_on: bool, is_active: bool) -> Line<'static> {
    let color = match (is_on, is_active) {
        (true, _) => Color::Green,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let text = if is_on { "[x] On " } else { "[ ] Off" };
    Line::from(vec![
        Span::styled(text, Style::default().fg(color)),
        Span::raw(" "),
    ])
}
