//! School logo and name shown at the top of the form

use crate::assets::AsciiImage;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Building-columns graphic used when no school logo is available
const FALLBACK_ICON: [&str; 4] = [
    "   __/\\__   ",
    "  /______\\  ",
    "   | | | |  ",
    "  ========  ",
];

/// Hint shown while the school name is blank
const SCHOOL_NAME_PLACEHOLDER: &str = "Add your school name below";

/// Rows needed to draw the header for `logo`
pub fn header_height(logo: Option<&AsciiImage>) -> u16 {
    let image_rows = logo.map_or(FALLBACK_ICON.len() as u16, AsciiImage::height);
    image_rows.saturating_add(1)
}

/// Draw the logo (or its fallback) with the school name underneath
pub fn draw_school_header(
    frame: &mut Frame,
    area: Rect,
    logo: Option<&AsciiImage>,
    school_name: Option<&str>,
) {
    let mut lines: Vec<Line> = match logo {
        Some(image) => image
            .rows()
            .iter()
            .map(|row| Line::from(Span::styled(row.as_str(), Style::default().fg(Color::White))))
            .collect(),
        None => FALLBACK_ICON
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                ))
            })
            .collect(),
    };

    lines.push(school_name_line(school_name));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw only the school name line, for layouts with no room for the logo
pub fn draw_school_name(frame: &mut Frame, area: Rect, school_name: Option<&str>) {
    frame.render_widget(
        Paragraph::new(school_name_line(school_name)).alignment(Alignment::Center),
        area,
    );
}

fn school_name_line(school_name: Option<&str>) -> Line<'_> {
    match school_name {
        Some(name) => Line::from(Span::styled(
            name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            SCHOOL_NAME_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )),
    }
}
