//! "My Introduction" dialog

use super::base::{render_dialog, DialogConfig};
use crate::platform::COPY_KEY;
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

/// Title of the introduction dialog
const INTRODUCTION_TITLE: &str = "My Introduction";
/// Label of its only button
const ACKNOWLEDGE_LABEL: &str = "Nice to meet you!";

/// Render the introduction text with its acknowledgement button
pub fn render_introduction_dialog(frame: &mut Frame, introduction: &str) {
    let hint = vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" dismiss  ", Style::default().fg(Color::DarkGray)),
        Span::styled(COPY_KEY.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(" copy", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: INTRODUCTION_TITLE,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: introduction,
            acknowledge: Some(ACKNOWLEDGE_LABEL),
            hint: Some(hint),
            max_width: 76,
        },
    );
}
