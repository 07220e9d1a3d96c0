//! Base dialog component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Label of the single acknowledgement button, if any
    pub acknowledge: Option<&'a str>,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl<'a> Default for DialogConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            acknowledge: None,
            hint: None,
            max_width: 60,
        }
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_width = config.max_width.min(area.width).max(padding + 3);
    let max_line_width = (max_width - padding - 2) as usize;

    // Word-wrap the message
    let wrapped_lines = wrap_text(config.message, max_line_width);
    let line_count = u16::try_from(wrapped_lines.len()).unwrap_or(u16::MAX);

    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|s| s.width()).sum::<usize>())
        .unwrap_or(0);
    let button_width = config.acknowledge.map(|l| l.chars().count() + 4).unwrap_or(0);

    // Calculate dialog dimensions
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count())
        .max(hint_width)
        .max(button_width);
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let dialog_width = content_width.saturating_add(padding + 2).min(max_width); // +2 for borders

    // Height: title + blank + message lines + (blank + button) + (blank + hint) + borders
    let button_lines = if config.acknowledge.is_some() { 2 } else { 0 };
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = line_count
        .saturating_add(2 + button_lines + hint_lines + 2)
        .max(5)
        .min(area.height);

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    }
    .intersection(area);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    // Build content
    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    if let Some(label) = config.acknowledge {
        content.push(Line::from(""));
        content.push(
            Line::from(Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans).alignment(Alignment::Center));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
///
/// Breaks at spaces and drops the spaces at each break. Runs of spaces inside
/// a line are kept. Words wider than a line are split across lines.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.chars().count() <= max_width {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        let mut started = false;
        let mut at_break = false;
        for word in paragraph.split(' ') {
            let word_width = word.chars().count();
            if started && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
                started = false;
                at_break = true;
            }
            if at_break && word.is_empty() {
                continue;
            }
            if started {
                current_line.push(' ');
                current_width += 1;
            }
            for c in word.chars() {
                if current_width == max_width {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                current_line.push(c);
                current_width += 1;
            }
            started = true;
            at_break = false;
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_are_kept_verbatim() {
        let lines = wrap_text("My name is  Ada\nsecond", 40);
        assert_eq!(lines, vec!["My name is  Ada", "second"]);
    }

    #[test]
    fn test_long_line_breaks_at_spaces() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_long_word_is_split_across_lines() {
        let lines = wrap_text("XXXXXXXXXX", 4);
        assert_eq!(lines, vec!["XXXX", "XXXX", "XX"]);
    }

    #[test]
    fn test_long_word_after_short_words_starts_new_line() {
        let lines = wrap_text("ab XXXXXX cd", 4);
        assert_eq!(lines, vec!["ab", "XXXX", "XX", "cd"]);
    }

    #[test]
    fn test_split_keeps_every_char() {
        let word = "é".repeat(200);
        let lines = wrap_text(&format!("My name is {word} ."), 70);
        assert!(lines.iter().all(|l| l.chars().count() <= 70));
        assert_eq!(lines.concat().matches('é').count(), 200);
    }

    #[test]
    fn test_spaces_at_a_break_are_dropped() {
        let lines = wrap_text("aaaa  bbbb", 4);
        assert_eq!(lines, vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_measures_chars_not_bytes() {
        let lines = wrap_text("José Ñúñez", 10);
        assert_eq!(lines, vec!["José Ñúñez"]);
    }
}
