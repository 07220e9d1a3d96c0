//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_introduction_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, errors on top
    if let Some(introduction) = &app.state.introduction {
        components::render_introduction_dialog(frame, introduction);
    }
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AsciiImage, MockAssetProvider, SCHOOL_LOGO};
    use crate::clipboard::MockClipboardProvider;
    use crate::config::TuiConfig;
    use crate::state::FormField;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn create_test_app(logo: Option<AsciiImage>) -> App {
        let mut assets = MockAssetProvider::new();
        assets
            .expect_image()
            .withf(|name| name == SCHOOL_LOGO)
            .returning(move |_| logo.clone());
        App::new(
            &TuiConfig::default(),
            Box::new(assets),
            Box::new(MockClipboardProvider::new()),
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_title_and_sections() {
        let app = create_test_app(None);
        let output = render(&app, 80, 40);
        assert!(output.contains("Introduce Yourself"), "should show title");
        assert!(output.contains("Your School"));
        assert!(output.contains("About You"));
        assert!(output.contains("Academic Year"));
        assert!(output.contains("Pets"));
        assert!(output.contains("Introduce Self"));
    }

    #[test]
    fn test_renders_fields_and_controls() {
        let app = create_test_app(None);
        let output = render(&app, 80, 40);
        assert!(output.contains("School name"));
        assert!(output.contains("First name"));
        assert!(output.contains("Last name"));
        assert!(output.contains(" First │ Second │ Third │ Fourth "));
        assert!(output.contains("Number of pets"));
        assert!(output.contains("I want more pets"));
        assert!(output.contains("[ ] Off"));
    }

    #[test]
    fn test_fallback_icon_and_placeholder_without_logo() {
        let app = create_test_app(None);
        let output = render(&app, 80, 40);
        assert!(output.contains("/______\\"), "should show fallback icon");
        assert!(output.contains("Add your school name below"));
    }

    #[test]
    fn test_configured_logo_replaces_fallback() {
        let logo = AsciiImage::new(vec!["[ ANALYTICAL ]".to_string()]);
        let mut app = create_test_app(logo);
        app.state.form.set_school_name("Analytical Academy");
        let output = render(&app, 80, 40);
        assert!(output.contains("[ ANALYTICAL ]"));
        assert!(!output.contains("/______\\"));
        assert!(output.contains("Analytical Academy"));
        assert!(!output.contains("Add your school name below"));
    }

    #[test]
    fn test_pet_count_is_shown() {
        let mut app = create_test_app(None);
        app.state.form.adjust_pet_count(7);
        let output = render(&app, 80, 40);
        assert!(output.contains(" 7 [-] [+]"));
    }

    #[test]
    fn test_introduction_dialog_shows_text() {
        let mut app = create_test_app(None);
        app.state.form.set_first_name("Ada");
        app.state.form.set_last_name("Lovelace");
        app.state.introduce();
        let output = render(&app, 100, 40);
        assert!(output.contains("My Introduction"));
        assert!(output.contains("My name is Ada Lovelace and I attend ."));
        assert!(output.contains("It is false that I want more pets."));
        assert!(output.contains("[ Nice to meet you! ]"));
    }

    #[test]
    fn test_error_dialog_drawn_over_introduction() {
        let mut app = create_test_app(None);
        app.state.introduce();
        app.push_error("Could not copy to clipboard");
        let output = render(&app, 100, 40);
        assert!(output.contains("Error"));
        assert!(output.contains("Could not copy to clipboard"));
    }

    #[test]
    fn test_status_bar_hints_follow_focus() {
        let mut app = create_test_app(None);
        app.state.focus = FormField::PetCount;
        let output = render(&app, 100, 40);
        assert!(output.contains("→/+: more"));

        app.show_hints = false;
        let output = render(&app, 100, 40);
        assert!(!output.contains("→/+: more"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = create_test_app(None);
        app.state.introduce();
        render(&app, 10, 5);
    }

    #[test]
    fn test_standard_terminal_shows_every_control() {
        let mut app = create_test_app(None);
        app.state.form.set_first_name("Ada");
        app.state.form.set_last_name("Lovelace");
        let output = render(&app, 80, 24);
        assert!(output.contains("Your School"));
        assert!(output.contains("Add your school name below"));
        assert!(output.contains("School name"));
        assert!(output.contains("About You"));
        assert!(output.contains("First name"));
        assert!(output.contains("Ada"));
        assert!(output.contains("Last name"));
        assert!(output.contains("Lovelace"));
        assert!(output.contains(" First │ Second │ Third │ Fourth "));
        assert!(output.contains("Number of pets"));
        assert!(output.contains(" 0 [-] [+]"));
        assert!(output.contains("I want more pets"));
        assert!(output.contains("[ ] Off"));
        assert!(output.contains("Introduce Self"));
    }

    #[test]
    fn test_standard_terminal_shows_typed_school_name() {
        let mut app = create_test_app(None);
        app.state.form.set_school_name("Analytical Academy");
        let output = render(&app, 80, 24);
        assert!(!output.contains("Add your school name below"));
        // Once in the name line and once in the field
        assert_eq!(output.matches("Analytical Academy").count(), 2);
    }

    #[test]
    fn test_short_terminal_drops_logo_rows() {
        let logo = AsciiImage::new(vec!["[ ANALYTICAL ]".to_string()]);
        let app = create_test_app(logo);
        let output = render(&app, 80, 24);
        assert!(!output.contains("[ ANALYTICAL ]"));
        assert!(output.contains("Add your school name below"));
        assert!(output.contains("I want more pets"));
    }

    #[test]
    fn test_long_first_name_is_fully_visible_in_dialog() {
        let mut app = create_test_app(None);
        app.state.form.set_first_name("X".repeat(200));
        app.state.introduce();
        // The dialog keeps its snapshot, so only it can show the X's
        app.state.form.set_first_name("");
        let output = render(&app, 100, 40);
        assert_eq!(output.matches('X').count(), 200);
        assert!(output.contains("[ Nice to meet you! ]"));
    }

    #[test]
    fn test_unbroken_huge_first_name_renders() {
        let mut app = create_test_app(None);
        app.state.form.set_first_name("X".repeat(usize::from(u16::MAX)));
        app.state.introduce();
        let output = render(&app, 100, 40);
        assert!(output.contains("My Introduction"));
    }
}
