//! Application state definitions

use super::forms::{FormField, FormState, IntroductionStyle};
use std::collections::VecDeque;

/// Session state for the single introduction screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Everything the user has typed or selected
    pub form: FormState,
    /// Field that receives key input
    pub focus: FormField,
    /// Introduction shown in the modal; `Some` while the modal is open
    pub introduction: Option<String>,
    /// Phrasing used when the introduction is built
    pub introduction_style: IntroductionStyle,
    /// Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(introduction_style: IntroductionStyle) -> Self {
        Self {
            introduction_style,
            ..Default::default()
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Build the introduction from the current form and open the modal
    pub fn introduce(&mut self) -> &str {
        let text = match self.introduction_style {
            IntroductionStyle::Literal => self.form.build_introduction(),
            style => self.form.build_introduction_with(style),
        };
        self.introduction.insert(text)
    }

    pub fn is_introduction_open(&self) -> bool {
        self.introduction.is_some()
    }

    pub fn dismiss_introduction(&mut self) {
        self.introduction = None;
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown by the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod introduction {
        use super::*;

        #[test]
        fn test_modal_closed_initially() {
            let state = AppState::default();
            assert!(!state.is_introduction_open());
            assert_eq!(state.focus, FormField::SchoolName);
        }

        #[test]
        fn test_introduce_opens_modal_with_text() {
            let mut state = AppState::default();
            state.form.set_first_name("Ada");
            let text = state.introduce().to_string();
            assert!(text.starts_with("My name is Ada "));
            assert_eq!(state.introduction.as_deref(), Some(text.as_str()));
        }

        #[test]
        fn test_text_is_not_recomputed_after_edits() {
            let mut state = AppState::default();
            state.form.set_first_name("Ada");
            state.introduce();
            state.form.set_first_name("Grace");
            assert!(state
                .introduction
                .as_deref()
                .is_some_and(|t| t.starts_with("My name is Ada ")));
        }

        #[test]
        fn test_dismiss_closes_modal() {
            let mut state = AppState::default();
            state.introduce();
            state.dismiss_introduction();
            assert!(!state.is_introduction_open());
        }

        #[test]
        fn test_literal_style_matches_build_introduction() {
            let mut state = AppState::new(IntroductionStyle::Literal);
            state.form.set_first_name("Ada");
            let expected = state.form.build_introduction();
            assert_eq!(state.introduce(), expected);
        }

        #[test]
        fn test_uses_configured_style() {
            let mut state = AppState::new(IntroductionStyle::Conversational);
            assert!(state.introduce().ends_with("I would not like more pets."));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_errors_are_fifo() {
            let mut state = AppState::default();
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert!(state.has_errors());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_queue_is_noop() {
            let mut state = AppState::default();
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_next_and_prev_field() {
            let mut state = AppState::default();
            state.next_field();
            assert_eq!(state.focus, FormField::FirstName);
            state.prev_field();
            state.prev_field();
            assert_eq!(state.focus, FormField::Introduce);
        }
    }
}
