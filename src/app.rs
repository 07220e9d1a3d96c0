//! Application state and core logic

use crate::assets::AssetProvider;
use crate::clipboard::ClipboardProvider;
use crate::config::TuiConfig;
use crate::platform::{COPY_KEY, SHORTCUT_MODIFIER};
use crate::state::{AcademicYear, AppState, FieldKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Source of the school logo
    pub assets: Box<dyn AssetProvider>,
    /// Destination for copied introductions
    clipboard: Box<dyn ClipboardProvider>,
    /// Show key hints in the status bar
    pub show_hints: bool,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: &TuiConfig,
        assets: Box<dyn AssetProvider>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        Self {
            state: AppState::new(config.introduction_style()),
            assets,
            clipboard,
            show_hints: config.show_hints(),
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Global quit works even while a dialog is open
        if key.modifiers.contains(SHORTCUT_MODIFIER)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle introduction dialog (modal)
        if self.state.is_introduction_open() {
            self.handle_introduction_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            if key.code == KeyCode::Char('s') {
                self.introduce();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    fn focus_next(&mut self) {
        self.state.next_field();
        tracing::debug!(field = ?self.state.focus, "focus moved");
    }

    fn focus_prev(&mut self) {
        self.state.prev_field();
        tracing::debug!(field = ?self.state.focus, "focus moved");
    }

    /// Handle keys aimed at the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let field = self.state.focus;
        let form = &mut self.state.form;

        match field.kind() {
            FieldKind::Text => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                    form.push_char(field, c)
                }
                KeyCode::Backspace => form.pop_char(field),
                KeyCode::Enter => self.focus_next(),
                _ => {}
            },
            FieldKind::Segmented => {
                match key.code {
                    KeyCode::Left | KeyCode::Char('h') => form.select_prev_year(),
                    KeyCode::Right | KeyCode::Char('l') => form.select_next_year(),
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        if let Ok(year) = AcademicYear::try_from(index) {
                            form.set_year(year);
                        }
                    }
                    _ => return,
                }
                tracing::debug!(
                    year = form.year().label(),
                    index = form.year().index(),
                    "year selected"
                );
            }
            FieldKind::Stepper => {
                let delta = match key.code {
                    KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => -1,
                    KeyCode::Right
                    | KeyCode::Char('+')
                    | KeyCode::Char('=')
                    | KeyCode::Char('l') => 1,
                    _ => return,
                };
                form.adjust_pet_count(delta);
                tracing::debug!(pet_count = form.pet_count(), "pet count adjusted");
            }
            FieldKind::Toggle => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    form.toggle_wants_more_pets();
                }
            }
            FieldKind::Button => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.introduce();
                }
            }
        }
    }

    /// Build the introduction and open the modal
    fn introduce(&mut self) {
        let text = self.state.introduce();
        tracing::info!(chars = text.chars().count(), "introduction built");
    }

    /// Handle keys while the introduction dialog is open
    fn handle_introduction_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.dismiss_introduction(),
            KeyCode::Char(c) if c == COPY_KEY => self.copy_introduction(),
            _ => {}
        }
    }

    fn copy_introduction(&mut self) {
        let Some(text) = self.state.introduction.clone() else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                tracing::info!("introduction copied to clipboard");
                self.copy_message = Some("Copied introduction".to_string());
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.push_error(format!("Could not copy to clipboard: {err}"));
            }
        }
    }
}
