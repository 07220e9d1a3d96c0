//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for app-wide shortcuts (introduce, quit), Ctrl on every platform
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Introduce shortcut display for help text
pub const INTRODUCE_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
/// - macOS: "Ctrl+Q" (Cmd+Q closes the terminal emulator itself)
/// - Linux/Windows: "Ctrl+C"
#[cfg(target_os = "macos")]
pub const QUIT_SHORTCUT: &str = "Ctrl+Q";

#[cfg(not(target_os = "macos"))]
pub const QUIT_SHORTCUT: &str = "Ctrl+C";

/// Key that copies the introduction while the modal is open
pub const COPY_KEY: char = 'c';
