//! Keyboard shortcuts
//!
//! Controls:
//! - Escape: quit
//! - F: toggle fullscreen
//! - R: regenerate the grid
//! - Space: pause/resume the field

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// A command triggered from the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchAction {
    Quit,
    ToggleFullscreen,
    Regenerate,
    TogglePause,
}

/// Map a key event to an action; only presses trigger actions
pub fn map_key(key: KeyCode, state: ElementState) -> Option<SketchAction> {
    if state != ElementState::Pressed {
        return None;
    }
    match key {
        KeyCode::Escape => Some(SketchAction::Quit),
        KeyCode::KeyF => Some(SketchAction::ToggleFullscreen),
        KeyCode::KeyR => Some(SketchAction::Regenerate),
        KeyCode::Space => Some(SketchAction::TogglePause),
        _ => None,
    }
}
