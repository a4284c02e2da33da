//! Editor domain: the text widget behind the text area.

mod state;
mod viewport;

pub use state::{EditorDispatch, EditorState};
pub use viewport::{
    cursor_display_x, display_x_at, expand_tabs, screen_to_pos, visible_slice, EditorViewport,
};
