pub mod config;
pub mod drag;
pub mod editor;
pub mod history;
pub mod input;
pub mod mutation;
pub mod shortcuts;

pub use config::{ConfigError, EditorConfig};
pub use drag::{DragState, DragTool};
pub use editor::WordEditor;
pub use history::UndoHistory;
pub use input::InputEvent;
pub use mutation::{TagMutation, apply_mutation};
pub use shortcuts::{EditorAction, ShortcutMap};
