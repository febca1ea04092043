//! Calculator core: the equation editor and everything feeding it.
//!
//! This module provides functionality to:
//! - Edit an equation one key at a time and evaluate it using fasteval
//! - Map keypad keys and keyboard input onto editor commands
//! - Copy and paste equations through the system clipboard

mod clipboard;
mod evaluation;
mod input;
mod keypad;
mod session;

pub use clipboard::{ClipboardError, SystemClipboard};
pub use evaluation::{EvalError, Evaluator, FastEvaluator, format_result};
pub use input::{
    Command, command_for_keystroke, command_for_named_key, command_for_typed_char,
    command_for_typed_text,
};
pub use keypad::{Key, Symbol};
pub use session::{ERROR_TEXT, EditorState, Session};
