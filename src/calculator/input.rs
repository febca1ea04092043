//! Routing of keyboard input onto equation commands.

use super::keypad::Key;
use gpui::Keystroke;

/// An edit or evaluate operation on the equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AppendDigit(u8),
    AppendChar(char),
    Clear,
    Backspace,
    Evaluate,
}

/// Map a named (non-character) key to its command.
///
/// Only enter/return and backspace do anything; other named keys are ignored.
pub fn command_for_named_key(name: &str) -> Option<Command> {
    match name {
        "enter" | "return" | "kp_enter" => Some(Command::Evaluate),
        "backspace" => Some(Command::Backspace),
        _ => None,
    }
}

/// Map a typed character to the command of the keypad key carrying it.
pub fn command_for_typed_char(ch: char) -> Option<Command> {
    Key::from_char(ch).map(Key::command)
}

/// Map typed text to a command. Keyboards deliver one character per
/// keystroke; anything longer is not a keypad key.
pub fn command_for_typed_text(text: &str) -> Option<Command> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => command_for_typed_char(ch),
        _ => None,
    }
}

/// Map a keyboard keystroke to a command.
///
/// Named keys win regardless of modifiers. Keystrokes with control,
/// platform or alt held belong to shortcuts and are never typed input.
pub fn command_for_keystroke(keystroke: &Keystroke) -> Option<Command> {
    if let Some(command) = command_for_named_key(&keystroke.key) {
        return Some(command);
    }

    let modifiers = &keystroke.modifiers;
    if modifiers.control || modifiers.platform || modifiers.alt {
        return None;
    }

    keystroke.key_char.as_deref().and_then(command_for_typed_text)
}
