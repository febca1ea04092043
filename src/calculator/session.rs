//! The equation editor behind the calculator window.
//!
//! A [`Session`] owns the equation text and nothing else. Every change is
//! pushed to a single display callback so the rendering side can stay in
//! sync without the session knowing anything about widgets.

use super::evaluation::{Evaluator, format_result};
use super::input::Command;

/// Text shown when an equation cannot be evaluated.
pub const ERROR_TEXT: &str = "error";

/// Where the editor currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    NonEmpty,
    /// The display shows exactly [`ERROR_TEXT`].
    Error,
}

type DisplayCallback = Box<dyn Fn(&str)>;

/// A calculator session: the equation being edited plus its evaluator.
pub struct Session<E> {
    equation: String,
    evaluator: E,
    on_display: Option<DisplayCallback>,
}

impl<E: Evaluator> Session<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            equation: String::new(),
            evaluator,
            on_display: None,
        }
    }

    /// Set the callback that receives the equation text after every change.
    pub fn set_on_display(&mut self, callback: impl Fn(&str) + 'static) {
        self.on_display = Some(Box::new(callback));
    }

    /// The current equation text, exactly as displayed.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn state(&self) -> EditorState {
        if self.equation.is_empty() {
            EditorState::Empty
        } else if self.equation == ERROR_TEXT {
            EditorState::Error
        } else {
            EditorState::NonEmpty
        }
    }

    /// Replace the equation and notify the display.
    fn display(&mut self, text: String) {
        self.equation = text;
        if let Some(ref on_display) = self.on_display {
            on_display(&self.equation);
        }
    }

    /// Run one command against the equation.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AppendDigit(d) => self.append_digit(d),
            Command::AppendChar(ch) => self.append_char(ch),
            Command::Clear => self.clear(),
            Command::Backspace => self.backspace(),
            Command::Evaluate => self.evaluate(),
        }
    }

    pub fn append_char(&mut self, ch: char) {
        let mut text = std::mem::take(&mut self.equation);
        text.push(ch);
        self.display(text);
    }

    /// Append a digit. Values outside `0..=9` are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        if let Some(ch) = char::from_digit(u32::from(digit), 10) {
            self.append_char(ch);
        }
    }

    pub fn clear(&mut self) {
        self.display(String::new());
    }

    /// Remove the last character. The error text is removed as a whole.
    pub fn backspace(&mut self) {
        match self.state() {
            EditorState::Empty => {}
            EditorState::Error => self.clear(),
            EditorState::NonEmpty => {
                let mut text = std::mem::take(&mut self.equation);
                text.pop();
                self.display(text);
            }
        }
    }

    /// Evaluate the equation and show the result, or [`ERROR_TEXT`] on failure.
    pub fn evaluate(&mut self) {
        if self.equation.contains(ERROR_TEXT) {
            self.display(ERROR_TEXT.to_string());
            return;
        }

        match self.evaluator.evaluate(&self.equation) {
            Ok(value) => self.display(format_result(value)),
            Err(err) => {
                tracing::warn!(equation = %self.equation, %err, "Error in calculation");
                self.display(ERROR_TEXT.to_string());
            }
        }
    }

    /// Append pasted text if it is a number on its own.
    ///
    /// Returns whether the paste was accepted; rejected content leaves the
    /// equation untouched.
    pub fn paste(&mut self, content: &str) -> bool {
        if content.parse::<f64>().is_err() {
            tracing::debug!(content, "Ignoring non-numeric paste");
            return false;
        }

        let text = format!("{}{}", self.equation, content);
        self.display(text);
        true
    }

    /// The text to place on the clipboard for a copy.
    pub fn copy_text(&self) -> &str {
        &self.equation
    }
}
