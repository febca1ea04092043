//! The calculator keypad: every key the user can press and where it sits.

use super::input::Command;

/// A non-digit character key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    OpenParen,
    CloseParen,
    Divide,
    Multiply,
    Subtract,
    Add,
    Decimal,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::OpenParen,
        Symbol::CloseParen,
        Symbol::Divide,
        Symbol::Multiply,
        Symbol::Subtract,
        Symbol::Add,
        Symbol::Decimal,
    ];

    /// The character this key appends to the equation.
    pub const fn as_char(self) -> char {
        match self {
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Divide => '/',
            Self::Multiply => '*',
            Self::Subtract => '-',
            Self::Add => '+',
            Self::Decimal => '.',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|symbol| symbol.as_char() == ch)
    }
}

/// A key on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit key, always in `0..=9`.
    Digit(u8),
    Symbol(Symbol),
    Clear,
    Equals,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Rows of the four-column grid, top to bottom.
    pub const GRID: [[Key; 4]; 4] = [
        [
            Key::Clear,
            Key::Symbol(Symbol::OpenParen),
            Key::Symbol(Symbol::CloseParen),
            Key::Symbol(Symbol::Divide),
        ],
        [
            Key::Digit(7),
            Key::Digit(8),
            Key::Digit(9),
            Key::Symbol(Symbol::Multiply),
        ],
        [
            Key::Digit(4),
            Key::Digit(5),
            Key::Digit(6),
            Key::Symbol(Symbol::Subtract),
        ],
        [
            Key::Digit(1),
            Key::Digit(2),
            Key::Digit(3),
            Key::Symbol(Symbol::Add),
        ],
    ];

    /// The bottom row: two narrow keys on the left half, equals on the right.
    pub const BOTTOM_LEFT: [Key; 2] = [Key::Digit(0), Key::Symbol(Symbol::Decimal)];
    pub const BOTTOM_RIGHT: Key = Key::Equals;

    /// Every key on the keypad, in layout order.
    pub fn all() -> impl Iterator<Item = Key> {
        Self::GRID
            .into_iter()
            .flatten()
            .chain(Self::BOTTOM_LEFT)
            .chain(std::iter::once(Self::BOTTOM_RIGHT))
    }

    /// The text printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::Symbol(Symbol::OpenParen) => "(",
            Self::Symbol(Symbol::CloseParen) => ")",
            Self::Symbol(Symbol::Divide) => "/",
            Self::Symbol(Symbol::Multiply) => "*",
            Self::Symbol(Symbol::Subtract) => "-",
            Self::Symbol(Symbol::Add) => "+",
            Self::Symbol(Symbol::Decimal) => ".",
            Self::Clear => "C",
            Self::Equals => "=",
        }
    }

    /// Find the key carrying a typed character.
    ///
    /// The clear key is labelled `C` but also answers to a lowercase `c`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            _ => Symbol::from_char(ch).map(Self::Symbol),
        }
    }

    /// What pressing this key does to the equation.
    pub fn command(self) -> Command {
        match self {
            Self::Digit(d) => Command::AppendDigit(d),
            Self::Symbol(symbol) => Command::AppendChar(symbol.as_char()),
            Self::Clear => Command::Clear,
            Self::Equals => Command::Evaluate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout_has_every_key_once() {
        let keys: Vec<Key> = Key::all().collect();
        assert_eq!(keys.len(), 19);

        let unique: HashSet<Key> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());

        for d in 0..=9 {
            assert!(unique.contains(&Key::Digit(d)));
        }
        for symbol in Symbol::ALL {
            assert!(unique.contains(&Key::Symbol(symbol)));
        }
    }

    #[test]
    fn test_every_label_maps_back_to_its_key() {
        for key in Key::all() {
            let mut chars = key.label().chars();
            let ch = chars.next().unwrap();
            assert!(chars.next().is_none(), "label {:?} is one char", key.label());
            assert_eq!(Key::from_char(ch), Some(key));
        }
    }

    #[test]
    fn test_lowercase_c_is_clear() {
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
    }

    #[test]
    fn test_unknown_characters_have_no_key() {
        for ch in ['x', 'a', ' ', '%', '^', 'E'] {
            assert_eq!(Key::from_char(ch), None);
        }
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(Key::Digit(7).command(), Command::AppendDigit(7));
        assert_eq!(
            Key::Symbol(Symbol::Multiply).command(),
            Command::AppendChar('*')
        );
        assert_eq!(Key::Clear.command(), Command::Clear);
        assert_eq!(Key::Equals.command(), Command::Evaluate);
    }
}
