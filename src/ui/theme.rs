//! Visual configuration for the calculator window.

use gpui::{Hsla, Pixels, SharedString, Size, hsla, px, size};
use lazy_static::lazy_static;

/// Sizes, colors and fonts used when rendering the calculator.
#[derive(Clone, Debug)]
pub struct CalculatorTheme {
    /// Initial window size.
    pub window_size: Size<Pixels>,
    /// Smallest size the window can be resized to.
    pub window_min_size: Size<Pixels>,

    pub background: Hsla,
    pub padding: Pixels,
    /// Space between keys, both across and down.
    pub key_gap: Pixels,

    pub display_height: Pixels,
    pub display_padding_x: Pixels,
    pub display_font: SharedString,
    pub display_text_size: Pixels,
    pub display_background: Hsla,
    pub display_color: Hsla,
    /// Text color while the display shows the error text.
    pub display_error_color: Hsla,
    pub display_border_radius: Pixels,
}

impl Default for CalculatorTheme {
    fn default() -> Self {
        Self {
            window_size: size(px(200.0), px(300.0)),
            window_min_size: size(px(200.0), px(300.0)),

            background: hsla(220.0 / 360.0, 0.13, 0.14, 1.0),
            padding: px(6.0),
            key_gap: px(4.0),

            display_height: px(40.0),
            display_padding_x: px(8.0),
            display_font: SharedString::from(display_font()),
            display_text_size: px(20.0),
            display_background: hsla(220.0 / 360.0, 0.13, 0.10, 1.0),
            display_color: hsla(0.0, 0.0, 0.92, 1.0),
            display_error_color: hsla(15.0 / 360.0, 0.7, 0.6, 1.0),
            display_border_radius: px(4.0),
        }
    }
}

fn display_font() -> &'static str {
    if cfg!(target_os = "macos") {
        "Menlo"
    } else if cfg!(target_os = "windows") {
        "Consolas"
    } else {
        "DejaVu Sans Mono"
    }
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme::default();
}

/// The theme shared by every part of the window.
pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
