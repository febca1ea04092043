pub mod calculator;
pub mod theme;

pub use calculator::CalculatorView;
pub use theme::{CalculatorTheme, theme};

use crate::assets::Assets;
use gpui::{App, Application};

/// Start the application and open the calculator window.
///
/// Returns once the window has been closed.
pub fn run() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        calculator::bind_keys(cx);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(err) = calculator::open_window(cx) {
            tracing::error!(%err, "Failed to open calculator window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
