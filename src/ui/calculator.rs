//! The calculator window: output display above a keypad grid.

use crate::calculator::{
    Command, EditorState, FastEvaluator, Key, Session, SystemClipboard, command_for_keystroke,
};
use crate::ui::theme::theme;
use gpui::{
    App, Bounds, ClickEvent, Context, Div, FocusHandle, Focusable, KeyBinding, KeyDownEvent,
    SharedString, TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, prelude::*,
};
use gpui_component::Root;
use gpui_component::button::{Button, ButtonVariants as _};

actions!(calculator, [CopyEquation, PasteEquation]);

const KEY_CONTEXT: &str = "Calculator";
const WINDOW_TITLE: &str = "Calc";
const APP_ID: &str = "calcpad";

/// Register the copy/paste shortcuts for the calculator window.
pub fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("secondary-c", CopyEquation, Some(KEY_CONTEXT)),
        KeyBinding::new("secondary-v", PasteEquation, Some(KEY_CONTEXT)),
    ]);
}

/// Open the calculator window.
pub fn open_window(cx: &mut App) -> anyhow::Result<()> {
    let t = theme();
    let bounds = Bounds::centered(None, t.window_size, cx);

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        window_min_size: Some(t.window_min_size),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from(WINDOW_TITLE)),
            ..Default::default()
        }),
        app_id: Some(APP_ID.to_string()),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        let view = cx.new(|cx| CalculatorView::new(window, cx));
        cx.new(|cx| Root::new(view, window, cx))
    })?;

    Ok(())
}

/// View owning the calculator session and the clipboard handle.
pub struct CalculatorView {
    session: Session<FastEvaluator>,
    clipboard: SystemClipboard,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut session = Session::new(FastEvaluator);
        session.set_on_display(|text| tracing::debug!(display = text, "Display updated"));

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            session,
            clipboard: SystemClipboard::new(),
            focus_handle,
        }
    }

    fn run(&mut self, command: Command, cx: &mut Context<Self>) {
        self.session.apply(command);
        cx.notify();
    }

    fn press(&mut self, key: Key, window: &mut Window, cx: &mut Context<Self>) {
        // Keep keyboard input flowing to the window after a click.
        window.focus(&self.focus_handle);
        self.run(key.command(), cx);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(command) = command_for_keystroke(&event.keystroke) {
            self.run(command, cx);
        }
    }

    fn copy(&mut self, _: &CopyEquation, _window: &mut Window, _cx: &mut Context<Self>) {
        if let Err(err) = self.clipboard.set_text(self.session.copy_text()) {
            tracing::warn!(%err, "Copy failed");
        }
    }

    fn paste(&mut self, _: &PasteEquation, _window: &mut Window, cx: &mut Context<Self>) {
        match self.clipboard.get_text() {
            Ok(content) => {
                if self.session.paste(&content) {
                    cx.notify();
                }
            }
            Err(err) => tracing::warn!(%err, "Paste failed"),
        }
    }

    /// Render the single-line output, aligned to the trailing edge.
    fn render_display(&self) -> Div {
        let t = theme();

        let text_color = if self.session.state() == EditorState::Error {
            t.display_error_color
        } else {
            t.display_color
        };

        div()
            .w_full()
            .h(t.display_height)
            .flex_shrink_0()
            .flex()
            .items_center()
            .justify_end()
            .px(t.display_padding_x)
            .bg(t.display_background)
            .rounded(t.display_border_radius)
            .overflow_hidden()
            .whitespace_nowrap()
            .font_family(t.display_font.clone())
            .text_size(t.display_text_size)
            .text_color(text_color)
            .child(SharedString::from(self.session.equation().to_string()))
    }

    fn render_key(&self, key: Key, cx: &mut Context<Self>) -> Button {
        let button = Button::new(key.label())
            .label(key.label())
            .flex_1()
            .h_full()
            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.press(key, window, cx);
            }));

        if key == Key::Equals {
            button.primary()
        } else {
            button
        }
    }

    fn render_row(&self) -> Div {
        let t = theme();
        div().flex_1().flex().flex_row().gap(t.key_gap)
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        let mut container = div()
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_action(cx.listener(Self::copy))
            .on_action(cx.listener(Self::paste))
            .size_full()
            .flex()
            .flex_col()
            .gap(t.key_gap)
            .p(t.padding)
            .bg(t.background)
            .child(self.render_display());

        for row in Key::GRID {
            container =
                container.child(self.render_row().children(row.map(|key| self.render_key(key, cx))));
        }

        // Bottom row: zero and decimal share the left half, equals fills the right.
        let bottom_left = self
            .render_row()
            .children(Key::BOTTOM_LEFT.map(|key| self.render_key(key, cx)));

        container.child(
            self.render_row()
                .child(bottom_left)
                .child(self.render_key(Key::BOTTOM_RIGHT, cx)),
        )
    }
}
