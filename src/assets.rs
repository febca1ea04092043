//! Embedded assets.
//!
//! The application icon (`icons/calculator.svg`) is compiled into the
//! binary; anything not found here is looked up in the widget library's
//! bundled icons.

use std::borrow::Cow;

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        if let Some(file) = Self::get(path) {
            return Ok(Some(file.data));
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut entries: Vec<SharedString> = Self::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| SharedString::from(p.into_owned()))
            .collect();

        entries.extend(gpui_component_assets::Assets.list(path)?);
        Ok(entries)
    }
}
