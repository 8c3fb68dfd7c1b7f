use serde::Serialize;

use super::{ToggleControl, View, PAGE_WIDTH};
use crate::context::{use_theme, Context};
use crate::error::RenderError;
use crate::mode::ThemeMode;
use crate::render::Renderer;

/// Page header: the portal title with the toggle control below it.
#[derive(Debug, Clone)]
pub struct Header {
    toggle: ToggleControl,
}

#[derive(Serialize)]
struct HeaderData {
    mode: ThemeMode,
    width: usize,
    title: &'static str,
    toggle: String,
    toggle_width: usize,
}

impl Header {
    pub const TITLE: &'static str = "KL Student Portal";

    pub fn new() -> Self {
        Self {
            toggle: ToggleControl::new(),
        }
    }

    pub fn toggle(&self) -> &ToggleControl {
        &self.toggle
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Header {
    fn render(&self, ctx: &Context, renderer: &Renderer) -> Result<String, RenderError> {
        let mode = use_theme(ctx)?.mode();
        let data = HeaderData {
            mode,
            width: PAGE_WIDTH,
            title: Self::TITLE,
            toggle: self.toggle.render(ctx, renderer)?,
            toggle_width: self.toggle.width(ctx)?,
        };
        renderer.render("header", &data)
    }
}
