use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::View;
use crate::context::{use_theme, Context};
use crate::error::{RenderError, ThemeError};
use crate::mode::ThemeMode;
use crate::render::Renderer;

/// The control that switches between light and dark mode.
///
/// Its label always names the mode the page will be in after activation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleControl;

#[derive(Serialize)]
struct ToggleData {
    mode: ThemeMode,
    label: String,
}

impl ToggleControl {
    pub fn new() -> Self {
        Self
    }

    /// Label shown while the page is in `mode`.
    pub fn label_for(mode: ThemeMode) -> String {
        format!("Switch to {} Mode", mode.complement().title())
    }

    /// Current label under `ctx`.
    pub fn label(&self, ctx: &Context) -> Result<String, ThemeError> {
        Ok(Self::label_for(use_theme(ctx)?.mode()))
    }

    /// Rendered width of the control, padding included.
    pub fn width(&self, ctx: &Context) -> Result<usize, ThemeError> {
        Ok(self.label(ctx)?.width() + 2)
    }

    /// Activates the control: toggles the mode and returns the new one.
    pub fn activate(&self, ctx: &Context) -> Result<ThemeMode, ThemeError> {
        let theme = use_theme(ctx)?;
        theme.toggle();
        Ok(theme.mode())
    }
}

impl View for ToggleControl {
    fn render(&self, ctx: &Context, renderer: &Renderer) -> Result<String, RenderError> {
        let mode = use_theme(ctx)?.mode();
        let data = ToggleData {
            mode,
            label: Self::label_for(mode),
        };
        renderer.render("toggle", &data)
    }
}
