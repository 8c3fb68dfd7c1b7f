use serde::Serialize;

use super::{View, PAGE_WIDTH};
use crate::context::{use_theme, Context};
use crate::error::RenderError;
use crate::mode::ThemeMode;
use crate::render::Renderer;

#[derive(Serialize)]
struct PanelData<'a> {
    mode: ThemeMode,
    width: usize,
    title: &'a str,
    body: &'a str,
}

fn render_panel(
    ctx: &Context,
    renderer: &Renderer,
    title: &str,
    body: impl FnOnce(ThemeMode) -> String,
) -> Result<String, RenderError> {
    let mode = use_theme(ctx)?.mode();
    let body = body(mode);
    let data = PanelData {
        mode,
        width: PAGE_WIDTH,
        title,
        body: &body,
    };
    renderer.render("panel", &data)
}

/// Landing panel; tells the student which theme is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardPanel;

impl DashboardPanel {
    pub const TITLE: &'static str = "Student Dashboard";

    pub fn body(mode: ThemeMode) -> String {
        format!("Welcome to your student portal. Current theme: {}", mode)
    }
}

impl View for DashboardPanel {
    fn render(&self, ctx: &Context, renderer: &Renderer) -> Result<String, RenderError> {
        render_panel(ctx, renderer, Self::TITLE, Self::body)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoursesPanel;

impl CoursesPanel {
    pub const TITLE: &'static str = "My Courses";
    pub const BODY: &'static str = "View and manage your enrolled courses.";
}

impl View for CoursesPanel {
    fn render(&self, ctx: &Context, renderer: &Renderer) -> Result<String, RenderError> {
        render_panel(ctx, renderer, Self::TITLE, |_| Self::BODY.to_string())
    }
}
