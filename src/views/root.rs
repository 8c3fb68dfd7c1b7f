use serde::Serialize;

use super::{CoursesPanel, DashboardPanel, Header, View};
use crate::context::{use_theme, Context};
use crate::error::RenderError;
use crate::mode::ThemeMode;
use crate::render::Renderer;

/// The whole page: header, then the content region.
#[derive(Debug, Clone, Default)]
pub struct RootView {
    header: Header,
    dashboard: DashboardPanel,
    courses: CoursesPanel,
}

#[derive(Serialize)]
struct RootData {
    mode: ThemeMode,
    header: String,
    panels: Vec<String>,
}

impl RootView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }
}

impl View for RootView {
    fn render(&self, ctx: &Context, renderer: &Renderer) -> Result<String, RenderError> {
        let data = RootData {
            mode: use_theme(ctx)?.mode(),
            header: self.header.render(ctx, renderer)?,
            panels: vec![
                self.dashboard.render(ctx, renderer)?,
                self.courses.render(ctx, renderer)?,
            ],
        };
        renderer.render("root", &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use crate::provider::ThemeProvider;
    use crate::views::test_support::renderer;

    #[test]
    fn test_root_order() {
        let provider = ThemeProvider::mount();
        let out = RootView::new()
            .render(&provider.context(), &renderer(OutputMode::Text))
            .unwrap();

        let title = out.find("KL Student Portal").unwrap();
        let dashboard = out.find("Student Dashboard").unwrap();
        let courses = out.find("My Courses").unwrap();
        assert!(title < dashboard && dashboard < courses);
    }

    #[test]
    fn test_root_layout_line_count() {
        let provider = ThemeProvider::mount();
        let out = RootView::new()
            .render(&provider.context(), &renderer(OutputMode::Text))
            .unwrap();
        // header 5 + blank + (panel 5 + blank) * 2
        assert_eq!(out.lines().count(), 18);
        assert!(out.ends_with("\n\n"));
    }
}
