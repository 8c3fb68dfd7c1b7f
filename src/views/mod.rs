//! Presentational views of the portal page.
//!
//! Every view reads the mode through [`use_theme`](crate::use_theme) and
//! renders one of the templates below. Views keep no state of their own:
//! rendering the same view twice under the same mode gives the same text.
//!
//! - [`ToggleControl`]: the mode switch button
//! - [`Header`]: page title and the toggle control
//! - [`DashboardPanel`] and [`CoursesPanel`]: static content panels
//! - [`RootView`]: header followed by the content region

mod header;
mod panels;
mod root;
mod toggle;

pub use header::Header;
pub use panels::{CoursesPanel, DashboardPanel};
pub use root::RootView;
pub use toggle::ToggleControl;

use crate::context::Context;
use crate::error::RenderError;
use crate::render::Renderer;

/// Display width of the page, in terminal columns.
pub const PAGE_WIDTH: usize = 60;

/// Something that renders itself under a provider's context.
pub trait View {
    /// # Errors
    ///
    /// Fails with [`ThemeError::MissingProvider`](crate::ThemeError::MissingProvider)
    /// (wrapped in [`RenderError::Theme`]) when `ctx` has no provider, or with a
    /// template error.
    fn render(&self, ctx: &Context, renderer: &Renderer) -> Result<String, RenderError>;
}

pub(crate) const TOGGLE_TEMPLATE: &str = r#"{{ (" " ~ label ~ " ") | style("toggle") }}"#;

pub(crate) const HEADER_TEMPLATE: &str = r#"{{ "" | fit(width) | style("header") | nl -}}
{{ ("  " ~ title) | fit(width) | style("header_title") | nl -}}
{{ "" | fit(width) | style("header") | nl -}}
{{ "  " | style("header") }}{{ toggle }}{{ "" | fit(width - 2 - toggle_width) | style("header") | nl -}}
{{ "" | fit(width) | style("header") | nl }}"#;

pub(crate) const PANEL_TEMPLATE: &str = r#"{{ "" | fit(width) | style("panel") | nl -}}
{{ ("  " ~ title) | fit(width) | style("panel_title") | nl -}}
{{ "" | fit(width) | style("panel") | nl -}}
{{ ("  " ~ body) | fit(width) | style("panel_body") | nl -}}
{{ "" | fit(width) | style("panel") | nl }}"#;

pub(crate) const ROOT_TEMPLATE: &str = r#"{{ header }}{{ "" | nl }}
{%- for panel in panels %}{{ panel }}{{ "" | nl }}{% endfor %}"#;

/// Registers the view templates on `renderer`.
pub fn register_templates(renderer: &mut Renderer) -> Result<(), RenderError> {
    renderer.add_template("toggle", TOGGLE_TEMPLATE)?;
    renderer.add_template("header", HEADER_TEMPLATE)?;
    renderer.add_template("panel", PANEL_TEMPLATE)?;
    renderer.add_template("root", ROOT_TEMPLATE)?;
    Ok(())
}
