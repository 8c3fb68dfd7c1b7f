//! Template renderer with mode-aware styling.
//!
//! Views are MiniJinja templates. The `style` filter applies a named style
//! from the [`Palette`], and picks the light or dark side from the `mode`
//! variable of the template data. A template rendered without `mode` is an
//! error rather than silently falling back to one side.
//!
//! Filters:
//!
//! - `style(name)` - apply a named style per the renderer's [`OutputMode`]
//! - `fit(width)` - pad with spaces, or truncate with `…`, to a display width
//! - `nl` - append a newline

use minijinja::{Environment, Error, ErrorKind, State, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::RenderError;
use crate::mode::ThemeMode;
use crate::output::OutputMode;
use crate::palette::Palette;

/// A renderer holding compiled view templates.
///
/// # Example
///
/// ```rust
/// use portal_theme::{OutputMode, Palette, Renderer, ThemeMode};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Banner { mode: ThemeMode, text: &'static str }
///
/// let mut renderer = Renderer::new(Palette::default(), OutputMode::TermDebug).unwrap();
/// renderer.add_template("banner", r#"{{ text | style("panel_title") }}"#).unwrap();
///
/// let out = renderer
///     .render("banner", &Banner { mode: ThemeMode::Dark, text: "Hi" })
///     .unwrap();
/// assert_eq!(out, "[panel_title]Hi[/panel_title]");
/// ```
pub struct Renderer {
    env: Environment<'static>,
    output: OutputMode,
}

impl Renderer {
    /// Creates a renderer with no templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Style`] if either side of the palette has a
    /// dangling or cyclic alias.
    pub fn new(palette: Palette, output: OutputMode) -> Result<Self, RenderError> {
        palette.validate()?;

        let mut env = Environment::new();
        register_filters(&mut env, palette, output);
        Ok(Self { env, output })
    }

    /// Compiles and registers a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }
}

fn register_filters(env: &mut Environment<'static>, palette: Palette, output: OutputMode) {
    let is_debug = output.is_debug();
    let use_color = output.should_use_color();

    env.add_filter(
        "style",
        move |state: &State, value: Value, name: String| -> Result<String, Error> {
            let mode = mode_of(state)?;
            let styles = palette.styles(mode);
            let text = value.to_string();
            Ok(if is_debug {
                styles.apply_debug(&name, &text)
            } else {
                styles.apply_with_mode(&name, &text, use_color)
            })
        },
    );

    env.add_filter("fit", |value: Value, width: i64| -> String {
        fit_to_width(&value.to_string(), width.max(0) as usize)
    });

    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

fn mode_of(state: &State) -> Result<ThemeMode, Error> {
    let value = state.lookup("mode").ok_or_else(|| {
        Error::new(
            ErrorKind::UndefinedError,
            "style filter needs a `mode` variable",
        )
    })?;
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("`mode` must be 'light' or 'dark', got {}", value),
            )
        })
}

/// Pads `s` with trailing spaces to exactly `width` columns, truncating with
/// `…` when it is wider.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current <= width {
        let mut out = String::with_capacity(s.len() + width - current);
        out.push_str(s);
        out.extend(std::iter::repeat(' ').take(width - current));
        return out;
    }

    let limit = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
        used += 1;
    }
    // a wide char may leave one column short
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
