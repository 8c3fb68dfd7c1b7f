//! Light and dark style sets for the portal page.

use console::Style;
use once_cell::sync::Lazy;

use crate::mode::ThemeMode;
use crate::style::{fg_on_bg, hex_rgb, StyleValidationError, Styles};

/// A pair of style sets, one per [`ThemeMode`].
///
/// Both sides must define the same style names; views pick a name and the
/// palette decides what it looks like in the current mode.
///
/// # Example
///
/// ```rust
/// use portal_theme::{Palette, ThemeMode};
/// use portal_theme::style::Styles;
/// use console::Style;
///
/// let palette = Palette::new(
///     Styles::new().add("tone", Style::new().green()),
///     Styles::new().add("tone", Style::new().yellow()),
/// );
/// assert!(palette.styles(ThemeMode::Dark).has("tone"));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    light: Styles,
    dark: Styles,
}

impl Palette {
    pub fn new(light: Styles, dark: Styles) -> Self {
        Self { light, dark }
    }

    /// The style set for `mode`.
    pub fn styles(&self, mode: ThemeMode) -> &Styles {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Validates the aliases of both sides.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.light.validate()?;
        self.dark.validate()
    }
}

impl Default for Palette {
    fn default() -> Self {
        PORTAL_PALETTE.clone()
    }
}

/// Colors of one mode, as `#rrggbb` strings.
struct Swatch {
    header: (&'static str, &'static str),
    panel: (&'static str, &'static str),
    toggle: (&'static str, &'static str),
}

const LIGHT: Swatch = Swatch {
    header: ("#333", "#f5f5f5"),
    panel: ("#333", "#fff"),
    toggle: ("#fff", "#333"),
};

const DARK: Swatch = Swatch {
    header: ("#fff", "#333"),
    panel: ("#fff", "#222"),
    toggle: ("#333", "#fff"),
};

fn pair((fg, bg): (&str, &str)) -> Style {
    // swatches are compile-time constants; black on white if one is mistyped
    let fg = hex_rgb(fg).unwrap_or((0, 0, 0));
    let bg = hex_rgb(bg).unwrap_or((255, 255, 255));
    fg_on_bg(fg, bg)
}

fn portal_styles(swatch: &Swatch) -> Styles {
    Styles::new()
        .add("header", pair(swatch.header))
        .add("header_title", pair(swatch.header).bold())
        .add("toggle", pair(swatch.toggle).bold())
        .add("panel", pair(swatch.panel))
        .add("panel_title", pair(swatch.panel).bold())
        .add("panel_body", "panel")
        .add("hint", Style::new().dim())
}

/// The portal's palette: header, toggle control, and content panels.
pub static PORTAL_PALETTE: Lazy<Palette> =
    Lazy::new(|| Palette::new(portal_styles(&LIGHT), portal_styles(&DARK)));
