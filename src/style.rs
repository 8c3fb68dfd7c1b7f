//! Named styles with aliases.
//!
//! Views never name colors directly. Templates apply a style by name
//! (`{{ title | style("header_title") }}`) and a [`Styles`] set maps that name
//! to a concrete `console::Style`, possibly through aliases:
//!
//! ```rust
//! use portal_theme::style::Styles;
//! use console::Style;
//!
//! let styles = Styles::new()
//!     .add("ink", Style::new().bold())
//!     .add("panel_title", "ink");
//!
//! assert!(styles.validate().is_ok());
//! assert!(styles.has("panel_title"));
//! ```

use std::collections::{HashMap, HashSet};

use console::{Color, Style};
use thiserror::Error;

/// Prepended to text whose style name does not resolve.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A concrete style or the name of another style.
#[derive(Debug, Clone)]
pub enum StyleValue {
    Concrete(Style),
    Alias(String),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}

/// Alias problems found by [`Styles::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// A set of named styles.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, StyleValue>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Follows aliases to a concrete style. `None` on a dangling alias or cycle.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        let mut seen = HashSet::new();
        loop {
            if !seen.insert(current) {
                return None;
            }
            match self.styles.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(next) => current = next,
            }
        }
    }

    /// Checks every alias chain ends in a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        // sorted so the reported error is stable
        let mut names: Vec<&String> = self.styles.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name.as_str();
            while let Some(StyleValue::Alias(target)) = self.styles.get(current) {
                if !self.styles.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.to_string(),
                        to: target.clone(),
                    });
                }
                if path.iter().any(|p| p == target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies a style with or without ANSI codes.
    ///
    /// Unknown names get [`MISSING_STYLE_INDICATOR`] prepended either way.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Renders the style name as bracket tags, `[name]text[/name]`.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.resolve(name).is_some() {
            format!("[{name}]{text}[/{name}]")
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

/// Builds a style with the given foreground and background colors.
pub fn fg_on_bg(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> Style {
    Style::new()
        .fg(Color::Color256(rgb_to_ansi256(fg)))
        .bg(Color::Color256(rgb_to_ansi256(bg)))
}

/// Parses `#rrggbb` or `#rgb`.
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expand = |c: char| c.to_digit(16).map(|d| (d * 17) as u8);
    match digits.len() {
        3 => {
            let mut chars = digits.chars();
            Some((
                expand(chars.next()?)?,
                expand(chars.next()?)?,
                expand(chars.next()?)?,
            ))
        }
        6 => Some((
            u8::from_str_radix(digits.get(0..2)?, 16).ok()?,
            u8::from_str_radix(digits.get(2..4)?, 16).ok()?,
            u8::from_str_radix(digits.get(4..6)?, 16).ok()?,
        )),
        _ => None,
    }
}

/// Nearest ANSI 256-color index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        // grayscale ramp, with the cube corners for the extremes
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_through_aliases() {
        let styles = Styles::new()
            .add("base", Style::new().bold())
            .add("mid", "base")
            .add("top", "mid");
        assert!(styles.resolve("top").is_some());
        assert!(styles.resolve("nope").is_none());
    }

    #[test]
    fn test_validate_dangling_alias() {
        let styles = Styles::new().add("orphan", "missing");
        assert_eq!(
            styles.validate(),
            Err(StyleValidationError::UnresolvedAlias {
                from: "orphan".into(),
                to: "missing".into(),
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let styles = Styles::new().add("a", "b").add("b", "a");
        match styles.validate() {
            Err(StyleValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
        assert!(styles.resolve("a").is_none());
    }

    #[test]
    fn test_apply_plain_and_colored() {
        let styles = Styles::new().add("ok", Style::new().green());
        assert_eq!(styles.apply_with_mode("ok", "hi", false), "hi");
        let colored = styles.apply_with_mode("ok", "hi", true);
        assert!(colored.contains("\x1b[32m"));
        assert!(colored.contains("hi"));
    }

    #[test]
    fn test_apply_missing_style() {
        let styles = Styles::new();
        assert_eq!(styles.apply_with_mode("typo", "hi", false), "(!?) hi");
        assert_eq!(styles.apply_debug("typo", "hi"), "(!?) hi");
    }

    #[test]
    fn test_apply_debug_tags() {
        let styles = Styles::new()
            .add("bold", Style::new().bold())
            .add("title", "bold");
        assert_eq!(styles.apply_debug("title", "KL"), "[title]KL[/title]");
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#f5f5f5"), Some((245, 245, 245)));
        assert_eq!(hex_rgb("#333"), Some((51, 51, 51)));
        assert_eq!(hex_rgb("fff"), Some((255, 255, 255)));
        assert_eq!(hex_rgb("#12345"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert!((232..=255).contains(&rgb_to_ansi256((51, 51, 51))));
    }
}
