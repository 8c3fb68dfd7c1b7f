//! Output mode control for rendering.

use console::Term;

/// Controls how the page is rendered.
///
/// - `Auto` - use ANSI styling when stdout supports colors
/// - `Term` - always include ANSI escape codes
/// - `Text` - never include ANSI escape codes
/// - `TermDebug` - render style names as bracket tags, `[name]text[/name]`
/// - `Json` - serialize a snapshot of the page state instead of rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
    Json,
}

impl OutputMode {
    /// Whether styled text should carry ANSI codes.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    /// Structured modes skip templates entirely.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
    }

    #[test]
    fn test_color_decisions() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
    }

    #[test]
    fn test_mode_kinds() {
        assert!(OutputMode::TermDebug.is_debug());
        assert!(!OutputMode::Term.is_debug());
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Text.is_structured());
    }
}
