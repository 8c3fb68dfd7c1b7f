//! Error types.

use thiserror::Error;

use crate::style::StyleValidationError;

/// Errors raised by the theme store and its accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The accessor was called with a context no provider handed out.
    #[error("use_theme must be used within a ThemeProvider")]
    MissingProvider,
    /// A string did not name a theme mode.
    #[error("unknown theme mode '{0}' (expected 'light' or 'dark')")]
    UnknownMode(String),
}

/// Errors raised while building the renderer or rendering a view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("invalid palette: {0}")]
    Style(#[from] StyleValidationError),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("failed to serialize snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_message() {
        let msg = ThemeError::MissingProvider.to_string();
        assert!(msg.contains("must be used within a ThemeProvider"));
    }

    #[test]
    fn test_render_error_is_transparent_for_theme_errors() {
        let err: RenderError = ThemeError::MissingProvider.into();
        assert_eq!(err.to_string(), ThemeError::MissingProvider.to_string());
        assert!(matches!(err, RenderError::Theme(ThemeError::MissingProvider)));
    }

    #[test]
    fn test_style_error_display() {
        let err: RenderError = StyleValidationError::UnresolvedAlias {
            from: "panel".into(),
            to: "missing".into(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("panel"));
        assert!(msg.contains("missing"));
    }
}
