//! Render context and the theme accessor.

use crate::error::ThemeError;
use crate::store::ThemeHandle;

/// What a view renders under.
///
/// A context either carries the theme handle of a mounted provider, or is
/// [`Context::detached`], which is what a view sees when it is rendered
/// outside any provider.
#[derive(Debug, Clone, Default)]
pub struct Context {
    theme: Option<ThemeHandle>,
}

impl Context {
    /// A context with no provider above it.
    pub fn detached() -> Self {
        Self::default()
    }

    pub(crate) fn with_theme(handle: ThemeHandle) -> Self {
        Self {
            theme: Some(handle),
        }
    }
}

/// Looks up the theme store for a consumer.
///
/// # Errors
///
/// Returns [`ThemeError::MissingProvider`] when `ctx` was not handed out by a
/// mounted [`ThemeProvider`](crate::ThemeProvider), or the provider has since
/// been unmounted.
///
/// # Example
///
/// ```rust
/// use portal_theme::{use_theme, Context, ThemeError, ThemeProvider};
///
/// assert_eq!(
///     use_theme(&Context::detached()).unwrap_err(),
///     ThemeError::MissingProvider,
/// );
///
/// let provider = ThemeProvider::mount();
/// let theme = use_theme(&provider.context()).unwrap();
/// theme.toggle();
/// assert_eq!(provider.mode().as_str(), "dark");
/// ```
pub fn use_theme(ctx: &Context) -> Result<ThemeHandle, ThemeError> {
    match &ctx.theme {
        Some(handle) if handle.is_mounted() => Ok(handle.clone()),
        _ => Err(ThemeError::MissingProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ThemeMode;

    #[test]
    fn test_detached_context_fails() {
        let ctx = Context::detached();
        assert_eq!(use_theme(&ctx).unwrap_err(), ThemeError::MissingProvider);
    }

    #[test]
    fn test_context_with_theme_succeeds() {
        let handle = ThemeHandle::new();
        let ctx = Context::with_theme(handle.clone());
        let theme = use_theme(&ctx).unwrap();
        assert!(theme.same_store(&handle));
        theme.toggle();
        assert_eq!(handle.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_released_store_is_out_of_scope() {
        let handle = ThemeHandle::new();
        let ctx = Context::with_theme(handle.clone());
        handle.release();
        assert_eq!(use_theme(&ctx).unwrap_err(), ThemeError::MissingProvider);
    }
}
