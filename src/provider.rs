//! The theme provider: owns the store and the attribute sync.

use crate::context::Context;
use crate::mode::ThemeMode;
use crate::store::ThemeHandle;
use crate::sync::{BodyClass, DocumentStyleSync};

/// Owns the theme state of one mounted page.
///
/// Mounting creates a fresh store in [`ThemeMode::Light`] and attaches a
/// [`DocumentStyleSync`]. Views reach the store only through the
/// [`Context`] returned by [`ThemeProvider::context`]. Unmounting (or
/// dropping) the provider tears the store down, after which those contexts
/// no longer resolve.
///
/// # Example
///
/// ```rust
/// use portal_theme::{ThemeMode, ThemeProvider};
///
/// let provider = ThemeProvider::mount();
/// assert_eq!(provider.mode(), ThemeMode::Light);
/// assert_eq!(provider.body_class().get(), "light");
///
/// provider.handle().toggle();
/// assert_eq!(provider.body_class().get(), "dark");
/// ```
#[derive(Debug)]
pub struct ThemeProvider {
    handle: ThemeHandle,
    body: BodyClass,
    sync: Option<DocumentStyleSync>,
}

impl ThemeProvider {
    /// Mounts a provider writing to its own presentation attribute.
    pub fn mount() -> Self {
        Self::mount_with(BodyClass::new())
    }

    /// Mounts a provider that mirrors the mode onto `body`.
    pub fn mount_with(body: BodyClass) -> Self {
        let handle = ThemeHandle::new();
        let sync = DocumentStyleSync::attach(&handle, body.clone());
        tracing::debug!(mode = %handle.mode(), "theme provider mounted");
        Self {
            handle,
            body,
            sync: Some(sync),
        }
    }

    /// The context descendants render under.
    pub fn context(&self) -> Context {
        Context::with_theme(self.handle.clone())
    }

    /// Direct handle to the store, for the composition root.
    pub fn handle(&self) -> &ThemeHandle {
        &self.handle
    }

    pub fn mode(&self) -> ThemeMode {
        self.handle.mode()
    }

    /// The attribute kept in sync with the mode.
    pub fn body_class(&self) -> &BodyClass {
        &self.body
    }

    /// Unmounts the provider, resetting its state.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(sync) = self.sync.take() {
            sync.detach(&self.handle);
            self.handle.release();
            tracing::debug!("theme provider unmounted");
        }
    }
}

impl Drop for ThemeProvider {
    fn drop(&mut self) {
        self.teardown();
    }
}
