//! The mounted portal page.
//!
//! [`Portal`] is the composition root: it mounts the [`ThemeProvider`] once,
//! builds the [`RootView`], and subscribes a redraw listener to the store so
//! the page is re-rendered after every mode transition.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use crate::context::Context;
use crate::error::{RenderError, ThemeError};
use crate::mode::ThemeMode;
use crate::output::OutputMode;
use crate::palette::Palette;
use crate::provider::ThemeProvider;
use crate::render::Renderer;
use crate::sync::BodyClass;
use crate::views::{register_templates, RootView, ToggleControl, View};

/// Serializable state of the page, used by [`OutputMode::Json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub mode: ThemeMode,
    pub body_class: String,
    pub toggle_label: String,
    pub render_count: usize,
}

struct Screen {
    root: RootView,
    renderer: Renderer,
    ctx: Context,
    frame: RefCell<String>,
    renders: Cell<usize>,
    // set while `frame` predates the current mode
    stale: Cell<bool>,
    error: RefCell<Option<RenderError>>,
}

impl Screen {
    fn redraw(&self) {
        match self.root.render(&self.ctx, &self.renderer) {
            Ok(text) => {
                *self.frame.borrow_mut() = text;
                self.renders.set(self.renders.get() + 1);
                self.stale.set(false);
                self.error.borrow_mut().take();
            }
            Err(err) => {
                tracing::warn!(error = %err, "redraw failed");
                self.stale.set(true);
                *self.error.borrow_mut() = Some(err);
            }
        }
    }
}

/// A mounted page: provider, views, and the latest rendered frame.
///
/// # Example
///
/// ```rust
/// use portal_theme::{OutputMode, Portal, ThemeMode};
///
/// let portal = Portal::mount(OutputMode::Text).unwrap();
/// assert_eq!(portal.mode(), ThemeMode::Light);
/// assert!(portal.frame().unwrap().contains("Switch to Dark Mode"));
///
/// portal.activate_toggle().unwrap();
/// assert_eq!(portal.body_class(), "dark");
/// assert!(portal.frame().unwrap().contains("Switch to Light Mode"));
/// ```
pub struct Portal {
    screen: Rc<Screen>,
    provider: ThemeProvider,
}

impl Portal {
    /// Mounts the page with the default palette.
    pub fn mount(output: OutputMode) -> Result<Self, RenderError> {
        Self::mount_with(Palette::default(), output, BodyClass::new())
    }

    /// Mounts the page with a custom palette, mirroring the mode onto `body`.
    ///
    /// # Errors
    ///
    /// Fails if the palette is invalid or the first render fails.
    pub fn mount_with(
        palette: Palette,
        output: OutputMode,
        body: BodyClass,
    ) -> Result<Self, RenderError> {
        let mut renderer = Renderer::new(palette, output)?;
        register_templates(&mut renderer)?;

        let provider = ThemeProvider::mount_with(body);
        let screen = Rc::new(Screen {
            root: RootView::new(),
            renderer,
            ctx: provider.context(),
            frame: RefCell::new(String::new()),
            renders: Cell::new(0),
            stale: Cell::new(false),
            error: RefCell::new(None),
        });

        screen.redraw();
        if let Some(err) = screen.error.borrow_mut().take() {
            return Err(err);
        }

        let redraw = Rc::clone(&screen);
        provider.handle().subscribe(move |mode| {
            tracing::trace!(mode = %mode, "redrawing portal");
            redraw.redraw();
        });

        Ok(Self { screen, provider })
    }

    /// The context the page's views render under.
    pub fn context(&self) -> Context {
        self.provider.context()
    }

    pub fn mode(&self) -> ThemeMode {
        self.provider.mode()
    }

    /// Current value of the global presentation attribute.
    pub fn body_class(&self) -> String {
        self.provider.body_class().get()
    }

    pub fn toggle_label(&self) -> String {
        ToggleControl::label_for(self.mode())
    }

    /// Activates the header's toggle control.
    pub fn activate_toggle(&self) -> Result<ThemeMode, ThemeError> {
        self.screen.root.header().toggle().activate(&self.screen.ctx)
    }

    /// The latest rendered frame.
    ///
    /// # Errors
    ///
    /// If the last redraw failed, redraws again; fails for as long as that
    /// retry fails, never handing out the outdated frame.
    pub fn frame(&self) -> Result<String, RenderError> {
        if self.screen.stale.get() {
            self.screen.redraw();
        }
        if self.screen.stale.get() {
            if let Some(err) = self.screen.error.borrow_mut().take() {
                return Err(err);
            }
        }
        Ok(self.screen.frame.borrow().clone())
    }

    /// Number of successful renders since mount.
    pub fn render_count(&self) -> usize {
        self.screen.renders.get()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode(),
            body_class: self.body_class(),
            toggle_label: self.toggle_label(),
            render_count: self.render_count(),
        }
    }

    /// Output for the renderer's mode: the frame, or a JSON snapshot.
    pub fn output(&self) -> Result<String, RenderError> {
        if self.screen.renderer.output().is_structured() {
            Ok(serde_json::to_string_pretty(&self.snapshot())?)
        } else {
            self.frame()
        }
    }

    /// Unmounts the page; the provider resets and drops its listeners.
    pub fn unmount(self) {
        let Portal { screen, provider } = self;
        provider.unmount();
        drop(screen);
    }
}
