//! # portal-theme - light/dark theming for the KL Student Portal
//!
//! A single page rendered to the terminal, whose look follows one shared
//! [`ThemeMode`]. The mode lives in a [`ThemeProvider`]; views reach it only
//! through the [`Context`] the provider hands out, and the provider mirrors
//! it onto one global presentation attribute ([`BodyClass`]).
//!
//! ## Quick start
//!
//! ```rust
//! use portal_theme::{OutputMode, Portal, ThemeMode};
//!
//! let portal = Portal::mount(OutputMode::Text).unwrap();
//! assert_eq!(portal.mode(), ThemeMode::Light);
//! assert_eq!(portal.body_class(), "light");
//! assert_eq!(portal.toggle_label(), "Switch to Dark Mode");
//!
//! portal.activate_toggle().unwrap();
//! assert_eq!(portal.body_class(), "dark");
//! assert_eq!(portal.toggle_label(), "Switch to Light Mode");
//! ```
//!
//! ## Accessing the theme
//!
//! [`use_theme`] is the only way for a view to reach the store. It returns
//! [`ThemeError::MissingProvider`] for a context no provider produced:
//!
//! ```rust
//! use portal_theme::{use_theme, Context, ThemeError};
//!
//! let err = use_theme(&Context::detached()).unwrap_err();
//! assert_eq!(err, ThemeError::MissingProvider);
//! ```
//!
//! ## Observing changes
//!
//! The store notifies listeners explicitly, after the new mode is committed.
//! [`DocumentStyleSync`] and the [`Portal`] redraw are both such listeners.
//!
//! ## Styling
//!
//! Views are MiniJinja templates styled by name through a [`Palette`], a pair
//! of light/dark [`style::Styles`]. [`OutputMode`] decides whether styles
//! become ANSI codes, plain text, debug tags, or whether a JSON
//! [`Snapshot`] is printed instead.

mod context;
mod error;
mod mode;
mod output;
mod palette;
mod portal;
mod provider;
mod render;
mod store;
mod sync;

pub mod style;
pub mod views;

pub use context::{use_theme, Context};
pub use error::{RenderError, ThemeError};
pub use mode::ThemeMode;
pub use output::OutputMode;
pub use palette::{Palette, PORTAL_PALETTE};
pub use portal::{Portal, Snapshot};
pub use provider::ThemeProvider;
pub use render::{fit_to_width, Renderer};
pub use store::{ListenerId, ThemeHandle};
pub use sync::{BodyClass, DocumentStyleSync};
pub use views::View;
