//! Mirrors the theme mode onto the page's global presentation attribute.

use std::cell::RefCell;
use std::rc::Rc;

use crate::mode::ThemeMode;
use crate::store::{ListenerId, ThemeHandle};

/// The single global presentation attribute of the page.
///
/// External stylesheet rules key off this one string. It is empty until a
/// [`DocumentStyleSync`] writes to it. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct BodyClass {
    value: Rc<RefCell<String>>,
}

impl BodyClass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current attribute value.
    pub fn get(&self) -> String {
        self.value.borrow().clone()
    }

    fn set(&self, value: &str) {
        let mut current = self.value.borrow_mut();
        current.clear();
        current.push_str(value);
    }
}

/// Subscriber that writes the mode to a [`BodyClass`] after every commit.
///
/// Attaching writes the current mode immediately, so the attribute is
/// populated from mount onward.
#[derive(Debug)]
pub struct DocumentStyleSync {
    target: BodyClass,
    listener: ListenerId,
}

impl DocumentStyleSync {
    /// Writes the current mode to `target` and keeps it in step with `theme`.
    pub fn attach(theme: &ThemeHandle, target: BodyClass) -> Self {
        write_mode(&target, theme.mode());

        let sink = target.clone();
        let listener = theme.subscribe(move |mode| write_mode(&sink, mode));
        Self { target, listener }
    }

    /// The attribute this sync writes to.
    pub fn target(&self) -> &BodyClass {
        &self.target
    }

    /// Stops mirroring. The attribute keeps its last value.
    pub fn detach(self, theme: &ThemeHandle) {
        theme.unsubscribe(self.listener);
    }
}

fn write_mode(target: &BodyClass, mode: ThemeMode) {
    target.set(mode.as_str());
    tracing::debug!(class = mode.as_str(), "body class updated");
}
