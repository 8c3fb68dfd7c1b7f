//! Theme state holder with explicit listener registration.
//!
//! [`ThemeStore`] owns the single [`ThemeMode`] value of a mounted page and the
//! listeners that want to hear about changes. Consumers never touch the store
//! directly: they hold a [`ThemeHandle`], a cheap reference-counted handle
//! handed out by the provider.
//!
//! # Notification order
//!
//! [`ThemeHandle::toggle`] commits the new mode first and then calls every
//! listener, in registration order, with that new value. A listener that
//! reads [`ThemeHandle::mode`] during notification therefore sees the same
//! value it was called with.
//!
//! Listeners may subscribe or unsubscribe while being notified. Those changes
//! take effect from the next notification.
//!
//! A listener may also toggle. The new mode is committed at once, later
//! listeners in the same pass are called with it, and once the pass ends every
//! listener is notified again. When `toggle` returns, every listener has seen
//! the final mode last.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::mode::ThemeMode;

/// Callback invoked with the committed mode after every transition.
type Listener = Box<dyn FnMut(ThemeMode)>;

/// Identifies a registered listener so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The state behind a [`ThemeHandle`].
pub(crate) struct ThemeStore {
    mode: Cell<ThemeMode>,
    mounted: Cell<bool>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    // ids of listeners taken out of `listeners` for the current notification
    in_flight: RefCell<Vec<ListenerId>>,
    pending_removals: RefCell<Vec<ListenerId>>,
    notifying: Cell<bool>,
    // a listener toggled during the current pass
    requeued: Cell<bool>,
    next_id: Cell<u64>,
}

impl ThemeStore {
    fn new() -> Self {
        Self {
            mode: Cell::new(ThemeMode::Light),
            mounted: Cell::new(true),
            listeners: RefCell::new(Vec::new()),
            in_flight: RefCell::new(Vec::new()),
            pending_removals: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
            requeued: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    fn notify(&self) {
        self.notifying.set(true);
        loop {
            self.requeued.set(false);
            self.notify_pass();
            if !self.requeued.get() {
                break;
            }
            tracing::trace!(mode = %self.mode.get(), "re-notifying after nested toggle");
        }
        self.notifying.set(false);
    }

    fn notify_pass(&self) {
        let mut active = std::mem::take(&mut *self.listeners.borrow_mut());
        *self.in_flight.borrow_mut() = active.iter().map(|(id, _)| *id).collect();

        for (_, listener) in active.iter_mut() {
            listener(self.mode.get());
        }

        self.in_flight.borrow_mut().clear();
        let removed = std::mem::take(&mut *self.pending_removals.borrow_mut());
        if !removed.is_empty() {
            active.retain(|(id, _)| !removed.contains(id));
        }

        let mut listeners = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        active.extend(added);
        *listeners = active;
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode.get())
            .field("mounted", &self.mounted.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

/// Shared handle to a mounted theme store.
///
/// Every clone refers to the same store, so all holders observe the same
/// mode at all times.
///
/// # Example
///
/// ```rust
/// use portal_theme::{ThemeHandle, ThemeMode};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let handle = ThemeHandle::new();
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
/// handle.subscribe(move |mode| sink.set(Some(mode)));
///
/// handle.toggle();
/// assert_eq!(handle.mode(), ThemeMode::Dark);
/// assert_eq!(seen.get(), Some(ThemeMode::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeHandle {
    store: Rc<ThemeStore>,
}

impl ThemeHandle {
    /// Creates a store in the initial [`ThemeMode::Light`] mode.
    pub fn new() -> Self {
        Self {
            store: Rc::new(ThemeStore::new()),
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> ThemeMode {
        self.store.mode.get()
    }

    /// Flips the mode and notifies every listener with the new value.
    ///
    /// Does nothing once the owning provider has unmounted. Called from inside
    /// a listener, it commits immediately and defers the notification until
    /// the running pass ends.
    pub fn toggle(&self) {
        if !self.is_mounted() {
            tracing::debug!("toggle ignored: theme store released");
            return;
        }
        let next = self.store.mode.get().complement();
        self.store.mode.set(next);
        tracing::debug!(mode = %next, "theme toggled");

        if self.store.notifying.get() {
            self.store.requeued.set(true);
        } else {
            self.store.notify();
        }
    }

    /// Registers a listener called after every transition.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: FnMut(ThemeMode) + 'static,
    {
        let id = ListenerId(self.store.next_id.get());
        self.store.next_id.set(id.0 + 1);
        self.store
            .listeners
            .borrow_mut()
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.store.listeners.borrow_mut();
        if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
            listeners.remove(pos);
            return true;
        }
        drop(listeners);

        if self.store.in_flight.borrow().contains(&id) {
            let mut pending = self.store.pending_removals.borrow_mut();
            if !pending.contains(&id) {
                pending.push(id);
                return true;
            }
        }
        false
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.store.listeners.borrow().len() + self.store.in_flight.borrow().len()
            - self.store.pending_removals.borrow().len()
    }

    /// Returns true while the owning provider is mounted.
    pub fn is_mounted(&self) -> bool {
        self.store.mounted.get()
    }

    /// Returns true if both handles refer to the same store.
    pub fn same_store(&self, other: &ThemeHandle) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Tears the store down: drops listeners and resets the mode.
    pub(crate) fn release(&self) {
        self.store.mounted.set(false);
        self.store.mode.set(ThemeMode::Light);
        self.store.listeners.borrow_mut().clear();
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(handle: &ThemeHandle) -> (ListenerId, Rc<RefCell<Vec<ThemeMode>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = handle.subscribe(move |mode| sink.borrow_mut().push(mode));
        (id, log)
    }

    #[test]
    fn test_initial_mode_is_light() {
        assert_eq!(ThemeHandle::new().mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_flips_and_returns() {
        let handle = ThemeHandle::new();
        handle.toggle();
        assert_eq!(handle.mode(), ThemeMode::Dark);
        handle.toggle();
        assert_eq!(handle.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_clones_share_state() {
        let a = ThemeHandle::new();
        let b = a.clone();
        a.toggle();
        assert_eq!(b.mode(), ThemeMode::Dark);
        assert!(a.same_store(&b));
        assert!(!a.same_store(&ThemeHandle::new()));
    }

    #[test]
    fn test_listeners_receive_committed_mode() {
        let handle = ThemeHandle::new();
        let observer = handle.clone();
        let matched = Rc::new(Cell::new(true));
        let flag = Rc::clone(&matched);
        handle.subscribe(move |mode| {
            if observer.mode() != mode {
                flag.set(false);
            }
        });

        handle.toggle();
        handle.toggle();
        assert!(matched.get());
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let handle = ThemeHandle::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            handle.subscribe(move |_| order.borrow_mut().push(n));
        }
        handle.toggle();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let handle = ThemeHandle::new();
        let (id, log) = recorder(&handle);
        handle.toggle();
        assert!(handle.unsubscribe(id));
        assert!(!handle.unsubscribe(id));
        handle.toggle();
        assert_eq!(*log.borrow(), vec![ThemeMode::Dark]);
        assert_eq!(handle.listener_count(), 0);
    }

    #[test]
    fn test_subscribe_during_notification_applies_next_time() {
        let handle = ThemeHandle::new();
        let inner = handle.clone();
        let late = Rc::new(RefCell::new(Vec::new()));
        let late_sink = Rc::clone(&late);
        let added = Rc::new(Cell::new(false));
        handle.subscribe(move |_| {
            if !added.replace(true) {
                let sink = Rc::clone(&late_sink);
                inner.subscribe(move |mode| sink.borrow_mut().push(mode));
            }
        });

        handle.toggle();
        assert!(late.borrow().is_empty());
        handle.toggle();
        assert_eq!(*late.borrow(), vec![ThemeMode::Light]);
        assert_eq!(handle.listener_count(), 2);
    }

    #[test]
    fn test_unsubscribe_self_during_notification() {
        let handle = ThemeHandle::new();
        let inner = handle.clone();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let own_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let id_slot = Rc::clone(&own_id);
        let id = handle.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let Some(id) = id_slot.get() {
                assert!(inner.unsubscribe(id));
            }
        });
        own_id.set(Some(id));

        handle.toggle();
        handle.toggle();
        assert_eq!(calls.get(), 1);
        assert_eq!(handle.listener_count(), 0);
    }

    #[test]
    fn test_release_resets_and_drops_listeners() {
        let handle = ThemeHandle::new();
        let (_, log) = recorder(&handle);
        handle.toggle();
        handle.release();

        assert!(!handle.is_mounted());
        assert_eq!(handle.mode(), ThemeMode::Light);
        assert_eq!(handle.listener_count(), 0);
        assert_eq!(*log.borrow(), vec![ThemeMode::Dark]);
    }

    #[test]
    fn test_toggle_after_release_is_ignored() {
        let handle = ThemeHandle::new();
        let stale = handle.clone();
        handle.release();

        stale.toggle();
        assert_eq!(handle.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_inside_listener_keeps_observers_in_step() {
        let handle = ThemeHandle::new();
        let attribute = Rc::new(Cell::new(handle.mode()));
        let sink = Rc::clone(&attribute);
        handle.subscribe(move |mode| sink.set(mode));

        let inner = handle.clone();
        let fired = Rc::new(Cell::new(false));
        handle.subscribe(move |_| {
            if !fired.replace(true) {
                inner.toggle();
            }
        });
        let (_, later) = recorder(&handle);

        handle.toggle();

        assert_eq!(handle.mode(), ThemeMode::Light);
        assert_eq!(attribute.get(), handle.mode());
        // the later listener never sees the superseded mode
        assert_eq!(*later.borrow(), vec![ThemeMode::Light, ThemeMode::Light]);
    }

    #[test]
    fn test_unsubscribe_survives_nested_toggle() {
        let handle = ThemeHandle::new();
        let inner = handle.clone();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let own_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let id_slot = Rc::clone(&own_id);
        let id = handle.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let Some(id) = id_slot.get() {
                assert!(inner.unsubscribe(id));
            }
            inner.toggle();
        });
        own_id.set(Some(id));
        let (_, log) = recorder(&handle);

        handle.toggle();

        assert_eq!(calls.get(), 1);
        assert_eq!(handle.mode(), ThemeMode::Light);
        assert_eq!(*log.borrow(), vec![ThemeMode::Light, ThemeMode::Light]);
        assert_eq!(handle.listener_count(), 1);
    }
}
