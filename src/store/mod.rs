// SPDX-License-Identifier: MPL-2.0
//! Listener registry shared by the application stores.
//!
//! Stores own a [`Listeners`] and call [`Listeners::notify`] at the end of
//! every mutation, so subscribers observe the new state before the mutating
//! call returns. Everything runs on the UI thread, hence `Rc`/`RefCell`.
//!
//! # Example
//!
//! ```
//! use doc_extract::store::Listeners;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let listeners = Listeners::<u32>::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&seen);
//! let handle = listeners.subscribe(move |value| sink.set(*value));
//! listeners.notify(&7);
//! assert_eq!(seen.get(), 7);
//!
//! handle.unsubscribe();
//! listeners.notify(&9);
//! assert_eq!(seen.get(), 7);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: u64,
    entries: Vec<(u64, Listener<E>)>,
}

impl<E> Registry<E> {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Ordered set of callbacks interested in events of type `E`.
pub struct Listeners<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Listeners<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers `listener`. It stays attached until the returned handle's
    /// [`Unsubscribe::unsubscribe`] is called; dropping the handle does not
    /// detach it.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: FnMut(&E) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener<E> = Rc::new(RefCell::new(listener));
        registry.entries.push((id, listener));

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Unsubscribe {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry
                        .borrow_mut()
                        .entries
                        .retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Calls every attached listener in subscription order.
    ///
    /// The registry is not borrowed while listeners run, so a listener may
    /// unsubscribe itself or others; a listener detached mid-pass is skipped.
    pub fn notify(&self, event: &E) {
        let snapshot: Vec<(u64, Listener<E>)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            let mut callback = listener.borrow_mut();
            (&mut *callback)(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.registry.borrow().entries.len())
            .finish()
    }
}

/// Handle returned by [`Listeners::subscribe`].
#[must_use = "keep the handle to be able to unsubscribe later"]
pub struct Unsubscribe {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Unsubscribe {
    /// Detaches the listener. A no-op if the store is gone.
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifies_in_subscription_order() {
        let listeners = Listeners::<&'static str>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        let _a = listeners.subscribe(move |event| first.borrow_mut().push(format!("a:{event}")));
        let second = Rc::clone(&log);
        let _b = listeners.subscribe(move |event| second.borrow_mut().push(format!("b:{event}")));

        listeners.notify(&"x");
        assert_eq!(*log.borrow(), vec!["a:x".to_string(), "b:x".to_string()]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let listeners = Listeners::<u32>::new();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let handle = listeners.subscribe(move |_| counter.set(counter.get() + 1));
        listeners.notify(&1);
        handle.unsubscribe();
        listeners.notify(&2);

        assert_eq!(calls.get(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn dropping_handle_keeps_listener_attached() {
        let listeners = Listeners::<u32>::new();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        drop(listeners.subscribe(move |_| counter.set(counter.get() + 1)));
        listeners.notify(&1);

        assert_eq!(calls.get(), 1);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn listener_detached_during_notify_is_skipped() {
        let listeners = Listeners::<u32>::new();
        let later_calls = Rc::new(Cell::new(0));
        let pending: Rc<RefCell<Option<Unsubscribe>>> = Rc::new(RefCell::new(None));

        let to_detach = Rc::clone(&pending);
        let _first = listeners.subscribe(move |_| {
            if let Some(handle) = to_detach.borrow_mut().take() {
                handle.unsubscribe();
            }
        });
        let counter = Rc::clone(&later_calls);
        let second = listeners.subscribe(move |_| counter.set(counter.get() + 1));
        *pending.borrow_mut() = Some(second);

        listeners.notify(&1);
        assert_eq!(later_calls.get(), 0);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn unsubscribe_after_store_dropped_is_noop() {
        let listeners = Listeners::<u32>::new();
        let handle = listeners.subscribe(|_| {});
        drop(listeners);
        handle.unsubscribe();
    }
}
