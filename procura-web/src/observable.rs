//! Single-threaded observable values.
//!
//! The session, the current location and the gate all publish through an
//! [`Observable`]. Subscribers are called after the value borrow is released,
//! so a callback may read the value, subscribe, or drop its own subscription.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
}

/// A shared value that notifies subscribers whenever it is replaced.
///
/// Clones share the same value and subscriber list.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value and notify every subscriber once.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Register `listener`; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .listeners
                        .borrow_mut()
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Whether both handles point at the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self) {
        let snapshot = self.get();
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_each_subscriber_once() {
        let value = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = value.subscribe(move |v| sink.borrow_mut().push(*v));

        value.set(1);
        value.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let value = Observable::new("a".to_string());
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let sub = value.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(value.subscriber_count(), 1);

        value.set("b".to_string());
        drop(sub);
        value.set("c".to_string());

        assert_eq!(calls.get(), 1);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_read_the_value() {
        let value = Observable::new(10);
        let reader = value.clone();
        let seen = Rc::new(Cell::new(0));

        let sink = Rc::clone(&seen);
        let _sub = value.subscribe(move |_| sink.set(reader.get()));

        value.set(11);
        assert_eq!(seen.get(), 11);
    }

    #[test]
    fn clones_share_state() {
        let a = Observable::new(1);
        let b = a.clone();
        b.set(5);
        assert_eq!(a.get(), 5);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Observable::new(5)));
    }

    #[test]
    fn subscription_outliving_observable_is_harmless() {
        let value = Observable::new(1);
        let sub = value.subscribe(|_| {});
        drop(value);
        drop(sub);
    }
}
