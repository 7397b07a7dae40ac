//! The current browser path as an observable value.
//!
//! In the browser this mirrors yew-router's location; the gate only needs
//! "what is the path" and "go somewhere else".

use crate::observable::{Observable, Subscription};

#[derive(Debug, Clone)]
pub struct Location {
    path: Observable<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Observable::new(path.into()),
        }
    }

    pub fn current(&self) -> String {
        self.path.get()
    }

    /// Move to `path`. Re-committing the current path is not a change.
    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        if path != self.current() {
            self.path.set(path);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&String) + 'static) -> Subscription {
        self.path.subscribe(listener)
    }
}
