//! Subscriber registry and RAII subscription handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::models::SurfaceContext;

pub(crate) type Callback = Rc<RefCell<dyn FnMut(&SurfaceContext)>>;

#[derive(Default)]
pub(crate) struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl SubscriberList {
    pub(crate) fn add(&mut self, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Callbacks in registration order, detached from the list so a callback
    /// may subscribe or unsubscribe while the publication runs.
    pub(crate) fn snapshot(&self) -> Vec<Callback> {
        self.entries.iter().map(|(_, cb)| Rc::clone(cb)).collect()
    }
}

/// Keeps a publisher subscription alive.
///
/// Dropping the handle unsubscribes. Outliving the publisher is fine.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    list: Weak<RefCell<SubscriberList>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, list: &Rc<RefCell<SubscriberList>>) -> Self {
        Self {
            id,
            list: Rc::downgrade(list),
        }
    }

    /// Whether the publisher still exists.
    pub fn is_connected(&self) -> bool {
        self.list.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            if list.borrow_mut().remove(self.id) {
                tracing::debug!(subscriber = self.id, "unsubscribed from surface updates");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}
