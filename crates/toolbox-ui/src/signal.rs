//! Synchronous listener lists.
//!
//! Listeners run on the emitting thread, in registration order, before
//! `emit` returns.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn connect(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener; returns how many were called.
    pub fn emit(&mut self, event: &E) -> usize {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emits_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<u32> = Listeners::new();

        let l1 = Rc::clone(&log);
        listeners.connect(move |e| l1.borrow_mut().push(("first", *e)));
        let l2 = Rc::clone(&log);
        listeners.connect(move |e| l2.borrow_mut().push(("second", *e)));

        assert_eq!(listeners.emit(&7), 2);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn disconnect_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners: Listeners<()> = Listeners::new();

        let c = Rc::clone(&count);
        let id = listeners.connect(move |_| *c.borrow_mut() += 1);
        listeners.emit(&());
        assert!(listeners.disconnect(id));
        assert!(!listeners.disconnect(id));
        assert_eq!(listeners.emit(&()), 0);
        assert_eq!(*count.borrow(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut listeners: Listeners<()> = Listeners::new();
        let a = listeners.connect(|_| {});
        listeners.disconnect(a);
        let b = listeners.connect(|_| {});
        assert_ne!(a, b);
        assert_eq!(listeners.len(), 1);
    }
}
