use crate::exception::Reportable;
use index_list::*;
use std::rc::Rc;

pub type Listener = Rc<dyn Fn(&dyn Reportable)>;

fn same_listener(a: &Listener, b: &Listener) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Listeners in attachment order, each allocation at most once.
pub struct ListenerSet {
    listeners: IndexList<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self {
            listeners: IndexList::new(),
        }
    }

    /// Returns `false` if the listener was already attached.
    pub fn insert(&mut self, listener: Listener) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.insert_last(listener);
        true
    }

    pub fn remove(&mut self, listener: &Listener) -> bool {
        let index = self.index_of(listener);
        index.is_some() && self.listeners.remove(index).is_some()
    }

    pub fn contains(&self, listener: &Listener) -> bool {
        self.index_of(listener).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.listeners.iter()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&self, error: &dyn Reportable) {
        self.iter().for_each(|listener| listener(error));
    }

    fn index_of(&self, listener: &Listener) -> ListIndex {
        let mut index = self.listeners.first_index();
        while index.is_some() {
            match self.listeners.get(index) {
                Some(attached) if same_listener(attached, listener) => return index,
                _ => index = self.listeners.next_index(index),
            }
        }
        index
    }
}

impl Default for ListenerSet {
    fn default() -> Self {
        Self::new()
    }
}
