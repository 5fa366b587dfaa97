//! Index-keyed slots for DOM handles.
//!
//! Panels register themselves under the stable index they carry in their
//! markup (`data-panel-index`).  Slots are explicit: a panel is either
//! registered or it is not, and re-registering an index replaces the old
//! handle.

#[derive(Debug, Clone)]
pub struct HandleArena<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for HandleArena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> HandleArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` at `index`, growing the arena as needed.  Returns the
    /// handle previously stored there, if any.
    pub fn register(&mut self, index: usize, handle: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(handle)
    }

    pub fn unregister(&mut self, index: usize) -> Option<T> {
        let removed = self.slots.get_mut(index).and_then(Option::take);
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        removed
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Registered `(index, handle)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|h| (i, h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_registration() {
        let mut arena = HandleArena::new();
        assert!(arena.register(3, "bio-3").is_none());
        assert!(arena.register(0, "bio-0").is_none());

        assert_eq!(arena.iter().count(), 2);
        assert_eq!(arena.get(1), None);
        assert_eq!(arena.get(3), Some(&"bio-3"));
        let indices: Vec<usize> = arena.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn re_register_replaces() {
        let mut arena = HandleArena::new();
        arena.register(1, "old");
        assert_eq!(arena.register(1, "new"), Some("old"));
        assert_eq!(arena.get(1), Some(&"new"));
    }

    #[test]
    fn unregister_shrinks_trailing_slots() {
        let mut arena = HandleArena::new();
        arena.register(0, 'a');
        arena.register(5, 'f');
        assert_eq!(arena.unregister(5), Some('f'));
        assert_eq!(arena.unregister(5), None);
        assert_eq!(arena.iter().count(), 1);
        arena.unregister(0);
        assert_eq!(arena.iter().count(), 0);
    }
}
