//! Coalescing backlog: at most one pending intent per variant.

use std::collections::VecDeque;

use crate::mvi::Intent;

/// Where an inserted intent ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A queued intent of the same variant was overwritten at `index`.
    Replaced { index: usize },
    /// Top-priority intent placed at the head.
    Front,
    /// Appended at the tail.
    Back,
}

/// Ordered backlog of pending intents.
///
/// Invariant: no two entries share a type tag.
#[derive(Debug)]
pub struct Backlog<E> {
    entries: VecDeque<E>,
}

impl<E> Backlog<E> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn pop_front(&mut self) -> Option<E> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }
}

impl<E: Intent> Backlog<E> {
    /// Inserts `intent` following the coalescing rule.
    ///
    /// Replacement wins over priority: a top-priority intent whose variant is
    /// already queued keeps the existing position.
    pub fn insert(&mut self, intent: E) -> Placement {
        let kind = intent.kind();
        if let Some(index) = self.entries.iter().position(|queued| queued.kind() == kind) {
            self.entries[index] = intent;
            return Placement::Replaced { index };
        }

        if intent.is_top_priority() {
            self.entries.push_front(intent);
            Placement::Front
        } else {
            self.entries.push_back(intent);
            Placement::Back
        }
    }
}

impl<E> Default for Backlog<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Probe {
        Load,
        Refresh(u32),
        Fail(String),
        Urgent,
    }

    impl Intent for Probe {
        fn is_top_priority(&self) -> bool {
            matches!(self, Probe::Urgent)
        }
    }

    fn contents(backlog: &Backlog<Probe>) -> Vec<Probe> {
        backlog.iter().cloned().collect()
    }

    #[test]
    fn distinct_variants_keep_insertion_order() {
        let mut backlog = Backlog::new();
        assert_eq!(backlog.insert(Probe::Load), Placement::Back);
        assert_eq!(backlog.insert(Probe::Fail("x".into())), Placement::Back);
        assert_eq!(contents(&backlog), vec![Probe::Load, Probe::Fail("x".into())]);
    }

    #[test]
    fn same_variant_replaces_in_place() {
        let mut backlog = Backlog::new();
        backlog.insert(Probe::Refresh(1));
        backlog.insert(Probe::Load);
        let placement = backlog.insert(Probe::Refresh(2));

        assert_eq!(placement, Placement::Replaced { index: 0 });
        assert_eq!(contents(&backlog), vec![Probe::Refresh(2), Probe::Load]);
    }

    #[test]
    fn payload_difference_does_not_prevent_coalescing() {
        let mut backlog = Backlog::new();
        backlog.insert(Probe::Fail("first".into()));
        backlog.insert(Probe::Fail("second".into()));
        assert_eq!(backlog.len(), 1);
        assert_eq!(backlog.pop_front(), Some(Probe::Fail("second".into())));
    }

    #[test]
    fn top_priority_jumps_to_front() {
        let mut backlog = Backlog::new();
        backlog.insert(Probe::Load);
        backlog.insert(Probe::Refresh(1));
        assert_eq!(backlog.insert(Probe::Urgent), Placement::Front);
        assert_eq!(backlog.pop_front(), Some(Probe::Urgent));
    }

    #[test]
    fn queued_top_priority_is_replaced_not_moved() {
        let mut backlog = Backlog::new();
        backlog.insert(Probe::Load);
        backlog.insert(Probe::Urgent);
        backlog.insert(Probe::Refresh(1));
        // Urgent is at the head already; a second one must not duplicate it.
        let placement = backlog.insert(Probe::Urgent);

        assert_eq!(placement, Placement::Replaced { index: 0 });
        assert_eq!(
            contents(&backlog),
            vec![Probe::Urgent, Probe::Load, Probe::Refresh(1)]
        );
    }

    #[test]
    fn clear_empties_backlog() {
        let mut backlog = Backlog::new();
        backlog.insert(Probe::Load);
        backlog.clear();
        assert!(backlog.is_empty());
        assert_eq!(backlog.pop_front(), None);
    }
}
