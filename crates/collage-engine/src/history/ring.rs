use std::collections::VecDeque;

/// Entries kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 30;

/// Bounded linear history with an undo/redo cursor.
///
/// The cursor marks the entry currently displayed. Committing while the
/// cursor is behind the newest entry discards everything after it, so a
/// dropped redo branch can never come back.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: usize,
}

impl<T> History<T> {
    /// `capacity` is clamped to at least one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), cursor: 0, capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the displayed entry, `None` while empty.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor)
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor().and_then(|c| self.entries.get(c))
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor().is_some_and(|c| c > 0)
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.cursor().is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Records `entry` as the new current state.
    ///
    /// Drops the redo branch, appends, and evicts the oldest entry past
    /// capacity (the cursor shifts with it so it still points at `entry`).
    pub fn commit(&mut self, entry: T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(entry);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.cursor -= 1;
        }
        log::debug!("history commit: {} entries, cursor {}", self.entries.len(), self.cursor);
    }

    /// Steps back. `None` (and no movement) at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Steps forward. `None` (and no movement) at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
