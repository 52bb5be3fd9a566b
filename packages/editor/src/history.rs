//! Bounded deep-copy snapshot history.
//!
//! Each entry is a full document clone captured after a pause in editing.
//! The memory bound is O(treeSize x cap); deep copies are the accepted
//! cost for moderately sized trees.

use pagecraft_schema::PageDocument;

pub const DEFAULT_HISTORY_CAP: usize = 50;

/// Ordered snapshot log with an index pointing at the current state.
#[derive(Debug)]
pub struct History {
    entries: Vec<PageDocument>,
    index: usize,
    cap: usize,
}

impl History {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            cap: cap.max(1),
        }
    }

    /// Replace the log with a single entry for a freshly loaded document.
    pub fn reset(&mut self, document: PageDocument) {
        self.entries = vec![document];
        self.index = 0;
    }

    /// Capture a snapshot at the cursor.
    ///
    /// Entries past the cursor are discarded first (a new edit truncates the
    /// redo stack); the oldest entry is evicted once the cap is exceeded.
    /// The cursor ends on the appended snapshot.
    pub fn record(&mut self, document: PageDocument) {
        if self.index + 1 < self.entries.len() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(document);
        if self.entries.len() > self.cap {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back, returning a deep copy of the previous snapshot.
    pub fn undo(&mut self) -> Option<PageDocument> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).cloned()
    }

    /// Step forward, returning a deep copy of the next snapshot.
    pub fn redo(&mut self) -> Option<PageDocument> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_schema::create_page_document;

    fn stamped(name: &str, stamp: i64) -> PageDocument {
        let mut page = create_page_document(name);
        page.updated_at = stamp;
        page
    }

    #[test]
    fn test_reset_leaves_single_entry() {
        let mut history = History::default();
        history.record(stamped("a", 1));
        history.reset(stamped("b", 2));
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_walk() {
        let mut history = History::default();
        history.reset(stamped("page", 0));
        history.record(stamped("page", 1));
        history.record(stamped("page", 2));

        assert_eq!(history.undo().unwrap().updated_at, 1);
        assert_eq!(history.undo().unwrap().updated_at, 0);
        assert!(history.undo().is_none());
        assert_eq!(history.redo().unwrap().updated_at, 1);
        assert_eq!(history.redo().unwrap().updated_at, 2);
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_new_record_truncates_redo() {
        let mut history = History::default();
        history.reset(stamped("page", 0));
        history.record(stamped("page", 1));
        history.record(stamped("page", 2));
        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.record(stamped("page", 3));
        assert!(!history.can_redo());
        assert_eq!(history.undo().unwrap().updated_at, 0);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::new(3);
        history.reset(stamped("page", 0));
        for stamp in 1..10 {
            history.record(stamped("page", stamp));
        }
        assert_eq!(history.len(), 3);
        // Cursor sits on the latest entry and stays in range.
        assert_eq!(history.undo().unwrap().updated_at, 8);
        assert_eq!(history.undo().unwrap().updated_at, 7);
        assert!(history.undo().is_none());
    }
}
