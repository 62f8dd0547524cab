//! Snapshot-based undo/redo log

/// Sequence of scene snapshots with a cursor at the current one.
///
/// Committing while the cursor is not at the end discards the redo branch.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    snapshots: Vec<String>,
    /// Index of the current snapshot; `None` while empty
    cursor: Option<usize>,
    /// Oldest snapshots are dropped beyond this many entries
    capacity: Option<usize>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HistoryLog {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            // A capacity below 1 would drop the snapshot just committed
            capacity: capacity.map(|c| c.max(1)),
        }
    }

    /// Push a snapshot, discarding everything after the cursor
    pub fn commit(&mut self, snapshot: String) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);

        if let Some(capacity) = self.capacity {
            if self.snapshots.len() > capacity {
                let excess = self.snapshots.len() - capacity;
                self.snapshots.drain(..excess);
            }
        }
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step back; returns the snapshot to restore
    pub fn undo(&mut self) -> Option<&str> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        Some(self.snapshots[cursor].as_str())
    }

    /// Step forward; returns the snapshot to restore
    pub fn redo(&mut self) -> Option<&str> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.snapshots.len())? + 1;
        self.cursor = Some(cursor);
        Some(self.snapshots[cursor].as_str())
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|c| self.snapshots[c].as_str())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.snapshots.len())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor position, -1 while empty
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    /// Forget every snapshot
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }
}
