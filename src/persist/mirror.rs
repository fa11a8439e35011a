use crate::core::order::HistoryRecord;

use super::errors::MirrorError;

/// Optional remote table mirroring the order history. Stores treat
/// every call as best-effort: a failure is logged by the caller and
/// operation continues local-only.
pub trait HistoryMirror {
    /// Insert one archived order.
    fn insert(&mut self, record: &HistoryRecord) -> Result<(), MirrorError>;

    /// Fetch every archived order, newest completion first.
    fn fetch_all(&self) -> Result<Vec<HistoryRecord>, MirrorError>;

    /// Drop every archived order.
    fn clear_all(&mut self) -> Result<(), MirrorError>;
}

/// In-process mirror table, useful for demos and tests.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    rows: Vec<HistoryRecord>,
}

impl HistoryMirror for MemoryMirror {
    fn insert(&mut self, record: &HistoryRecord) -> Result<(), MirrorError> {
        self.rows.push(record.clone());
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<HistoryRecord>, MirrorError> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(rows)
    }

    fn clear_all(&mut self) -> Result<(), MirrorError> {
        self.rows.clear();
        Ok(())
    }
}
