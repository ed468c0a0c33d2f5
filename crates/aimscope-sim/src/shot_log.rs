//! Append-only shot log.
//!
//! Records go in once, in fire order, and are never mutated or removed.
//! The log is only cleared when a fresh session starts.

use aimscope_core::state::{MissOffset, ShotRecord};

#[derive(Debug, Clone, Default)]
pub struct ShotLog {
    records: Vec<ShotRecord>,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ShotRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ShotRecord] {
        &self.records
    }

    pub fn hits(&self) -> usize {
        self.records.iter().filter(|r| r.is_hit()).count()
    }

    /// `(relative_x, relative_y)` of every miss that carries an offset, for
    /// the scatter plot.
    pub fn miss_offsets(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter_map(ShotRecord::miss)
            .filter_map(|m| m.offset)
            .map(|MissOffset { relative_x, relative_y, .. }| (relative_x, relative_y))
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
