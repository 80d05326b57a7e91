use crate::models::LogRecord;
use std::collections::VecDeque;

/// Append-only haulage log for one session.
///
/// With `retention = None` the log grows for the whole session. With
/// `Some(k)` only the newest `k` records are kept and the oldest are evicted.
#[derive(Debug, Default)]
pub struct HaulLog {
    records: VecDeque<LogRecord>,
    retention: Option<usize>,
    evicted: u64,
}

impl HaulLog {
    pub fn new(retention: Option<usize>) -> Self {
        Self {
            records: VecDeque::new(),
            retention,
            evicted: 0,
        }
    }

    pub fn push(&mut self, record: LogRecord) {
        self.records.push_back(record);

        if let Some(cap) = self.retention {
            while self.records.len() > cap {
                self.records.pop_front();
                self.evicted += 1;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records dropped by the retention policy so far.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogRecord> {
        self.records.iter().skip(self.records.len().saturating_sub(n))
    }

    pub fn to_vec(&self) -> Vec<LogRecord> {
        self.records.iter().cloned().collect()
    }
}
