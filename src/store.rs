// 🗄️ Record Store - fixed-capacity, insertion-ordered loan records

use crate::entities::LoanRecord;
use crate::error::StoreError;

/// Ordered collection with a capacity fixed at creation.
///
/// Records are appended in order and never removed or reordered. `capacity`
/// is a logical limit taken from user input; storage grows per push.
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    records: Vec<LoanRecord>,
    capacity: usize,
}

impl RecordCollection {
    pub fn with_capacity(capacity: usize) -> Self {
        RecordCollection {
            records: Vec::new(),
            capacity,
        }
    }

    /// Append a record; fails once `capacity` records are stored.
    pub fn push(&mut self, record: LoanRecord) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&LoanRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoanRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LoanRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a LoanRecord;
    type IntoIter = std::slice::Iter<'a, LoanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
