//! Repository trait definitions for data persistence

use rental_types::{RecordId, Result};

use crate::record::Record;

/// Whole-collection persistence for one record type.
///
/// Every call works on a fresh snapshot of the backing data; nothing is
/// cached between calls.
pub trait RecordRepository<R: Record> {
    /// All stored records, in stored order
    fn find_all(&self) -> Result<Vec<R>>;

    /// First record with `id`, if any
    fn find_by_id(&self, id: RecordId) -> Result<Option<R>> {
        Ok(self.find_all()?.into_iter().find(|record| record.id() == id))
    }

    /// Store `record` under the next free id and return that id
    fn add(&self, record: R) -> Result<RecordId>;

    /// Replace the stored record with the same id, keeping its position.
    /// `Ok(false)` when no record has that id; nothing is written then.
    fn update(&self, record: &R) -> Result<bool>;

    /// Remove every record with `id`.
    /// `Ok(false)` when none matched; nothing is written then.
    fn delete(&self, id: RecordId) -> Result<bool>;
}
