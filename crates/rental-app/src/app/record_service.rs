//! Record Service - Validated Writes
//!
//! Mutations through this service check the entity's field rules before
//! touching the backing file. A rejected entity is never written.

use rental_domain::model::Validate;
use rental_domain::{Record, RecordRepository};
use rental_types::{Error, RecordId, Result};
use tracing::debug;

fn ensure_valid<R: Record + Validate>(record: &R) -> Result<()> {
    let messages = record.validation_errors();
    if messages.is_empty() {
        return Ok(());
    }
    debug!(kind = R::KIND, rules = messages.len(), "rejected invalid record");
    Err(Error::Validation {
        kind: R::KIND,
        messages,
    })
}

/// Validate `record`, then store it under a fresh id
pub fn add_validated<R: Record + Validate>(
    repo: &impl RecordRepository<R>,
    record: R,
) -> Result<RecordId> {
    ensure_valid(&record)?;
    repo.add(record)
}

/// Validate `record`, then replace the stored record with the same id.
///
/// Unlike [`RecordRepository::update`], a missing id is an error here.
pub fn update_validated<R: Record + Validate>(
    repo: &impl RecordRepository<R>,
    record: &R,
) -> Result<()> {
    ensure_valid(record)?;
    if repo.update(record)? {
        Ok(())
    } else {
        Err(Error::NotFound {
            kind: R::KIND,
            id: record.id(),
        })
    }
}

/// The stored record with `id`, or a not-found error
pub fn require<R: Record>(repo: &impl RecordRepository<R>, id: RecordId) -> Result<R> {
    repo.find_by_id(id)?.ok_or(Error::NotFound { kind: R::KIND, id })
}

/// Remove the record with `id`, or report that it was not there
pub fn delete_existing<R: Record>(repo: &impl RecordRepository<R>, id: RecordId) -> Result<()> {
    if repo.delete(id)? {
        Ok(())
    } else {
        Err(Error::NotFound { kind: R::KIND, id })
    }
}
