//! One-line record codec
//!
//! Every backing file is a header line followed by one comma-joined line per
//! record. Fields are written in a fixed order and are never quoted or
//! escaped: a text field containing a comma or a newline shifts every column
//! after it when the line is read back. That is the existing on-disk format
//! and is kept byte-for-byte.

use rental_types::RecordId;

/// A record type that can live in a flat backing file
pub trait Record: Clone {
    /// Display name used in messages ("Car", "Customer", "Booking")
    const KIND: &'static str;

    /// File name inside the data directory
    const FILE_NAME: &'static str;

    /// Column names, in field order
    const HEADER: &'static [&'static str];

    /// Lines with fewer fields than this are malformed.
    /// Trailing optional columns may be absent.
    const MIN_FIELDS: usize;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Field values in header order, in their canonical text form
    fn to_fields(&self) -> Vec<String>;

    /// Rebuild a record from split fields.
    ///
    /// Returns `None` when there are too few fields or a numeric field does
    /// not parse; callers drop such lines.
    fn from_fields(fields: &[&str]) -> Option<Self>;
}

/// The header line of `R`'s backing file, without line terminator
pub fn header_line<R: Record>() -> String {
    R::HEADER.join(",")
}

/// Encode a record as one line, without line terminator
pub fn encode_line<R: Record>(record: &R) -> String {
    record.to_fields().join(",")
}

/// Decode one line. A decoded id of `0` counts as malformed.
pub fn decode_line<R: Record>(line: &str) -> Option<R> {
    let fields: Vec<&str> = line.split(',').collect();
    R::from_fields(&fields).filter(|record| record.id() > 0)
}
