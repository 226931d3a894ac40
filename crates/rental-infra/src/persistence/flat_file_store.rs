//! Flat-file record store
//!
//! One store owns one backing file: a header line, then one unquoted
//! comma-joined line per record. Nothing is cached between calls. Every
//! read re-scans the whole file and every mutation rewrites it, header
//! included, in list order.

use std::cell::Cell;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use rental_domain::{Record, RecordRepository};
use rental_types::{RecordId, Result};
use tracing::{debug, warn};

/// How a backing file is rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a sibling `.tmp` file, then rename it over the backing file.
    /// A failed write leaves the previous contents in place.
    #[default]
    Atomic,
    /// Truncate the backing file and write into it directly.
    /// A failed write leaves whatever was written so far.
    Truncate,
}

/// Records read from a backing file, plus how many lines were skipped as malformed
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<R> {
    pub records: Vec<R>,
    pub dropped: usize,
}

/// File-based implementation of [`RecordRepository`]
pub struct FlatFileStore<R: Record> {
    path: PathBuf,
    /// `1 + max(stored id)` as of the last load
    next_id: Cell<RecordId>,
    write_mode: WriteMode,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> FlatFileStore<R> {
    /// Open the store for `R` inside `data_dir`.
    ///
    /// The backing file does not have to exist; a missing file reads as an
    /// empty store and is created by the first write.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::at_path(data_dir.as_ref().join(R::FILE_NAME))
    }

    /// Open a store backed by an explicit file path
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: path.into(),
            next_id: Cell::new(1),
            write_mode: WriteMode::default(),
            _record: PhantomData,
        };
        store.load_report()?;
        Ok(store)
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Id the next `add` will assign, as of the last load
    pub fn next_id(&self) -> RecordId {
        self.next_id.get()
    }

    /// Read every record and recompute the next id.
    ///
    /// The first line is skipped as the header whatever it holds. Blank lines
    /// are ignored. Lines with too few fields, an unparsable number or an id
    /// of 0 are dropped and counted.
    pub fn load_report(&self) -> Result<LoadReport<R>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "backing file missing, reading as empty");
                self.next_id.set(1);
                return Ok(LoadReport {
                    records: Vec::new(),
                    dropped: 0,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;

        let mut rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut dropped = 0;
        for row in rows.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!(kind = R::KIND, error = %e, "unreadable line");
                    dropped += 1;
                    continue;
                }
            };
            if row.len() == 1 && row.get(0).is_some_and(str::is_empty) {
                continue;
            }

            let fields: Vec<&str> = row.iter().collect();
            match R::from_fields(&fields).filter(|record| record.id() > 0) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(
                kind = R::KIND,
                dropped,
                path = %self.path.display(),
                "skipped malformed lines"
            );
        }

        let max_id = records.iter().map(R::id).max().unwrap_or(0);
        self.next_id.set(max_id.saturating_add(1));
        debug!(
            kind = R::KIND,
            count = records.len(),
            next_id = self.next_id.get(),
            "loaded records"
        );

        Ok(LoadReport { records, dropped })
    }

    /// All well-formed records, in file order
    pub fn load_all(&self) -> Result<Vec<R>> {
        Ok(self.load_report()?.records)
    }

    /// Replace the whole backing file with the header and `records`, in order.
    ///
    /// Records are written as given; nothing is validated here.
    pub fn save_all(&self, records: &[R]) -> Result<()> {
        match self.write_mode {
            WriteMode::Truncate => {
                let file = File::create(&self.path)?;
                write_records(file, records)?;
            }
            WriteMode::Atomic => {
                let tmp_path = self.temp_path();
                let file = File::create(&tmp_path)?;
                if let Err(e) = write_records(file, records) {
                    let _ = fs::remove_file(&tmp_path);
                    return Err(e);
                }
                fs::rename(&tmp_path, &self.path)?;
            }
        }

        debug!(
            kind = R::KIND,
            count = records.len(),
            path = %self.path.display(),
            "saved records"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_records<R: Record>(file: File, records: &[R]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record(R::HEADER)?;
    for record in records {
        writer.write_record(record.to_fields())?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

impl<R: Record> RecordRepository<R> for FlatFileStore<R> {
    fn find_all(&self) -> Result<Vec<R>> {
        self.load_all()
    }

    fn add(&self, mut record: R) -> Result<RecordId> {
        let mut records = self.load_all()?;
        let id = self.next_id.get();
        record.set_id(id);
        records.push(record);
        self.next_id.set(id.saturating_add(1));
        self.save_all(&records)?;

        debug!(kind = R::KIND, id, "added record");
        Ok(id)
    }

    fn update(&self, record: &R) -> Result<bool> {
        let mut records = self.load_all()?;
        let Some(pos) = records.iter().position(|r| r.id() == record.id()) else {
            return Ok(false);
        };
        records[pos] = record.clone();
        self.save_all(&records)?;

        debug!(kind = R::KIND, id = record.id(), "updated record");
        Ok(true)
    }

    fn delete(&self, id: RecordId) -> Result<bool> {
        let mut records = self.load_all()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save_all(&records)?;

        debug!(kind = R::KIND, id, removed = before - records.len(), "deleted record");
        Ok(true)
    }
}
