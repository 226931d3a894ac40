//! Data directory preparation

use std::fs;
use std::path::{Path, PathBuf};

use rental_domain::record::header_line;
use rental_domain::{Booking, Car, Customer, Record};
use rental_types::Result;
use tracing::{debug, info};

/// Subdirectory reserved for file backups
pub const BACKUP_DIR: &str = "backups";

/// What `initialize_data_dir` had to create
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
}

impl BootstrapReport {
    /// True when the directory was already fully set up
    pub fn is_empty(&self) -> bool {
        self.created_dirs.is_empty() && self.created_files.is_empty()
    }
}

/// Create `data_dir`, its backup directory and every backing file that is
/// missing. Existing files are left untouched, so running it twice is safe.
pub fn initialize_data_dir(data_dir: impl AsRef<Path>) -> Result<BootstrapReport> {
    let data_dir = data_dir.as_ref();
    let mut report = BootstrapReport::default();

    for dir in [data_dir.to_path_buf(), data_dir.join(BACKUP_DIR)] {
        if !dir.is_dir() {
            fs::create_dir_all(&dir)?;
            info!(path = %dir.display(), "created directory");
            report.created_dirs.push(dir);
        }
    }

    create_backing_file::<Car>(data_dir, &mut report)?;
    create_backing_file::<Customer>(data_dir, &mut report)?;
    create_backing_file::<Booking>(data_dir, &mut report)?;

    Ok(report)
}

fn create_backing_file<R: Record>(data_dir: &Path, report: &mut BootstrapReport) -> Result<()> {
    let path = data_dir.join(R::FILE_NAME);
    if path.exists() {
        debug!(path = %path.display(), "backing file already present");
        return Ok(());
    }

    fs::write(&path, format!("{}\n", header_line::<R>()))?;
    info!(kind = R::KIND, path = %path.display(), "created backing file");
    report.created_files.push(path);
    Ok(())
}
