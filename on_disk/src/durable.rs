//! Durable file writes.
//!
//! Content is written to a freshly created temporary file in the destination
//! directory and then renamed over the final path. Anyone looking at the
//! final path sees either nothing (or its previous content) or the complete
//! new content, never a partial write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use minigit_core::repo::{Error, Result};
use rand::{distributions::Alphanumeric, Rng};

const TEMP_PREFIX: &str = "tmp_obj_";
const TEMP_RANDOM_LEN: usize = 6;

/// How many random temporary names to try before giving up.
pub const MAX_TEMP_ATTEMPTS: usize = 8;

/// Atomically replace (or create) `final_path` with `bytes`.
///
/// `dir` is where the temporary file is created. It must be on the same file
/// system as `final_path` (usually it is `final_path`'s parent) and is created,
/// along with any missing ancestors, if it doesn't exist yet.
///
/// Fails with `Error::TempFileCollision` if no unused temporary name could
/// be found, or `Error::FileSystemError` for any other I/O failure.
pub fn write_atomic(dir: &Path, final_path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = write_temp(dir, bytes)?;

    if let Err(err) = fs::rename(&temp_path, final_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    trace!("renamed {} to {}", temp_path.display(), final_path.display());
    Ok(())
}

// Everything up to (but not including) the rename.
pub(crate) fn write_temp(dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let (temp_path, mut file) = create_temp_file(dir)?;

    if let Err(err) = file.write_all(bytes).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    Ok(temp_path)
}

fn create_temp_file(dir: &Path) -> Result<(PathBuf, File)> {
    create_temp_file_with(dir, temp_file_name)
}

fn create_temp_file_with<F>(dir: &Path, mut next_name: F) -> Result<(PathBuf, File)>
where
    F: FnMut() -> String,
{
    let mut created_dir = false;
    let mut attempts = 0;

    while attempts < MAX_TEMP_ATTEMPTS {
        let temp_path = dir.join(next_name());

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
        {
            Ok(file) => return Ok((temp_path, file)),

            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                trace!("temporary file {} already exists", temp_path.display());
                attempts += 1;
            }

            Err(err) if err.kind() == io::ErrorKind::NotFound && !created_dir => {
                // Another writer may be creating the same directory;
                // create_dir_all treats that as success.
                debug!("creating directory {}", dir.display());
                fs::create_dir_all(dir)?;
                created_dir = true;
            }

            Err(err) => return Err(err.into()),
        }
    }

    Err(Error::TempFileCollision(dir.to_path_buf()))
}

fn temp_file_name() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_RANDOM_LEN)
        .map(char::from)
        .collect();

    format!("{}{}", TEMP_PREFIX, suffix)
}
