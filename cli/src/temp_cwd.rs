use std::{
    env,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

// Runs the rest of a test inside a fresh, empty scratch directory.
//
// Dropping the guard moves the process back to where it was and
// then deletes the scratch directory. Panics on any I/O failure.
//
// The working directory is process-wide: mark every test that uses
// this #[serial].
pub(crate) struct TempCwd {
    old_path: PathBuf,
    dir: TempDir,
}

impl TempCwd {
    pub fn new() -> TempCwd {
        let old_path = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        env::set_current_dir(dir.path()).unwrap();

        TempCwd { old_path, dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.old_path).unwrap();
    }
}
