use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

// Never offered for commit.
const IGNORE: &[&str] = &[".", "..", ".git"];

/// Lists and reads the files in a working directory that can be committed.
///
/// Only regular files directly inside the working directory are considered;
/// subdirectories and symbolic links are skipped.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn new<P: AsRef<Path>>(path: P) -> Workspace {
        Workspace {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Return the working directory.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Returns the names of all trackable files, sorted.
    pub fn list_files(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) if IGNORE.contains(&name.as_str()) => (),
                Ok(name) => names.push(name),
                Err(name) => warn!("skipping file with non-UTF-8 name {:?}", name),
            }
        }

        names.sort();
        Ok(names)
    }

    /// Returns the raw content of the named file.
    pub fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path.join(name))
    }
}
