use std::{env, path::Path};

use minigit_core::repo::Result;
use minigit_on_disk::OnDiskRepo;

// Discover a repo starting from the given path.
//
// For now, this handles only the most simple case
// where there is a `.git` directory nested within the
// given path. Parent directories are not searched.
//
// Returns a `Result` with `OnDiskRepo` or
// `minigit_core::repo::Error` if no such repo exists.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDiskRepo> {
    OnDiskRepo::new(path)
}

// Discover a repo starting from the current working directory.
pub fn from_current_dir() -> Result<OnDiskRepo> {
    let path = env::current_dir()?;
    from_path(path)
}
