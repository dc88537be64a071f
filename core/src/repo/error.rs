use std::path::PathBuf;

use thiserror::Error;

use crate::object::{Id, MalformedObject};

/// Describes the potential error conditions that might arise from `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MalformedObject(#[from] MalformedObject),

    #[error("couldn't find an unused temporary file name in {0}")]
    TempFileCollision(PathBuf),

    #[error(transparent)]
    FileSystemError(#[from] std::io::Error),

    #[error("object {0} is corrupt")]
    CorruptObject(Id),

    #[error("work dir doesn't exist {0}")]
    WorkDirDoesntExist(PathBuf),

    #[error("git dir doesn't exist {0}")]
    GitDirDoesntExist(PathBuf),

    #[error("git dir shouldn't exist {0}")]
    GitDirShouldntExist(PathBuf),
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
