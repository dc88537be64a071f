use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use minigit_core::object::{Id, Object};
use minigit_core::repo::{Error, Repo, Result};

use crate::{durable, loose};

/// Implementation of `Repo` that stores content on the local file system.
///
/// Objects are stored as loose, zlib-compressed files under
/// `.git/objects/<2 hex digits>/<38 hex digits>`; the head pointer is the file
/// `.git/HEAD`, holding the commit ID followed by a newline. Every file is
/// written with `durable::write_atomic`, so an interrupted or concurrent
/// writer never leaves a partial file at either location.
///
/// _IMPORTANT NOTE:_ This is intended as a reference implementation largely
/// for testing purposes and may not necessarily handle all of the edge cases that
/// the traditional `git` command-line interface will handle.
#[derive(Debug)]
pub struct OnDiskRepo {
    work_dir: PathBuf,
    git_dir: PathBuf,
}

impl OnDiskRepo {
    /// Open an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path. Use `init` function to create an empty on-disk repository if
    /// necessary.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(".git");
        if !git_dir.exists() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        Ok(OnDiskRepo { work_dir, git_dir })
    }

    /// Creates a new, empty repository on the local file system.
    ///
    /// Analogous to [`git init`](https://git-scm.com/docs/git-init), though
    /// the head pointer is only created by the first commit.
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref();
        let git_dir = work_dir.join(".git");
        if git_dir.exists() {
            return Err(Error::GitDirShouldntExist(git_dir));
        }

        fs::create_dir_all(&git_dir)?;

        create_config(&git_dir)?;
        create_description(&git_dir)?;
        create_objects_dir(&git_dir)?;
        create_refs_dir(&git_dir)?;

        debug!("initialized empty repository in {}", git_dir.display());

        Ok(OnDiskRepo {
            work_dir: work_dir.to_path_buf(),
            git_dir,
        })
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the root of the object database.
    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join("objects")
    }

    /// Return the path where the loose object with this ID is (or would be) stored.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let (prefix, suffix) = id.loose_object_path_parts();
        self.objects_dir().join(prefix).join(suffix)
    }

    fn head_path(&self) -> PathBuf {
        self.git_dir.join("HEAD")
    }
}

impl Repo for OnDiskRepo {
    fn put_object(&self, object: &Object) -> Result<Id> {
        let id = *object.id();
        let path = self.object_path(&id);

        // Same ID, same bytes: nothing to do.
        if path.is_file() {
            debug!("{} {} already stored", object.kind(), id);
            return Ok(id);
        }

        let compressed = loose::encode(object)?;

        // `object_path` always has a parent: the fan-out directory.
        let dir = path.parent().unwrap_or_else(|| self.git_dir.as_path());

        match durable::write_atomic(dir, &path, &compressed) {
            Ok(()) => {
                debug!("stored {} {} ({} bytes)", object.kind(), id, object.len());
                Ok(id)
            }

            // A concurrent writer may have landed the identical object first
            // on a platform where rename won't replace an existing file.
            Err(Error::FileSystemError(_)) if path.is_file() => Ok(id),

            Err(err) => Err(err),
        }
    }

    fn has_object(&self, id: &Id) -> Result<bool> {
        Ok(self.object_path(id).is_file())
    }

    fn get_object(&self, id: &Id) -> Result<Option<Object>> {
        let compressed = match fs::read(self.object_path(id)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match loose::decode(&compressed) {
            Some(object) if object.id() == id => Ok(Some(object)),
            _ => Err(Error::CorruptObject(*id)),
        }
    }

    fn head(&self) -> Result<Option<Id>> {
        let head = match fs::read_to_string(self.head_path()) {
            Ok(head) => head,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        // Anything other than a bare commit ID (e.g. a symbolic `ref: ...`
        // written by another tool) means there is no commit to report.
        Ok(head.trim_end().parse::<Id>().ok())
    }

    fn set_head(&self, id: &Id) -> Result<()> {
        let head = format!("{}\n", id);
        durable::write_atomic(&self.git_dir, &self.head_path(), head.as_bytes())?;

        debug!("HEAD is now {}", id);
        Ok(())
    }
}

fn create_config(git_dir: &Path) -> Result<()> {
    let config_path = git_dir.join("config");
    let config_txt = "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\tbare = false\n";

    fs::write(config_path, config_txt).map_err(|e| e.into())
}

fn create_description(git_dir: &Path) -> Result<()> {
    let desc_path = git_dir.join("description");
    let desc_txt = "Unnamed repository; edit this file 'description' to name the repository.\n";

    fs::write(desc_path, desc_txt).map_err(|e| e.into())
}

fn create_objects_dir(git_dir: &Path) -> Result<()> {
    // Fan-out directories are created lazily, on first write.
    let info_dir = git_dir.join("objects/info");
    fs::create_dir_all(&info_dir)?;

    let pack_dir = git_dir.join("objects/pack");
    fs::create_dir_all(&pack_dir).map_err(|e| e.into())
}

fn create_refs_dir(git_dir: &Path) -> Result<()> {
    let heads_dir = git_dir.join("refs/heads");
    fs::create_dir_all(&heads_dir)?;

    let tags_dir = git_dir.join("refs/tags");
    fs::create_dir_all(&tags_dir).map_err(|e| e.into())
}

#[cfg(test)]
mod tests;
