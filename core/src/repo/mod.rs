//! Represents an abstract object store with a single head pointer.
//!
//! ## Design Goals
//!
//! Repositories may be stored in multiple different mechanisms. While
//! `minigit_on_disk` provides a local on-disk repository, you could envision
//! repositories stored entirely in memory, or on a remote file system or database.

mod error;
pub use error::{Error, Result};

use crate::object::{Attribution, Commit, FileMode, Id, Object, Tree, TreeEntry};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing objects.
///
/// The required methods on this trait represent the most primitive operations
/// which must be defined for a given storage architecture. All of them take
/// `&self`: implementations must tolerate being called concurrently from
/// several threads, for instance to store many blobs in parallel.
///
/// The provided methods build on those primitives.
pub trait Repo {
    /// Persist an object, returning its ID.
    ///
    /// Storing an object that is already present is not an error, and may
    /// skip the write entirely.
    fn put_object(&self, object: &Object) -> Result<Id>;

    /// Returns true if an object with this ID is present.
    fn has_object(&self, id: &Id) -> Result<bool>;

    /// Read an object back, or `None` if it is not present.
    fn get_object(&self, id: &Id) -> Result<Option<Object>>;

    /// Returns the ID of the most recent commit, if there is one.
    fn head(&self) -> Result<Option<Id>>;

    /// Point the head at a new commit.
    fn set_head(&self, id: &Id) -> Result<()>;

    /// Record a snapshot of a flat set of files as a new root commit and move
    /// the head to it.
    ///
    /// Every file becomes a normal (`100644`) blob entry in a single tree.
    /// Objects are stored leaves first (blobs, then the tree, then the
    /// commit) and the head is only updated once all of them are stored, so a
    /// failure part way through never leaves the head referring to an
    /// incomplete object graph.
    fn commit_snapshot<I, N, C>(
        &self,
        files: I,
        author: Attribution,
        committer: Attribution,
        message: &str,
    ) -> Result<Commit>
    where
        Self: Sized,
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: Into<Vec<u8>>,
    {
        let mut entries = Vec::new();
        for (name, content) in files {
            let blob = Object::blob(content);
            let id = self.put_object(&blob)?;
            entries.push(TreeEntry::new(name.as_ref(), FileMode::Normal, id)?);
        }

        let tree = Tree::new(entries)?;
        self.put_object(tree.object())?;

        let commit = Commit::new(*tree.id(), author, committer, message);
        self.put_object(commit.object())?;

        self.set_head(commit.id())?;
        Ok(commit)
    }
}
