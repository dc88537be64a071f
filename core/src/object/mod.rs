//! Represents the git concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the binary data.
//!
//! Every object is encoded and identified at construction time. There is no
//! way to observe an object without its ID, and no way to change either one
//! afterwards.

use sha1::{Digest, Sha1};

mod attribution;
pub use attribution::Attribution;

mod commit;
pub use commit::Commit;

mod error;
pub use error::MalformedObject;

mod file_mode;
pub use file_mode::FileMode;

mod id;
pub use id::{Id, ParseIdError, HEX_ID_LEN, ID_LEN};

mod kind;
pub use kind::Kind;

mod tree;
pub use tree::{Tree, TreeEntry};

/// Describes a single object stored (or about to be stored) in a repository:
/// its kind, its canonical content, and the ID derived from both.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    id: Id,
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new object from its kind and canonical content.
    pub fn new(kind: Kind, content: Vec<u8>) -> Object {
        let id = Object::identity_of(kind, &content);
        Object { id, kind, content }
    }

    /// Create a blob. Blob content is opaque; it is hashed and stored as-is.
    pub fn blob<T: Into<Vec<u8>>>(content: T) -> Object {
        Object::new(Kind::Blob, content.into())
    }

    /// Computes the ID for an object of the given kind and content.
    ///
    /// The ID is the SHA-1 digest of `"<kind> <len>\0"` followed by the
    /// content. This is functionally equivalent to the
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
    /// without the `-w` option that would write the object to the repo.
    pub fn identity_of(kind: Kind, content: &[u8]) -> Id {
        let mut hasher = Sha1::new();
        hasher.update(header(kind, content.len()));
        hasher.update(content);

        let final_hash = hasher.finalize();

        // SHA-1 always produces a 20-byte digest.
        let mut id = [0u8; ID_LEN];
        id.copy_from_slice(&final_hash[..]);
        Id::from(id)
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the canonical content of the object (without header).
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Return the size (in bytes) of the object's content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the object header, `"<kind> <len>\0"`.
    pub fn header(&self) -> Vec<u8> {
        header(self.kind, self.len())
    }

    /// Returns the header followed by the content. These are the bytes that
    /// get compressed into a loose object file.
    pub fn to_loose_bytes(&self) -> Vec<u8> {
        let mut bytes = self.header();
        bytes.extend_from_slice(&self.content);
        bytes
    }
}

fn header(kind: Kind, len: usize) -> Vec<u8> {
    format!("{} {}\0", kind, len).into_bytes()
}
