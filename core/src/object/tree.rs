use std::cmp::Ordering;
use std::collections::HashSet;
use std::str;

use super::{FileMode, Id, Kind, MalformedObject, Object, ID_LEN};

/// A single named reference from a tree to another object.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TreeEntry {
    name: String,
    mode: FileMode,
    id: Id,
}

impl TreeEntry {
    /// Create a tree entry.
    ///
    /// The name must be a single path segment: non-empty, not `.` or `..`,
    /// and free of `/` and NUL.
    pub fn new(name: &str, mode: FileMode, id: Id) -> Result<TreeEntry, MalformedObject> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\0')
        {
            return Err(MalformedObject::InvalidEntryName(name.to_string()));
        }

        Ok(TreeEntry {
            name: name.to_string(),
            mode,
            id,
        })
    }

    /// Create a tree entry from textual mode and hex ID, as a caller
    /// collecting IDs from previously stored objects would have them.
    ///
    /// The hex ID is decoded here, once; only the binary form is ever
    /// written into the tree.
    pub fn from_hex(name: &str, mode: &str, id: &str) -> Result<TreeEntry, MalformedObject> {
        let mode = mode.parse::<FileMode>()?;
        let id = Id::from_hex(id)?;
        TreeEntry::new(name, mode, id)
    }

    /// Returns the entry's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry's file mode.
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// Returns the ID of the referenced object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    // Subtrees sort as if their name ended in `/`.
    fn cmp_for_tree(&self, other: &TreeEntry) -> Ordering {
        self.name
            .bytes()
            .chain(self.dir_suffix())
            .cmp(other.name.bytes().chain(other.dir_suffix()))
    }

    fn dir_suffix(&self) -> Option<u8> {
        if self.mode == FileMode::Tree {
            Some(b'/')
        } else {
            None
        }
    }

    fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.mode.as_str().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(self.name.as_bytes());
        buf.push(0);
        buf.extend_from_slice(self.id.as_bytes());
    }
}

/// A tree lists the entries of one directory.
///
/// Entries may be supplied in any order; they are kept in canonical
/// (sorted) order, so the tree's ID depends only on the set of entries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
    object: Object,
}

impl Tree {
    /// Create a tree from a set of entries.
    ///
    /// Returns `MalformedObject::DuplicateEntryName` if two entries share a
    /// name (regardless of their modes).
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Tree, MalformedObject> {
        {
            let mut seen = HashSet::with_capacity(entries.len());
            if let Some(dup) = entries.iter().find(|e| !seen.insert(e.name.as_str())) {
                return Err(MalformedObject::DuplicateEntryName(dup.name.clone()));
            }
        }

        entries.sort_by(TreeEntry::cmp_for_tree);

        let mut content = Vec::new();
        for entry in &entries {
            entry.write_to(&mut content);
        }

        Ok(Tree {
            entries,
            object: Object::new(Kind::Tree, content),
        })
    }

    /// Decode a stored tree object.
    ///
    /// The content must be exactly what `Tree::new` would have produced for
    /// the same entries; anything else is `MalformedObject::InvalidTree`.
    pub fn from_object(object: &Object) -> Result<Tree, MalformedObject> {
        if object.kind() != Kind::Tree {
            return Err(MalformedObject::InvalidTree);
        }

        let mut entries = Vec::new();
        let mut rest = object.content();

        while !rest.is_empty() {
            let space = find(rest, b' ')?;
            let mode = str::from_utf8(&rest[..space]).map_err(|_| MalformedObject::InvalidTree)?;
            rest = &rest[space + 1..];

            let nul = find(rest, 0)?;
            let name = str::from_utf8(&rest[..nul]).map_err(|_| MalformedObject::InvalidTree)?;
            rest = &rest[nul + 1..];

            if rest.len() < ID_LEN {
                return Err(MalformedObject::InvalidTree);
            }
            let id = Id::new(&rest[..ID_LEN])?;
            rest = &rest[ID_LEN..];

            entries.push(TreeEntry::new(name, mode.parse()?, id)?);
        }

        let tree = Tree::new(entries)?;
        if tree.object != *object {
            return Err(MalformedObject::InvalidTree);
        }

        Ok(tree)
    }

    /// Returns the entries in canonical order.
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Returns the tree's ID.
    pub fn id(&self) -> &Id {
        self.object.id()
    }

    /// Returns the encoded tree object.
    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn into_object(self) -> Object {
        self.object
    }
}

fn find(s: &[u8], c: u8) -> Result<usize, MalformedObject> {
    s.iter()
        .position(|b| *b == c)
        .ok_or(MalformedObject::InvalidTree)
}
