use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::MalformedObject;

/// Describes the fundamental object type (blob, tree, or commit).
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
/// The kind's name is the first word of every object header, so it takes part in
/// the object's identity.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
}

impl Kind {
    /// Returns the name used for this kind in object headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Blob => "blob",
            Kind::Tree => "tree",
            Kind::Commit => "commit",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = MalformedObject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(Kind::Blob),
            "tree" => Ok(Kind::Tree),
            "commit" => Ok(Kind::Commit),
            _ => Err(MalformedObject::UnknownKind(s.to_string())),
        }
    }
}
