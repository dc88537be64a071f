use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::MalformedObject;

/// Describes the file type of a tree entry.
///
/// Git uses a variation on the Unix file permissions flags to denote a file's
/// intended type on disk. The following values are recognized:
///
/// * `100644` - normal file
/// * `100755` - executable file
/// * `120000` - symbolic link
/// * `40000` - tree (subdirectory)
/// * `160000` - submodule (aka gitlink)
///
/// Note that trees are written without a leading zero.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum FileMode {
    Normal,
    Executable,
    SymbolicLink,
    Tree,
    Submodule,
}

impl FileMode {
    /// Convert from git file-mode integer to `FileMode` enum.
    ///
    /// Returns `None` if the value is not one of the recognized constants.
    pub fn from_value(value: u32) -> Option<FileMode> {
        match value {
            0o100644 => Some(FileMode::Normal),
            0o100755 => Some(FileMode::Executable),
            0o120000 => Some(FileMode::SymbolicLink),
            0o040000 => Some(FileMode::Tree),
            0o160000 => Some(FileMode::Submodule),
            _ => None,
        }
    }

    /// Convert from `FileMode` enum to git file-mode integer.
    pub fn to_value(self) -> u32 {
        match self {
            FileMode::Normal => 0o100644,
            FileMode::Executable => 0o100755,
            FileMode::SymbolicLink => 0o120000,
            FileMode::Tree => 0o040000,
            FileMode::Submodule => 0o160000,
        }
    }

    /// Returns the mode as it is written into tree objects.
    pub fn as_str(self) -> &'static str {
        match self {
            FileMode::Normal => "100644",
            FileMode::Executable => "100755",
            FileMode::SymbolicLink => "120000",
            FileMode::Tree => "40000",
            FileMode::Submodule => "160000",
        }
    }
}

impl Display for FileMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileMode {
    type Err = MalformedObject;

    /// Parses the canonical octal form only. `040000` and other zero-padded
    /// spellings are rejected because they would change the tree's identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "100644" => Ok(FileMode::Normal),
            "100755" => Ok(FileMode::Executable),
            "120000" => Ok(FileMode::SymbolicLink),
            "40000" => Ok(FileMode::Tree),
            "160000" => Ok(FileMode::Submodule),
            _ => Err(MalformedObject::InvalidMode(s.to_string())),
        }
    }
}
