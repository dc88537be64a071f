use super::{Attribution, Id, Kind, Object};

/// A root commit: a snapshot (tree) plus who made it, when, and why.
///
/// Author and committer are captured by value, so the commit's ID is fixed
/// at construction. Parent commits are not supported.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    tree_id: Id,
    author: Attribution,
    committer: Attribution,
    message: String,
    object: Object,
}

impl Commit {
    /// Create a commit referencing the given tree.
    ///
    /// The message is stored verbatim. Callers that want the customary
    /// trailing newline must supply it.
    pub fn new(tree_id: Id, author: Attribution, committer: Attribution, message: &str) -> Commit {
        let content = format!(
            "tree {}\nauthor {}\ncommitter {}\n\n{}",
            tree_id, author, committer, message
        );

        Commit {
            tree_id,
            author,
            committer,
            message: message.to_string(),
            object: Object::new(Kind::Commit, content.into_bytes()),
        }
    }

    pub fn tree_id(&self) -> &Id {
        &self.tree_id
    }

    pub fn author(&self) -> &Attribution {
        &self.author
    }

    pub fn committer(&self) -> &Attribution {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the first line of the message, as shown in commit summaries.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the commit's ID.
    pub fn id(&self) -> &Id {
        self.object.id()
    }

    /// Returns the encoded commit object.
    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn into_object(self) -> Object {
        self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    const TREE_ID: &str = "f4b354863caa9cea99b95422c9dab70465757d87";

    fn author() -> Attribution {
        Attribution::new("A U Thor", "author@example.com", 1_142_878_501, 150).unwrap()
    }

    fn committer() -> Attribution {
        Attribution::new("C O Mitter", "committer@example.com", 1_142_878_502, 0).unwrap()
    }

    #[test]
    fn canonical_text() {
        let c = Commit::new(Id::from_str(TREE_ID).unwrap(), author(), committer(), "fix bug\n");

        let expected = "tree f4b354863caa9cea99b95422c9dab70465757d87\n\
                        author A U Thor <author@example.com> 1142878501 +0230\n\
                        committer C O Mitter <committer@example.com> 1142878502 +0000\n\
                        \n\
                        fix bug\n";

        assert_eq!(c.object().content(), expected.as_bytes());
        assert!(c.object().content().ends_with(b"\nfix bug\n"));
        assert_eq!(c.object().kind(), Kind::Commit);
        assert_eq!(c.id().to_string(), "1fe8038313f71812e35d16b38d678bb56dec6dc7");
    }

    #[test]
    fn accessors() {
        let c = Commit::new(
            Id::from_str(TREE_ID).unwrap(),
            author(),
            committer(),
            "first line\n\nbody\n",
        );

        assert_eq!(c.tree_id().to_string(), TREE_ID);
        assert_eq!(c.author(), &author());
        assert_eq!(c.committer(), &committer());
        assert_eq!(c.message(), "first line\n\nbody\n");
        assert_eq!(c.summary(), "first line");
    }

    #[test]
    fn message_is_not_normalized() {
        let tree_id = Id::from_str(TREE_ID).unwrap();
        let with_newline = Commit::new(tree_id, author(), committer(), "msg\n");
        let without_newline = Commit::new(tree_id, author(), committer(), "msg");

        assert!(without_newline.object().content().ends_with(b"\n\nmsg"));
        assert_ne!(with_newline.id(), without_newline.id());
    }

    #[test]
    fn empty_message() {
        let c = Commit::new(Id::from_str(TREE_ID).unwrap(), author(), committer(), "");
        assert!(c.object().content().ends_with(b"+0000\n\n"));
        assert_eq!(c.summary(), "");
    }

    #[test]
    fn identity_is_stable() {
        let tree_id = Id::from_str(TREE_ID).unwrap();
        let c1 = Commit::new(tree_id, author(), committer(), "fix bug\n");
        let c2 = Commit::new(tree_id, author(), committer(), "fix bug\n");
        assert_eq!(c1.id(), c2.id());
        assert_eq!(c1, c2);
    }
}
