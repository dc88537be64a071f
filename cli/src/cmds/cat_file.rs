use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgGroup, ArgMatches, SubCommand};
use minigit_core::{
    object::{FileMode, Id, Kind, Tree},
    repo::Repo,
};
use minigit_on_disk::OnDiskRepo;

use super::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content or type and size information for repository objects")
        .arg(Arg::with_name("t").short("t").help("Show the object's type"))
        .arg(Arg::with_name("s").short("s").help("Show the object's size"))
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Pretty-print the object's content"),
        )
        .group(
            ArgGroup::with_name("mode")
                .args(&["t", "s", "p"])
                .required(true),
        )
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("The object to show: a full object ID or HEAD"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_current_dir()?;

    let name = args
        .value_of("object")
        .ok_or("an object name is required")?;
    let id = resolve(&repo, name)?;
    let object = repo
        .get_object(&id)?
        .ok_or_else(|| format!("Not a valid object name {}", name))?;

    if args.is_present("t") {
        writeln!(app, "{}", object.kind())?;
    } else if args.is_present("s") {
        writeln!(app, "{}", object.len())?;
    } else if object.kind() == Kind::Tree {
        for entry in Tree::from_object(&object)?.entries() {
            writeln!(
                app,
                "{:06o} {} {}\t{}",
                entry.mode().to_value(),
                entry_kind(entry.mode()),
                entry.id(),
                entry.name()
            )?;
        }
    } else {
        app.write_all(object.content())?;
    }

    Ok(())
}

fn resolve(repo: &OnDiskRepo, name: &str) -> Result<Id> {
    if name == "HEAD" {
        Ok(repo
            .head()?
            .ok_or("HEAD does not point to a commit yet")?)
    } else {
        Ok(name.parse::<Id>()?)
    }
}

fn entry_kind(mode: FileMode) -> Kind {
    match mode {
        FileMode::Tree => Kind::Tree,
        FileMode::Submodule => Kind::Commit,
        _ => Kind::Blob,
    }
}

#[cfg(test)]
mod tests {
    use minigit_core::{
        object::{FileMode, Object, Tree, TreeEntry},
        repo::Repo,
    };
    use minigit_on_disk::OnDiskRepo;
    use serial_test::serial;

    use crate::temp_cwd::TempCwd;
    use crate::App;

    const HELLO_ID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

    fn repo_with_hello(cwd: &TempCwd) -> OnDiskRepo {
        let repo = OnDiskRepo::init(cwd.path()).unwrap();
        repo.put_object(&Object::blob("hello\n")).unwrap();
        repo
    }

    #[test]
    #[serial]
    fn blob_type_size_and_content() {
        let cwd = TempCwd::new();
        repo_with_hello(&cwd);

        let stdout = App::run_with_args(vec!["cat-file", "-t", HELLO_ID]).unwrap();
        assert_eq!(stdout, b"blob\n");

        let stdout = App::run_with_args(vec!["cat-file", "-s", HELLO_ID]).unwrap();
        assert_eq!(stdout, b"6\n");

        let stdout = App::run_with_args(vec!["cat-file", "-p", HELLO_ID]).unwrap();
        assert_eq!(stdout, b"hello\n");
    }

    #[test]
    #[serial]
    fn pretty_prints_trees() {
        let cwd = TempCwd::new();
        let repo = repo_with_hello(&cwd);

        let hello = *Object::blob("hello\n").id();
        let sub = Tree::new(vec![
            TreeEntry::new("hello.txt", FileMode::Normal, hello).unwrap()
        ])
        .unwrap();
        let tree = Tree::new(vec![
            TreeEntry::new("run.sh", FileMode::Executable, hello).unwrap(),
            TreeEntry::new("docs", FileMode::Tree, *sub.id()).unwrap(),
        ])
        .unwrap();
        let tree_id = repo.put_object(tree.object()).unwrap().to_string();

        let stdout = App::run_with_args(vec!["cat-file", "-p", tree_id.as_str()]).unwrap();

        let expected = format!(
            "040000 tree {}\tdocs\n100755 blob {}\trun.sh\n",
            sub.id(),
            HELLO_ID
        );
        assert_eq!(String::from_utf8(stdout).unwrap(), expected);

        let stdout = App::run_with_args(vec!["cat-file", "-t", tree_id.as_str()]).unwrap();
        assert_eq!(stdout, b"tree\n");
    }

    #[test]
    #[serial]
    fn head() {
        let cwd = TempCwd::new();
        let repo = repo_with_hello(&cwd);

        let err = App::run_with_args(vec!["cat-file", "-t", "HEAD"]).unwrap_err();
        assert_eq!(err.to_string(), "HEAD does not point to a commit yet");

        repo.set_head(&HELLO_ID.parse().unwrap()).unwrap();
        let stdout = App::run_with_args(vec!["cat-file", "-t", "HEAD"]).unwrap();
        assert_eq!(stdout, b"blob\n");
    }

    #[test]
    #[serial]
    fn unknown_object() {
        let cwd = TempCwd::new();
        repo_with_hello(&cwd);

        let missing = "d670460b4b4aece5915caf5c68d12f560a9fe3e4";
        let err = App::run_with_args(vec!["cat-file", "-p", missing]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Not a valid object name {}", missing)
        );

        let err = App::run_with_args(vec!["cat-file", "-p", "nonsense"]).unwrap_err();
        assert_eq!(err.to_string(), "value is less than 40 digits long");
    }

    #[test]
    fn requires_an_object() {
        let err = App::run_with_args(vec!["cat-file", "-p"]).unwrap_err();
        assert!(err
            .to_string()
            .contains("required arguments were not provided"));
        assert!(err.to_string().contains("<object>"));
    }

    #[test]
    fn requires_a_mode() {
        let err = App::run_with_args(vec!["cat-file", HELLO_ID]).unwrap_err();
        assert!(err
            .to_string()
            .contains("required arguments were not provided"));
    }
}
