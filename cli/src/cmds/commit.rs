use std::{
    io::{BufRead, BufReader, Read, Write},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{config, App, Result};

use clap::{ArgMatches, SubCommand};
use log::debug;
use minigit_core::repo::Repo;
use minigit_on_disk::Workspace;

use super::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("commit")
        .about("Record the files in the working directory as a new root commit")
        .after_help(
            "The commit message is read from standard input, up to end of file \
             or a line containing only a period.",
        )
}

pub(crate) fn run(app: &mut App, _args: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_current_dir()?;
    let workspace = Workspace::new(repo.work_dir());

    let mut files = Vec::new();
    for name in workspace.list_files()? {
        let content = workspace.read_file(&name)?;
        files.push((name, content));
    }
    debug!("committing {} files from {}", files.len(), workspace.path().display());

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    let author = config::author(app.var, now)?;
    let committer = config::committer(app.var, now)?;

    let message = read_message(&mut *app.stdin)?;
    if message.trim().is_empty() {
        return Err("Aborting commit due to empty commit message.".into());
    }

    let commit = repo.commit_snapshot(files, author, committer, &message)?;

    writeln!(app, "[(root-commit) {}] {}", commit.id(), commit.summary())?;

    Ok(())
}

// Every line, including the last, ends up newline-terminated.
fn read_message(input: &mut dyn Read) -> Result<String> {
    let mut message = String::new();

    for line in BufReader::new(input).lines() {
        let line = line?;
        if line == "." {
            break;
        }
        message.push_str(&line);
        message.push('\n');
    }

    Ok(message)
}
