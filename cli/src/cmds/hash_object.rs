use std::{fs, io::Write};

use crate::{App, Result};

use clap::{Arg, ArgMatches, Error, ErrorKind, SubCommand};
use minigit_core::{object::Object, repo::Repo};

use super::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally creates a blob from a file")
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(Arg::with_name("file"))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let object = Object::blob(content_from_args(app, &args)?);

    if args.is_present("w") {
        let repo = find_repo::from_current_dir()?;
        repo.put_object(&object)?;
    }

    writeln!(app, "{}", object.id())?;

    Ok(())
}

fn content_from_args(app: &mut App, args: &ArgMatches) -> Result<Vec<u8>> {
    let stdin = args.is_present("stdin");

    match args.value_of("file") {
        Some(file) if !stdin => Ok(fs::read(file)?),
        None if stdin => {
            let mut content = Vec::new();
            app.stdin.read_to_end(&mut content)?;
            Ok(content)
        }
        _ => Err(Box::new(Error {
            message: "content source must be either --stdin or a file path".to_string(),
            kind: ErrorKind::MissingRequiredArgument,
            info: None,
        })),
    }
}
