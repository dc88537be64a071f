#![deny(warnings)]

use std::{
    env,
    error::Error,
    io::{self, Write},
    process,
};

use log::debug;

mod app;
pub(crate) use app::App;

mod cmds;
mod config;
#[cfg(test)]
mod temp_cwd;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() {
    // Everything past argument parsing lives in `App` so that unit
    // tests can drive it with canned stdin, stdout, and variables.

    env_logger::init();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let var = |key: &str| env::var(key).ok();

    let mut app = App {
        arg_matches: app::clap_app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut stdout,
        var: &var,
    };

    let result = app.run();
    if let Err(err) = app.flush() {
        debug!("couldn't flush stdout: {}", err);
    }

    process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
