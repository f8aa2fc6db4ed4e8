// builtins.rs

use std::env;
use std::path::PathBuf;

use nix::unistd::{self, User};

use crate::util::{write_stdout, writeln_stdout};

pub const HELP_TEXT: &str = "minish, a simple shell, version 0.1.0\n\
These shell commands are defined internally.\n\
cd [dir]         Change the current working directory.\n\
exit             Exit the shell program.\n\
help [command]   Display help information on internal commands.\n\
history          Display the most recent commands.\n\
pwd              Display the current working directory.\n";

/// Previous/current working directory pair backing `cd -`.
///
/// Only `cd` mutates it; both sides start as the real cwd at startup.
pub struct DirState {
    pub previous: PathBuf,
    pub current: PathBuf,
}

impl DirState {
    pub fn new() -> std::io::Result<Self> {
        let cwd = env::current_dir()?;
        Ok(Self {
            previous: cwd.clone(),
            current: cwd,
        })
    }
}

pub fn pwd() {
    if let Ok(cwd) = env::current_dir() {
        writeln_stdout(cwd.display().to_string());
    }
}

/// Home directory of the invoking user, from the passwd database.
fn home_directory() -> Option<PathBuf> {
    User::from_uid(unistd::getuid()).ok().flatten().map(|u| u.dir)
}

/// Change directory: no argument or `~suffix` resolve against the home
/// directory, a leading `-` switches to the previous directory, anything
/// else is taken as a path. On failure the pair is left untouched.
pub fn cd(arg: Option<&str>, dirs: &mut DirState) {
    match arg {
        Some(arg) if arg.starts_with('-') => {
            let previous = dirs.previous.clone();
            match env::set_current_dir(&previous) {
                Ok(()) => std::mem::swap(&mut dirs.previous, &mut dirs.current),
                Err(e) => eprintln!("cd: {}: {}", previous.display(), e),
            }
        }
        Some(arg) if !arg.starts_with('~') => match env::set_current_dir(arg) {
            Ok(()) => {
                if let Ok(cwd) = env::current_dir() {
                    dirs.previous = std::mem::replace(&mut dirs.current, cwd);
                }
            }
            Err(e) => eprintln!("cd: {}: {}", arg, e),
        },
        // No argument or a `~` form, both rooted at the home directory.
        arg => {
            let Some(home) = home_directory() else {
                eprintln!("cd: cannot determine home directory");
                return;
            };
            let target = match arg {
                // `~/docs` becomes `<home>/docs`, `~docs` becomes `<home>docs`.
                Some(arg) => PathBuf::from(format!("{}{}", home.display(), &arg[1..])),
                None => home,
            };
            match env::set_current_dir(&target) {
                Ok(()) => dirs.previous = std::mem::replace(&mut dirs.current, target),
                Err(e) => eprintln!("cd: {}: {}", target.display(), e),
            }
        }
    }
}

pub fn help(arg: Option<&str>) {
    match arg {
        None => write_stdout(HELP_TEXT),
        Some("cd") => {
            writeln_stdout("'cd' is a builtin command for changing the current working directory.")
        }
        Some("exit") => {
            writeln_stdout("'exit' is a builtin command for exiting the shell program.")
        }
        Some("help") => writeln_stdout(
            "'help' is a builtin command for displaying help information on internal commands.",
        ),
        Some("history") => {
            writeln_stdout("'history' is a builtin command for displaying the most recent commands.")
        }
        Some("pwd") => {
            writeln_stdout("'pwd' is a builtin command for displaying the current working directory.")
        }
        Some(other) => writeln_stdout(format!("'{}' is an external command or application.", other)),
    }
}
