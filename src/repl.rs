// repl.rs

use anyhow::Context;

use crate::builtins::{self, DirState};
use crate::dispatch::{self, Outcome};
use crate::history::History;
use crate::parser;
use crate::reader::{self, ReadOutcome};
use crate::signal;
use crate::spawn;
use crate::util::{write_stdout, writeln_stdout};

/// The main loop: prompt, read, expand, record, dispatch.
///
/// Every recoverable error is reported here and the loop returns to the
/// prompt; only an unreadable stdin propagates out as fatal.
pub fn run() -> anyhow::Result<()> {
    signal::install().context("failed to install the SIGINT handler")?;

    let mut history = History::new();
    let mut dirs = DirState::new().context("cannot read the current directory")?;

    loop {
        // Drain finished background children before prompting again.
        spawn::reap_background();
        prompt();

        let line = match reader::read_line()
            .context("unable to read command from keyboard, terminating")?
        {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Interrupted => {
                signal::take_interrupt();
                write_stdout("\n");
                builtins::help(None);
                continue;
            }
            ReadOutcome::Eof => return Ok(()),
        };

        let (mut tokens, mut in_background) = parser::tokenize(&line);
        if tokens.is_empty() {
            continue;
        }

        // `!!` / `!n`: echo the resolved command, then dispatch it as if it
        // had been typed. A failed reference is reported and not recorded.
        if tokens[0].starts_with('!') {
            match history.expand(&tokens) {
                Ok(resolved) => {
                    writeln_stdout(&resolved);
                    let (expanded, bg) = parser::tokenize(&resolved);
                    tokens = expanded;
                    in_background |= bg;
                }
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            }
        }

        history.record(&tokens, in_background);

        match dispatch::dispatch(&tokens, in_background, &mut dirs, &history) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => return Ok(()),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn prompt() {
    match std::env::current_dir() {
        Ok(cwd) => write_stdout(format!("{}$ ", cwd.display())),
        Err(_) => write_stdout("$ "),
    }
}
