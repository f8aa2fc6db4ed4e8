// dispatch.rs

use crate::builtins::{self, DirState};
use crate::error::ShellError;
use crate::history::History;
use crate::spawn;
use crate::util::writeln_stdout;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Route one recorded command line: builtin or external.
///
/// Builtins enforce a strict maximum argument count — none for `pwd`,
/// `exit` and `history`, one for `cd` and `help`. A violation aborts the
/// line without spawning anything; the attempt itself has already been
/// recorded by the caller. Builtins ignore the background flag.
pub fn dispatch(
    tokens: &[String],
    in_background: bool,
    dirs: &mut DirState,
    history: &History,
) -> Result<Outcome, ShellError> {
    let args = &tokens[1..];
    match tokens[0].as_str() {
        "pwd" => {
            require_at_most(args, 0)?;
            builtins::pwd();
        }
        "cd" => {
            require_at_most(args, 1)?;
            builtins::cd(args.first().map(String::as_str), dirs);
        }
        "exit" => {
            require_at_most(args, 0)?;
            return Ok(Outcome::Exit);
        }
        "help" => {
            require_at_most(args, 1)?;
            builtins::help(args.first().map(String::as_str));
        }
        "history" => {
            require_at_most(args, 0)?;
            for (sequence, command) in history.list() {
                writeln_stdout(format!("{:<10}{}", sequence, command));
            }
        }
        _ => spawn::run_external(tokens, in_background),
    }
    Ok(Outcome::Continue)
}

fn require_at_most(args: &[String], max: usize) -> Result<(), ShellError> {
    if args.len() > max {
        return Err(ShellError::InvalidArgument);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (DirState, History) {
        (DirState::new().unwrap(), History::new())
    }

    #[test]
    fn excess_arguments_are_invalid() {
        let (mut dirs, history) = state();
        for line in ["pwd extra", "history x", "exit now", "help a b", "cd a b"] {
            let (tokens, bg) = crate::parser::tokenize(line);
            assert_eq!(
                dispatch(&tokens, bg, &mut dirs, &history),
                Err(ShellError::InvalidArgument),
                "expected {:?} to be rejected",
                line
            );
        }
    }

    #[test]
    fn exit_without_arguments_exits() {
        let (mut dirs, history) = state();
        let (tokens, bg) = crate::parser::tokenize("exit");
        assert_eq!(dispatch(&tokens, bg, &mut dirs, &history), Ok(Outcome::Exit));
    }

    #[test]
    fn help_and_history_with_valid_arity_continue() {
        let (mut dirs, history) = state();
        for line in ["help", "help cd", "history", "pwd"] {
            let (tokens, bg) = crate::parser::tokenize(line);
            assert_eq!(
                dispatch(&tokens, bg, &mut dirs, &history),
                Ok(Outcome::Continue)
            );
        }
    }
}
