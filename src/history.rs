// history.rs

use itertools::Itertools;
use std::collections::VecDeque;

use crate::error::ShellError;

pub const HISTORY_DEPTH: usize = 10;

/// Bounded log of the most recent commands, numbered from 0.
///
/// `issued` counts every accepted command line, including lines produced by
/// `!n` expansion, so the newest retained entry always has sequence number
/// `issued - 1` and the oldest `issued - entries.len()`. Once the buffer is
/// full, recording evicts the oldest entry.
pub struct History {
    entries: VecDeque<String>,
    issued: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_DEPTH),
            issued: 0,
        }
    }

    /// Sequence number of the most recent command, if any.
    pub fn last_sequence(&self) -> Option<usize> {
        self.issued.checked_sub(1)
    }

    fn oldest_sequence(&self) -> usize {
        self.issued - self.entries.len()
    }

    /// Append the canonical form of a command: tokens joined by single
    /// spaces, with a `" &"` suffix when it was started in the background.
    pub fn record(&mut self, tokens: &[String], in_background: bool) {
        let mut command = tokens.iter().join(" ");
        if in_background {
            command.push_str(" &");
        }
        if self.entries.len() == HISTORY_DEPTH {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
        self.issued += 1;
    }

    fn get(&self, sequence: usize) -> Option<&str> {
        if sequence >= self.issued || sequence < self.oldest_sequence() {
            return None;
        }
        self.entries
            .get(sequence - self.oldest_sequence())
            .map(String::as_str)
    }

    /// Resolve a `!!` or `!<n>` reference token into the stored command
    /// string.
    ///
    /// The reference must be the only token on the line. Anything else — a
    /// bare `!`, non-digit characters, `!!` with no history yet, or a number
    /// outside the retained window — is an invalid argument. The caller is
    /// expected to echo the result, re-tokenize it and record it as a new
    /// entry; replaying an old command never restores its old position.
    pub fn expand(&self, tokens: &[String]) -> Result<String, ShellError> {
        if tokens.len() != 1 {
            return Err(ShellError::InvalidArgument);
        }
        let reference = tokens[0]
            .strip_prefix('!')
            .ok_or(ShellError::InvalidArgument)?;

        let sequence = if reference == "!" {
            self.last_sequence().ok_or(ShellError::InvalidArgument)?
        } else if !reference.is_empty() && reference.chars().all(|c| c.is_ascii_digit()) {
            reference
                .parse::<usize>()
                .map_err(|_| ShellError::InvalidArgument)?
        } else {
            return Err(ShellError::InvalidArgument);
        };

        self.get(sequence)
            .map(str::to_owned)
            .ok_or(ShellError::InvalidArgument)
    }

    /// Retained entries from most recent back to oldest.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> {
        let oldest = self.oldest_sequence();
        self.entries
            .iter()
            .enumerate()
            .rev()
            .map(move |(i, cmd)| (oldest + i, cmd.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(history: &mut History, line: &str) {
        let (tokens, bg) = crate::parser::tokenize(line);
        history.record(&tokens, bg);
    }

    #[test]
    fn record_joins_tokens_and_keeps_background_suffix() {
        let mut history = History::new();
        record_line(&mut history, "sleep   1 &");
        let listed: Vec<_> = history.list().collect();
        assert_eq!(listed, vec![(0, "sleep 1 &")]);
    }

    #[test]
    fn retains_only_the_ten_most_recent() {
        let mut history = History::new();
        for i in 0..15 {
            record_line(&mut history, &format!("echo {}", i));
        }
        let listed: Vec<_> = history.list().collect();
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0], (14, "echo 14"));
        assert_eq!(listed[9], (5, "echo 5"));
        // The oldest five are gone for good.
        for seq in 0..5 {
            let reference = vec![format!("!{}", seq)];
            assert_eq!(history.expand(&reference), Err(ShellError::InvalidArgument));
        }
    }

    #[test]
    fn bang_bang_resolves_most_recent() {
        let mut history = History::new();
        record_line(&mut history, "pwd");
        record_line(&mut history, "ls -l");
        let tokens = vec!["!!".to_string()];
        assert_eq!(history.expand(&tokens).unwrap(), "ls -l");
    }

    #[test]
    fn bang_bang_on_empty_history_is_invalid() {
        let history = History::new();
        let tokens = vec!["!!".to_string()];
        assert_eq!(history.expand(&tokens), Err(ShellError::InvalidArgument));
    }

    #[test]
    fn numeric_reference_within_retained_window() {
        let mut history = History::new();
        for i in 0..13 {
            record_line(&mut history, &format!("echo {}", i));
        }
        // Sequences 0..=12 issued, 3..=12 retained.
        let ok = vec!["!5".to_string()];
        assert_eq!(history.expand(&ok).unwrap(), "echo 5");
        let evicted = vec!["!2".to_string()];
        assert_eq!(history.expand(&evicted), Err(ShellError::InvalidArgument));
        let future = vec!["!13".to_string()];
        assert_eq!(history.expand(&future), Err(ShellError::InvalidArgument));
    }

    #[test]
    fn malformed_references_are_invalid() {
        let mut history = History::new();
        record_line(&mut history, "pwd");
        for bad in ["!", "!x", "!1a", "!-1", "!!!"] {
            let tokens = vec![bad.to_string()];
            assert_eq!(
                history.expand(&tokens),
                Err(ShellError::InvalidArgument),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn reference_with_co_arguments_is_invalid() {
        let mut history = History::new();
        record_line(&mut history, "pwd");
        let tokens = vec!["!0".to_string(), "extra".to_string()];
        assert_eq!(history.expand(&tokens), Err(ShellError::InvalidArgument));
    }

    #[test]
    fn replayed_command_is_logged_under_a_new_sequence() {
        let mut history = History::new();
        record_line(&mut history, "echo hello");
        record_line(&mut history, "pwd");
        let tokens = vec!["!0".to_string()];
        let resolved = history.expand(&tokens).unwrap();
        assert_eq!(resolved, "echo hello");
        record_line(&mut history, &resolved);
        let listed: Vec<_> = history.list().collect();
        assert_eq!(listed[0], (2, "echo hello"));
        // Entry 0 keeps its original position as well.
        assert_eq!(listed[2], (0, "echo hello"));
    }
}
