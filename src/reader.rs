// reader.rs

use nix::errno::Errno;
use nix::unistd;

/// Maximum accepted command line, including the terminator byte.
pub const COMMAND_LENGTH: usize = 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line was read; the trailing newline, if any, has been stripped.
    Line(String),
    /// The read was cut short by signal delivery before any byte arrived.
    Interrupted,
    /// The input stream is closed.
    Eof,
}

/// Block on a single read of up to `COMMAND_LENGTH - 1` bytes from stdin.
///
/// EINTR is not an error here: SIGINT delivery interrupts the read and the
/// caller re-prompts. Any other errno is returned for the caller to treat
/// as fatal.
pub fn read_line() -> nix::Result<ReadOutcome> {
    let mut buf = [0u8; COMMAND_LENGTH];
    match unistd::read(libc::STDIN_FILENO, &mut buf[..COMMAND_LENGTH - 1]) {
        Ok(0) => Ok(ReadOutcome::Eof),
        Ok(n) => {
            let mut line = String::from_utf8_lossy(&buf[..n]).into_owned();
            if line.ends_with('\n') {
                line.pop();
            }
            Ok(ReadOutcome::Line(line))
        }
        Err(Errno::EINTR) => Ok(ReadOutcome::Interrupted),
        Err(e) => Err(e),
    }
}
