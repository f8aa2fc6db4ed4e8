// util.rs

use std::io::Write;

pub fn write_ignore_broken_pipe<W: std::io::Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match write!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

pub fn write_stdout<S: AsRef<str>>(s: S) {
    let _ = write_ignore_broken_pipe(std::io::stdout(), s);
    let _ = std::io::stdout().flush();
}

pub fn writeln_stdout<S: AsRef<str>>(s: S) {
    write_stdout(format!("{}\n", s.as_ref()));
}
