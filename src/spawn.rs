// spawn.rs

use std::ffi::CString;

use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execvp, fork, ForkResult, Pid};

use crate::error::ShellError;

/// Run an external command: fork, exec in the child, and either wait for
/// that child (foreground) or return straight to the prompt (background).
///
/// Exec failure is reported from the child, which then exits with 127 so it
/// never falls back into the shell loop. Fork failure is reported in the
/// parent and the command is skipped.
pub fn run_external(tokens: &[String], in_background: bool) {
    let argv = match to_cstrings(tokens) {
        Ok(argv) => argv,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            let err = execvp(&argv[0], &argv).unwrap_err();
            eprintln!("{}: {}", tokens[0], err.desc());
            unsafe { libc::_exit(127) };
        }
        Ok(ForkResult::Parent { child }) => {
            if !in_background {
                wait_foreground(child);
            }
        }
        Err(e) => eprintln!("fork failed: {}", e),
    }
}

fn to_cstrings(tokens: &[String]) -> Result<Vec<CString>, ShellError> {
    tokens
        .iter()
        .map(|t| CString::new(t.as_str()).map_err(|_| ShellError::BadToken(t.clone())))
        .collect()
}

// Block until the specific foreground child terminates. SIGINT delivery
// interrupts waitpid with EINTR; the wait is resumed, the interrupt does
// not unblock it.
fn wait_foreground(child: Pid) {
    loop {
        match waitpid(child, None) {
            Err(Errno::EINTR) => continue,
            _ => break,
        }
    }
}

/// Non-blocking sweep collecting every already-terminated child, so
/// finished background jobs do not accumulate as zombies. Invoked once per
/// main-loop iteration.
pub fn reap_background() {
    loop {
        match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => break,
            Ok(_) => continue,
            // ECHILD: no children left to reap.
            Err(_) => break,
        }
    }
}
