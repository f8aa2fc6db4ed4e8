// signal.rs

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_: libc::c_int) {
    // Async-signal-safe: just mark the interruption. The main loop prints
    // the newline and help text once the pending read returns EINTR.
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler once at startup.
///
/// SA_RESTART is deliberately left out so a blocking read on stdin fails
/// with EINTR instead of being transparently resumed.
pub fn install() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(handle_sigint),
        SaFlags::empty(),
        SigSet::empty(),
    );
    unsafe { sigaction(Signal::SIGINT, &action) }?;
    Ok(())
}

/// Consume the interrupted flag, returning whether it was set.
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}
