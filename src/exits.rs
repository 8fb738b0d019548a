//! Exit statuses, signal handlers and process hardening.

use std::process::ExitCode;

pub const SUCCESS: ExitCode = ExitCode::SUCCESS;
pub const FAILURE: ExitCode = ExitCode::FAILURE;

/// Status for a run stopped by SIGINT/SIGTERM/SIGHUP.
pub const INTERRUPTED: i32 = 130;

/// Call this early in main().
pub fn harden() {
    disable_core_dumps();
    restore_sigpipe();
    install_handlers();
}

/// Keep generated passwords out of core dumps and ptrace.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

/// Rust ignores SIGPIPE; put it back so `pgen -n 1000000 | head -c4` ends
/// quietly like any other filter instead of reporting a write error.
#[cfg(unix)]
fn restore_sigpipe() {
    unsafe { libc::signal(libc::SIGPIPE, libc::SIG_DFL) };
}

#[cfg(not(unix))]
fn restore_sigpipe() {}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - leave at once with 130.
/// `_exit` is async-signal-safe and skips unwinding and stdio flushing.
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(INTERRUPTED) }
}

#[cfg(unix)]
fn install_handlers() {
    for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
        unsafe {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
fn install_handlers() {}
