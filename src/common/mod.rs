pub mod error;
pub mod io;
pub mod observer;

/// Reset SIGPIPE to default behavior (SIG_DFL).
/// Rust sets SIGPIPE to SIG_IGN by default, so `fsortkit generate | head`
/// would otherwise report a broken pipe instead of exiting quietly.
/// This must be called at the start of main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an IO error message without the "(os error N)" suffix.
/// Prints e.g. "No such file or directory" where Rust's Display impl
/// would add " (os error 2)".
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        let msg = format!("{}", os_err);
        msg.replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}
