//! Input reader: decide whether the agent piped a request, without blocking.

use std::io::{self, IsTerminal, Read};

use clap::ValueEnum;

/// Strategy for telling "a request was piped" apart from "probe / interactive run".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Zero-timeout poll of stdin; read only if data (or EOF) is ready.
    Poll,
    /// Read stdin to the end unless it is attached to a terminal.
    Tty,
}

impl InputMode {
    /// `poll` where the platform supports it on stdin, `tty` elsewhere.
    pub const PLATFORM_DEFAULT: &'static str = if cfg!(unix) { "poll" } else { "tty" };
}

/// Read the pending request, if any.
///
/// Returns `None` when nothing was piped, or when the piped data is empty or
/// whitespace only.
///
/// # Errors
///
/// Returns an error if polling or reading stdin fails.
pub fn read_request(mode: InputMode) -> io::Result<Option<String>> {
    let stdin = io::stdin();
    let ready = match mode {
        InputMode::Poll => poll_ready(&stdin)?,
        InputMode::Tty => !stdin.is_terminal(),
    };
    tracing::debug!(?mode, ready, "checked stdin");
    if !ready {
        return Ok(None);
    }
    collect(stdin.lock())
}

/// Read `reader` to the end; empty or blank input counts as no input.
///
/// # Errors
///
/// Returns an error if reading fails or the data is not UTF-8.
pub fn collect(mut reader: impl Read) -> io::Result<Option<String>> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    if data.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(data))
    }
}

#[cfg(unix)]
fn poll_ready(stdin: &io::Stdin) -> io::Result<bool> {
    use nix::poll::{PollFd, PollFlags, PollTimeout, poll};
    use std::os::fd::AsFd;

    let mut fds = [PollFd::new(stdin.as_fd(), PollFlags::POLLIN)];
    let ready = poll(&mut fds, PollTimeout::ZERO).map_err(io::Error::from)?;
    if ready == 0 {
        return Ok(false);
    }
    // EOF without data (POLLHUP) is readable too: read() returns at once.
    let revents = fds[0].revents().unwrap_or(PollFlags::empty());
    Ok(revents.intersects(PollFlags::POLLIN | PollFlags::POLLHUP))
}

#[cfg(not(unix))]
fn poll_ready(stdin: &io::Stdin) -> io::Result<bool> {
    Ok(!stdin.is_terminal())
}
