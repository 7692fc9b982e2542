//! Interrupt latch for the blocking child wait.
//!
//! While an [`InterruptGuard`] is alive, SIGINT no longer terminates the
//! launcher. It sets a flag instead. The wait loop sees the flag, stops the
//! child, and the launcher reports the interruption itself. Dropping the
//! guard restores the previous disposition.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Scoped SIGINT handler.
#[derive(Debug)]
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sighandler_t,
}

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

impl InterruptGuard {
    /// Install the handler and clear any earlier interruption.
    #[cfg(unix)]
    pub fn install() -> std::io::Result<Self> {
        INTERRUPTED.store(false, Ordering::SeqCst);
        let handler = on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
        // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
        let previous = unsafe { libc::signal(libc::SIGINT, handler) };
        if previous == libc::SIG_ERR {
            return Err(std::io::Error::last_os_error());
        }
        Ok(Self { previous })
    }

    /// Platforms without POSIX signals keep their default Ctrl+C handling.
    #[cfg(not(unix))]
    pub fn install() -> std::io::Result<Self> {
        INTERRUPTED.store(false, Ordering::SeqCst);
        Ok(Self {})
    }

    /// Whether SIGINT arrived since the guard was installed.
    pub fn triggered(&self) -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            // SAFETY: restores the disposition returned by the matching install().
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_guard_is_not_triggered() {
        let guard = InterruptGuard::install().unwrap();
        assert!(!guard.triggered());
    }
}
