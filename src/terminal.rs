//! Mounting and unmounting the quiz on the user's terminal.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen that is handed back when dropped.
pub struct MountedTerminal {
    terminal: QuizTerminal,
}

impl MountedTerminal {
    pub fn mount() -> io::Result<Self> {
        install_panic_hook();
        let terminal = mount_with(enable_raw_mode, enter_screen, || {
            let _ = unmount();
        })?;
        debug!("terminal mounted");
        Ok(Self { terminal })
    }
}

fn enter_screen() -> io::Result<QuizTerminal> {
    io::stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

// once raw mode is on, any later failure has to undo it
fn mount_with<T>(
    enable_raw: impl FnOnce() -> io::Result<()>,
    enter: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    enable_raw()?;
    enter().inspect_err(|_| undo())
}

impl Deref for MountedTerminal {
    type Target = QuizTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for MountedTerminal {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for MountedTerminal {
    fn drop(&mut self) {
        match unmount() {
            Ok(()) => debug!("terminal restored"),
            Err(err) => warn!(error = %err, "failed to restore terminal"),
        }
    }
}

fn unmount() -> io::Result<()> {
    unmount_with(disable_raw_mode, || {
        io::stdout().execute(LeaveAlternateScreen)?;
        Ok(())
    })
}

// both steps always run; the first error is reported
fn unmount_with(
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
    leave_screen: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = leave_raw_mode();
    let screen = leave_screen();
    raw.and(screen)
}

// leave the alternate screen before the panic message is printed
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = unmount();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_mount_undoes_raw_mode_when_entering_screen_fails() {
        let undone = Cell::new(false);
        let result: io::Result<()> = mount_with(
            || Ok(()),
            || Err(io::Error::other("alternate screen")),
            || undone.set(true),
        );

        assert!(undone.get());
        assert_eq!(result.unwrap_err().to_string(), "alternate screen");
    }

    #[test]
    fn test_mount_stops_if_raw_mode_fails() {
        let entered = Cell::new(false);
        let undone = Cell::new(false);
        let result = mount_with(
            || Err(io::Error::other("raw mode")),
            || {
                entered.set(true);
                Ok(())
            },
            || undone.set(true),
        );

        assert!(result.is_err());
        assert!(!entered.get());
        assert!(!undone.get());

        let result = mount_with(|| Ok(()), || Ok(7), || undone.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }

    #[test]
    fn test_unmount_runs_every_step_even_after_a_failure() {
        let screen_left = Cell::new(false);
        let result = unmount_with(
            || Err(io::Error::other("raw mode")),
            || {
                screen_left.set(true);
                Ok(())
            },
        );

        assert!(screen_left.get());
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn test_unmount_reports_screen_failure() {
        let result = unmount_with(|| Ok(()), || Err(io::Error::other("screen")));
        assert_eq!(result.unwrap_err().to_string(), "screen");
        assert!(unmount_with(|| Ok(()), || Ok(())).is_ok());
    }
}
