//! Terminal lifecycle management.
//!
//! Terminal state is restored on:
//! - Normal exit (via Drop of [`TerminalGuard`])
//! - Errors returned from the event loop (same Drop)
//! - Panic (via the hook from [`install_panic_hook`])

use std::io::{self, Write};
use std::panic;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// Switches the terminal into study mode and back.
///
/// - Enables raw mode
/// - Enters the alternate screen
/// - Enables mouse capture and hides the cursor
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Set up the terminal.
    ///
    /// Call [`install_panic_hook`] before this so a panic also restores it.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on Drop undoes whatever was set up
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

/// Restores terminal state.
///
/// This function is idempotent and safe to call multiple times.
pub fn restore_terminal() -> Result<()> {
    // Mouse capture must be released while still in raw mode
    let _ = execute!(io::stdout(), DisableMouseCapture, Show);

    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    io::stdout().flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
