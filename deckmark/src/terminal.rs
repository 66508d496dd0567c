use std::io::{self, Write};
use std::panic;

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// Raw mode, alternate screen and mouse capture for as long as this lives.
///
/// Dropping it puts the terminal back, including on early `?` returns and
/// while unwinding from a panic.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure still has to undo raw mode
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Best-effort restore. Safe to call more than once.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = leave(&mut io::stdout());
}

/// Write the sequences that leave the alternate screen and stop mouse reports
fn leave(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Restore the terminal before the panic report is printed, so it stays readable.
pub fn install_panic_hook() {
    let report = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        report(info);
    }));
}
