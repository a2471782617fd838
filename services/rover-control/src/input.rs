//! Keyboard input for the command menu

use std::io::BufRead;

use rover_core::Command;
use tokio::sync::mpsc;

/// One line typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Press(Command),
    Refresh,
    Quit,
}

/// Accepts a 1-based button number, an exact command label, `r` or `q`.
/// Anything else is `None`.
pub fn parse_selection(line: &str) -> Option<Selection> {
    let line = line.trim();
    match line {
        "" => None,
        "q" | "quit" => Some(Selection::Quit),
        "r" | "refresh" => Some(Selection::Refresh),
        _ => {
            if let Ok(number) = line.parse::<usize>() {
                return number
                    .checked_sub(1)
                    .and_then(|index| Command::ALL.get(index))
                    .map(|command| Selection::Press(*command));
            }
            line.parse().ok().map(Selection::Press)
        }
    }
}

/// Read stdin lines on a plain thread so a pending read never holds up
/// runtime shutdown
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    rx
}
