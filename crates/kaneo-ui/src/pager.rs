//! Pager support for long listings.
//!
//! Pipes content through `$KN_PAGER`, `$PAGER` or `less` when it would
//! scroll past the terminal height.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::terminal::{is_tty, terminal_height};

/// Returns `true` if `content` is taller than the terminal.
///
/// Always `false` with `KN_NO_PAGER` set or when stdout is not a TTY.
pub fn should_page(content: &str) -> bool {
    if env::var_os("KN_NO_PAGER").is_some() || !is_tty() {
        return false;
    }
    let height = terminal_height();
    // Leave one line for the shell prompt.
    height > 0 && content.lines().count() > height.saturating_sub(1)
}

/// Prints `content`, through a pager if it does not fit on screen.
pub fn page(content: &str) {
    if !should_page(content) {
        print!("{}", content);
        return;
    }

    let pager = pager_command();
    let mut parts = pager.split_whitespace();
    let Some(program) = parts.next() else {
        print!("{}", content);
        return;
    };

    let mut cmd = Command::new(program);
    cmd.args(parts).stdin(Stdio::piped());
    if env::var_os("LESS").is_none() {
        cmd.env("LESS", "-RFX");
    }

    match cmd.spawn() {
        Ok(mut child) => {
            if let Some(mut stdin) = child.stdin.take() {
                // The user may quit the pager early.
                let _ = stdin.write_all(content.as_bytes());
            }
            let _ = child.wait();
        }
        Err(_) => print!("{}", content),
    }
}

fn pager_command() -> String {
    ["KN_PAGER", "PAGER"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "less".to_string())
}
