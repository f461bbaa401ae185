use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Interactive confirmation capability. The batch runner takes this as a trait
/// object so tests can script the answer instead of reading real stdin.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Blocking confirmation that reads one line from standard input.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(is_affirmative(&line))
    }
}

/// Only the literal token "yes" counts, case-insensitively, after trimming
/// surrounding whitespace. Everything else cancels the run.
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}
