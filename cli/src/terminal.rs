//! Dialogs over stdin/stderr.

use std::io::{self, BufRead, Write};

use pizza_core::Interaction;

pub struct Terminal {
    /// Answer every confirmation with yes without asking.
    pub assume_yes: bool,
}

impl Interaction for Terminal {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
