//! Pure formatting functions for UI output.
//!
//! Everything a command wants the user to see is collected in an
//! [`Outcome`] first and printed here afterwards.

use console::style;

use crate::output::{Outcome, Stream};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a finished command's output, each line to its own stream.
///
/// Lines are printed verbatim so scripts can parse them.
pub fn display_outcome(outcome: &Outcome) {
    for (stream, message) in outcome.lines() {
        match stream {
            Stream::Stdout => println!("{}", message),
            Stream::Stderr => eprintln!("{}", message),
        }
    }
}
