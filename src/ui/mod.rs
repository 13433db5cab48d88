//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Printing of messages and command output
//! - This module - Interactive prompts and user input handling

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::Result;

pub mod formatter;

pub use formatter::{display_error, display_outcome};

/// Source of answers for interactive questions
pub trait Prompt {
    /// Reads one raw answer line; `None` means end of input.
    fn read_answer(&mut self, question: &str) -> Result<Option<String>>;

    /// Asks a question, falling back to `default` on an empty answer or EOF.
    ///
    /// # Arguments
    /// * `message` - The question, shown as `message [default]: `
    /// * `default` - Value used when the user just presses Enter
    ///
    /// # Returns
    /// * `Ok(Some(answer))` - Trimmed answer or the default
    /// * `Ok(None)` - No answer and no default
    fn ask(&mut self, message: &str, default: Option<&str>) -> Result<Option<String>> {
        let question = match default {
            Some(d) => format!("{} [{}]: ", message, d),
            None => format!("{} ", message),
        };

        let answer = self
            .read_answer(&question)?
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Ok(answer.or_else(|| default.map(str::to_string)))
    }

    /// Yes/no question. Accepts "y" or "yes" (case-insensitive).
    fn confirm(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let options = if default_yes { "n/Y" } else { "N/y" };
        let default = if default_yes { "y" } else { "n" };
        let answer = self
            .ask(&format!("{} ({})", message, options), Some(default))?
            .unwrap_or_default()
            .to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Reads answers from standard input
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_answer(&mut self, question: &str) -> Result<Option<String>> {
        print!("{}", question);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

/// Replays a fixed list of answers; runs dry with EOF
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far, as they would have been printed
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Prompt for ScriptedPrompt {
    fn read_answer(&mut self, question: &str) -> Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}
