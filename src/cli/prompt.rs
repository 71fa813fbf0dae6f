//! The interactive half of the ordering predicate: present two items, read
//! an answer, repeat until the answer is valid.

use crate::errors::{SortError, SortResult};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Which of the two presented items was picked as higher priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    First,
    Second,
}

/// Asks a human to pick the more important of two items, reading answers
/// line by line from `input`. Any `BufRead`/`Write` pair works, so tests
/// drive it with in-memory buffers.
pub struct PairPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PairPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PairPrompt { input, output }
    }

    /// Present `a` and `b` and block until one of them is chosen.
    /// Invalid answers re-ask; a closed input stream is an error.
    pub fn choose(&mut self, a: &str, b: &str) -> SortResult<Choice> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{} {}", "a)".cyan().bold(), a)?;
            writeln!(self.output, "{} {}", "b)".cyan().bold(), b)?;
            write!(self.output, "Which is higher priority? [a, b] > ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SortError::PromptClosed);
            }
            match line.trim().to_lowercase().as_str() {
                "a" => return Ok(Choice::First),
                "b" => return Ok(Choice::Second),
                _ => writeln!(self.output, "Invalid choice, must be \"a\" or \"b\", try again")?,
            }
        }
    }

    /// Print `message` and block until the next line (usually just enter).
    pub fn pause(&mut self, message: &str) -> SortResult<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SortError::PromptClosed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn choose(answers: &str) -> (SortResult<Choice>, String) {
        let mut output = Vec::new();
        let result = {
            let mut prompt = PairPrompt::new(Cursor::new(answers), &mut output);
            prompt.choose("apples", "oranges")
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_either_case() {
        assert_eq!(choose("a\n").0.unwrap(), Choice::First);
        assert_eq!(choose("B\n").0.unwrap(), Choice::Second);
        assert_eq!(choose("  b \n").0.unwrap(), Choice::Second);
    }

    #[test]
    fn reasks_on_invalid_answer() {
        let (result, output) = choose("yes\n\na\n");
        assert_eq!(result.unwrap(), Choice::First);
        assert_eq!(output.matches("Which is higher priority?").count(), 3);
        assert_eq!(output.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = choose("nope\n");
        match result {
            Err(SortError::PromptClosed) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn pause_waits_for_a_line() {
        let mut output = Vec::new();
        let mut prompt = PairPrompt::new(Cursor::new("\n"), &mut output);
        prompt.pause("hit enter").unwrap();
        assert!(String::from_utf8(output).unwrap().contains("hit enter"));
    }
}
