use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// What the user typed, after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Blank,
    /// Input ended
    Closed,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn text(&mut self, prompt: &str) -> io::Result<Answer<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Answer::Closed);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Ok(Answer::Blank)
        } else {
            Ok(Answer::Value(trimmed.to_string()))
        }
    }

    /// Re-asks with `hint` until the answer parses. A blank answer is returned
    /// as `Blank` when `allow_blank` is set, otherwise it is re-asked too.
    pub fn number<T: FromStr>(
        &mut self,
        prompt: &str,
        allow_blank: bool,
        hint: &str,
    ) -> io::Result<Answer<T>> {
        loop {
            match self.text(prompt)? {
                Answer::Value(s) => match s.parse() {
                    Ok(n) => return Ok(Answer::Value(n)),
                    Err(_) => writeln!(self.output, "{}", hint)?,
                },
                Answer::Blank if allow_blank => return Ok(Answer::Blank),
                Answer::Blank => writeln!(self.output, "{}", hint)?,
                Answer::Closed => return Ok(Answer::Closed),
            }
        }
    }

    /// Only `y` or `Y` confirms.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(matches!(self.text(prompt)?, Answer::Value(s) if s.eq_ignore_ascii_case("y")))
    }
}
