//! Line-based prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::{OnboardError, OnboardResult};
use crate::models::Choice;

/// Reads answers from `input`, writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: impl AsRef<str>) -> OnboardResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Write a heading underlined with `=`
    pub fn heading(&mut self, text: &str) -> OnboardResult<()> {
        self.say("")?;
        self.say(text)?;
        self.say("=".repeat(text.chars().count()))?;
        self.say("")
    }

    /// Ask for a line of input, trimmed. Ends with [`OnboardError::Cancelled`]
    /// when the input is closed.
    pub fn ask(&mut self, prompt: &str) -> OnboardResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(OnboardError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; blank takes `default`
    pub fn ask_yes_no(&mut self, prompt: &str, default: bool) -> OnboardResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.ask(&format!("{} {}: ", prompt, hint))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer yes or no.")?,
            }
        }
    }

    /// Ask for an optional number; blank keeps `current`
    pub fn ask_number(&mut self, label: &str, current: &str) -> OnboardResult<String> {
        let prompt = with_current(label, current);
        loop {
            let answer = self.ask(&prompt)?;
            if answer.is_empty() {
                return Ok(current.to_string());
            }
            if is_non_negative_number(&answer) {
                return Ok(answer);
            }
            self.say("Please enter a number, e.g. 2500 or 3.5.")?;
        }
    }

    /// Ask for one option of `C`, listed with 1-based numbers.
    /// Blank keeps `current`.
    pub fn ask_choice<C: Choice>(
        &mut self,
        prompt: &str,
        current: Option<C>,
    ) -> OnboardResult<Option<C>> {
        self.say(prompt)?;
        for (i, option) in C::OPTIONS.iter().enumerate() {
            let marker = if current == Some(*option) { "*" } else { " " };
            self.say(format!(" {}{}. {}", marker, i + 1, option.label()))?;
        }
        loop {
            let answer = self.ask("Select an option (blank to skip): ")?;
            if answer.is_empty() {
                return Ok(current);
            }
            let choice = answer
                .parse::<usize>()
                .ok()
                .map_or_else(|| C::from_key(&answer), C::from_number);
            match choice {
                Some(choice) => return Ok(Some(choice)),
                None => self.say(format!(
                    "Enter 1-{} or one of: {}",
                    C::OPTIONS.len(),
                    C::valid_keys()
                ))?,
            }
        }
    }

    /// The output, for collaborators that announce things themselves
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// `label: ` or `label [current]: `
pub fn with_current(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    }
}

/// Whether `s` reads as a number that is not negative
pub fn is_non_negative_number(s: &str) -> bool {
    s.trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n >= 0.0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportFrequency;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = prompter("  hello \n");
        assert_eq!(p.ask("> ").unwrap(), "hello");
        assert!(matches!(p.ask("> "), Err(OnboardError::Cancelled)));
    }

    #[test]
    fn test_yes_no_reasks_on_garbage() {
        let mut p = prompter("maybe\ny\n\n");
        assert!(p.ask_yes_no("Solar?", false).unwrap());
        assert!(!p.ask_yes_no("Battery?", false).unwrap());
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Please answer yes or no."));
    }

    #[test]
    fn test_number_rejects_text() {
        let mut p = prompter("lots\n-4\n3.5\n\n");
        assert_eq!(p.ask_number("kW", "").unwrap(), "3.5");
        assert_eq!(p.ask_number("kW", "3.5").unwrap(), "3.5");
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("kW [3.5]: "));
    }

    #[test]
    fn test_choice_by_number_and_key() {
        let mut p = prompter("9\nweekly\n");
        let picked = p.ask_choice::<ReportFrequency>("Reports", None).unwrap();
        assert_eq!(picked, Some(ReportFrequency::Weekly));

        let mut p = prompter("3\n");
        let picked = p.ask_choice::<ReportFrequency>("Reports", None).unwrap();
        assert_eq!(picked, Some(ReportFrequency::Monthly));

        let mut p = prompter("\n");
        let kept = p
            .ask_choice("Reports", Some(ReportFrequency::Daily))
            .unwrap();
        assert_eq!(kept, Some(ReportFrequency::Daily));
    }
}
