use anyhow::{anyhow, Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Label printed in front of the typed value.
pub(crate) const VOLUME_PROMPT: &str = "Volume: ";
/// Enough digits for "100"; longer input can never be a valid level.
const MAX_DIGITS: usize = 3;

/// Input state for the "set volume" popup.
#[derive(Default, Clone)]
pub(crate) struct VolumeForm {
    pub(crate) input: String,
    pub(crate) error: Option<String>,
}

impl VolumeForm {
    /// Seed the form with the level currently in effect.
    pub(crate) fn with_volume(volume: u8) -> Self {
        Self {
            input: volume.to_string(),
            error: None,
        }
    }

    /// Append a digit. Anything else, or a fourth digit, is ignored.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_ascii_digit() && self.input.len() < MAX_DIGITS {
            self.input.push(ch);
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.input.pop();
    }

    /// Turn the typed text into a number. Range checking is left to the
    /// volume control itself.
    pub(crate) fn parse_input(&self) -> Result<i64> {
        let raw = self.input.trim();
        if raw.is_empty() {
            return Err(anyhow!("Volume is required."));
        }
        raw.parse::<i64>()
            .context("Volume must be a whole number.")
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let (display, style) = if self.input.is_empty() {
            ("<0-100>".to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.input.clone(), Style::default().fg(Color::Yellow))
        };
        Line::from(vec![Span::raw(VOLUME_PROMPT), Span::styled(display, style)])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.input.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_digits_are_accepted() {
        let mut form = VolumeForm::default();
        assert!(form.push_char('4'));
        assert!(!form.push_char('x'));
        assert!(!form.push_char('-'));
        assert!(form.push_char('2'));
        assert_eq!(form.input, "42");
        form.backspace();
        assert_eq!(form.parse_input().unwrap(), 4);
    }

    #[test]
    fn input_stops_at_three_digits() {
        let mut form = VolumeForm::default();
        for ch in "1000000".chars() {
            form.push_char(ch);
        }
        assert_eq!(form.input, "100");
        assert_eq!(form.value_len(), 3);
        assert!(!form.push_char('5'));
    }

    #[test]
    fn empty_input_is_an_error() {
        let form = VolumeForm::default();
        assert_eq!(form.parse_input().unwrap_err().to_string(), "Volume is required.");
    }

    #[test]
    fn large_numbers_parse_and_are_left_for_range_checks() {
        let form = VolumeForm {
            input: "250".to_string(),
            error: None,
        };
        assert_eq!(form.parse_input().unwrap(), 250);
    }
}
