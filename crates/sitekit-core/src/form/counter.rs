//! Live remaining-characters counter for the message field

/// Counter state after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub remaining: usize,
    /// True when no characters remain; drives the limit class
    pub at_limit: bool,
}

/// Counts against the textarea's `maxlength`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    max_length: usize,
}

impl CharCounter {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Build from the raw `maxlength` attribute; missing or unparsable means 0
    pub fn from_attribute(attr: Option<&str>) -> Self {
        let max_length = attr
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        Self::new(max_length)
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Remaining allowance for `value`
    ///
    /// Length is counted in UTF-16 code units, the unit `maxlength` uses.
    pub fn update(&self, value: &str) -> CounterState {
        let current = value.encode_utf16().count();
        let remaining = self.max_length.saturating_sub(current);
        CounterState {
            remaining,
            at_limit: remaining == 0,
        }
    }

    /// State for an empty field
    pub fn initial(&self) -> CounterState {
        self.update("")
    }
}
