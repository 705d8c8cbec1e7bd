use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

pub const MIN_N_STATES: usize = 1;
pub const MAX_N_STATES: usize = 100;

/// Number of initial states of a parameterized strategy (restarts or beam width),
/// always within `[MIN_N_STATES, MAX_N_STATES]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNStates")]
pub struct NStates {
    value: usize,
    defaulted: bool,
}

/// Unchecked serialized form, clamped on deserialization.
#[derive(Deserialize)]
struct RawNStates {
    value: usize,
    #[serde(default)]
    defaulted: bool,
}

impl From<RawNStates> for NStates {
    fn from(raw: RawNStates) -> Self {
        let clamped = Self::new(raw.value);
        Self {
            defaulted: clamped.defaulted || raw.defaulted,
            ..clamped
        }
    }
}

impl NStates {
    /// Clamps `value` into the accepted range.
    pub fn new(value: usize) -> Self {
        let clamped = value.clamp(MIN_N_STATES, MAX_N_STATES);
        Self {
            value: clamped,
            defaulted: clamped != value,
        }
    }

    /// Interprets free-form user input. Whitespace is ignored.
    /// Out of bounds values are clamped, anything that is not an integer becomes [`MIN_N_STATES`].
    /// Both cases set [`NStates::defaulted`].
    pub fn parse(text: &str) -> Self {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let clamped = |value| Self {
            value,
            defaulted: true,
        };
        match compact.parse::<i64>() {
            Ok(n) if n > MAX_N_STATES as i64 => clamped(MAX_N_STATES),
            Ok(n) if n < MIN_N_STATES as i64 => clamped(MIN_N_STATES),
            Ok(n) => Self {
                value: n as usize,
                defaulted: false,
            },
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => clamped(MAX_N_STATES),
                _ => clamped(MIN_N_STATES),
            },
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Set when the requested value was out of bounds or unparsable
    pub fn defaulted(&self) -> bool {
        self.defaulted
    }

    /// `"(50 initial states)"`, or `"(default: 100 initial states)"` if defaulted.
    pub fn annotation(&self) -> String {
        let default = match self.defaulted {
            true => "default: ",
            false => "",
        };
        format!("({default}{} initial states)", self.value)
    }
}

impl Default for NStates {
    fn default() -> Self {
        Self::new(MIN_N_STATES)
    }
}

impl From<&str> for NStates {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
