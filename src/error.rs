//! Error types for the enigmasim library.

use thiserror::Error;

/// Errors produced while configuring a machine.
///
/// Every variant is a configuration error: it is raised before any text
/// is processed. Non-letter characters in a message are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Wiring string does not have exactly 26 letters.
    #[error("Wiring must contain exactly 26 letters, found {0}")]
    InvalidWiringLength(usize),
    /// Wiring string contains a character outside A-Z.
    #[error("Wiring contains non-alphabetic character '{0}'")]
    InvalidWiringChar(char),
    /// Wiring string repeats a letter, so it is not a permutation.
    #[error("Wiring repeats letter '{0}'")]
    DuplicateWiringLetter(char),
    /// Notch is not an alphabetic letter.
    #[error("Notch '{0}' is not a letter")]
    InvalidNotch(char),
    /// Rotor chain is shorter than the stepping mechanism needs.
    #[error("Machine requires at least {required} rotors, got {found}")]
    TooFewRotors { required: usize, found: usize },
    /// Plugboard token is not a pair of two distinct letters.
    #[error("Plugboard token '{0}' is not a pair of two distinct letters")]
    InvalidPlugboardPair(String),
    /// Plugboard letter used by more than one pair.
    #[error("Plugboard letter '{0}' appears in more than one pair")]
    DuplicatePlugboardLetter(char),
    /// Rotor name not present in the catalog.
    #[error("Unknown rotor '{0}'")]
    UnknownRotor(String),
    /// Reflector name not present in the catalog.
    #[error("Unknown reflector '{0}'")]
    UnknownReflector(String),
    /// Same catalog rotor requested for more than one slot.
    #[error("Rotor '{0}' is used more than once")]
    DuplicateRotor(String),
    /// Starting position is neither a letter nor an index in 0..=25.
    #[error("Invalid rotor position '{0}'")]
    InvalidPosition(String),
    /// Ring setting outside the displayed range 1..=26.
    #[error("Ring setting {0} is outside the valid range 1..=26")]
    RingSettingOutOfRange(u8),
    /// Configuration document could not be parsed or serialized.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EnigmaError {
    fn from(err: serde_json::Error) -> Self {
        EnigmaError::Config(err.to_string())
    }
}
