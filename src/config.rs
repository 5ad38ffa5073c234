//! Machine settings as a serializable document.
//!
//! Settings are expressed the way an operator reads them off the key
//! sheet: rotor names, window letters, ring settings counted from 1, and
//! plugboard pairs. `build` validates everything and produces a
//! [`Machine`] in its initial state.
//!
//! ```json
//! {
//!   "rotors": [
//!     { "name": "III", "position": "Q", "ring": 1 },
//!     "II",
//!     { "wiring": "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "notch": "Q", "position": 4 }
//!   ],
//!   "reflector": "B",
//!   "plugboard": "AB CD"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{letter_to_index, LETTERS};
use crate::wiring::Wiring;

/// Lowest ring setting shown on the letter ring.
const RING_MIN: u8 = 1;

/// Highest ring setting shown on the letter ring.
const RING_MAX: u8 = 26;

fn default_ring() -> u8 {
    RING_MIN
}

fn default_reflector() -> String {
    "B".to_string()
}

/// Starting position: a window letter or a zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Index(u8),
    Letter(char),
}

impl Default for Position {
    fn default() -> Self {
        Position::Index(0)
    }
}

impl Position {
    /// Resolves to an index in `0..26`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPosition`] for indices above 25 or
    /// non-letter characters.
    pub fn resolve(&self) -> Result<usize, EnigmaError> {
        match *self {
            Position::Index(i) if (i as usize) < LETTERS => Ok(i as usize),
            Position::Index(i) => Err(EnigmaError::InvalidPosition(i.to_string())),
            Position::Letter(c) => {
                letter_to_index(c).ok_or_else(|| EnigmaError::InvalidPosition(c.to_string()))
            }
        }
    }
}

/// Full settings of one rotor slot.
///
/// Either `name` (a catalog rotor) or both `wiring` and `notch` (a custom
/// rotor) must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notch: Option<char>,
    #[serde(default)]
    pub position: Position,
    #[serde(default = "default_ring")]
    pub ring: u8,
}

/// A rotor slot: either a bare catalog name or full settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RotorConfig {
    Named(String),
    Detailed(RotorSettings),
}

impl RotorConfig {
    /// Catalog name, if this slot refers to one.
    fn catalog_name(&self) -> Option<&str> {
        match self {
            RotorConfig::Named(name) => Some(name),
            RotorConfig::Detailed(settings) => settings.name.as_deref(),
        }
    }

    /// Builds the rotor for this slot.
    fn build(&self) -> Result<Rotor, EnigmaError> {
        match self {
            RotorConfig::Named(name) => catalog::rotor(name, 0, 0),
            RotorConfig::Detailed(settings) => {
                let position = settings.position.resolve()?;
                if !(RING_MIN..=RING_MAX).contains(&settings.ring) {
                    return Err(EnigmaError::RingSettingOutOfRange(settings.ring));
                }
                let ring = (settings.ring - RING_MIN) as usize;

                match (&settings.name, &settings.wiring, settings.notch) {
                    (Some(name), None, None) => catalog::rotor(name, position, ring),
                    (None, Some(wiring), Some(notch)) => {
                        if !notch.is_ascii_alphabetic() {
                            return Err(EnigmaError::InvalidNotch(notch));
                        }
                        Ok(Rotor::new(Wiring::new(wiring)?, notch, position, ring))
                    }
                    _ => Err(EnigmaError::Config(
                        "rotor needs either a name or both wiring and notch".to_string(),
                    )),
                }
            }
        }
    }
}

/// Complete machine settings. Rotors are listed fast → slow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub rotors: Vec<RotorConfig>,
    /// Catalog name or a 26-letter wiring.
    #[serde(default = "default_reflector")]
    pub reflector: String,
    #[serde(default)]
    pub plugboard: String,
}

impl MachineConfig {
    /// Parses settings from JSON.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if the document is malformed. Value
    /// validation happens in [`build`](Self::build).
    pub fn from_json(json: &str) -> Result<Self, EnigmaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EnigmaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the settings and assembles a machine.
    ///
    /// # Errors
    /// Any configuration error: unknown or repeated catalog rotor, bad
    /// position or ring, invalid wiring, reflector or plugboard, or too
    /// few rotors.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let mut used: Vec<&'static str> = Vec::with_capacity(self.rotors.len());
        let mut rotors = Vec::with_capacity(self.rotors.len());
        for slot in self.rotors.iter() {
            if let Some(name) = slot.catalog_name() {
                let spec = catalog::rotor_spec(name)
                    .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
                if used.contains(&spec.name) {
                    return Err(EnigmaError::DuplicateRotor(spec.name.to_string()));
                }
                used.push(spec.name);
            }
            rotors.push(slot.build()?);
        }

        let reflector = self.build_reflector()?;
        let plugboard = Plugboard::from_pairs(&self.plugboard)?;
        Machine::new(rotors, reflector, plugboard)
    }

    fn build_reflector(&self) -> Result<Reflector, EnigmaError> {
        if catalog::reflector_spec(&self.reflector).is_some() {
            return catalog::reflector(&self.reflector);
        }
        if self.reflector.trim().chars().count() == LETTERS {
            return Reflector::new(self.reflector.trim());
        }
        Err(EnigmaError::UnknownReflector(self.reflector.clone()))
    }
}
