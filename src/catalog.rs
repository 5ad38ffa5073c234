//! Catalog of historical rotor and reflector wirings.
//!
//! Tables are immutable data. Every lookup hands out a freshly built
//! [`Rotor`] or [`Reflector`] owned by the caller, so no two machines ever
//! share mutable wheel state.

use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wiring::Wiring;

/// Wiring and turnover notch of a named rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notch: char,
}

/// Wiring of a named reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    pub name: &'static str,
    pub wiring: &'static str,
}

/// Rotors I–V of the three-rotor service machine.
pub const ROTORS: [RotorSpec; 5] = [
    RotorSpec {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorSpec {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorSpec {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorSpec {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorSpec {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: 'Z',
    },
];

/// Wide reflectors B and C.
pub const REFLECTORS: [ReflectorSpec; 2] = [
    ReflectorSpec {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorSpec {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Looks up a rotor table by name, ignoring case and surrounding spaces.
pub fn rotor_spec(name: &str) -> Option<&'static RotorSpec> {
    let name = name.trim();
    ROTORS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// Looks up a reflector table by name, ignoring case and surrounding spaces.
pub fn reflector_spec(name: &str) -> Option<&'static ReflectorSpec> {
    let name = name.trim();
    REFLECTORS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// Builds a catalog rotor.
///
/// # Parameters
/// - `name`: Rotor name, `I` to `V`.
/// - `position`: Starting position (reduced modulo 26).
/// - `ring_setting`: Zero-based ring setting (reduced modulo 26).
///
/// # Errors
/// Returns [`EnigmaError::UnknownRotor`] if `name` is not in the catalog.
pub fn rotor(name: &str, position: usize, ring_setting: usize) -> Result<Rotor, EnigmaError> {
    let spec = rotor_spec(name).ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
    Ok(Rotor::new(
        Wiring::new(spec.wiring)?,
        spec.notch,
        position,
        ring_setting,
    ))
}

/// Builds a catalog reflector.
///
/// # Errors
/// Returns [`EnigmaError::UnknownReflector`] if `name` is not in the catalog.
pub fn reflector(name: &str) -> Result<Reflector, EnigmaError> {
    let spec =
        reflector_spec(name).ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))?;
    Reflector::new(spec.wiring)
}
