//! Rotor cipher machine simulator.
//!
//! Simulates the signal path of the three-rotor electromechanical cipher
//! machine: a plugboard, a chain of rotating wired rotors, and a reflector.
//! The composition is reciprocal, so the same settings both encrypt and
//! decrypt. Rotor stepping reproduces the historical double-step of the
//! middle rotor.
//!
//! This is a historical simulation. It offers no security.
//!
//! # Architecture
//!
//! ```text
//! Wiring     (validated 26-letter permutation + inverse)
//!     ↓ owned by
//! Rotor      (wiring + notch + position + ring setting)
//!     ↓ three or more, fast → slow
//! Machine    (stepping + plugboard → rotors → reflector → rotors → plugboard)
//!     ↑ built from
//! MachineConfig (serde settings: catalog names, window letters, rings 1..=26)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with identical initial settings:
//!
//! ```
//! use enigmasim::{catalog, Machine, Plugboard};
//!
//! fn build() -> Machine {
//!     let rotors = vec![
//!         catalog::rotor("I", 0, 0).unwrap(),
//!         catalog::rotor("II", 0, 0).unwrap(),
//!         catalog::rotor("III", 0, 0).unwrap(),
//!     ];
//!     Machine::new(rotors, catalog::reflector("B").unwrap(), Plugboard::new()).unwrap()
//! }
//!
//! let ciphertext = build().transform("AAAAA");
//! assert_eq!(ciphertext, "FTZMG");
//! assert_eq!(build().transform(&ciphertext), "AAAAA");
//! ```
//!
//! Build a machine from a settings document:
//!
//! ```
//! use enigmasim::MachineConfig;
//!
//! let config = MachineConfig::from_json(r#"{
//!     "rotors": [
//!         {"name": "III", "position": "A", "ring": 2},
//!         {"name": "II", "ring": 2},
//!         {"name": "I", "ring": 2}
//!     ],
//!     "reflector": "B",
//!     "plugboard": ""
//! }"#).unwrap();
//!
//! let mut machine = config.build().unwrap();
//! assert_eq!(machine.transform("aaaaa"), "EWTYX");
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod utils;

mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod wiring;

pub use config::{MachineConfig, Position, RotorConfig, RotorSettings};
pub use error::EnigmaError;
pub use machine::{Machine, MIN_ROTORS};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::Wiring;
