//! Wiring: a validated permutation of the 26-letter alphabet.
//!
//! Both rotors and reflectors are wired as permutations. The inverse table
//! is computed once at construction so that the backward pass through a
//! rotor is a single lookup.

use std::fmt;
use std::str::FromStr;

use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, letter_to_index, LETTERS};

/// A permutation of the alphabet with its precomputed inverse.
///
/// `forward[i]` is the index of the letter wired to contact `i`;
/// `backward` is the inverse so that `backward[forward[i]] == i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [u8; LETTERS],
    backward: [u8; LETTERS],
}

impl Wiring {
    /// Parses a 26-letter wiring string.
    ///
    /// Lowercase letters are accepted and normalized.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiringLength`] if the string does not hold 26 chars.
    /// - [`EnigmaError::InvalidWiringChar`] for a character outside A-Z.
    /// - [`EnigmaError::DuplicateWiringLetter`] if a letter appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmasim::Wiring;
    ///
    /// let wiring = Wiring::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(wiring.map(0), 4); // A -> E
    /// assert!(Wiring::new("ABC").is_err());
    /// ```
    pub fn new(spec: &str) -> Result<Self, EnigmaError> {
        let count = spec.chars().count();
        if count != LETTERS {
            return Err(EnigmaError::InvalidWiringLength(count));
        }

        let mut forward = [0u8; LETTERS];
        let mut backward = [0u8; LETTERS];
        let mut seen = [false; LETTERS];
        for (i, c) in spec.chars().enumerate() {
            let target = letter_to_index(c).ok_or(EnigmaError::InvalidWiringChar(c))?;
            if seen[target] {
                return Err(EnigmaError::DuplicateWiringLetter(c.to_ascii_uppercase()));
            }
            seen[target] = true;
            forward[i] = target as u8;
            backward[target] = i as u8;
        }

        Ok(Wiring { forward, backward })
    }

    /// The identity permutation (`A->A`, `B->B`, ...).
    pub fn identity() -> Self {
        let mut table = [0u8; LETTERS];
        for (i, item) in table.iter_mut().enumerate() {
            *item = i as u8;
        }
        Wiring {
            forward: table,
            backward: table,
        }
    }

    /// Maps contact `index` through the wiring.
    pub fn map(&self, index: usize) -> usize {
        self.forward[index] as usize
    }

    /// Maps contact `index` through the inverse wiring.
    pub fn inverse(&self, index: usize) -> usize {
        self.backward[index] as usize
    }

    /// Returns true if applying the wiring twice yields the identity.
    pub fn is_involution(&self) -> bool {
        (0..LETTERS).all(|i| self.map(self.map(i)) == i)
    }

    /// Letters that are wired to themselves.
    pub fn fixed_points(&self) -> Vec<char> {
        (0..LETTERS)
            .filter(|&i| self.map(i) == i)
            .map(index_to_letter)
            .collect()
    }
}

impl FromStr for Wiring {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wiring::new(s)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &target in self.forward.iter() {
            write!(f, "{}", index_to_letter(target as usize))?;
        }
        Ok(())
    }
}
