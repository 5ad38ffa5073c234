//! Plugboard: letter-swap pairs applied before and after the rotor path.

use std::fmt;
use std::str::FromStr;

use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, letter_to_index, LETTERS};

/// A partial involution built from unordered letter pairs.
///
/// Letters not named by any pair map to themselves. A letter may belong
/// to at most one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; LETTERS],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Creates an empty plugboard (every letter maps to itself).
    pub fn new() -> Self {
        let mut mapping = [0u8; LETTERS];
        for (i, item) in mapping.iter_mut().enumerate() {
            *item = i as u8;
        }
        Plugboard { mapping }
    }

    /// Parses whitespace-separated two-letter tokens such as `"AB CD EF"`.
    ///
    /// An empty or blank string yields an empty plugboard.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidPlugboardPair`] for a token that is not two
    ///   distinct letters.
    /// - [`EnigmaError::DuplicatePlugboardLetter`] if a letter appears in
    ///   more than one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmasim::Plugboard;
    ///
    /// let board = Plugboard::from_pairs("AB cd").unwrap();
    /// assert_eq!(board.swap(1), 0);
    /// assert_eq!(board.swap(3), 2);
    /// assert_eq!(board.swap(4), 4);
    ///
    /// assert!(Plugboard::from_pairs("AB BC").is_err());
    /// ```
    pub fn from_pairs(pairs: &str) -> Result<Self, EnigmaError> {
        let mut board = Plugboard::new();
        for token in pairs.split_whitespace() {
            let letters: Vec<usize> = token.chars().filter_map(letter_to_index).collect();
            if token.chars().count() != 2 || letters.len() != 2 || letters[0] == letters[1] {
                return Err(EnigmaError::InvalidPlugboardPair(token.to_string()));
            }
            board.connect(letters[0], letters[1])?;
        }
        Ok(board)
    }

    /// Connects two letters by index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicatePlugboardLetter`] if either letter is
    /// already plugged.
    fn connect(&mut self, a: usize, b: usize) -> Result<(), EnigmaError> {
        for letter in [a, b] {
            if self.mapping[letter] as usize != letter {
                return Err(EnigmaError::DuplicatePlugboardLetter(index_to_letter(letter)));
            }
        }
        self.mapping[a] = b as u8;
        self.mapping[b] = a as u8;
        Ok(())
    }

    /// Substitutes contact `index`; unpaired contacts pass through.
    pub fn swap(&self, index: usize) -> usize {
        self.mapping[index] as usize
    }

    /// Number of connected pairs.
    pub fn num_pairs(&self) -> usize {
        self.mapping
            .iter()
            .enumerate()
            .filter(|&(i, &m)| (m as usize) > i)
            .count()
    }
}

impl FromStr for Plugboard {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugboard::from_pairs(s)
    }
}

impl fmt::Display for Plugboard {
    /// Writes the canonical pair list, lower letter first, e.g. `"AB CD"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &m) in self.mapping.iter().enumerate() {
            let m = m as usize;
            if m > i {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}{}", index_to_letter(i), index_to_letter(m))?;
                first = false;
            }
        }
        Ok(())
    }
}
