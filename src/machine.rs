//! Machine: rotor chain, reflector and plugboard composed into a
//! reciprocal cipher.
//!
//! Every letter first advances the rotors, then travels
//! plugboard → rotors (fast to slow) → reflector → rotors (slow to fast)
//! → plugboard.

use tracing::{debug, trace};

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{index_to_letter, letter_to_index};

/// Rotors taking part in stepping: fast, middle, slow.
pub const MIN_ROTORS: usize = 3;

const FAST: usize = 0;
const MIDDLE: usize = 1;
const SLOW: usize = 2;

/// Rotor cipher machine.
///
/// # Architecture
///
/// Rotors are held fast → slow. The first three form the stepping
/// mechanism. Any further rotors sit between the slow rotor and the
/// reflector and never turn, like the fourth wheel of the naval
/// four-rotor machine.
///
/// The machine is stateful: each letter processed moves at least the fast
/// rotor. Encryption and decryption are the same operation, so decrypting
/// needs a machine with the same initial settings, either freshly built or
/// restored with [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Assembles a machine from rotors listed fast → slow.
    ///
    /// # Errors
    /// Returns [`EnigmaError::TooFewRotors`] if fewer than three rotors are
    /// given.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmasim::{catalog, Machine, Plugboard};
    ///
    /// let rotors = vec![
    ///     catalog::rotor("III", 0, 0).unwrap(),
    ///     catalog::rotor("II", 0, 0).unwrap(),
    ///     catalog::rotor("I", 0, 0).unwrap(),
    /// ];
    /// let reflector = catalog::reflector("B").unwrap();
    /// let mut machine = Machine::new(rotors, reflector, Plugboard::new()).unwrap();
    /// assert_eq!(machine.transform("AAAAA"), "BDZGO");
    /// ```
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        if rotors.len() < MIN_ROTORS {
            return Err(EnigmaError::TooFewRotors {
                required: MIN_ROTORS,
                found: rotors.len(),
            });
        }

        let machine = Machine {
            rotors,
            reflector,
            plugboard,
        };
        debug!(
            rotors = machine.rotors.len(),
            window = %machine.window(),
            plugboard = %machine.plugboard,
            "machine assembled"
        );
        Ok(machine)
    }

    /// Encrypts or decrypts a single character.
    ///
    /// Non-letters are returned unchanged and do not move the rotors.
    /// Letters of either case are accepted; the result is uppercase.
    pub fn process_character(&mut self, input: char) -> char {
        let Some(index) = letter_to_index(input) else {
            return input;
        };

        self.step();

        let mut signal = self.plugboard.swap(index);
        for rotor in self.rotors.iter() {
            signal = rotor.encrypt_forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.encrypt_backward(signal);
        }
        signal = self.plugboard.swap(signal);

        index_to_letter(signal)
    }

    /// Encrypts or decrypts a whole message.
    ///
    /// Each character is processed in order; letters come out uppercase.
    /// Rotor state carries over from one character to the next and from one
    /// call to the next. Characters outside A-Z/a-z, including non-ASCII
    /// letters, are copied unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmasim::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{"rotors": ["III", "II", "I"], "reflector": "B"}"#,
    /// ).unwrap();
    ///
    /// let mut encoder = config.build().unwrap();
    /// let ciphertext = encoder.transform("Hello, World!");
    /// assert_eq!(ciphertext, "ILBDA, AMTAZ!");
    ///
    /// let mut decoder = config.build().unwrap();
    /// assert_eq!(decoder.transform(&ciphertext), "HELLO, WORLD!");
    /// ```
    pub fn transform(&mut self, text: &str) -> String {
        text.chars().map(|c| self.process_character(c)).collect()
    }

    /// Returns every rotor to its initial position.
    ///
    /// After reset, the machine produces the same output as when it was
    /// first assembled.
    pub fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.reset();
        }
        debug!(window = %self.window(), "machine reset");
    }

    /// Current rotor positions, fast → slow.
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Window letters, fast → slow.
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window_letter).collect()
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    // ──────── Stepping ────────

    /// Advances the rotors for one keystroke.
    ///
    /// Both notch tests read the positions as they stood before this
    /// keystroke. A middle rotor at its notch moves itself and the slow
    /// rotor (the double step); otherwise a fast rotor at its notch moves
    /// the middle rotor. The fast rotor always moves.
    fn step(&mut self) {
        let middle_engaged = self.rotors[MIDDLE].is_at_notch();
        let fast_engaged = self.rotors[FAST].is_at_notch();

        if middle_engaged {
            self.rotors[MIDDLE].step();
            self.rotors[SLOW].step();
        } else if fast_engaged {
            self.rotors[MIDDLE].step();
        }
        self.rotors[FAST].step();

        trace!(
            middle_engaged,
            fast_engaged,
            window = %self.window(),
            "rotors stepped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::wiring::Wiring;

    fn machine(names: [&str; 3], positions: [usize; 3], plugboard: &str) -> Machine {
        let rotors = names
            .iter()
            .zip(positions.iter())
            .map(|(name, &pos)| catalog::rotor(name, pos, 0).unwrap())
            .collect();
        Machine::new(
            rotors,
            catalog::reflector("B").unwrap(),
            Plugboard::from_pairs(plugboard).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_two_rotors() {
        let rotors = vec![
            catalog::rotor("I", 0, 0).unwrap(),
            catalog::rotor("II", 0, 0).unwrap(),
        ];
        let result = Machine::new(rotors, catalog::reflector("B").unwrap(), Plugboard::new());
        assert_eq!(
            result,
            Err(EnigmaError::TooFewRotors {
                required: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_golden_aaaaa() {
        let mut m = machine(["I", "II", "III"], [0, 0, 0], "");
        assert_eq!(m.transform("AAAAA"), "FTZMG");
    }

    #[test]
    fn test_historical_bdzgo() {
        let mut m = machine(["III", "II", "I"], [0, 0, 0], "");
        assert_eq!(m.transform("AAAAA"), "BDZGO");
    }

    #[test]
    fn test_non_letters_do_not_step() {
        let mut m = machine(["III", "II", "I"], [0, 0, 0], "");
        assert_eq!(m.process_character('7'), '7');
        assert_eq!(m.process_character(' '), ' ');
        assert_eq!(m.process_character('é'), 'é');
        assert_eq!(m.positions(), vec![0, 0, 0]);
    }

    #[test]
    fn test_lowercase_input_uppercase_output() {
        let mut upper = machine(["III", "II", "I"], [0, 0, 0], "");
        let mut lower = machine(["III", "II", "I"], [0, 0, 0], "");
        assert_eq!(upper.transform("HELLO"), lower.transform("hello"));
    }

    #[test]
    fn test_non_ascii_passes_through_without_stepping() {
        let mut m = machine(["III", "II", "I"], [0, 0, 0], "");
        assert_eq!(m.transform("ß é"), "ß é");
        assert_eq!(m.positions(), vec![0, 0, 0]);
    }

    #[test]
    fn test_letter_never_encrypts_to_itself() {
        let mut m = machine(["I", "II", "III"], [0, 0, 0], "AB CD");
        for _ in 0..200 {
            assert_ne!(m.process_character('A'), 'A');
        }
    }

    #[test]
    fn test_fast_notch_steps_middle_once() {
        // Rotor I (notch Q) starts at M: it sits at Q at the start of keystroke 5.
        let mut m = machine(["I", "II", "III"], [12, 0, 0], "");
        let mut middle = Vec::new();
        for _ in 0..6 {
            m.process_character('A');
            middle.push(m.positions()[1]);
        }
        assert_eq!(middle, vec![0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_double_step_sequence() {
        // Fast III at U, middle II at D, slow I at A: ADU -> ADV -> AEW -> BFX.
        let mut m = machine(["III", "II", "I"], [20, 3, 0], "");
        let mut windows = Vec::new();
        for _ in 0..3 {
            m.process_character('A');
            windows.push(m.window());
        }
        assert_eq!(windows, vec!["VDA", "WEA", "XFB"]);
    }

    #[test]
    fn test_middle_at_notch_moves_all_three() {
        // Middle II sits on its notch E.
        let mut m = machine(["III", "II", "I"], [0, 4, 7], "");
        m.process_character('X');
        assert_eq!(m.positions(), vec![1, 5, 8]);
    }

    #[test]
    fn test_reset_reproduces_output() {
        let mut m = machine(["I", "II", "III"], [5, 9, 22], "QW ER");
        let first = m.transform("THE QUICK BROWN FOX");
        m.reset();
        assert_eq!(m.positions(), vec![5, 9, 22]);
        assert_eq!(m.transform("THE QUICK BROWN FOX"), first);
    }

    #[test]
    fn test_state_carries_across_calls() {
        let mut whole = machine(["I", "II", "III"], [0, 0, 0], "");
        let mut split = machine(["I", "II", "III"], [0, 0, 0], "");
        let expected = whole.transform("AAAAAAAAAA");
        let joined = split.transform("AAAAA") + &split.transform("AAAAA");
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_fourth_rotor_is_stationary() {
        let rotors = vec![
            catalog::rotor("III", 0, 0).unwrap(),
            catalog::rotor("II", 0, 0).unwrap(),
            catalog::rotor("I", 0, 0).unwrap(),
            catalog::rotor("IV", 3, 0).unwrap(),
        ];
        let mut m =
            Machine::new(rotors, catalog::reflector("B").unwrap(), Plugboard::new()).unwrap();
        let ciphertext = m.transform(&"A".repeat(700));
        assert_eq!(m.positions()[3], 3);

        m.reset();
        assert_eq!(m.transform(&ciphertext), "A".repeat(700));
    }

    #[test]
    fn test_identity_chain_steps_fast_rotor() {
        // Identity rotors with a reflector pairing each letter with its neighbour.
        let rotors = (0..3)
            .map(|_| Rotor::new(Wiring::identity(), 'Z', 0, 0))
            .collect();
        let reflector = Reflector::new("BADCFEHGJILKNMPORQTSVUXWZY").unwrap();
        let mut m = Machine::new(rotors, reflector, Plugboard::new()).unwrap();
        assert_eq!(m.window(), "AAA");
        m.process_character('A');
        assert_eq!(m.window(), "BAA");
    }
}
