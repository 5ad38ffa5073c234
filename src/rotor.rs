//! Rotor: a wired wheel with a rotating offset and a ring setting.
//!
//! The rotor is the atomic unit of the machine. Its wiring and notch are
//! fixed for its lifetime; only `position` changes, one step at a time.

use crate::utils::alphabet::{index_to_letter, wrap, LETTERS};
use crate::wiring::Wiring;

/// A single cipher wheel.
///
/// `position` is the rotational offset visible in the machine window.
/// `ring_setting` shifts the wiring relative to the letter ring and only
/// affects signal lookups. The turnover test compares the un-adjusted
/// position against the notch letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notch: char,
    position: usize,
    ring_setting: usize,
    initial_position: usize,
}

impl Rotor {
    /// Creates a rotor. `position` and `ring_setting` are reduced modulo 26.
    ///
    /// The notch letter is normalized to uppercase. A non-letter notch is
    /// accepted but never engages.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmasim::{Rotor, Wiring};
    ///
    /// let wiring = Wiring::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// let rotor = Rotor::new(wiring, 'Q', 42, 0);
    /// assert_eq!(rotor.position(), 16);
    /// assert!(rotor.is_at_notch());
    /// ```
    pub fn new(wiring: Wiring, notch: char, position: usize, ring_setting: usize) -> Self {
        let position = position % LETTERS;
        Rotor {
            wiring,
            notch: notch.to_ascii_uppercase(),
            position,
            ring_setting: ring_setting % LETTERS,
            initial_position: position,
        }
    }

    /// Advances the rotor by one contact.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % LETTERS;
    }

    /// Returns true when the letter at the current position is the notch.
    pub fn is_at_notch(&self) -> bool {
        index_to_letter(self.position) == self.notch
    }

    /// Passes a signal right to left through the wiring.
    ///
    /// # Parameters
    /// - `input`: Contact index in `0..26`.
    ///
    /// # Returns
    /// Output contact index in `0..26`.
    pub fn encrypt_forward(&self, input: usize) -> usize {
        let shift = self.offset();
        let entry = wrap(input, shift);
        wrap(self.wiring.map(entry), -shift)
    }

    /// Passes a signal left to right through the wiring.
    ///
    /// Exact inverse of [`encrypt_forward`](Self::encrypt_forward) for the
    /// same position and ring setting.
    pub fn encrypt_backward(&self, input: usize) -> usize {
        let shift = self.offset();
        let entry = wrap(input, shift);
        wrap(self.wiring.inverse(entry), -shift)
    }

    /// Restores the position given at construction.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
    }

    /// Current rotational offset in `0..26`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Ring setting in `0..26` (displayed as 1..=26 on the device).
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    pub fn notch(&self) -> char {
        self.notch
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Letter shown in the machine window.
    pub fn window_letter(&self) -> char {
        index_to_letter(self.position)
    }

    /// Net contact misalignment: rotation minus ring offset.
    fn offset(&self) -> i32 {
        self.position as i32 - self.ring_setting as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotor_i(position: usize, ring: usize) -> Rotor {
        Rotor::new(
            Wiring::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap(),
            'Q',
            position,
            ring,
        )
    }

    #[test]
    fn test_new_normalizes_position_and_ring() {
        let rotor = rotor_i(27, 53);
        assert_eq!(rotor.position(), 1);
        assert_eq!(rotor.ring_setting(), 1);
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = rotor_i(25, 0);
        rotor.step();
        assert_eq!(rotor.position(), 0);
        rotor.step();
        assert_eq!(rotor.position(), 1);
    }

    #[test]
    fn test_notch_only_at_notch_letter() {
        for p in 0..LETTERS {
            let rotor = rotor_i(p, 0);
            assert_eq!(rotor.is_at_notch(), p == 16, "position {}", p);
        }
    }

    #[test]
    fn test_notch_ignores_ring_setting() {
        let rotor = rotor_i(16, 5);
        assert!(rotor.is_at_notch());
        let rotor = rotor_i(21, 5);
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn test_forward_at_rest_is_plain_wiring() {
        let rotor = rotor_i(0, 0);
        assert_eq!(rotor.encrypt_forward(0), 4); // A -> E
        assert_eq!(rotor.encrypt_forward(1), 10); // B -> K
    }

    #[test]
    fn test_forward_after_one_step() {
        // Position B: A enters at contact B, wired to K, exits as J.
        let rotor = rotor_i(1, 0);
        assert_eq!(rotor.encrypt_forward(0), 9);
    }

    #[test]
    fn test_ring_cancels_matching_position() {
        let plain = rotor_i(0, 0);
        let shifted = rotor_i(7, 7);
        for i in 0..LETTERS {
            assert_eq!(plain.encrypt_forward(i), shifted.encrypt_forward(i));
        }
    }

    #[test]
    fn test_backward_inverts_forward_for_all_settings() {
        for position in 0..LETTERS {
            for ring in 0..LETTERS {
                let rotor = rotor_i(position, ring);
                for i in 0..LETTERS {
                    assert_eq!(
                        rotor.encrypt_backward(rotor.encrypt_forward(i)),
                        i,
                        "position={}, ring={}, input={}",
                        position,
                        ring,
                        i
                    );
                }
            }
        }
    }

    #[test]
    fn test_reset_restores_initial_position() {
        let mut rotor = rotor_i(3, 0);
        for _ in 0..10 {
            rotor.step();
        }
        assert_eq!(rotor.position(), 13);
        rotor.reset();
        assert_eq!(rotor.position(), 3);
    }

    #[test]
    fn test_window_letter_and_notch_case() {
        let rotor = Rotor::new(Wiring::identity(), 'q', 16, 0);
        assert_eq!(rotor.notch(), 'Q');
        assert_eq!(rotor.window_letter(), 'Q');
        assert!(rotor.is_at_notch());
    }

    #[test]
    fn test_non_letter_notch_never_engages() {
        let mut rotor = Rotor::new(Wiring::identity(), '#', 0, 0);
        for _ in 0..LETTERS {
            assert!(!rotor.is_at_notch());
            rotor.step();
        }
    }
}
