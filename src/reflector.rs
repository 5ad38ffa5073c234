//! Reflector: the fixed wheel that turns the signal back through the rotors.

use tracing::warn;

use crate::error::EnigmaError;
use crate::wiring::Wiring;

/// A fixed permutation applied between the forward and backward passes.
///
/// A physical reflector is an involution without fixed points, which is
/// what makes the whole machine reciprocal. Neither property is enforced:
/// a non-conforming table is accepted, logged, and executed mechanically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Parses a 26-letter reflector table.
    ///
    /// # Errors
    /// Returns the [`Wiring`] validation errors if `spec` is not a permutation.
    pub fn new(spec: &str) -> Result<Self, EnigmaError> {
        Ok(Self::from_wiring(Wiring::new(spec)?))
    }

    /// Wraps an already validated wiring.
    pub fn from_wiring(wiring: Wiring) -> Self {
        if !wiring.is_involution() {
            warn!(wiring = %wiring, "reflector is not an involution; output will not be reciprocal");
        }
        let fixed = wiring.fixed_points();
        if !fixed.is_empty() {
            warn!(wiring = %wiring, ?fixed, "reflector has fixed points");
        }
        Reflector { wiring }
    }

    /// Reflects contact `index`.
    pub fn reflect(&self, index: usize) -> usize {
        self.wiring.map(index)
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
