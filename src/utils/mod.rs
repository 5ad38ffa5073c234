//! Shared helpers for alphabet arithmetic.

pub mod alphabet;
