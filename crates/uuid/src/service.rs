//! Identifier types and generators.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Canonical person identifier (32 lowercase hex characters, no hyphens).
///
/// Once constructed the contained UUID is always rendered in canonical form, so identifiers
/// handed to the store compare and sort consistently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(Uuid);

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonId {
    /// Generates a new random (version 4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Builds an identifier whose canonical form is `value` as zero-padded hex.
    ///
    /// Used by [`SequentialIdGenerator`]. Ordering of these identifiers follows `value`.
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Returns true if `input` is in canonical identifier form.
    ///
    /// This is a purely syntactic check:
    /// - exactly 32 bytes long
    /// - only lowercase hex characters (`0-9` and `a-f`)
    #[cfg(test)]
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Allocates a fresh identifier for every call.
///
/// Implementations must never return the same value twice for the lifetime of the generator,
/// and must be safe to call from concurrently running request handlers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers. This is what the server uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        PersonId::new().to_string()
    }
}

/// Counter-backed identifiers: `000...01`, `000...02`, and so on.
///
/// Still canonical, but predictable, which keeps listings reproducible in tests and demos.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let value = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        PersonId::from_u128(u128::from(value)).to_string()
    }
}
