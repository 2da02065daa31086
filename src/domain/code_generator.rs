//! Short code generation.
//!
//! Codes are drawn uniformly from a URL-safe alphabet without look-alike
//! characters (`0`, `1`, `I`, `O`, `l`). Generators are pure: uniqueness is
//! decided by the storage layer, which rejects a taken code so the caller can
//! draw again.

use rand::Rng;

/// Characters a generated short code may contain.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Codes that would shadow fixed routes and must never be issued.
const RESERVED_CODES: &[&str] = &["api", "health", "static"];

/// Source of candidate short codes.
pub trait CodeGenerator: Send + Sync {
    /// Returns a candidate code. Candidates are not guaranteed to be unused.
    fn generate(&self) -> String;
}

/// Random generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}

/// Returns true if `code` collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
