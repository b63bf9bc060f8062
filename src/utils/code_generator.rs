//! Short code generation.
//!
//! Codes are [`CODE_LENGTH`] characters drawn uniformly from [`ALPHABET`].
//! Collision detection is left to the store's unique constraint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Characters a short code may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a short code.
pub const CODE_LENGTH: usize = 6;

/// Process-wide short code generator.
///
/// Holds a single PRNG behind a mutex so concurrent handlers can share it.
/// The default constructor seeds from OS entropy, so separate processes do
/// not produce the same sequence.
#[derive(Debug)]
pub struct ShortCodeGenerator {
    rng: Mutex<StdRng>,
}

impl ShortCodeGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a generator with a fixed seed. Two generators built from the
    /// same seed yield the same codes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates a fresh short code.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let code = ShortCodeGenerator::new().generate();
    /// assert_eq!(code.len(), 6);
    /// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn generate(&self) -> String {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for ShortCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn is_well_formed(code: &str) -> bool {
        code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
    }

    #[test]
    fn test_alphabet_has_62_distinct_characters() {
        let set: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(set.len(), 62);
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = ShortCodeGenerator::new().generate();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let generator = ShortCodeGenerator::new();

        for _ in 0..1000 {
            let code = generator.generate();
            assert!(is_well_formed(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = ShortCodeGenerator::new();
        let codes: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_all_character_classes() {
        let generator = ShortCodeGenerator::new();
        let joined: String = (0..500).map(|_| generator.generate()).collect();

        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = ShortCodeGenerator::with_seed(7);
        let b = ShortCodeGenerator::with_seed(7);

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_os_seeded_generators_differ() {
        let a: Vec<_> = (0..5).map(|_| ShortCodeGenerator::new().generate()).collect();
        let b: Vec<_> = (0..5).map(|_| ShortCodeGenerator::new().generate()).collect();

        assert_ne!(a, b);
    }

    #[test]
    fn test_shared_across_threads() {
        let generator = Arc::new(ShortCodeGenerator::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || (0..250).map(|_| generator.generate()).collect::<Vec<_>>())
            })
            .collect();

        let codes: HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(codes.len(), 1000);
    }
}
