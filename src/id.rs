use rand::Rng;

/// Length of generated record identifiers.
pub const ID_LENGTH: usize = 8;

/// The url-safe alphabet ids are drawn from (64 symbols).
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Source of record identifiers.
///
/// The concrete algorithm is not load-bearing for correctness, only for
/// collision probability; tests substitute deterministic implementations.
pub trait IdGenerator {
    /// Produce a fresh identifier.
    fn generate(&self) -> String;
}

/// The default generator: 8 random symbols from a 64-symbol url-safe alphabet.
///
/// Collisions are treated as negligible (64^8 possible ids) and are not
/// checked for on insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
