use std::collections::HashSet;

const HASH_BASE: u64 = 257;
const HASH_MODULUS: u64 = 1_000_000_007;

/// The set of k-gram hashes for one source unit, duplicates collapsed.
/// Distinct k-grams hashing to the same value merge into one element; that
/// collision tradeoff is part of the comparison semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    hashes: HashSet<u64>,
}

impl Fingerprint {
    pub fn from_kgrams<S: AsRef<str>>(kgrams: &[S]) -> Self {
        let mut hashes = HashSet::with_capacity(kgrams.len());
        for kgram in kgrams {
            hashes.insert(kgram_hash(kgram.as_ref()));
        }
        Self { hashes }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.hashes.contains(&hash)
    }

    pub(crate) fn intersection_len(&self, other: &Self) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .hashes
            .iter()
            .filter(|hash| large.hashes.contains(hash))
            .count()
    }
}

/// Polynomial rolling hash over the k-gram's bytes:
/// `hash = (hash * 257 + byte) mod 1_000_000_007`.
pub fn kgram_hash(text: &str) -> u64 {
    let mut hash = 0u64;
    for &byte in text.as_bytes() {
        hash = (hash * HASH_BASE + u64::from(byte)) % HASH_MODULUS;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_the_polynomial_by_hand() {
        // 'a' = 97, 'b' = 98: 97 * 257 + 98 = 25027
        assert_eq!(kgram_hash("ab"), 25027);
        assert_eq!(kgram_hash(""), 0);
    }

    #[test]
    fn hash_stays_below_the_modulus() {
        let hash = kgram_hash("a very long k-gram with many characters in it 0123456789");
        assert!(hash < HASH_MODULUS);
    }

    #[test]
    fn identical_kgrams_hash_identically() {
        assert_eq!(kgram_hash("a = b"), kgram_hash("a = b"));
        assert_ne!(kgram_hash("a = b"), kgram_hash("b = a"));
    }

    #[test]
    fn repeated_kgrams_collapse_in_the_set() {
        let kgrams = ["a = b", "= b ;", "a = b"];
        let fingerprint = Fingerprint::from_kgrams(&kgrams);
        assert_eq!(fingerprint.len(), 2);
        assert!(fingerprint.contains(kgram_hash("a = b")));
    }

    #[test]
    fn cardinality_never_exceeds_kgram_count() {
        let kgrams = ["x", "y", "z", "x", "y"];
        let fingerprint = Fingerprint::from_kgrams(&kgrams);
        assert!(fingerprint.len() <= kgrams.len());
    }

    #[test]
    fn empty_kgram_list_gives_empty_fingerprint() {
        let fingerprint = Fingerprint::from_kgrams::<&str>(&[]);
        assert!(fingerprint.is_empty());
        assert_eq!(fingerprint.len(), 0);
    }
}
