// ============================================================
// Layer 3 — Character Vocabulary
// ============================================================
// The fixed set of characters the downstream model can consume
// and produce, with its index mappings.
//
// Four pieces of state, kept consistent by construction:
//   - idx_to_char: ordered characters, the EOS character last
//   - char_to_idx: exact inverse of idx_to_char
//   - eos():       index of the EOS character (always the final entry)
//   - alphabet:    characters eligible to be substituted IN
//                  during noise injection (letters only — never
//                  the space or EOS character)
//
// Making the vocabulary an explicit value object (instead of
// module-global tables) means every filter/encode/decode/noise
// call names the tables it depends on — no hidden load-order
// dependency.
//
// Invariant: idx_to_char[char_to_idx[c]] == c for every
// vocabulary character, EOS included. Both constructors
// guarantee it; decode relies on it.
//
// Reference: Rust Book §8 (HashMaps)
//            Rust Book §9 (Recoverable Errors)

use std::collections::{BTreeSet, HashMap};

/// The end-of-sequence marker character.
/// A real vocabulary entry (always the last one) so that
/// char_to_idx and idx_to_char stay exact inverses and decode
/// needs no special case for the EOS index.
pub const EOS_CHAR: char = '␃';

/// Construction errors. Both indicate a caller bug in a custom
/// vocabulary file, not a recoverable runtime condition.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum VocabularyError {
    /// The same character appears twice in the character list
    #[error("duplicate character {0:?} in vocabulary")]
    DuplicateChar(char),

    /// An alphabet character is not part of the vocabulary —
    /// substitution noise would produce unencodable sentences
    #[error("alphabet character {0:?} is not in the vocabulary")]
    AlphabetCharNotInVocabulary(char),
}

/// Injective character → index mapping with its inverse,
/// a designated EOS index, and the substitution alphabet.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Ordered vocabulary characters; index position = id.
    /// The EOS character is always the final entry.
    idx_to_char: Vec<char>,

    /// Exact inverse of idx_to_char
    char_to_idx: HashMap<char, usize>,

    /// Characters eligible for substitution noise
    alphabet: Vec<char>,
}

impl Vocabulary {
    /// Build a vocabulary from a corpus: the unique alphabetic
    /// characters plus the space character, in sorted order,
    /// with the EOS character appended last.
    ///
    /// The substitution alphabet is the alphabetic subset —
    /// substituting a space or EOS in would not be a typo.
    pub fn from_corpus(text: &str) -> Self {
        // BTreeSet deduplicates and keeps a stable sorted order,
        // so the same corpus always yields the same index table
        let mut set: BTreeSet<char> = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        set.remove(&EOS_CHAR);
        set.insert(' ');

        let chars: Vec<char>    = set.into_iter().collect();
        let alphabet: Vec<char> = chars.iter().copied().filter(|c| c.is_alphabetic()).collect();

        // Cannot fail: the set has no duplicates and the alphabet
        // is a subset of the character list by construction
        match Self::from_parts(chars, alphabet) {
            Ok(v)  => v,
            Err(_) => unreachable!("set construction yields no duplicates"),
        }
    }

    /// Build a vocabulary from an explicit character list and
    /// substitution alphabet (custom vocabulary files, tests).
    /// The EOS character is appended automatically and must not
    /// appear in `chars`.
    pub fn from_chars(chars: &str, alphabet: &str) -> Result<Self, VocabularyError> {
        Self::from_parts(chars.chars().collect(), alphabet.chars().collect())
    }

    fn from_parts(mut chars: Vec<char>, alphabet: Vec<char>) -> Result<Self, VocabularyError> {
        chars.push(EOS_CHAR);

        let mut char_to_idx = HashMap::with_capacity(chars.len());
        for (idx, &c) in chars.iter().enumerate() {
            // insert() returns the previous value on a duplicate key
            if char_to_idx.insert(c, idx).is_some() {
                return Err(VocabularyError::DuplicateChar(c));
            }
        }

        for &c in &alphabet {
            if c == EOS_CHAR || !char_to_idx.contains_key(&c) {
                return Err(VocabularyError::AlphabetCharNotInVocabulary(c));
            }
        }

        Ok(Self { idx_to_char: chars, char_to_idx, alphabet })
    }

    /// Index of the EOS marker — always the final vocabulary entry
    pub fn eos(&self) -> usize {
        self.idx_to_char.len() - 1
    }

    /// Number of vocabulary entries, EOS included
    pub fn len(&self) -> usize {
        self.idx_to_char.len()
    }

    /// True if `c` is a vocabulary character
    pub fn contains(&self, c: char) -> bool {
        self.char_to_idx.contains_key(&c)
    }

    /// char → index lookup
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.char_to_idx.get(&c).copied()
    }

    /// index → char lookup
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.idx_to_char.get(idx).copied()
    }

    /// The ordered substitution alphabet for noise injection
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The full ordered character list, EOS last.
    /// Used by the vocabulary store for persistence.
    pub fn chars(&self) -> &[char] {
        &self.idx_to_char
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corpus_has_space_and_eos() {
        let v = Vocabulary::from_corpus("The Quick Fox!");
        assert!(v.contains(' '));
        // EOS is always the last entry
        assert_eq!(v.char_at(v.eos()), Some(EOS_CHAR));
        // Punctuation and digits are not vocabulary characters
        assert!(!v.contains('!'));
    }

    #[test]
    fn test_mappings_are_exact_inverses() {
        let v = Vocabulary::from_corpus("abc abc");
        for idx in 0..v.len() {
            let c = v.char_at(idx).unwrap();
            assert_eq!(v.index_of(c), Some(idx));
        }
    }

    #[test]
    fn test_alphabet_excludes_space_and_eos() {
        let v = Vocabulary::from_corpus("hello world");
        assert!(!v.alphabet().contains(&' '));
        assert!(!v.alphabet().contains(&EOS_CHAR));
        assert!(v.alphabet().contains(&'h'));
    }

    #[test]
    fn test_duplicate_char_rejected() {
        let err = Vocabulary::from_chars("abca", "ab").unwrap_err();
        assert_eq!(err, VocabularyError::DuplicateChar('a'));
    }

    #[test]
    fn test_alphabet_must_be_subset() {
        let err = Vocabulary::from_chars("ab ", "abz").unwrap_err();
        assert_eq!(err, VocabularyError::AlphabetCharNotInVocabulary('z'));
    }

    #[test]
    fn test_from_corpus_is_order_independent() {
        // Same character set, different order → same index table
        let a = Vocabulary::from_corpus("dog cat");
        let b = Vocabulary::from_corpus("cat dog");
        assert_eq!(a.chars(), b.chars());
    }
}
