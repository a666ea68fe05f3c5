// ============================================================
// Layer 4 — Text Filter
// ============================================================
// Strips every character that is not a vocabulary key from
// raw text, before encoding.
//
// Why do we need to filter?
//   The corpus feed contains digits, punctuation, newlines and
//   the occasional emoji — none of which the character model
//   has an index for. If one of them reached the codec, the
//   encode lookup would fail. Filtering up front enforces the
//   codec's precondition once, at the pipeline entrance.
//
// The filter never substitutes and never errors: unknown
// characters are dropped, known ones pass through in their
// original order and multiplicity. Applying it twice yields
// the same string as applying it once.
//
// Callers lowercase the text first — the vocabulary is built
// from lowercased text, so uppercase letters would otherwise
// be silently dropped here.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::domain::vocabulary::Vocabulary;

/// Filters raw text down to vocabulary characters.
pub struct TextFilter<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> TextFilter<'a> {
    /// Create a filter over the given vocabulary
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Keep exactly the characters the vocabulary knows,
    /// preserving order and multiplicity. Returns a new String.
    pub fn filter(&self, text: &str) -> String {
        text.chars()
            .filter(|&c| self.vocab.contains(c))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_chars("abcdefghijklmnopqrstuvwxyz ", "abcdefghijklmnopqrstuvwxyz")
            .unwrap()
    }

    #[test]
    fn test_drops_unknown_characters() {
        let v = vocab();
        let f = TextFilter::new(&v);
        assert_eq!(f.filter("it's 2026, okay?!"), "its  okay");
    }

    #[test]
    fn test_preserves_order_and_multiplicity() {
        let v = vocab();
        let f = TextFilter::new(&v);
        assert_eq!(f.filter("aa!bb!aa"), "aabbaa");
    }

    #[test]
    fn test_empty_string() {
        let v = vocab();
        let f = TextFilter::new(&v);
        assert_eq!(f.filter(""), "");
    }

    proptest! {
        /// filter(filter(s)) == filter(s) for every string
        #[test]
        fn prop_idempotent(s in ".*") {
            let v = vocab();
            let f = TextFilter::new(&v);
            let once = f.filter(&s);
            prop_assert_eq!(f.filter(&once), once);
        }

        /// Every surviving character is a vocabulary key
        #[test]
        fn prop_containment(s in ".*") {
            let v = vocab();
            let f = TextFilter::new(&v);
            prop_assert!(f.filter(&s).chars().all(|c| v.contains(c)));
        }
    }
}
