// ============================================================
// Layer 4 — Noise Injection
// ============================================================
// Turns a clean sentence into a plausibly misspelled one.
// These corrupted sentences become the model INPUTS; the clean
// originals become the TARGETS the model learns to restore.
//
// Four corruption operations, applied in this fixed order, each
// gated by an independent coin flip (fires when a uniform [0,1)
// draw exceeds 0.5):
//
//   1. drop_random_char       — delete one character
//   2. substitute_random_char — overwrite one character with a
//                               random alphabet character
//   3. swap_random_pair       — swap two positions (picked with
//                               replacement — may be a no-op)
//   4. drop_random_space      — delete one of the remaining
//                               space characters
//
// Each operation reads the sentence state left by the previous
// one: a deletion shifts positions before substitution runs,
// and so on. The order is part of the corruption statistics —
// do not reorder the steps.
//
// All four coins are always flipped, so noise is genuinely
// optional: a sentence can come out unchanged.
//
// A single pass shrinks a sentence by at most 2 characters
// (one deletion + one space deletion). The batch former applies
// the pass twice, so at most 4 characters disappear per input.
//
// The RNG is threaded in explicitly so tests can substitute a
// deterministic source. Operations fail hard on degenerate
// input (empty sentence, no spaces left) — callers guarantee
// multi-word sentences, which the segmenter's word-count
// boundary does by construction.
//
// Reference: rand crate documentation
//            Rust Book §9 (Recoverable Errors)

use rand::seq::SliceRandom;
use rand::Rng;

/// Degenerate-input failures. None of these are recovered from:
/// the whole batch-formation call aborts, as in the original
/// training script.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// Deletion/substitution/swap on a zero-length sentence
    #[error("cannot corrupt an empty sentence")]
    EmptySentence,

    /// Substitution with nothing to substitute in
    #[error("substitution alphabet is empty")]
    EmptyAlphabet,

    /// Space deletion on a sentence with no spaces left
    #[error("no spaces left to delete")]
    NoSpaces,
}

/// Apply the full corruption battery to one sentence.
/// Returns the corrupted sentence; the input is untouched.
pub fn corrupt<R: Rng>(
    sentence: &str,
    alphabet: &[char],
    rng:      &mut R,
) -> Result<String, NoiseError> {
    let mut chars: Vec<char> = sentence.chars().collect();

    if rng.gen::<f64>() > 0.5 {
        drop_random_char(&mut chars, rng)?;
    }
    if rng.gen::<f64>() > 0.5 {
        substitute_random_char(&mut chars, alphabet, rng)?;
    }
    if rng.gen::<f64>() > 0.5 {
        swap_random_pair(&mut chars, rng)?;
    }
    if rng.gen::<f64>() > 0.5 {
        drop_random_space(&mut chars, rng)?;
    }

    Ok(chars.into_iter().collect())
}

/// Remove the character at a uniformly random position.
pub(crate) fn drop_random_char<R: Rng>(
    chars: &mut Vec<char>,
    rng:   &mut R,
) -> Result<(), NoiseError> {
    if chars.is_empty() {
        return Err(NoiseError::EmptySentence);
    }
    let idx = rng.gen_range(0..chars.len());
    chars.remove(idx);
    Ok(())
}

/// Overwrite a uniformly random position with a uniformly random
/// alphabet character. The replacement may equal the original.
pub(crate) fn substitute_random_char<R: Rng>(
    chars:    &mut [char],
    alphabet: &[char],
    rng:      &mut R,
) -> Result<(), NoiseError> {
    if chars.is_empty() {
        return Err(NoiseError::EmptySentence);
    }
    if alphabet.is_empty() {
        return Err(NoiseError::EmptyAlphabet);
    }
    let idx     = rng.gen_range(0..chars.len());
    let sub_idx = rng.gen_range(0..alphabet.len());
    chars[idx]  = alphabet[sub_idx];
    Ok(())
}

/// Swap the characters at two uniformly random positions.
/// The positions are drawn with replacement — picking the same
/// position twice leaves the sentence unchanged.
pub(crate) fn swap_random_pair<R: Rng>(
    chars: &mut [char],
    rng:   &mut R,
) -> Result<(), NoiseError> {
    if chars.is_empty() {
        return Err(NoiseError::EmptySentence);
    }
    let a = rng.gen_range(0..chars.len());
    let b = rng.gen_range(0..chars.len());
    chars.swap(a, b);
    Ok(())
}

/// Remove one of the remaining space characters, chosen
/// uniformly among the space positions.
pub(crate) fn drop_random_space<R: Rng>(
    chars: &mut Vec<char>,
    rng:   &mut R,
) -> Result<(), NoiseError> {
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == ' ')
        .map(|(i, _)| i)
        .collect();

    let idx = *positions.choose(rng).ok_or(NoiseError::NoSpaces)?;
    chars.remove(idx);
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'e'];

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sorted(mut v: Vec<char>) -> Vec<char> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_drop_char_removes_exactly_one() {
        for seed in 0..32 {
            let mut rng   = StdRng::seed_from_u64(seed);
            let mut chars = chars_of("abcde");
            drop_random_char(&mut chars, &mut rng).unwrap();
            assert_eq!(chars.len(), 4);
        }
    }

    #[test]
    fn test_drop_char_on_empty_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut chars: Vec<char> = Vec::new();
        assert_eq!(drop_random_char(&mut chars, &mut rng), Err(NoiseError::EmptySentence));
    }

    #[test]
    fn test_substitute_keeps_length_and_draws_from_alphabet() {
        for seed in 0..32 {
            let mut rng   = StdRng::seed_from_u64(seed);
            let original  = chars_of("xy z");
            let mut chars = original.clone();
            substitute_random_char(&mut chars, ALPHABET, &mut rng).unwrap();
            assert_eq!(chars.len(), original.len());
            // every char is either untouched or drawn from the alphabet
            for (c, o) in chars.iter().zip(original.iter()) {
                assert!(c == o || ALPHABET.contains(c));
            }
        }
    }

    #[test]
    fn test_substitute_degenerate_inputs_fail() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<char> = Vec::new();
        assert_eq!(
            substitute_random_char(&mut empty, ALPHABET, &mut rng),
            Err(NoiseError::EmptySentence)
        );
        let mut chars = chars_of("ab");
        assert_eq!(
            substitute_random_char(&mut chars, &[], &mut rng),
            Err(NoiseError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_swap_preserves_multiset() {
        for seed in 0..32 {
            let mut rng   = StdRng::seed_from_u64(seed);
            let original  = chars_of("abcdef");
            let mut chars = original.clone();
            swap_random_pair(&mut chars, &mut rng).unwrap();
            assert_eq!(chars.len(), original.len());
            assert_eq!(sorted(chars), sorted(original));
        }
    }

    #[test]
    fn test_drop_space_removes_one_space_only() {
        for seed in 0..32 {
            let mut rng   = StdRng::seed_from_u64(seed);
            let mut chars = chars_of("a b c ");
            drop_random_space(&mut chars, &mut rng).unwrap();
            let spaces = chars.iter().filter(|&&c| c == ' ').count();
            assert_eq!(spaces, 2);
            // the letters survive in order
            let letters: Vec<char> = chars.iter().copied().filter(|&c| c != ' ').collect();
            assert_eq!(letters, chars_of("abc"));
        }
    }

    #[test]
    fn test_drop_space_without_spaces_fails() {
        let mut rng   = StdRng::seed_from_u64(0);
        let mut chars = chars_of("abc");
        assert_eq!(drop_random_space(&mut chars, &mut rng), Err(NoiseError::NoSpaces));
    }

    #[test]
    fn test_corrupt_with_cold_coins_is_identity() {
        // StepRng(0, 0) makes every coin flip 0.0, so no operation
        // fires — zero-edit output is a valid corruption result
        let mut rng = StepRng::new(0, 0);
        let out     = corrupt("the quick fox ", ALPHABET, &mut rng).unwrap();
        assert_eq!(out, "the quick fox ");
    }

    #[test]
    fn test_corrupt_single_pass_length_bound() {
        // One pass removes at most 2 characters (char + space drop)
        let sentence = "the quick brown fox jumps ";
        let len      = sentence.chars().count();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out     = corrupt(sentence, ALPHABET, &mut rng).unwrap();
            let out_len = out.chars().count();
            assert!(out_len <= len && out_len >= len - 2, "len {} out of bounds", out_len);
        }
    }

    #[test]
    fn test_corrupt_twice_length_bound() {
        // Two passes compound: at most 4 characters disappear.
        // Plenty of spaces, so the space-drop step cannot fail.
        let sentence = "one two three four five six ";
        let len      = sentence.chars().count();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let once    = corrupt(sentence, ALPHABET, &mut rng).unwrap();
            let twice   = corrupt(&once, ALPHABET, &mut rng).unwrap();
            let out_len = twice.chars().count();
            assert!(out_len <= len && out_len >= len - 4, "len {} out of bounds", out_len);
        }
    }

    #[test]
    fn test_corrupt_output_draws_only_known_chars() {
        let sentence = "abc abd abe ";
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out     = corrupt(sentence, ALPHABET, &mut rng).unwrap();
            for c in out.chars() {
                assert!(c == ' ' || ALPHABET.contains(&c) || sentence.contains(c));
            }
        }
    }
}
