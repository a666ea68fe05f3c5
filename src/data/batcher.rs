// ============================================================
// Layer 4 — Batch Former
// ============================================================
// The pipeline driver. Takes raw text and produces index-aligned
// batches of (noisy input, clean target) index sequences with
// parallel length metadata.
//
// Per call:
//   1. Lowercase the text and filter it to vocabulary characters
//   2. Segment into fixed-word-count sentences
//   3. Per sentence:
//        encode the clean sentence   → target entry + length
//        corrupt it twice in sequence (heavier noise than one
//        pass), encode the result    → input entry + length
//   4. Every `batch_size` pairs, emit one batch on each side
//   5. Trailing partial sentences AND partial batches are
//      discarded, never flushed
//
// Recorded lengths are pre-EOS character counts (the sentence
// length, not the encoded length) on both sides.
//
// Failures (unknown character, degenerate sentence in the noise
// step) abort the whole call and lose the in-progress batch —
// there is no per-sentence recovery.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Rust Book §9 (Error Handling)

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::codec::{self, CodecError};
use crate::data::filter::TextFilter;
use crate::data::noise::{self, NoiseError};
use crate::data::segmenter::Segmenter;
use crate::domain::vocabulary::Vocabulary;

/// Anything that can abort batch formation.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Noise(#[from] NoiseError),
}

/// One batch of encoded sentences plus their lengths.
/// `lengths[i]` is the character count (without EOS) of the
/// sentence encoded in `sequences[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodedBatch {
    pub sequences: Vec<Vec<u32>>,
    pub lengths:   Vec<usize>,
}

impl EncodedBatch {
    /// Number of sentences in this batch
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// The full prepared corpus: noisy input batches and clean
/// target batches, index-aligned — `inputs[i]` and `targets[i]`
/// describe the same underlying sentences, in the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreparedCorpus {
    pub inputs:  Vec<EncodedBatch>,
    pub targets: Vec<EncodedBatch>,
}

impl PreparedCorpus {
    /// Number of emitted batches
    pub fn num_batches(&self) -> usize {
        self.inputs.len()
    }

    /// Total number of sentence pairs across all batches
    pub fn num_sentences(&self) -> usize {
        self.inputs.iter().map(|b| b.len()).sum()
    }
}

/// Forms fixed-size batches of (noisy, clean) sentence pairs.
pub struct BatchFormer {
    /// Number of sentence pairs per emitted batch
    batch_size: usize,

    /// Target word count per sentence (see Segmenter for the
    /// exact +1-space boundary rule)
    words_per_sentence: usize,
}

impl BatchFormer {
    /// Create a new BatchFormer.
    ///
    /// # Panics
    /// Panics if batch_size is zero — a zero-size batch would
    /// never fill and the former would emit nothing forever.
    pub fn new(batch_size: usize, words_per_sentence: usize) -> Self {
        assert!(batch_size > 0, "batch_size must be at least 1");
        Self { batch_size, words_per_sentence }
    }

    /// Run the full pipeline over `text` and return the batches.
    /// A text too short for even one sentence yields an empty
    /// corpus, not an error.
    pub fn form<R: Rng>(
        &self,
        text:  &str,
        vocab: &Vocabulary,
        rng:   &mut R,
    ) -> Result<PreparedCorpus, BatchError> {
        // ── Step 1: lowercase + filter ────────────────────────────────────────
        let filtered = TextFilter::new(vocab).filter(&text.to_lowercase());

        // ── Step 2: segment into sentences ────────────────────────────────────
        let sentences = Segmenter::new(self.words_per_sentence).segment(&filtered);
        tracing::debug!("Segmented {} chars into {} sentences", filtered.len(), sentences.len());

        // ── Step 3+4: encode, corrupt, accumulate batches ─────────────────────
        let mut corpus       = PreparedCorpus::default();
        let mut input_batch  = EncodedBatch::default();
        let mut target_batch = EncodedBatch::default();

        for sentence in sentences {
            // clean target first — the input is derived from it
            target_batch.sequences.push(codec::encode(vocab, &sentence)?);
            target_batch.lengths.push(sentence.chars().count());

            // two corruption passes, the second reading the
            // output of the first
            let noisy = noise::corrupt(&sentence, vocab.alphabet(), rng)?;
            let noisy = noise::corrupt(&noisy, vocab.alphabet(), rng)?;
            input_batch.sequences.push(codec::encode(vocab, &noisy)?);
            input_batch.lengths.push(noisy.chars().count());

            if input_batch.len() == self.batch_size {
                // one batch is full — emit both sides together
                corpus.inputs.push(std::mem::take(&mut input_batch));
                corpus.targets.push(std::mem::take(&mut target_batch));
            }
        }

        // whatever pairs remain in the accumulators never filled
        // a batch and are discarded
        Ok(corpus)
    }
}
