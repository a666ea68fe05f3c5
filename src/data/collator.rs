// ============================================================
// Layer 4 — Tensor Collator
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<SentencePair>
// into tensors for the training loop.
//
// How batching works here:
//   Input:  Vec of N SentencePairs with DIFFERENT lengths
//   Output: PairBatch with N one-dimensional Int tensors per
//           side plus the two parallel length vectors
//
// Why per-sentence 1-D tensors instead of one [N, S] tensor?
//   The sequences are variable length and deliberately NOT
//   padded — the consumer packs them itself using the length
//   metadata. Stacking would force a padding token the
//   vocabulary does not have.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::SentencePair;

// ─── PairBatch ────────────────────────────────────────────────────────────────
/// A batch of sentence pairs ready for a model forward pass.
/// All four Vecs have the batch size as their length.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) —
/// generic so the same collator works on any device.
#[derive(Debug, Clone)]
pub struct PairBatch<B: Backend> {
    /// Noisy input sequences — one 1-D tensor per sentence,
    /// EOS index included
    pub noisy: Vec<Tensor<B, 1, Int>>,

    /// Pre-EOS character count of each noisy sentence
    pub noisy_lengths: Vec<usize>,

    /// Clean target sequences — one 1-D tensor per sentence
    pub clean: Vec<Tensor<B, 1, Int>>,

    /// Pre-EOS character count of each clean sentence
    pub clean_lengths: Vec<usize>,
}

impl<B: Backend> PairBatch<B> {
    /// Number of sentence pairs in this batch
    pub fn size(&self) -> usize {
        self.noisy.len()
    }
}

// ─── PairBatcher ──────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct backend.
#[derive(Clone, Debug)]
pub struct PairBatcher<B: Backend> {
    /// The device to create tensors on
    pub device: B::Device,
}

impl<B: Backend> PairBatcher<B> {
    /// Create a new collator for the given device
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes PairBatcher work with Burn's DataLoader.
impl<B: Backend> Batcher<SentencePair, PairBatch<B>> for PairBatcher<B> {
    /// Convert a Vec of SentencePairs into a single PairBatch.
    /// Burn uses i32 for Int tensor construction, so the u32
    /// indices are narrowed here (vocabulary sizes are tiny).
    fn batch(&self, items: Vec<SentencePair>) -> PairBatch<B> {
        let mut noisy         = Vec::with_capacity(items.len());
        let mut noisy_lengths = Vec::with_capacity(items.len());
        let mut clean         = Vec::with_capacity(items.len());
        let mut clean_lengths = Vec::with_capacity(items.len());

        for item in items {
            let noisy_ids: Vec<i32> = item.noisy_ids.iter().map(|&x| x as i32).collect();
            let clean_ids: Vec<i32> = item.clean_ids.iter().map(|&x| x as i32).collect();

            noisy.push(Tensor::<B, 1, Int>::from_ints(
                noisy_ids.as_slice(), &self.device
            ));
            clean.push(Tensor::<B, 1, Int>::from_ints(
                clean_ids.as_slice(), &self.device
            ));

            noisy_lengths.push(item.noisy_len);
            clean_lengths.push(item.clean_len);
        }

        PairBatch {
            noisy,
            noisy_lengths,
            clean,
            clean_lengths,
        }
    }
}
