use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::batcher::PreparedCorpus;

/// One flattened (noisy, clean) training pair.
/// Both sequences are EOS-terminated; the lengths are the
/// pre-EOS character counts recorded by the batch former.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentencePair {
    pub noisy_ids: Vec<u32>,
    pub noisy_len: usize,
    pub clean_ids: Vec<u32>,
    pub clean_len: usize,
}

impl SentencePair {
    /// How many characters the two corruption passes removed
    pub fn chars_removed(&self) -> usize {
        self.clean_len.saturating_sub(self.noisy_len)
    }
}

pub struct PairDataset {
    pairs: Vec<SentencePair>,
}

impl PairDataset {
    pub fn new(pairs: Vec<SentencePair>) -> Self {
        Self { pairs }
    }

    /// Flatten a prepared corpus into one pair per sentence,
    /// batch by batch, preserving order.
    pub fn from_corpus(corpus: &PreparedCorpus) -> Self {
        let mut pairs = Vec::with_capacity(corpus.num_sentences());

        for (input, target) in corpus.inputs.iter().zip(corpus.targets.iter()) {
            for j in 0..input.len() {
                pairs.push(SentencePair {
                    noisy_ids: input.sequences[j].clone(),
                    noisy_len: input.lengths[j],
                    clean_ids: target.sequences[j].clone(),
                    clean_len: target.lengths[j],
                });
            }
        }

        Self { pairs }
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

impl Dataset<SentencePair> for PairDataset {
    fn get(&self, index: usize) -> Option<SentencePair> {
        self.pairs.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::batcher::BatchFormer;
    use crate::domain::vocabulary::Vocabulary;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_from_corpus_flattens_in_order() {
        let v = Vocabulary::from_chars("abcdefghijklmnopqrstuvwxyz ", "abcdefghijklmnopqrstuvwxyz")
            .unwrap();
        let former  = BatchFormer::new(2, 1);
        let mut rng = StepRng::new(0, 0);
        let corpus  = former.form("aa bb cc dd ee ff gg hh ", &v, &mut rng).unwrap();

        let ds = PairDataset::from_corpus(&corpus);
        assert_eq!(ds.len(), corpus.num_sentences());
        assert_eq!(ds.len(), 4);

        // cold coins: noisy side equals clean side everywhere
        for i in 0..ds.len() {
            let pair = ds.get(i).unwrap();
            assert_eq!(pair.noisy_ids, pair.clean_ids);
            assert_eq!(pair.chars_removed(), 0);
        }
        assert!(ds.get(ds.len()).is_none());
    }
}
