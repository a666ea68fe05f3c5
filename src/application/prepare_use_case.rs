// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load corpus articles       (Layer 4 - data)
//   Step 2: Concatenate article texts  (Layer 4 - data)
//   Step 3: Build / load vocabulary    (Layer 5 - infra)
//   Step 4: Form sentence-pair batches (Layer 4 - data)
//   Step 5: Log per-batch stats        (Layer 5 - infra)
//   Step 6: Collate batches to tensors (Layer 4 - data)
//   Step 7: Save corpus and config     (Layer 5 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §4 (Datasets)

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    batcher::{BatchFormer, PreparedCorpus},
    collator::PairBatcher,
    dataset::SentencePair,
    loader::{concat_articles, JsonlLoader, TextDirLoader},
};
use crate::domain::traits::ArticleSource;
use crate::infra::{
    batch_store::BatchStore,
    stats::{BatchStats, StatsLogger},
    vocab_store::VocabStore,
};

// Tensor collation runs on the CPU backend — preparation is
// pure data plumbing, no gradients involved.
type CpuBackend = burn::backend::NdArray;

// ─── Preparation Configuration ───────────────────────────────────────────────
// All parameters for a preparation run.
// Serialisable so it can be saved next to the produced batches
// and a later training run knows exactly how they were made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub corpus_path:        String,
    pub out_dir:            String,
    pub batch_size:         usize,
    pub words_per_sentence: usize,
    pub article_limit:      usize,
    /// Seed for the noise RNG — None draws from entropy,
    /// making the run non-reproducible (the default)
    pub seed:               Option<u64>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            corpus_path:        "data/corpus.jsonl".to_string(),
            out_dir:            "prepared".to_string(),
            batch_size:         32,
            words_per_sentence: 10,
            article_limit:      1000,
            seed:               None,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full preparation pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

/// Summary handed back to the CLI for display.
#[derive(Debug, Clone)]
pub struct PrepareSummary {
    pub articles_used: usize,
    pub vocab_size:    usize,
    pub num_batches:   usize,
    pub num_sentences: usize,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full preparation pipeline end to end
    pub fn execute(&self) -> Result<PrepareSummary> {
        let cfg = &self.config;

        // ── Step 1+2: load and concatenate the corpus ─────────────────────────
        tracing::info!("Loading corpus from '{}'", cfg.corpus_path);
        let source = source_for(&cfg.corpus_path);
        let line   = concat_articles(source.as_ref(), cfg.article_limit)?;

        // ── Step 3: build or load the vocabulary ──────────────────────────────
        // A saved vocabulary wins over rebuilding, so repeated
        // runs keep the same index tables
        let vocab_store = VocabStore::new(&cfg.out_dir);
        let vocab       = vocab_store.load_or_build(&line)?;

        // ── Step 4: form the (noisy, clean) batches ───────────────────────────
        // Seeded runs are reproducible; the default draws from
        // entropy, as the corruption statistics don't need to be
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let former = BatchFormer::new(cfg.batch_size, cfg.words_per_sentence);
        let corpus = former.form(&line, &vocab, &mut rng)?;
        tracing::info!(
            "Formed {} batches ({} sentence pairs)",
            corpus.num_batches(),
            corpus.num_sentences()
        );

        // ── Step 5: per-batch stats CSV ───────────────────────────────────────
        let stats = StatsLogger::new(&cfg.out_dir)?;
        for (i, (input, target)) in corpus.inputs.iter().zip(corpus.targets.iter()).enumerate() {
            stats.log(&BatchStats::from_batch(i, input, target))?;
        }

        // ── Step 6: collate every batch into tensors ──────────────────────────
        // This is the shape the training loop consumes; running
        // it here catches any sequence the backend cannot hold
        // before the corpus is written out
        let collator = PairBatcher::<CpuBackend>::new(Default::default());
        let mut tensors = 0usize;
        for i in 0..corpus.num_batches() {
            let batch = collator.batch(batch_pairs(&corpus, i));
            tensors += batch.size() * 2;
        }
        tracing::info!("Collated {} tensors across {} batches", tensors, corpus.num_batches());

        // ── Step 7: persist corpus + config ───────────────────────────────────
        let store = BatchStore::new(&cfg.out_dir);
        store.save_corpus(&corpus)?;
        store.save_config(cfg)?;

        Ok(PrepareSummary {
            articles_used: cfg.article_limit,
            vocab_size:    vocab.len(),
            num_batches:   corpus.num_batches(),
            num_sentences: corpus.num_sentences(),
        })
    }
}

/// Pick a loader from the path shape: a directory means one
/// .txt file per article, anything else is a JSONL dump.
fn source_for(path: &str) -> Box<dyn ArticleSource> {
    if Path::new(path).is_dir() {
        Box::new(TextDirLoader::new(path))
    } else {
        Box::new(JsonlLoader::new(path))
    }
}

/// Rebuild the sentence pairs of batch `i` for collation.
fn batch_pairs(corpus: &PreparedCorpus, i: usize) -> Vec<SentencePair> {
    let input  = &corpus.inputs[i];
    let target = &corpus.targets[i];

    (0..input.len())
        .map(|j| SentencePair {
            noisy_ids: input.sequences[j].clone(),
            noisy_len: input.lengths[j],
            clean_ids: target.sequences[j].clone(),
            clean_len: target.lengths[j],
        })
        .collect()
}
