// ============================================================
// Layer 2 — SampleUseCase
// ============================================================
// Runs the pipeline over a corpus in memory and hands back a
// few random (clean, noisy) pairs for eyeballing. Nothing is
// written to disk — this exists so the noise level can be
// inspected before committing to a full preparation run.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use burn::data::dataset::Dataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::BatchFormer,
    codec,
    dataset::PairDataset,
    loader::{concat_articles, JsonlLoader, TextDirLoader},
};
use crate::domain::traits::ArticleSource;
use crate::domain::vocabulary::{Vocabulary, EOS_CHAR};
use std::path::Path;

/// Parameters for a sampling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    pub corpus_path:        String,
    pub count:              usize,
    pub words_per_sentence: usize,
    pub article_limit:      usize,
    pub seed:               Option<u64>,
}

/// One decoded pair for display, EOS trimmed
#[derive(Debug, Clone)]
pub struct PairSample {
    pub clean: String,
    pub noisy: String,
}

pub struct SampleUseCase {
    config: SampleConfig,
}

impl SampleUseCase {
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    /// Build the pipeline in memory and draw `count` random pairs
    pub fn execute(&self) -> Result<Vec<PairSample>> {
        let cfg = &self.config;

        let source = source_for(&cfg.corpus_path);
        let line   = concat_articles(source.as_ref(), cfg.article_limit)?;

        // In-memory vocabulary — sampling must not disturb a
        // saved one from a previous prepare run
        let vocab = Vocabulary::from_corpus(&line.to_lowercase());

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        // batch_size 1 so only the trailing partial sentence is lost
        let former = BatchFormer::new(1, cfg.words_per_sentence);
        let corpus = former.form(&line, &vocab, &mut rng)?;

        let dataset = PairDataset::from_corpus(&corpus);
        if dataset.len() == 0 {
            bail!(
                "Corpus too short: no sentence of {} words could be formed",
                cfg.words_per_sentence
            );
        }

        let mut samples = Vec::with_capacity(cfg.count);
        for _ in 0..cfg.count {
            let idx  = rng.gen_range(0..dataset.len());
            let pair = match dataset.get(idx) {
                Some(p) => p,
                None    => continue,
            };

            // decode keeps the EOS character; trim it for display
            let clean = codec::decode(&vocab, &pair.clean_ids)?;
            let noisy = codec::decode(&vocab, &pair.noisy_ids)?;
            samples.push(PairSample {
                clean: clean.trim_end_matches(EOS_CHAR).to_string(),
                noisy: noisy.trim_end_matches(EOS_CHAR).to_string(),
            });
        }

        Ok(samples)
    }
}

fn source_for(path: &str) -> Box<dyn ArticleSource> {
    if Path::new(path).is_dir() {
        Box::new(TextDirLoader::new(path))
    } else {
        Box::new(JsonlLoader::new(path))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sample_pairs_stay_within_noise_bounds() {
        let dir = std::env::temp_dir()
            .join(format!("spell_prep_sample_{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();

        let corpus_path = dir.join("corpus.jsonl");
        let text        = "red green blue black white pink ".repeat(8);
        fs::write(&corpus_path, format!("{{\"text\":\"{}\"}}\n", text)).unwrap();

        let cfg = SampleConfig {
            corpus_path:        corpus_path.to_str().unwrap().to_string(),
            count:              5,
            words_per_sentence: 5,
            article_limit:      1000,
            seed:               Some(11),
        };

        let samples = SampleUseCase::new(cfg).execute().unwrap();
        assert_eq!(samples.len(), 5);
        for s in &samples {
            let clean_len = s.clean.chars().count();
            let noisy_len = s.noisy.chars().count();
            assert!(noisy_len <= clean_len);
            assert!(noisy_len >= clean_len - 4);
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_short_corpus_fails_cleanly() {
        let dir = std::env::temp_dir()
            .join(format!("spell_prep_sample_short_{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();

        let corpus_path = dir.join("corpus.jsonl");
        fs::write(&corpus_path, "{\"text\":\"just two\"}\n").unwrap();

        let cfg = SampleConfig {
            corpus_path:        corpus_path.to_str().unwrap().to_string(),
            count:              1,
            words_per_sentence: 10,
            article_limit:      1000,
            seed:               Some(1),
        };

        assert!(SampleUseCase::new(cfg).execute().is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
