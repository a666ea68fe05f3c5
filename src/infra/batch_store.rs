// ============================================================
// Layer 5 — Batch Store
// ============================================================
// Saves and restores the output of a preparation run.
//
// What gets saved per run:
//   1. batches.json        — the full prepared corpus (inputs,
//                            targets, lengths)
//   2. prepare_config.json — the PrepareConfig used to make it
//
// Why save the config next to the batches?
//   When a training run consumes the batches later, it needs to
//   know exactly how they were produced (word count per
//   sentence, batch size, seed) to interpret them and to
//   regenerate them if needed.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::batcher::PreparedCorpus;

/// Manages saving and loading of prepared corpora.
/// All files are stored in the configured directory.
pub struct BatchStore {
    /// Path to the directory where run outputs are stored
    dir: PathBuf,
}

impl BatchStore {
    /// Create a new BatchStore.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Write the prepared corpus to batches.json.
    /// Compact JSON — a 1000-article corpus produces megabytes
    /// of indices and pretty-printing doubles the file size.
    pub fn save_corpus(&self, corpus: &PreparedCorpus) -> Result<()> {
        let path = self.dir.join("batches.json");

        let json = serde_json::to_string(corpus)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write batches to '{}'", path.display()))?;

        tracing::debug!(
            "Saved {} batches to '{}'",
            corpus.num_batches(),
            path.display()
        );
        Ok(())
    }

    /// Load a previously saved corpus from batches.json
    pub fn load_corpus(&self) -> Result<PreparedCorpus> {
        let path = self.dir.join("batches.json");

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read batches from '{}'. \
                     Have you run 'prepare' first?",
                    path.display()
                )
            })?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Save the preparation configuration to JSON.
    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<()> {
        let path = self.dir.join("prepare_config.json");

        // serde_json::to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved prepare config to '{}'", path.display());
        Ok(())
    }

    /// Load the preparation configuration from JSON.
    pub fn load_config(&self) -> Result<PrepareConfig> {
        let path = self.dir.join("prepare_config.json");

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. \
                     Make sure you have run 'prepare' before.",
                    path.display()
                )
            })?;

        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::batcher::EncodedBatch;

    fn temp_store(tag: &str) -> BatchStore {
        let dir = std::env::temp_dir()
            .join(format!("spell_prep_batch_{}_{}", tag, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        BatchStore::new(dir.to_str().unwrap())
    }

    #[test]
    fn test_corpus_round_trip() {
        let store = temp_store("corpus");

        let corpus = PreparedCorpus {
            inputs: vec![EncodedBatch {
                sequences: vec![vec![1, 2, 9], vec![3, 9]],
                lengths:   vec![2, 1],
            }],
            targets: vec![EncodedBatch {
                sequences: vec![vec![1, 2, 4, 9], vec![3, 3, 9]],
                lengths:   vec![3, 2],
            }],
        };

        store.save_corpus(&corpus).unwrap();
        let loaded = store.load_corpus().unwrap();

        assert_eq!(loaded.num_batches(), 1);
        assert_eq!(loaded.inputs[0].sequences, corpus.inputs[0].sequences);
        assert_eq!(loaded.targets[0].lengths, corpus.targets[0].lengths);
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_load_corpus_without_file_fails() {
        let store = temp_store("missing");
        assert!(store.load_corpus().is_err());
    }
}
