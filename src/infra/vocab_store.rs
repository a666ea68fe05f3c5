// ============================================================
// Layer 5 — Vocabulary Store
// ============================================================
// Manages vocabulary building, saving, and loading.
//
// The on-disk format is deliberately tiny — two strings:
//
//   {
//     "chars":    "abc ...z ",
//     "alphabet": "abc...z"
//   }
//
// `chars` lists the vocabulary characters in index order
// WITHOUT the EOS entry (the constructor appends it), and
// `alphabet` lists the substitution alphabet. Everything else
// (the inverse map, the EOS index) is rebuilt on load.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::domain::vocabulary::Vocabulary;

/// On-disk form of a vocabulary.
#[derive(Debug, Serialize, Deserialize)]
struct VocabFile {
    chars:    String,
    alphabet: String,
}

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load an existing vocabulary or build one from the corpus.
    /// The corpus is lowercased first, matching the lowercasing
    /// the batch former applies before filtering.
    pub fn load_or_build(&self, corpus: &str) -> Result<Vocabulary> {
        let path = self.dir.join("vocab.json");
        if path.exists() {
            tracing::info!("Loading existing vocabulary from disk");
            self.load()
        } else {
            tracing::info!("Building new vocabulary from corpus");
            self.build_and_save(corpus)
        }
    }

    /// Load a previously saved vocabulary from its JSON file
    pub fn load(&self) -> Result<Vocabulary> {
        let path = self.dir.join("vocab.json");

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;
        let vf: VocabFile = serde_json::from_str(&json)
            .with_context(|| format!("Malformed vocabulary file '{}'", path.display()))?;

        let vocab = Vocabulary::from_chars(&vf.chars, &vf.alphabet)
            .with_context(|| format!("Inconsistent vocabulary file '{}'", path.display()))?;

        tracing::info!("Vocabulary loaded: {} characters", vocab.len());
        Ok(vocab)
    }

    /// Build a vocabulary from the corpus and write it to disk
    fn build_and_save(&self, corpus: &str) -> Result<Vocabulary> {
        fs::create_dir_all(&self.dir).ok();

        let vocab = Vocabulary::from_corpus(&corpus.to_lowercase());

        // chars in index order, without the trailing EOS entry —
        // from_chars() appends it again on load
        let chars: String = vocab.chars()[..vocab.chars().len() - 1].iter().collect();
        let alphabet: String = vocab.alphabet().iter().collect();

        let path = self.dir.join("vocab.json");
        let json = serde_json::to_string_pretty(&VocabFile { chars, alphabet })?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::info!(
            "Vocabulary built with {} characters, saved to '{}'",
            vocab.len(),
            path.display()
        );
        Ok(vocab)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> VocabStore {
        let dir = std::env::temp_dir()
            .join(format!("spell_prep_vocab_{}_{}", tag, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        VocabStore::new(dir.to_str().unwrap())
    }

    #[test]
    fn test_build_then_load_round_trip() {
        let store = temp_store("roundtrip");

        let built  = store.load_or_build("The Quick Fox").unwrap();
        // second call must load the saved file, not rebuild
        let loaded = store.load_or_build("completely different text").unwrap();

        assert_eq!(built.chars(), loaded.chars());
        assert_eq!(built.alphabet(), loaded.alphabet());
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_load_without_file_fails() {
        let store = temp_store("missing");
        assert!(store.load().is_err());
    }
}
