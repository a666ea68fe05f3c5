// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw corpus articles
// all the way to tensor-ready sentence-pair batches.
//
// The pipeline flows in this order:
//
//   corpus feed (JSONL / .txt files)
//       │
//       ▼
//   JsonlLoader / TextDirLoader → reads articles, extracts raw text
//       │
//       ▼
//   TextFilter        → keeps only vocabulary characters
//       │
//       ▼
//   Segmenter         → cuts text into fixed-word-count sentences
//       │
//       ▼
//   noise             → injects synthetic typos (inputs only)
//       │
//       ▼
//   codec             → maps characters to index sequences + EOS
//       │
//       ▼
//   BatchFormer       → groups pairs into fixed-size batches
//       │
//       ▼
//   PairDataset       → implements Burn's Dataset trait
//       │
//       ▼
//   PairBatcher       → turns pairs into per-sentence Int tensors
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads articles from JSONL dumps or directories of .txt files
pub mod loader;

/// Strips characters outside the vocabulary from raw text
pub mod filter;

/// Character ↔ index sequence codec with EOS termination
pub mod codec;

/// Probabilistic typo injection (delete, substitute, swap, drop-space)
pub mod noise;

/// Cuts filtered text into sentences of a fixed word count
pub mod segmenter;

/// Drives the pipeline: forms (noisy, clean) batches with lengths
pub mod batcher;

/// Implements Burn's Dataset trait over sentence pairs
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod collator;
