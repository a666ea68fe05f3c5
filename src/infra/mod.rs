// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   vocab_store.rs — Vocabulary persistence
//                    Builds a character vocabulary from the
//                    corpus if none exists, or loads a
//                    previously saved one. Ensures the same
//                    index tables are used across runs —
//                    a model trained against one table cannot
//                    read batches encoded with another.
//
//   batch_store.rs — Prepared-corpus persistence
//                    Saves/loads the batch corpus and the
//                    PrepareConfig as JSON so a training run
//                    can reproduce exactly how its data was
//                    made.
//
//   stats.rs       — Per-batch statistics logging
//                    Writes batch-level stats (sentence counts,
//                    mean clean/noisy lengths) to a CSV file
//                    for later analysis and plotting.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap JSON files for a database)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary building, saving, and loading
pub mod vocab_store;

/// Prepared corpus and config saving and loading
pub mod batch_store;

/// Per-batch statistics CSV logger
pub mod stats;
