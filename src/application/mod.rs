// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (preparing a corpus or sampling pairs).
//
// Rules for this layer:
//   - No corruption or encoding math here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus preparation workflow
pub mod prepare_use_case;

// The pair inspection workflow
pub mod sample_use_case;
