// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Side concerns that sit next to the report pipeline rather
// than inside it:
//
//   analysis_store.rs - JSON export of the computed Analysis
//                       (serde_json), for inspection or diffing
//
//   viewer.rs         - optional post-render hook that opens
//                       the report in the host's PDF viewer
//
// Neither is required for a report to be produced; both are
// wired in by the application layer when the config asks.

/// Analysis JSON export
pub mod analysis_store;

/// Open-in-viewer post-render hook
pub mod viewer;
