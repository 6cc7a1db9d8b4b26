// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types describing what the report pipeline works on:
// records read from a CSV file, the analysis derived from them,
// and the errors each stage can raise.
//
// Rules for this layer:
//   - NO PDF or CSV crate types in the public data model
//   - NO file I/O
//   - Only structs, enums, and traits
//
// Everything here can be unit tested without touching disk.

// Rows and the dataset that owns them
pub mod record;

// Per-column statistics and the full analysis
pub mod analysis;

// Typed errors raised by the loader and the renderer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
