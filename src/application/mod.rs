// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each.
//
// Rules for this layer:
//   - No parsing or arithmetic here (that's Layer 4)
//   - No drawing code here (that's Layer 5)
//   - No printing here (that's Layer 1); progress goes through tracing
//   - Only workflow coordination

// Load → analyse → render → optional hook
pub mod report_use_case;

// Load → analyse, no report
pub mod analyze_use_case;
