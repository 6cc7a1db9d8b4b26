// ============================================================
// Layer 5 - Report Rendering
// ============================================================
//   layout.rs   - page/cell model and fixed page geometry
//   fonts.rs    - Helvetica glyph widths and text encoding
//   template.rs - header/footer drawn on every page
//   builder.rs  - explicit drawing state with page breaking
//   renderer.rs - what goes on each page
//   pdf.rs      - lopdf serialisation of the finished layout

pub mod layout;
pub mod fonts;
pub mod template;
pub mod builder;
pub mod renderer;
pub mod pdf;
