//! schemabox - table boxes for schema diagrams.
//!
//! Computes the geometry of one database table (a header cell plus one cell
//! per column) from font metrics and draws it as rectangles and text on a
//! [`canvas::Canvas`]. [`export::PageExport`] drives a whole page of tables.

pub mod canvas;
pub mod export;
pub mod metrics;
pub mod schema;
pub mod table;

pub use canvas::{Canvas, DrawCall, RecordingCanvas};
pub use export::{DiagramFormat, ExportError, PageExport, TablePlacement};
pub use metrics::{CharClassMetrics, FixedWidthMetrics, FontMetrics};
pub use schema::{Column, InMemorySchema, SchemaSource, TableSchema};
pub use table::{BoxStyle, LayoutConfig, LayoutError, SharedWidth, TableBox};
