pub mod page;

use std::fmt;

use thiserror::Error;

use crate::table::LayoutError;

pub use page::{PageExport, TablePlacement};

/// Output format a page is exported to. Only used to tag error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramFormat {
    Eps,
    Pdf,
    Svg,
    Dia,
}

impl fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DiagramFormat::Eps => "EPS",
            DiagramFormat::Pdf => "PDF",
            DiagramFormat::Svg => "SVG",
            DiagramFormat::Dia => "Dia",
        };
        f.write_str(tag)
    }
}

// Any of these aborts the whole export of the page.
#[derive(Error, Debug, PartialEq)]
pub enum ExportError {
    #[error("ExportError - {format} schema, page {page}: The {table} table doesn't exist!")]
    TableNotFound {
        page: u32,
        format: DiagramFormat,
        table: String,
    },
    #[error("ExportError - layout error: {0}")]
    Layout(#[from] LayoutError),
}
