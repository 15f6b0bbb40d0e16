use tracing::{debug, warn};

use crate::{
    canvas::Canvas,
    export::{DiagramFormat, ExportError},
    metrics::FontMetrics,
    schema::SchemaSource,
    table::{BoxStyle, LayoutConfig, SharedWidth, TableBox},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TablePlacement {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl TablePlacement {
    pub fn new(name: &str, x: f64, y: f64) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
        }
    }
}

/// Lays out and draws all tables of one diagram page.
///
/// Every table is resolved and laid out before anything is drawn, so a
/// missing table aborts the page with an empty canvas.
pub struct PageExport<'a, S: SchemaSource + ?Sized, M: FontMetrics + ?Sized> {
    source: &'a S,
    metrics: &'a M,
    database: String,
    page: u32,
    format: DiagramFormat,
    style: BoxStyle,
    config: LayoutConfig,
    same_width: bool,
    show_color: bool,
}

impl<'a, S: SchemaSource + ?Sized, M: FontMetrics + ?Sized> PageExport<'a, S, M> {
    pub fn new(source: &'a S, metrics: &'a M, database: &str, page: u32, style: BoxStyle) -> Self {
        Self {
            source,
            metrics,
            database: database.to_string(),
            page,
            format: DiagramFormat::Eps,
            style,
            config: LayoutConfig::default(),
            same_width: false,
            show_color: false,
        }
    }

    pub fn with_format(mut self, format: DiagramFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_same_width(mut self, same_width: bool) -> Self {
        self.same_width = same_width;
        self
    }

    pub fn with_color(mut self, show_color: bool) -> Self {
        self.show_color = show_color;
        self
    }

    fn resolve(&self, table: &str) -> Result<Vec<String>, ExportError> {
        match self.source.table(&self.database, table) {
            Some(schema) if !schema.columns.is_empty() => Ok(schema.labels(self.style.show_keys)),
            _ => {
                warn!(
                    page = self.page,
                    format = %self.format,
                    table,
                    "table not found, aborting export"
                );
                Err(ExportError::TableNotFound {
                    page: self.page,
                    format: self.format,
                    table: table.to_string(),
                })
            }
        }
    }

    pub fn layout(&self, placements: &[TablePlacement]) -> Result<Vec<TableBox>, ExportError> {
        let mut shared = SharedWidth::new();
        let mut boxes = Vec::with_capacity(placements.len());

        for placement in placements {
            let columns = self.resolve(&placement.name)?;
            let mut table = TableBox::with_config(
                &placement.name,
                columns,
                &self.style,
                self.metrics,
                &mut shared,
                &self.config,
            )?;
            table.place(placement.x, placement.y);
            boxes.push(table);
        }

        if self.same_width {
            for table in &mut boxes {
                table.align_width(shared.get());
            }
        }

        Ok(boxes)
    }

    pub fn export<C: Canvas + ?Sized>(
        &self,
        placements: &[TablePlacement],
        canvas: &mut C,
    ) -> Result<Vec<TableBox>, ExportError> {
        let mut boxes = self.layout(placements)?;
        for table in &mut boxes {
            table.render(canvas, self.show_color);
        }

        debug!(page = self.page, format = %self.format, tables = boxes.len(), "page exported");
        Ok(boxes)
    }
}
