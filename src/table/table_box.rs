use derive_getters::Getters;
use tracing::{debug, trace};

use crate::{
    canvas::Canvas,
    metrics::FontMetrics,
    table::{LayoutConfig, LayoutError, SharedWidth},
};

/// Presentation settings shared by all tables of one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub font: String,
    pub font_size: u32,
    pub show_keys: bool,
    pub show_dimensions: bool,
}

impl BoxStyle {
    pub fn new(font: &str, font_size: u32) -> Self {
        Self {
            font: font.to_string(),
            font_size,
            show_keys: false,
            show_dimensions: false,
        }
    }

    pub fn with_keys(mut self, show_keys: bool) -> Self {
        self.show_keys = show_keys;
        self
    }

    pub fn with_dimensions(mut self, show_dimensions: bool) -> Self {
        self.show_dimensions = show_dimensions;
        self
    }
}

// Box layout
// ------------
// y + header_offset:                 header (title)
// y + header_offset + row_height:    column 1
// y + header_offset + 2*row_height:  column 2
// ...
#[derive(Debug, Clone, Getters)]
pub struct TableBox {
    table_name: String,
    columns: Vec<String>,
    x: f64,
    y: f64,
    width: f64,
    // includes the header row
    height: f64,
    row_height: f64,
    font: String,
    font_size: u32,
    show_keys: bool,
    show_dimensions: bool,
    #[getter(skip)]
    draw_cursor: f64,
    #[getter(skip)]
    config: LayoutConfig,
}

impl TableBox {
    pub fn new<M: FontMetrics + ?Sized>(
        table_name: &str,
        columns: Vec<String>,
        style: &BoxStyle,
        metrics: &M,
        shared: &mut SharedWidth,
    ) -> Result<Self, LayoutError> {
        Self::with_config(table_name, columns, style, metrics, shared, &LayoutConfig::default())
    }

    pub fn with_config<M: FontMetrics + ?Sized>(
        table_name: &str,
        columns: Vec<String>,
        style: &BoxStyle,
        metrics: &M,
        shared: &mut SharedWidth,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        if style.font_size == 0 {
            return Err(LayoutError::InvalidFontSize(table_name.to_string()));
        }
        config
            .validate()
            .map_err(|err| LayoutError::InvalidConfig(err.to_string()))?;

        let mut table = Self {
            table_name: table_name.to_string(),
            columns,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            row_height: 0.0,
            font: style.font.clone(),
            font_size: style.font_size,
            show_keys: style.show_keys,
            show_dimensions: style.show_dimensions,
            draw_cursor: 0.0,
            config: config.clone(),
        };

        // height first: the title may embed it, and the width depends on the title
        table.layout_height();
        table.layout_width(metrics)?;
        shared.observe(table.width);

        debug!(
            table = %table.table_name,
            width = table.width,
            height = table.height,
            "table box laid out"
        );
        Ok(table)
    }

    fn layout_height(&mut self) {
        self.row_height = f64::from(self.font_size) + f64::from(self.config.row_margin);
        self.height = (self.columns.len() + 1) as f64 * self.row_height;
    }

    fn layout_width<M: FontMetrics + ?Sized>(&mut self, metrics: &M) -> Result<(), LayoutError> {
        self.width = 0.0;
        for label in &self.columns {
            self.width = self.width.max(metrics.measure(label, &self.font, self.font_size));
        }
        self.width += metrics.measure(&self.config.margin(), &self.font, self.font_size);

        // the title can contain the width itself, so there is no closed form
        let mut iterations = 0;
        while self.width < metrics.measure(&self.title(), &self.font, self.font_size) {
            if iterations == self.config.max_widen_iterations {
                return Err(LayoutError::WidthDidNotConverge {
                    table: self.table_name.clone(),
                    iterations,
                });
            }
            self.width += self.config.widen_step;
            iterations += 1;
        }
        trace!(table = %self.table_name, iterations, "title widening done");

        Ok(())
    }

    pub fn title(&self) -> String {
        if self.show_dimensions {
            format!("{} ({:.0}x{:.0})", self.table_name, self.width, self.height)
        } else {
            self.table_name.clone()
        }
    }

    pub fn place(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Widens the box to the width of its same-width group. Never shrinks.
    pub fn align_width(&mut self, width: f64) {
        if self.width < width {
            self.width = width;
        }
    }

    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, _show_color: bool) {
        self.draw_cursor = 0.0;

        let title = self.title();
        let config = &self.config;
        canvas.rect(
            self.x,
            self.y + config.header_offset,
            self.width,
            self.row_height,
            config.border_width,
        );
        canvas.text(&title, self.x + config.text_inset, self.y + config.text_offset);

        for label in &self.columns {
            self.draw_cursor += self.row_height;
            canvas.rect(
                self.x,
                self.y + config.header_offset + self.draw_cursor,
                self.width,
                self.row_height,
                config.border_width,
            );
            canvas.text(
                label,
                self.x + config.text_inset,
                self.y + config.text_offset + self.draw_cursor,
            );
        }
    }
}
