pub mod layout;
pub mod shared_width;
pub mod table_box;

use thiserror::Error;

pub use layout::{ConfigError, LayoutConfig};
pub use shared_width::SharedWidth;
pub use table_box::{BoxStyle, TableBox};

#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("LayoutError - font size must be greater than 0 for table '{0}'")]
    InvalidFontSize(String),
    #[error("LayoutError - invalid layout config: {0}")]
    InvalidConfig(String),
    #[error("LayoutError - title of table '{table}' did not fit after {iterations} widening steps")]
    WidthDidNotConverge { table: String, iterations: usize },
}
