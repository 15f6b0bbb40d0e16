//! Text measurement used by the table layout.
//!
//! Widths are returned in the diagram's coordinate units. Implementations must
//! be deterministic: the same text, font and size always measure the same.

pub trait FontMetrics {
    fn measure(&self, text: &str, font: &str, size: u32) -> f64;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure(&self, text: &str, font: &str, size: u32) -> f64 {
        (**self).measure(text, font, size)
    }
}

/// Every character advances by the same amount, regardless of font and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMetrics {
    advance: f64,
}

impl FixedWidthMetrics {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl FontMetrics for FixedWidthMetrics {
    fn measure(&self, text: &str, _font: &str, _size: u32) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// Proportional approximation of a sans-serif face: each character belongs to
/// a width class, and its advance is the class factor times the font size.
/// The font name is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharClassMetrics;

impl CharClassMetrics {
    const BLANK: f64 = 0.28;
    const NARROW: f64 = 0.24;
    const SLIM: f64 = 0.34;
    const WIDE: f64 = 0.86;
    const UPPER: f64 = 0.67;
    const REGULAR: f64 = 0.56;

    pub fn new() -> Self {
        Self
    }

    fn factor(c: char) -> f64 {
        match c {
            ' ' => Self::BLANK,
            'i' | 'j' | 'l' | 'I' | '.' | ',' | ':' | ';' | '!' | '|' | '\'' => Self::NARROW,
            'f' | 'r' | 't' | '(' | ')' | '[' | ']' | '-' | '"' | '/' => Self::SLIM,
            'm' | 'w' | 'M' | 'W' | '@' => Self::WIDE,
            c if c.is_ascii_uppercase() => Self::UPPER,
            _ => Self::REGULAR,
        }
    }
}

impl FontMetrics for CharClassMetrics {
    fn measure(&self, text: &str, _font: &str, size: u32) -> f64 {
        let em: f64 = text.chars().map(Self::factor).sum();
        em * f64::from(size)
    }
}
