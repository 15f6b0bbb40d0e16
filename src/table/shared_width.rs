/// Widest box seen across a same-width group of tables.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SharedWidth {
    max: f64,
}

impl SharedWidth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, width: f64) {
        if self.max < width {
            self.max = width;
        }
    }

    pub fn get(&self) -> f64 {
        self.max
    }

    /// Post-pass reduction for widths computed independently of each other.
    pub fn fold<I: IntoIterator<Item = f64>>(widths: I) -> Self {
        let mut shared = Self::new();
        for width in widths {
            shared.observe(width);
        }
        shared
    }
}
