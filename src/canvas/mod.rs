/// Drawing sink of a concrete output format. Coordinates are in the host
/// diagram's space.
pub trait Canvas {
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64);
    fn text(&mut self, text: &str, x: f64, y: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        line_width: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
    },
}

// Keeps every call in order, used by hosts that serialize later and by tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            DrawCall::Rect { .. } => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64) {
        self.calls.push(DrawCall::Rect { x, y, w, h, line_width });
    }

    fn text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}
