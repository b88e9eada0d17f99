//! Rising-edge detection for held buttons

/// Turns a held/unheld signal into one pulse per press
///
/// Call [`update`](EdgeDetector::update) exactly once per input sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the raw state; true only on a false→true transition
    pub fn update(&mut self, raw: bool) -> bool {
        let rising = raw && !self.previous;
        self.previous = raw;
        rising
    }
}
