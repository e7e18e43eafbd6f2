/// Hides the header while scrolling down past `threshold`, shows it again
/// as soon as the visitor scrolls up.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderTracker {
    scrolled_threshold: f64,
    threshold: f64,
    last_y: f64,
    hidden: bool,
}

impl HeaderTracker {
    pub fn new(scrolled_threshold: f64, threshold: f64) -> Self {
        Self {
            scrolled_threshold,
            threshold,
            last_y: 0.0,
            hidden: false,
        }
    }

    /// Whether the page is far enough down for the compact header style.
    pub fn is_scrolled(&self, y: f64) -> bool {
        y > self.scrolled_threshold
    }

    /// Feeds a new scroll offset. Returns the new hidden state when it
    /// changed.
    pub fn update(&mut self, y: f64) -> Option<bool> {
        let hidden = if y > self.last_y && y > self.threshold {
            true
        } else if y < self.last_y {
            false
        } else {
            self.hidden
        };
        self.last_y = y;
        if hidden == self.hidden {
            return None;
        }
        self.hidden = hidden;
        Some(hidden)
    }
}
