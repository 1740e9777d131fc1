//! Typewriter title reveal
//!
//! Reveals the configured text one character per cadence after an initial
//! delay. Once complete it stays complete; the visible prefix is always a
//! valid char boundary.

use std::time::Duration;

pub struct Typewriter {
    text: String,
    /// Byte offsets of each char boundary, ending with text.len()
    boundaries: Vec<usize>,
    visible_chars: usize,
    cadence: Duration,
    delay: Duration,
    clock: Duration,
}

impl Typewriter {
    /// Create a typewriter over `text` with the default 500 ms start delay
    pub fn new(text: impl Into<String>, cadence: Duration) -> Self {
        Self::with_delay(text, cadence, Duration::from_millis(500))
    }

    pub fn with_delay(text: impl Into<String>, cadence: Duration, delay: Duration) -> Self {
        let text = text.into();
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());

        Self {
            text,
            boundaries,
            visible_chars: 0,
            cadence,
            delay,
            clock: Duration::ZERO,
        }
    }

    /// Advance the reveal
    pub fn update(&mut self, dt: Duration) {
        if self.is_done() {
            return;
        }

        self.clock += dt;
        if self.clock < self.delay {
            return;
        }

        let typing = self.clock - self.delay;
        let due = if self.cadence.is_zero() {
            self.char_count()
        } else {
            (typing.as_millis() / self.cadence.as_millis().max(1)) as usize + 1
        };
        self.visible_chars = due.min(self.char_count());
    }

    /// The currently revealed prefix
    pub fn visible(&self) -> &str {
        &self.text[..self.boundaries[self.visible_chars]]
    }

    /// The full text
    pub fn full_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.visible_chars == self.char_count()
    }

    #[inline]
    fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_nothing_visible_during_delay() {
        let mut tw = Typewriter::new("hello", ms(80));
        tw.update(ms(499));
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_done());
    }

    #[test]
    fn test_reveals_in_order() {
        let mut tw = Typewriter::new("hello", ms(80));
        tw.update(ms(500));
        assert_eq!(tw.visible(), "h");
        tw.update(ms(80));
        assert_eq!(tw.visible(), "he");
        tw.update(ms(240));
        assert_eq!(tw.visible(), "hello");
        assert!(tw.is_done());
    }

    #[test]
    fn test_stays_complete() {
        let mut tw = Typewriter::new("hi", ms(80));
        tw.update(ms(10_000));
        assert_eq!(tw.visible(), "hi");
        tw.update(ms(10_000));
        assert_eq!(tw.visible(), "hi");
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("Προσκοπικό", ms(10));
        tw.update(ms(505));
        // Every prefix is a valid char boundary
        for _ in 0..20 {
            tw.update(ms(10));
            let v = tw.visible();
            assert!(tw.full_text().starts_with(v));
        }
        assert!(tw.is_done());
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut tw = Typewriter::new("", ms(80));
        assert!(tw.is_done());
        assert_eq!(tw.visible(), "");
    }
}
