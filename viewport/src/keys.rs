use crate::{KeyCode, TimestampMs};

/// Default window during which repeated keydowns of the same key are folded into one.
pub const KEY_REPEAT_WINDOW_MS: u64 = 200;

/// Folds OS auto-repeat keydowns into a single `keypress`.
///
/// A keydown is accepted when its code differs from the last accepted one, or when at least
/// `window_ms` elapsed since the last accepted keydown (of any key). A keyup forgets the last
/// code, so the next keydown is always accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyCoalescer {
    last_key: Option<KeyCode>,
    last_time_ms: TimestampMs,
    window_ms: u64,
}

impl KeyCoalescer {
    pub fn new(now_ms: TimestampMs) -> Self {
        Self::with_window(now_ms, KEY_REPEAT_WINDOW_MS)
    }

    pub fn with_window(now_ms: TimestampMs, window_ms: u64) -> Self {
        Self {
            last_key: None,
            last_time_ms: now_ms,
            window_ms,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn last_key(&self) -> Option<KeyCode> {
        self.last_key
    }

    /// Returns `true` when the keydown should be published.
    pub fn key_down(&mut self, key_code: KeyCode, now_ms: TimestampMs) -> bool {
        // A clock going backwards counts as no time elapsed.
        let elapsed = (now_ms - self.last_time_ms).max(0.0);
        if self.last_key == Some(key_code) && elapsed < self.window_ms as f64 {
            vtrace!(key_code, elapsed, "keydown coalesced");
            return false;
        }
        self.last_key = Some(key_code);
        self.last_time_ms = now_ms;
        true
    }

    pub fn key_up(&mut self) {
        self.last_key = None;
    }
}
