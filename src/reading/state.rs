use crate::engine::config::{MIN_RATE, RATE_STEP};
use crate::reading::Token;
use std::time::Duration;

/// Position, pace and pause flag of a reading session.
///
/// `cursor` is the index of the next token to present; the token on screen
/// is the one just before it.
pub struct ReadingState<'a> {
    pub tokens: Vec<Token<'a>>,
    pub cursor: usize,
    pub rate: u32,
    pub paused: bool,
}

impl<'a> ReadingState<'a> {
    pub fn new(tokens: Vec<Token<'a>>, rate: u32) -> Self {
        Self {
            tokens,
            cursor: 0,
            rate: rate.max(MIN_RATE),
            paused: false,
        }
    }

    /// Takes the next token and moves the cursor past it.
    /// Returns `None` once the sequence is exhausted.
    pub fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(token)
    }

    /// Moves the cursor back so the next `advance` yields the word before
    /// the one on screen.
    pub fn step_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(2);
    }

    pub fn speed_up(&mut self) {
        self.adjust_rate(RATE_STEP as i64);
    }

    pub fn slow_down(&mut self) {
        self.adjust_rate(-(RATE_STEP as i64));
    }

    pub fn adjust_rate(&mut self, delta: i64) {
        let rate = (self.rate as i64 + delta).clamp(MIN_RATE as i64, u32::MAX as i64);
        self.rate = rate as u32;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

/// `60,000,000 / rate` microseconds; a zero rate is treated as one word per minute.
pub fn dwell_time(rate: u32) -> Duration {
    Duration::from_micros(60_000_000 / u64::from(rate.max(MIN_RATE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &'static [u8]) -> ReadingState<'static> {
        let tokens = crate::reading::tokenize(text, false).unwrap();
        ReadingState::new(tokens, 120)
    }

    #[test]
    fn test_readingstate_initialization() {
        let state = state(b"hello world");
        assert_eq!(state.cursor, 0);
        assert_eq!(state.rate, 120);
        assert!(!state.paused);
        assert_eq!(state.tokens.len(), 2);
    }

    #[test]
    fn test_readingstate_advance_until_exhausted() {
        let mut state = state(b"hello world");
        assert_eq!(state.advance().unwrap().text, b"hello");
        assert_eq!(state.advance().unwrap().text, b"world");
        assert!(state.advance().is_none());
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_step_back_clamps_at_zero() {
        let mut state = state(b"a b c");
        state.step_back();
        assert_eq!(state.cursor, 0);
        state.cursor = 1;
        state.step_back();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_step_back_returns_previous_word() {
        let mut state = state(b"a b c");
        state.advance();
        state.advance();
        // "b" is on screen
        state.step_back();
        assert_eq!(state.advance().unwrap().text, b"a");
    }

    #[test]
    fn test_rate_adjust_increase() {
        let mut state = state(b"a");
        state.speed_up();
        assert_eq!(state.rate, 130);
    }

    #[test]
    fn test_rate_adjust_minimum_bound() {
        let mut state = ReadingState::new(vec![], 5);
        for _ in 0..5 {
            state.slow_down();
            assert_eq!(state.rate, 1);
        }
        assert_eq!(dwell_time(state.rate), Duration::from_secs(60));
    }

    #[test]
    fn test_rate_adjust_saturates_at_top() {
        let mut state = ReadingState::new(vec![], u32::MAX - 3);
        state.speed_up();
        assert_eq!(state.rate, u32::MAX);
    }

    #[test]
    fn test_zero_rate_is_raised() {
        let state = ReadingState::new(vec![], 0);
        assert_eq!(state.rate, 1);
    }

    #[test]
    fn test_dwell_time() {
        assert_eq!(dwell_time(120), Duration::from_millis(500));
        assert_eq!(dwell_time(300), Duration::from_millis(200));
        assert_eq!(dwell_time(0), Duration::from_secs(60));
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = state(b"a");
        state.toggle_pause();
        assert!(state.paused);
        state.toggle_pause();
        assert!(!state.paused);
    }
}
