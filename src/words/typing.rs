//! Typing Test: type a fixed passage, scored on speed and accuracy
//!
//! Timestamps come from the host in milliseconds. The clock starts on the
//! first non-empty input and stops once the typed text is as long as the
//! passage.

use serde::Serialize;

pub const PASSAGE: &str = "The quick brown fox jumps over the lazy dog. This sentence contains all the letters of the alphabet. A developer's journey is filled with challenges, learning, and immense satisfaction. Writing clean, efficient, and maintainable code is a skill that is honed over time with practice and dedication. Keep typing, keep learning, and keep building amazing things.";

/// Highlight state of one passage character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CharMark {
    Correct,
    Wrong,
    Pending,
}

/// Words per minute, rounded. Zero for a zero-length duration.
pub fn words_per_minute(text: &str, elapsed_ms: u64) -> u32 {
    if elapsed_ms == 0 {
        return 0;
    }
    let words = text.split_whitespace().count().max(1) as f64;
    let minutes = elapsed_ms as f64 / 60_000.0;
    (words / minutes).round() as u32
}

/// Share of passage characters typed correctly in place, as a rounded percent
pub fn accuracy(typed: &str, passage: &str) -> u32 {
    let total = passage.chars().count();
    if total == 0 {
        return 100;
    }
    let correct = typed
        .chars()
        .zip(passage.chars())
        .filter(|(a, b)| a == b)
        .count();
    (correct as f64 / total as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Serialize)]
pub struct TypingTest {
    pub passage: String,
    pub typed: String,
    started_at: Option<u64>,
    /// Set once finished
    pub elapsed_ms: Option<u64>,
    pub wpm: u32,
    pub accuracy: u32,
}

impl Default for TypingTest {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingTest {
    pub fn new() -> Self {
        Self::with_passage(PASSAGE)
    }

    pub fn with_passage(passage: &str) -> Self {
        Self {
            passage: passage.to_string(),
            typed: String::new(),
            started_at: None,
            elapsed_ms: None,
            wpm: 0,
            accuracy: 100,
        }
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some() && self.elapsed_ms.is_none()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms.is_some()
    }

    /// Time on the clock at `now_ms`
    pub fn clock_ms(&self, now_ms: u64) -> u64 {
        match (self.elapsed_ms, self.started_at) {
            (Some(elapsed), _) => elapsed,
            (None, Some(start)) => now_ms.saturating_sub(start),
            (None, None) => 0,
        }
    }

    /// Replace the typed text. Returns true when this input finished the test.
    pub fn input(&mut self, text: &str, now_ms: u64) -> bool {
        if self.is_finished() {
            return false;
        }
        if self.started_at.is_none() && !text.is_empty() {
            self.started_at = Some(now_ms);
            log::debug!("Typing test started");
        }
        self.typed = text.to_string();

        if self.typed.chars().count() < self.passage.chars().count() {
            return false;
        }
        let elapsed = self.clock_ms(now_ms);
        self.elapsed_ms = Some(elapsed);
        self.wpm = words_per_minute(&self.typed, elapsed);
        self.accuracy = accuracy(&self.typed, &self.passage);
        log::info!(
            "Typing test finished: {} WPM, {}% accuracy",
            self.wpm,
            self.accuracy
        );
        true
    }

    /// Per-character highlight of the passage
    pub fn marks(&self) -> Vec<CharMark> {
        let mut typed = self.typed.chars();
        self.passage
            .chars()
            .map(|expected| match typed.next() {
                Some(c) if c == expected => CharMark::Correct,
                Some(_) => CharMark::Wrong,
                None => CharMark::Pending,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::with_passage(&self.passage);
    }
}
