//! Memory Match: find the eight pairs in a shuffled 4x4 deck

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::error::GameError;
use crate::seeded_rng;

pub const SYMBOLS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];
/// How long a mismatched pair stays face up before the host hides it
pub const MISMATCH_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub symbol: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

/// What a flip did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Card already up, or two cards are waiting to be hidden
    Ignored,
    First,
    Matched,
    /// Both cards stay up until `hide_mismatch`
    Mismatched,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryMatch {
    pub cards: Vec<Card>,
    pub moves: u32,
    /// Face-up cards not yet matched, at most two
    pub pending: Vec<usize>,
    #[serde(skip)]
    rng: Pcg32,
}

impl MemoryMatch {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            cards: Vec::new(),
            moves: 0,
            pending: Vec::new(),
            rng: seeded_rng(seed),
        };
        game.deal();
        game
    }

    fn deal(&mut self) {
        let mut symbols: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        // Fisher-Yates
        symbols.shuffle(&mut self.rng);
        self.cards = symbols
            .into_iter()
            .map(|symbol| Card {
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();
        self.moves = 0;
        self.pending.clear();
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::OutOfBounds {
                index,
                len: self.cards.len(),
            });
        }
        if self.pending.len() >= 2 || self.cards[index].face_up {
            return Ok(FlipOutcome::Ignored);
        }

        self.cards[index].face_up = true;
        self.pending.push(index);
        if self.pending.len() == 1 {
            self.moves += 1;
            return Ok(FlipOutcome::First);
        }

        let (a, b) = (self.pending[0], self.pending[1]);
        if self.cards[a].symbol == self.cards[b].symbol {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            self.pending.clear();
            if self.is_won() {
                log::info!("Memory Match won in {} moves", self.moves);
            }
            Ok(FlipOutcome::Matched)
        } else {
            Ok(FlipOutcome::Mismatched)
        }
    }

    /// Turn a mismatched pair back over. Call after `MISMATCH_DELAY_MS`.
    pub fn hide_mismatch(&mut self) {
        if self.pending.len() < 2 {
            return;
        }
        for i in self.pending.drain(..) {
            self.cards[i].face_up = false;
        }
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    pub fn is_won(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    /// Reshuffle and start over
    pub fn reset(&mut self) {
        self.deal();
    }
}
