//! Snake on a square grid, advanced on a shrinking interval
//!
//! The first arrow key starts the run. Eating food grows the snake, adds a
//! point and shortens the move interval down to a floor.

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::frame::{ArenaGame, IntervalTimer};
use super::input::{Direction, Heading, TickInput};
use super::state::{GameEvent, GamePhase};
use crate::consts::*;
use crate::seeded_rng;
use crate::settings::SnakeTuning;

/// Head position at the start of every run
pub const START_CELL: IVec2 = IVec2::new(10, 10);
/// Food position at the start of every run
pub const START_FOOD: IVec2 = IVec2::new(15, 15);

/// Complete Snake state
#[derive(Debug, Clone, Serialize)]
pub struct Snake {
    pub phase: GamePhase,
    /// Head first
    pub body: VecDeque<IVec2>,
    pub food: IVec2,
    pub heading: Heading,
    pub score: u32,
    /// Current move interval in milliseconds
    pub interval_ms: u32,
    #[serde(skip)]
    timer: IntervalTimer,
    #[serde(skip)]
    tuning: SnakeTuning,
    #[serde(skip)]
    rng: Pcg32,
}

impl Snake {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, SnakeTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: SnakeTuning) -> Self {
        Self {
            phase: GamePhase::Start,
            body: VecDeque::from([START_CELL]),
            food: START_FOOD,
            heading: Heading::new(Direction::Right),
            score: 0,
            interval_ms: tuning.start_interval_ms,
            timer: IntervalTimer::new(tuning.start_interval_ms),
            tuning,
            rng: seeded_rng(seed),
        }
    }

    pub fn head(&self) -> IVec2 {
        self.body[0]
    }

    fn in_bounds(cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < SNAKE_GRID && cell.y >= 0 && cell.y < SNAKE_GRID
    }

    /// Arrow key pressed. Starts the run from the start screen.
    pub fn press(&mut self, direction: Direction) -> bool {
        if self.phase.is_over() {
            return false;
        }
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Playing;
            log::info!("Snake started");
        }
        self.heading.request(direction)
    }

    /// Back to the start screen with a fresh snake
    pub fn reset(&mut self) {
        self.body = VecDeque::from([START_CELL]);
        self.heading = Heading::new(Direction::Right);
        self.score = 0;
        self.interval_ms = self.tuning.start_interval_ms;
        self.timer = IntervalTimer::new(self.interval_ms);
        self.phase = GamePhase::Start;
        self.place_food();
    }

    /// Feed host elapsed time; runs every move that is due
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<GameEvent> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        let due = self.timer.advance(elapsed_ms);
        let mut events = Vec::new();
        for _ in 0..due {
            events.extend(self.step(&TickInput::default()));
            if self.phase != GamePhase::Playing {
                break;
            }
        }
        events
    }

    /// Move food to a random free cell. Returns false when the board is full.
    fn place_food(&mut self) -> bool {
        let free: Vec<IVec2> = (0..SNAKE_GRID)
            .flat_map(|y| (0..SNAKE_GRID).map(move |x| IVec2::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        if free.is_empty() {
            return false;
        }
        self.food = free[self.rng.random_range(0..free.len())];
        true
    }

    fn crash(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = GamePhase::Lost;
        events.push(GameEvent::Crashed);
        events.push(GameEvent::Lost);
        log::info!("Snake crashed with length {}, score {}", self.body.len(), self.score);
    }
}

impl ArenaGame for Snake {
    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn start(&mut self) {
        match self.phase {
            GamePhase::Playing => return,
            GamePhase::Start => {}
            GamePhase::Won | GamePhase::Lost => self.reset(),
        }
        self.phase = GamePhase::Playing;
        log::info!("Snake started");
    }

    /// One move of the snake
    fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Playing {
            return events;
        }
        if let Some(turn) = input.turn {
            self.heading.request(turn);
        }

        let head = self.head() + self.heading.commit().delta();

        if !Self::in_bounds(head) || self.body.contains(&head) {
            self.crash(&mut events);
            return events;
        }

        self.body.push_front(head);

        if head == self.food {
            self.score += 1;
            let next = (self.interval_ms as f32 * self.tuning.speedup).round() as u32;
            self.interval_ms = next.max(self.tuning.min_interval_ms);
            self.timer.set_period(self.interval_ms);
            events.push(GameEvent::FoodEaten { score: self.score });
            if !self.place_food() {
                self.phase = GamePhase::Won;
                events.push(GameEvent::Won);
                log::info!("Snake filled the board, score {}", self.score);
            }
        } else {
            self.body.pop_back();
        }

        events
    }
}
