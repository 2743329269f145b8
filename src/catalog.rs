//! Registry of every game in the gallery

use serde::{Deserialize, Serialize};

/// Stable identifier of a game, used in URLs and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameId {
    TicTacToe,
    RockPaperScissors,
    Hangman,
    NumberGuesser,
    WordScramble,
    MemoryMatch,
    ConnectFour,
    Snake,
    Minesweeper,
    TypingTest,
    Pong,
    BrickBreaker,
}

impl GameId {
    /// Gallery order
    pub const ALL: [GameId; 12] = [
        GameId::TicTacToe,
        GameId::RockPaperScissors,
        GameId::Hangman,
        GameId::NumberGuesser,
        GameId::WordScramble,
        GameId::MemoryMatch,
        GameId::ConnectFour,
        GameId::Snake,
        GameId::Minesweeper,
        GameId::TypingTest,
        GameId::Pong,
        GameId::BrickBreaker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::TicTacToe => "tic-tac-toe",
            GameId::RockPaperScissors => "rock-paper-scissors",
            GameId::Hangman => "hangman",
            GameId::NumberGuesser => "number-guesser",
            GameId::WordScramble => "word-scramble",
            GameId::MemoryMatch => "memory-match",
            GameId::ConnectFour => "connect-four",
            GameId::Snake => "snake",
            GameId::Minesweeper => "minesweeper",
            GameId::TypingTest => "typing-test",
            GameId::Pong => "pong",
            GameId::BrickBreaker => "brick-breaker",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Real-time games driven by a frame loop or interval timer
    pub fn is_arena(&self) -> bool {
        matches!(self, GameId::Pong | GameId::BrickBreaker | GameId::Snake)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameDescriptor {
    pub id: GameId,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor> {
    GameId::ALL
        .into_iter()
        .map(|id| GameDescriptor {
            id,
            name: name(id),
            description: description(id),
        })
        .collect()
}

pub fn find(id: GameId) -> GameDescriptor {
    GameDescriptor {
        id,
        name: name(id),
        description: description(id),
    }
}

fn name(id: GameId) -> &'static str {
    match id {
        GameId::TicTacToe => "Tic Tac Toe",
        GameId::RockPaperScissors => "Rock Paper Scissors",
        GameId::Hangman => "Hangman",
        GameId::NumberGuesser => "Number Guesser",
        GameId::WordScramble => "Word Scramble",
        GameId::MemoryMatch => "Memory Match",
        GameId::ConnectFour => "Connect Four",
        GameId::Snake => "Snake",
        GameId::Minesweeper => "Minesweeper",
        GameId::TypingTest => "Typing Test",
        GameId::Pong => "Pong",
        GameId::BrickBreaker => "Brick Breaker",
    }
}

fn description(id: GameId) -> &'static str {
    match id {
        GameId::TicTacToe => "Classic 3x3 grid game. Get three in a row to win.",
        GameId::RockPaperScissors => "The classic game of chance. Can you beat the computer?",
        GameId::Hangman => "Guess the hidden word letter by letter before you run out of tries.",
        GameId::NumberGuesser => "The computer has a secret number. Guess it in the fewest tries!",
        GameId::WordScramble => {
            "Unscramble the letters to form a valid word. A fun vocabulary test."
        }
        GameId::MemoryMatch => "Flip cards and find all the matching pairs. A test of your memory.",
        GameId::ConnectFour => "Drop your discs and be the first to get four in a row.",
        GameId::Snake => "Guide the snake to eat the food and grow longer without crashing.",
        GameId::Minesweeper => {
            "Clear the board without detonating any hidden mines. A game of logic."
        }
        GameId::TypingTest => "Test your typing speed and accuracy with a random paragraph.",
        GameId::Pong => {
            "The original arcade classic. Deflect the ball and outscore your opponent."
        }
        GameId::BrickBreaker => "Use the paddle to break all the bricks with the ball.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_every_game_once() {
        let games = registry();
        assert_eq!(games.len(), 12);
        for (i, game) in games.iter().enumerate() {
            assert!(games[i + 1..].iter().all(|g| g.id != game.id));
            assert!(!game.description.is_empty());
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for id in GameId::ALL {
            assert_eq!(GameId::from_str(id.as_str()), Some(id));
        }
        assert_eq!(GameId::from_str("Brick-Breaker"), Some(GameId::BrickBreaker));
        assert_eq!(GameId::from_str("tetris"), None);
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&GameId::TicTacToe).unwrap();
        assert_eq!(json, "\"tic-tac-toe\"");
        let descriptor = serde_json::to_value(find(GameId::Pong)).unwrap();
        assert_eq!(descriptor["name"], "Pong");
    }
}
