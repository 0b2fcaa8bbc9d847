use std::fmt;

use crate::card::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    pub fn sign(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "Clockwise"),
            Direction::CounterClockwise => write!(f, "Counter-clockwise"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(usize),
    Stalemate,
}

/// What the active player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(Card),
    DrawAndPlay(Card),
    Draw(Card),
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    Draw { victim: usize, drawn: usize },
    Won(usize),
    Stalemate,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub player: usize,
    pub action: Option<TurnAction>,
    pub turn_action_result: TurnActionResult,
}
