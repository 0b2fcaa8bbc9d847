use std::fmt::Debug;

use thiserror::Error;

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players: {0} given, at least {} required", MIN_PLAYERS)]
    NotEnoughPlayers(usize),
    #[error("Too many players: {0} given, at most {} allowed", MAX_PLAYERS)]
    TooManyPlayers(usize),
    #[error("No player at seat {0}")]
    UnknownPlayer(usize),
    #[error("Player {0} cannot be left without cards")]
    EmptyHand(usize),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
