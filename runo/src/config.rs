//! Parameters a game is created with.

use crate::{
    constants::{DEFAULT_HAND_SIZE, DEFAULT_SEED, MAX_PLAYERS, MIN_PLAYERS},
    error::{Result, UnoError},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of seats, expected to be within 2..=4.
    pub player_count: usize,
    /// Seed for the deal and every later reshuffle.
    pub seed: u64,
    /// Cards dealt to each player at setup.
    pub hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: DEFAULT_SEED,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameConfig {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Brings `player_count` into 2..=4.
    pub fn clamped(mut self) -> Self {
        self.player_count = self.player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.player_count < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers(self.player_count));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers(self.player_count));
        }
        Ok(())
    }
}
