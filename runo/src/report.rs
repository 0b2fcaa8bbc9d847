use std::fmt;

use crate::turn::GameStatus;
use crate::uno::Uno;

impl Uno {
    /// One-line summary of whose turn it is, the top card and hand sizes.
    pub fn describe_state(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Uno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {}'s turn, Direction: {}",
            self.current_player(),
            self.direction()
        )?;

        match self.get_last_played_card() {
            Some(card) => write!(f, ", Top: {card}")?,
            None => write!(f, ", Top: (none)")?,
        }

        let hands = self
            .get_players()
            .iter()
            .map(|player| format!("P{}:{}", player.id, player.cards_count()))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, ", Players cards: {hands}")?;

        match self.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::Won(player) => write!(f, ", Winner: P{player}"),
            GameStatus::Stalemate => write!(f, ", Stalemate"),
        }
    }
}
