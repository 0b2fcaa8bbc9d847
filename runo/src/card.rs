use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

/// What a card does. Only number cards carry a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl CardKind {
    pub fn is_special(&self) -> bool {
        !matches!(self, CardKind::Number(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: CardColor,
    pub kind: CardKind,
}

impl Card {
    pub const fn new(color: CardColor, kind: CardKind) -> Self {
        Self { color, kind }
    }

    pub const fn number(color: CardColor, rank: u8) -> Self {
        Self::new(color, CardKind::Number(rank))
    }

    /// Same rank for two numbers, same kind for two specials. Color is ignored.
    pub fn matches_face(&self, top: &Card) -> bool {
        match (self.kind, top.kind) {
            (CardKind::Number(rank), CardKind::Number(top_rank)) => rank == top_rank,
            (kind, top_kind) => kind.is_special() && kind == top_kind,
        }
    }

    pub fn is_playable_on(&self, top: &Card) -> bool {
        self.color == top.color || self.matches_face(top)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, {
            match self.kind {
                CardKind::Number(rank) => rank.to_string(),
                CardKind::Skip => "Skip".to_string(),
                CardKind::Reverse => "Reverse".to_string(),
                CardKind::DrawTwo => "DrawTwo".to_string(),
            }
        })
    }
}
