use crate::card::{Card, CardKind};

/// Special kinds tried, in order, once color and rank/kind matching failed.
const SPECIAL_PREFERENCE: [CardKind; 3] = [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo];

#[derive(Debug)]
pub struct Player {
    pub id: usize,
    pub(crate) hand: Vec<Card>,
}

impl Player {
    pub fn new(id: usize, cards: Vec<Card>) -> Self {
        Self { id, hand: cards }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_no_cards(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub fn has_playable_card(&self, top: &Card) -> bool {
        self.hand.iter().any(|card| card.is_playable_on(top))
    }

    /// Picks the card to play on `top`, first match in hand order wins:
    /// same color, then same rank or same special kind, then Skip, Reverse
    /// and DrawTwo in that order.
    pub fn choose_card_index(&self, top: &Card) -> Option<usize> {
        if let Some(index) = self.hand.iter().position(|card| card.color == top.color) {
            return Some(index);
        }

        if let Some(index) = self.hand.iter().position(|card| card.matches_face(top)) {
            return Some(index);
        }

        SPECIAL_PREFERENCE.iter().find_map(|wanted| {
            self.hand
                .iter()
                .position(|card| card.kind == *wanted && card.is_playable_on(top))
        })
    }
}
