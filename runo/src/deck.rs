use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, CardKind},
    constants::*,
    shuffle::Shuffler,
};

/// The draw pile. The top card is the last element.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// The full 100 card deck, unshuffled.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::new(color, CardKind::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::new(color, CardKind::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::new(color, CardKind::DrawTwo));
            }
        }

        Self(cards)
    }

    pub(crate) fn shuffle(&mut self, shuffler: &mut Shuffler) {
        shuffler.shuffle(&mut self.0);
    }

    pub(crate) fn draw_card(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
