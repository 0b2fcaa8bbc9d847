use tracing::{debug, info, trace, warn};

use crate::card::{Card, CardKind};
use crate::config::GameConfig;
use crate::constants::DRAW_TWO_PENALTY;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::shuffle::Shuffler;
use crate::turn::{Direction, GameStatus, PlayTurnResult, TurnAction, TurnActionResult};

#[derive(Debug)]
pub struct Uno {
    config: GameConfig,
    shuffler: Shuffler,
    deck: Deck,
    discard: Vec<Card>,
    players: Vec<Player>,
    current_turn_player_index: usize,
    direction: Direction,
    status: GameStatus,
}

impl Uno {
    /// Creates and deals a game with the default seed. Player counts outside
    /// 2..=4 are clamped.
    pub fn new(player_count: usize) -> Self {
        Self::with_config(GameConfig::new(player_count))
    }

    pub fn with_config(config: GameConfig) -> Self {
        let config = config.clamped();
        let mut uno = Uno {
            config,
            shuffler: Shuffler::new(config.seed),
            deck: Deck(Vec::new()),
            discard: Vec::new(),
            players: Vec::new(),
            current_turn_player_index: 0,
            direction: Direction::Clockwise,
            status: GameStatus::InProgress,
        };
        uno.setup();
        uno
    }

    /// Like [`Uno::with_config`], but rejects player counts outside 2..=4.
    pub fn try_new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Deals a fresh game from the stored seed. Calling it again with the
    /// same seed reproduces the same deal.
    pub fn setup(&mut self) {
        let hand_size = self.config.hand_size;

        self.shuffler.reseed(self.config.seed);
        self.deck = Deck::new();
        self.deck.shuffle(&mut self.shuffler);
        self.discard.clear();
        self.players = (0..self.config.player_count)
            .map(|id| Player::new(id, Vec::with_capacity(hand_size)))
            .collect();

        for _ in 0..hand_size {
            for player in self.players.iter_mut() {
                if let Some(card) = self.deck.draw_card() {
                    player.add_card(card);
                }
            }
        }

        self.current_turn_player_index = 0;
        self.direction = Direction::Clockwise;
        self.status = match self.deck.draw_card() {
            Some(card) => {
                self.discard.push(card);
                GameStatus::InProgress
            }
            None => {
                warn!(
                    players = self.config.player_count,
                    hand_size, "deck ran out while dealing, no starting card"
                );
                GameStatus::Stalemate
            }
        };

        debug!(
            players = self.config.player_count,
            seed = self.config.seed,
            draw_pile = self.deck.cards_count(),
            "game set up"
        );
    }

    pub fn setup_with_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.setup();
    }

    /// Plays one turn for the current player. Does nothing once the game is
    /// over.
    pub fn play_turn(&mut self) -> PlayTurnResult {
        let player = self.current_turn_player_index;

        if self.status != GameStatus::InProgress {
            return PlayTurnResult {
                player,
                action: None,
                turn_action_result: TurnActionResult::GameOver,
            };
        }

        let Some(top) = self.discard.last().copied() else {
            return self.declare_stalemate(player);
        };

        if self.deck.is_empty() && !self.players.iter().any(|p| p.has_playable_card(&top)) {
            return self.declare_stalemate(player);
        }

        let result = match self.players[player].choose_card_index(&top) {
            Some(index) => {
                let card = self.players[player].remove_card(index);
                PlayTurnResult {
                    player,
                    action: Some(TurnAction::Play(card)),
                    turn_action_result: self.resolve_play(player, card),
                }
            }
            None => match self.draw_card() {
                Some(card) if card.is_playable_on(&top) => {
                    let hand = &mut self.players[player];
                    hand.add_card(card);
                    let card = hand.remove_card(hand.cards_count() - 1);
                    PlayTurnResult {
                        player,
                        action: Some(TurnAction::DrawAndPlay(card)),
                        turn_action_result: self.resolve_play(player, card),
                    }
                }
                Some(card) => {
                    self.players[player].add_card(card);
                    self.move_turn_n_players_ahead(1);
                    PlayTurnResult {
                        player,
                        action: Some(TurnAction::Draw(card)),
                        turn_action_result: TurnActionResult::Neutral,
                    }
                }
                None => {
                    self.move_turn_n_players_ahead(1);
                    PlayTurnResult {
                        player,
                        action: Some(TurnAction::Pass),
                        turn_action_result: TurnActionResult::Neutral,
                    }
                }
            },
        };

        debug!(
            player,
            action = ?result.action,
            result = ?result.turn_action_result,
            next = self.current_turn_player_index,
            "turn played"
        );

        result
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> usize {
        self.current_turn_player_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn get_players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Swaps a player's hand for `cards` and hands back the old one, for
    /// setting up a position. A hand is never empty while the game runs, so
    /// an empty `cards` is refused.
    pub fn replace_hand(&mut self, index: usize, cards: Vec<Card>) -> Result<Vec<Card>> {
        if cards.is_empty() {
            return Err(UnoError::EmptyHand(index));
        }
        let player = self
            .players
            .get_mut(index)
            .ok_or(UnoError::UnknownPlayer(index))?;
        Ok(std::mem::replace(&mut player.hand, cards))
    }

    pub fn get_last_played_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn draw_pile_count(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.discard.len()
    }

    /// Cards across every hand and both piles.
    pub fn total_cards(&self) -> usize {
        self.draw_pile_count()
            + self.discard_pile_count()
            + self
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    fn declare_stalemate(&mut self, player: usize) -> PlayTurnResult {
        self.status = GameStatus::Stalemate;
        info!(
            player,
            draw_pile = self.deck.cards_count(),
            discard_pile = self.discard.len(),
            "no card can be drawn or played, stalemate"
        );
        PlayTurnResult {
            player,
            action: None,
            turn_action_result: TurnActionResult::Stalemate,
        }
    }

    /// Puts `card` on the discard pile, checks for a win, then applies the
    /// card's effect and moves the turn on.
    fn resolve_play(&mut self, player: usize, card: Card) -> TurnActionResult {
        self.discard.push(card);

        if self.players[player].has_no_cards() {
            self.status = GameStatus::Won(player);
            info!(player, %card, "player emptied their hand");
            return TurnActionResult::Won(player);
        }

        match card.kind {
            CardKind::Skip => {
                self.move_turn_n_players_ahead(2);
                TurnActionResult::Skip
            }
            CardKind::Reverse => {
                self.direction = self.direction.reversed();
                if self.players.len() == 2 {
                    self.move_turn_n_players_ahead(2);
                } else {
                    self.move_turn_n_players_ahead(1);
                }
                TurnActionResult::Reverse
            }
            CardKind::DrawTwo => {
                let victim = self.get_nth_turn_player_index(1);
                let drawn = self.draw_cards_to_player(victim, DRAW_TWO_PENALTY);
                self.move_turn_n_players_ahead(2);
                TurnActionResult::Draw { victim, drawn }
            }
            CardKind::Number(_) => {
                self.move_turn_n_players_ahead(1);
                TurnActionResult::Neutral
            }
        }
    }

    /// Gives up to `count` cards to `player`, returning how many arrived.
    fn draw_cards_to_player(&mut self, player: usize, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            let Some(card) = self.draw_card() else {
                break;
            };
            self.players[player].add_card(card);
            drawn += 1;
        }
        drawn
    }

    fn draw_card(&mut self) -> Option<Card> {
        if self.deck.is_empty() && self.discard.len() > 1 {
            self.recycle_discard_pile();
        }
        let card = self.deck.draw_card();
        trace!(card = ?card, draw_pile = self.deck.cards_count(), "drew card");
        card
    }

    /// Shuffles every discard but the top one back into the draw pile.
    fn recycle_discard_pile(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        let mut cards = std::mem::take(&mut self.discard);
        self.discard.push(top);

        self.shuffler.shuffle(&mut cards);
        trace!(cards = cards.len(), "recycled discard pile into draw pile");
        self.deck.0.extend(cards);
    }

    fn get_nth_turn_player_index(&self, n: usize) -> usize {
        let count = self.players.len() as isize;
        let offset = self.direction.sign() * n as isize;
        (self.current_turn_player_index as isize + offset).rem_euclid(count) as usize
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        self.current_turn_player_index = self.get_nth_turn_player_index(n);
    }
}
