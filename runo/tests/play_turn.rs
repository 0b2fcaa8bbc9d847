use runo::{
    card::{Card, CardKind},
    config::GameConfig,
    constants::TOTAL_CARDS_IN_DECK,
    error::UnoError,
    turn::{Direction, GameStatus, TurnAction, TurnActionResult},
    uno::Uno,
};

fn top_card(uno: &Uno) -> Card {
    *uno
        .get_last_played_card()
        .expect("A set up game always has a top card.")
}

/// Puts `card` first in the current player's hand so it is the one chosen.
fn give_current_player(uno: &mut Uno, card: Card) {
    let current = uno.current_player();
    let mut hand = uno
        .get_player(current)
        .expect("Current player must exist.")
        .hand()
        .to_vec();
    hand[0] = card;
    uno.replace_hand(current, hand)
        .expect("Current player must exist.");
}

#[test]
fn two_player_setup_leaves_85_cards_to_draw() {
    let mut uno = Uno::new(2);
    for seed in [1234, 0, 7, u64::MAX] {
        uno.setup_with_seed(seed);

        assert_eq!(uno.get_player(0).unwrap().cards_count(), 7);
        assert_eq!(uno.get_player(1).unwrap().cards_count(), 7);
        assert_eq!(uno.discard_pile_count(), 1);
        assert_eq!(uno.draw_pile_count(), 85);
        assert_eq!(uno.total_cards(), 100);
    }
}

#[test]
fn strict_constructor_rejects_bad_player_counts() {
    let error = Uno::try_new(GameConfig::new(1)).unwrap_err();
    assert!(matches!(error, UnoError::NotEnoughPlayers(1)));

    let error = Uno::try_new(GameConfig::new(5)).unwrap_err();
    assert!(matches!(error, UnoError::TooManyPlayers(5)));

    let uno = Uno::try_new(GameConfig::new(3)).unwrap();
    assert_eq!(uno.player_count(), 3);
}

#[test]
fn play_turn_plays_matching_number_card() {
    let mut uno = Uno::new(4);
    let card = Card::number(top_card(&uno).color, 0);
    give_current_player(&mut uno, card);

    let result = uno.play_turn();

    assert_eq!(result.player, 0);
    assert_eq!(result.action, Some(TurnAction::Play(card)));
    assert_eq!(result.turn_action_result, TurnActionResult::Neutral);
    assert_eq!(top_card(&uno), card);
    assert_eq!(uno.get_player(0).unwrap().cards_count(), 6);
    assert_eq!(uno.current_player(), 1);
}

#[test]
fn play_turn_skips_player_properly() {
    let mut uno = Uno::new(4);
    let card = Card::new(top_card(&uno).color, CardKind::Skip);
    give_current_player(&mut uno, card);

    let result = uno.play_turn();

    assert_eq!(result.turn_action_result, TurnActionResult::Skip);
    assert_eq!(uno.current_player(), 2);
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut uno = Uno::new(4);
    let card = Card::new(top_card(&uno).color, CardKind::Reverse);
    give_current_player(&mut uno, card);

    let result = uno.play_turn();

    assert_eq!(result.turn_action_result, TurnActionResult::Reverse);
    assert_eq!(uno.direction(), Direction::CounterClockwise);
    assert_eq!(uno.current_player(), 3);
}

#[test]
fn play_turn_performs_draw_two_properly() {
    let mut uno = Uno::new(4);
    let card = Card::new(top_card(&uno).color, CardKind::DrawTwo);
    give_current_player(&mut uno, card);

    let result = uno.play_turn();

    assert_eq!(
        result.turn_action_result,
        TurnActionResult::Draw {
            victim: 1,
            drawn: 2
        }
    );
    assert_eq!(uno.get_player(1).unwrap().cards_count(), 9);
    assert_eq!(uno.current_player(), 2);
    assert_eq!(uno.total_cards(), TOTAL_CARDS_IN_DECK as usize);
}

#[test]
fn draw_two_in_two_player_game_returns_turn_to_player() {
    let mut uno = Uno::new(2);
    let card = Card::new(top_card(&uno).color, CardKind::DrawTwo);
    give_current_player(&mut uno, card);

    uno.play_turn();

    assert_eq!(uno.get_player(1).unwrap().cards_count(), 9);
    assert_eq!(uno.current_player(), 0);
}

#[test]
fn emptying_hand_wins_the_game() {
    let mut uno = Uno::new(3);
    let card = Card::new(top_card(&uno).color, CardKind::Skip);
    uno.replace_hand(0, vec![card]).unwrap();

    let result = uno.play_turn();

    assert_eq!(result.turn_action_result, TurnActionResult::Won(0));
    assert_eq!(uno.status(), GameStatus::Won(0));
    assert_eq!(uno.winner(), Some(0));
    assert!(uno.is_game_over());
    assert_eq!(uno.current_player(), 0);
    assert!(uno.describe_state().ends_with(", Winner: P0"));

    let result = uno.play_turn();
    assert_eq!(result.turn_action_result, TurnActionResult::GameOver);
    assert_eq!(uno.status(), GameStatus::Won(0));
}

#[test]
fn replaying_a_seed_replays_the_game() {
    let play = |seed: u64| {
        let mut uno = Uno::new(2);
        uno.setup_with_seed(seed);
        let mut states = Vec::new();
        while !uno.is_game_over() && states.len() < 300 {
            uno.play_turn();
            states.push(uno.describe_state());
        }
        states
    };

    assert_eq!(play(1234), play(1234));
    assert_ne!(play(1234), play(4321));
}

#[test]
fn hundred_cards_stay_in_play_for_a_whole_game() {
    for player_count in 2..=4 {
        let mut uno = Uno::new(player_count);
        assert_eq!(uno.total_cards(), 100);

        for _ in 0..500 {
            if uno.is_game_over() {
                break;
            }
            uno.play_turn();
            assert_eq!(uno.total_cards(), 100);
        }
    }
}

#[test]
fn hand_cannot_be_replaced_with_nothing() {
    let mut uno = Uno::new(2);

    let error = uno.replace_hand(0, Vec::new()).unwrap_err();
    assert!(matches!(error, UnoError::EmptyHand(0)));
    assert_eq!(uno.get_player(0).unwrap().cards_count(), 7);

    let card = top_card(&uno);
    let error = uno.replace_hand(2, vec![card]).unwrap_err();
    assert!(matches!(error, UnoError::UnknownPlayer(2)));
}
