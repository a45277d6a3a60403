use kalaha_engine::board::{Board, Outcome, Seat};
use kalaha_engine::board::kalaha::MAX_SEEDS;
use kalaha_engine::{BoardError, GameState};
use pretty_assertions::assert_eq;

#[test]
fn start_position_text() {
    let b = GameState::new();
    assert_eq!(b.to_string(), "6;6;6;6;6;6;0;6;6;6;6;6;6;0;1");
    assert_eq!(b.total_seeds(), 72);
    assert_eq!(b.legal_moves(), vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn parse_display_agree() {
    let text = "2;0;4;1;3;0;10;1;5;0;2;4;3;12;2";
    let b: GameState = text.parse().unwrap();
    assert_eq!(b.to_string(), text);
    assert_eq!(b.seat_to_move(), Seat::Two);
    assert_eq!(b.seeds_in_pit(3, Seat::One), 4);
    assert_eq!(b.seeds_in_pit(2, Seat::Two), 5);
    assert_eq!(b.score(Seat::One), 10);
    assert_eq!(b.score(Seat::Two), 12);
}

#[test]
fn parse_errors() {
    assert_eq!("1;2;3".parse::<GameState>(), Err(BoardError::FieldCount { expected: 15, found: 3 }));
    assert_eq!(
        "6;6;x;6;6;6;0;6;6;6;6;6;6;0;1".parse::<GameState>(),
        Err(BoardError::Parse { index: 2, value: "x".into() })
    );
    assert_eq!(
        "6;6;-1;6;6;6;0;6;6;6;6;6;6;0;1".parse::<GameState>(),
        Err(BoardError::Parse { index: 2, value: "-1".into() })
    );
    assert_eq!("6;6;6;6;6;6;0;6;6;6;6;6;6;0;3".parse::<GameState>(), Err(BoardError::InvalidSeat("3".into())));
}

#[test]
fn oversized_seed_counts_are_rejected() {
    let too_many: Result<GameState, BoardError> = Err(BoardError::TooManySeeds { max: MAX_SEEDS });
    assert_eq!("2147483647;1;0;0;0;0;0;0;0;0;0;0;0;0;1".parse::<GameState>(), too_many);
    assert_eq!("0;0;0;0;0;0;0;0;0;0;0;0;0;10001;1".parse::<GameState>(), too_many);
    assert_eq!("5000;0;0;0;0;0;0;5001;0;0;0;0;0;0;1".parse::<GameState>(), too_many);
    let b: GameState = "5000;0;0;0;0;0;0;5000;0;0;0;0;0;0;1".parse().unwrap();
    assert_eq!(b.total_seeds(), MAX_SEEDS);
}

#[test]
fn custom_seed_count_start() {
    let b = GameState::with_seeds(4);
    assert_eq!(b.total_seeds(), 48);
    assert_eq!(b.to_string(), "4;4;4;4;4;4;0;4;4;4;4;4;4;0;1");
}

#[test]
fn last_seed_in_store_grants_bonus_turn() {
    let mut b = GameState::new();
    b.apply_move(1);
    assert_eq!(b.seat_to_move(), Seat::One);
    assert_eq!(b.score(Seat::One), 1);
    b.apply_move(2);
    // 7 seeds from pit 2: pits 3..6, store, Two pits 1..2
    assert_eq!(b.seat_to_move(), Seat::Two);
    assert_eq!(b.to_string(), "0;0;8;8;8;8;2;7;7;6;6;6;6;0;2");
}

#[test]
fn landing_in_own_empty_pit_captures_opposite() {
    // One sows pit 1 (2 seeds) into empty pit 3; Two's pit 4 sits opposite.
    let mut b = GameState::from_parts([2, 1, 0, 0, 0, 1], 0, [1, 1, 1, 5, 1, 1], 0, Seat::One);
    b.apply_move(1);
    assert_eq!(b.seeds_in_pit(3, Seat::One), 0);
    assert_eq!(b.seeds_in_pit(4, Seat::Two), 0);
    assert_eq!(b.score(Seat::One), 6);
    assert_eq!(b.seat_to_move(), Seat::Two);
}

#[test]
fn no_capture_when_opposite_is_empty() {
    let mut b = GameState::from_parts([2, 1, 0, 0, 0, 1], 0, [1, 1, 1, 0, 1, 1], 0, Seat::One);
    b.apply_move(1);
    assert_eq!(b.seeds_in_pit(3, Seat::One), 1);
    assert_eq!(b.score(Seat::One), 0);
}

#[test]
fn seat_two_sows_past_seat_one_store() {
    let mut b = GameState::from_parts([1; 6], 0, [0, 0, 0, 0, 0, 3], 0, Seat::Two);
    b.apply_move(6);
    assert_eq!(b.score(Seat::Two), 1);
    assert_eq!(b.seeds_in_pit(1, Seat::One), 2);
    assert_eq!(b.seeds_in_pit(2, Seat::One), 2);
    // Two's side is now empty: One sweeps 8 seeds and the game is over.
    assert_eq!(b.score(Seat::One), 8);
    assert_eq!(b.outcome(), Outcome::Won(Seat::One));
    assert!(b.legal_moves().is_empty());
}

#[test]
fn emptied_side_ends_game_and_sweeps() {
    let mut b = GameState::from_parts([0, 0, 0, 0, 0, 1], 30, [2, 2, 2, 0, 0, 0], 35, Seat::One);
    b.apply_move(6);
    assert!(b.is_over());
    assert_eq!(b.score(Seat::One), 31);
    assert_eq!(b.score(Seat::Two), 41);
    assert_eq!(b.outcome(), Outcome::Won(Seat::Two));
}

#[test]
fn illegal_moves_are_rejected() {
    let mut b = GameState::from_parts([0, 3, 0, 0, 0, 0], 0, [1; 6], 0, Seat::One);
    assert!(!b.move_is_legal(1));
    assert!(!b.move_is_legal(0));
    assert!(!b.move_is_legal(7));
    assert_eq!(b.try_move(1), Err(BoardError::IllegalMove { pit: 1, seat: Seat::One }));
    assert_eq!(b.try_move(2), Ok(()));
}

#[test]
fn seeds_are_conserved() {
    let mut b = GameState::new();
    for _ in 0..40 {
        let Some(&pit) = b.legal_moves().first() else { break };
        b.apply_move(pit);
        assert_eq!(b.total_seeds(), 72);
    }
}
