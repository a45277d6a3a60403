use crate::board::{Board, Outcome, Seat, PITS};

pub const WIN_SCORE: i32 = 50;
pub const STORE_LEAD: i32 = 7;
pub const EXTRA_TURN_PIT: i32 = 5;

/// Seeds pit `pit` needs for its last seed to land in the owner's store.
pub fn extra_turn_seeds(pit: usize) -> i32 { (PITS + 1 - pit) as i32 }

// Extra-turn pits of `seat` that are loaded exactly.
fn extra_turn_pits<B: Board>(board: &B, seat: Seat) -> i32 {
    (1..=PITS).filter(|&p| board.seeds_in_pit(p, seat) == extra_turn_seeds(p)).count() as i32
}

/// Static evaluation signed from `perspective`, independent of which seat is to move.
///
/// Decided games short-circuit to +/-`WIN_SCORE`. Otherwise (ongoing or drawn) the
/// score is a categorical store lead of +/-`STORE_LEAD` plus `EXTRA_TURN_PIT` for each
/// own pit holding exactly enough seeds to end in the own store, minus the same for
/// the opponent.
pub fn evaluate<B: Board>(board: &B, perspective: Seat) -> i32 {
    let leaf = board.seat_to_move();
    let me = if leaf == perspective { leaf } else { leaf.opponent() };
    let them = me.opponent();

    match board.outcome() {
        Outcome::Won(w) if w == me => return WIN_SCORE,
        Outcome::Won(_) => return -WIN_SCORE,
        Outcome::Draw | Outcome::InProgress => {}
    }

    let lead = match board.score(me).cmp(&board.score(them)) {
        std::cmp::Ordering::Greater => STORE_LEAD,
        std::cmp::Ordering::Less => -STORE_LEAD,
        std::cmp::Ordering::Equal => 0,
    };
    lead + EXTRA_TURN_PIT * (extra_turn_pits(board, me) - extra_turn_pits(board, them))
}
