#![allow(dead_code)]
// Hand-built game trees behind the Board trait, so searches can be checked
// against known leaf values without going through the sowing rules.

use kalaha_engine::board::{Board, Outcome, Pit, Seat, PITS};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct Spec {
    pub to_move: Seat,
    pub outcome: Outcome,
    pub stores: [i32; 2],
    pub bonus_pits: [usize; 2], // pits 1..=n loaded for an extra turn
    pub children: Vec<(Pit, usize)>,
}

impl Spec {
    pub fn leaf(to_move: Seat) -> Self {
        Spec { to_move, outcome: Outcome::InProgress, stores: [0, 0], bonus_pits: [0, 0], children: Vec::new() }
    }
    pub fn stores(mut self, one: i32, two: i32) -> Self { self.stores = [one, two]; self }
    pub fn bonus(mut self, one: usize, two: usize) -> Self { self.bonus_pits = [one, two]; self }
    pub fn won(mut self, seat: Seat) -> Self { self.outcome = Outcome::Won(seat); self }
    pub fn child(mut self, pit: Pit, idx: usize) -> Self { self.children.push((pit, idx)); self }
}

#[derive(Clone, Debug)]
pub struct TreeBoard {
    nodes: Rc<Vec<Spec>>,
    at: usize,
}

impl TreeBoard {
    pub fn new(nodes: Vec<Spec>) -> Self { Self { nodes: Rc::new(nodes), at: 0 } }
    pub fn at(&self) -> usize { self.at }
    fn spec(&self) -> &Spec { &self.nodes[self.at] }
}

fn idx(seat: Seat) -> usize { (seat.number() - 1) as usize }

impl Board for TreeBoard {
    fn move_is_legal(&self, pit: Pit) -> bool { self.spec().children.iter().any(|&(p, _)| p == pit) }
    fn apply_move(&mut self, pit: Pit) {
        let next = self.spec().children.iter().find(|&&(p, _)| p == pit).map(|&(_, i)| i);
        self.at = next.expect("pit is not a legal move of this node");
    }
    fn seat_to_move(&self) -> Seat { self.spec().to_move }
    fn outcome(&self) -> Outcome { self.spec().outcome }
    fn score(&self, seat: Seat) -> i32 { self.spec().stores[idx(seat)] }
    fn seeds_in_pit(&self, pit: Pit, seat: Seat) -> i32 {
        if pit <= self.spec().bonus_pits[idx(seat)] { (PITS + 1 - pit) as i32 } else { 0 }
    }
}

/// Random tree of the given height. Seats to move are random, so runs of
/// same-seat plies (bonus turns) appear throughout.
pub fn random_tree(seed: u64, height: u32, max_branch: usize) -> TreeBoard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut nodes = Vec::new();
    grow(&mut rng, &mut nodes, height, max_branch);
    TreeBoard::new(nodes)
}

fn grow(rng: &mut SmallRng, nodes: &mut Vec<Spec>, height: u32, max_branch: usize) -> usize {
    let seat = if rng.gen_bool(0.5) { Seat::One } else { Seat::Two };
    let mut spec = Spec::leaf(seat)
        .stores(rng.gen_range(0..3), rng.gen_range(0..3))
        .bonus(rng.gen_range(0..3), rng.gen_range(0..3));
    if rng.gen_bool(0.05) {
        spec = spec.won(if rng.gen_bool(0.5) { Seat::One } else { Seat::Two });
    }
    let me = nodes.len();
    nodes.push(spec);
    if height == 0 || nodes[me].outcome != Outcome::InProgress { return me; }

    let mut pits: Vec<Pit> = (1..=PITS).filter(|_| rng.gen_bool(0.6)).collect();
    pits.truncate(max_branch);
    for pit in pits {
        let child = grow(rng, nodes, height - 1, max_branch);
        nodes[me].children.push((pit, child));
    }
    me
}
