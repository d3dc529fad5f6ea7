/// The decision side of a turn: given the game and the legal set,
/// return exactly one element of that set. The referee enforces
/// membership; a player never mutates the chase.
pub trait Player {
    fn act(&self, chase: &Chase, moves: &BTreeSet<Move>) -> Move;
}

use super::chase::Chase;
use super::moves::Move;
use std::collections::BTreeSet;
