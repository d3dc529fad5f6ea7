/// chooses uniformly from the legal set. seeded, so exhibitions
/// replay move for move.
pub struct Random(RefCell<SmallRng>);

impl Random {
    pub fn new(seed: u64) -> Self {
        Self(RefCell::new(SmallRng::seed_from_u64(seed)))
    }
}

impl Player for Random {
    fn act(&self, _: &Chase, moves: &BTreeSet<Move>) -> Move {
        let choice = self.0.borrow_mut().random_range(0..moves.len());
        moves
            .iter()
            .nth(choice)
            .copied()
            .expect("legal sets are never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::location::Location;
    use crate::board::map::Map;
    use crate::play::colour::Colour;
    use crate::play::piece::Piece;

    #[test]
    fn always_returns_a_member_of_the_set() {
        let chase = Chase::new(
            Map::demo(),
            vec![
                Piece::fugitive(Colour::Black, Location::from(1)),
                Piece::tracker(Colour::Blue, Location::from(9)),
            ],
            13,
        )
        .expect("demo roster");
        let random = Random::new(42);
        for _ in 0..100 {
            let moves = chase.moves(Colour::Black);
            assert!(moves.contains(&random.act(&chase, &moves)));
        }
    }
}

use crate::play::chase::Chase;
use crate::play::moves::Move;
use crate::play::player::Player;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::BTreeSet;
