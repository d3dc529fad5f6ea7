use super::chase::Chase;
use super::colour::Colour;
use super::piece::Piece;
use super::player::Player;
use crate::board::map::Map;
use crate::players::random::Random;
use anyhow::ensure;
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// what ends a chase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Captured(Colour),
    Escaped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            Self::Captured(colour) => write!(f, "{} {}", colour, "captures the fugitive".red()),
            Self::Escaped => write!(f, "{}", "the fugitive escapes".green()),
        }
    }
}

/// The turn controller. Owns the chase and one decision-maker per
/// piece, runs the rotation, and enforces that every chosen move is a
/// member of the legal set it was handed.
pub struct Referee {
    chase: Chase,
    players: BTreeMap<Colour, Box<dyn Player>>,
}

impl Referee {
    pub fn new(chase: Chase, players: BTreeMap<Colour, Box<dyn Player>>) -> Result<Self> {
        for piece in chase.pieces() {
            ensure!(
                players.contains_key(&piece.colour()),
                "{} has no player",
                piece.colour()
            );
        }
        ensure!(
            players.len() == chase.pieces().len(),
            "a player with no piece"
        );
        Ok(Self { chase, players })
    }

    /// a ready-made game on the demo map: seeded placement, random
    /// trackers, and whatever decides for the fugitive
    pub fn exhibition(
        trackers: usize,
        rounds: usize,
        seed: u64,
        fugitive: Box<dyn Player>,
    ) -> Result<Self> {
        ensure!(trackers >= 1, "an exhibition needs a tracker");
        ensure!(
            trackers < Colour::all().len(),
            "not enough colours for {} trackers",
            trackers
        );
        let map = Map::demo();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut starts = map.locations().collect::<Vec<_>>();
        starts.shuffle(&mut rng);
        let mut pieces = vec![Piece::fugitive(Colour::Black, starts[0])];
        let mut players = BTreeMap::<Colour, Box<dyn Player>>::new();
        players.insert(Colour::Black, fugitive);
        for i in 1..=trackers {
            let colour = Colour::from(i);
            pieces.push(Piece::tracker(colour, starts[i]));
            players.insert(colour, Box::new(Random::new(rng.random())));
        }
        Self::new(Chase::new(map, pieces, rounds)?, players)
    }

    pub fn chase(&self) -> &Chase {
        &self.chase
    }

    /// run the chase to its end
    pub fn play(&mut self) -> Outcome {
        log::info!(
            "{} trackers, {} rounds",
            self.players.len() - 1,
            self.chase.rounds()
        );
        loop {
            if let Some(outcome) = self.outcome() {
                log::info!("{}", outcome);
                return outcome;
            }
            let colour = self.chase.turn();
            let moves = self.chase.moves(colour);
            let player = self.players.get(&colour).expect("every piece has a player");
            let choice = player.act(&self.chase, &moves);
            assert!(moves.contains(&choice), "{} chose an illegal move", colour);
            log::info!("{}", choice);
            self.chase.apply(&choice);
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        if let Some(colour) = self.chase.captured() {
            Some(Outcome::Captured(colour))
        } else if self.chase.escaped() {
            Some(Outcome::Escaped)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhibitions_play_to_an_outcome() {
        let mut referee = Referee::exhibition(3, 5, 7, Box::new(Random::new(7)))
            .expect("exhibition setup");
        match referee.play() {
            Outcome::Captured(colour) => assert!(colour != Colour::Black),
            Outcome::Escaped => {}
        }
    }

    #[test]
    fn seeded_exhibitions_are_reproducible() {
        let run = |seed| {
            Referee::exhibition(2, 4, seed, Box::new(Random::new(seed)))
                .expect("exhibition setup")
                .play()
        };
        assert!(run(11) == run(11));
    }

    #[test]
    fn every_piece_needs_a_player_and_vice_versa() {
        let chase = Chase::new(
            Map::demo(),
            vec![
                Piece::fugitive(Colour::Black, crate::board::location::Location::from(1)),
                Piece::tracker(Colour::Blue, crate::board::location::Location::from(9)),
            ],
            13,
        )
        .expect("demo roster");
        let short = BTreeMap::<Colour, Box<dyn Player>>::from([(
            Colour::Black,
            Box::new(Random::new(0)) as Box<dyn Player>,
        )]);
        assert!(Referee::new(chase, short).is_err());
    }
}
