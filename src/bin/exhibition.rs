//! Exhibition Binary
//!
//! Plays one full chase on the demo map and logs every move.
//!
//! Options: --trackers, --rounds, --seed, --human

use clap::Parser;
use foxhunt::play::Player;
use foxhunt::play::Referee;
use foxhunt::players::Human;
use foxhunt::players::Random;

#[derive(Parser)]
struct Args {
    /// how many trackers give chase
    #[arg(long, default_value_t = 3)]
    trackers: usize,
    /// how many rounds the fugitive must survive
    #[arg(long, default_value_t = 13)]
    rounds: usize,
    /// seed for placement and for the random players
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// take the fugitive's seat yourself
    #[arg(long)]
    human: bool,
}

fn main() {
    foxhunt::log();
    let args = Args::parse();
    let fugitive: Box<dyn Player> = match args.human {
        true => Box::new(Human),
        false => Box::new(Random::new(args.seed)),
    };
    Referee::exhibition(args.trackers, args.rounds, args.seed, fugitive)
        .expect("exhibition setup")
        .play();
}
