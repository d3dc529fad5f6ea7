pub mod chase;
pub use chase::*;

pub mod colour;
pub use colour::*;

pub mod moves;
pub use moves::*;

pub mod piece;
pub use piece::*;

pub mod player;
pub use player::*;

pub mod referee;
pub use referee::*;

pub mod tickets;
pub use tickets::*;
