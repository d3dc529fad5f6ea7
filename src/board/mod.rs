pub mod location;
pub use location::*;

pub mod map;
pub use map::*;

pub mod ticket;
pub use ticket::*;
