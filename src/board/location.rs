#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location(u16);

/// u16 isomorphism
/// locations are opaque node ids on the map,
/// meaningful only as keys into it
impl From<u16> for Location {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Location> for u16 {
    fn from(at: Location) -> u16 {
        at.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

use serde::Deserialize;
use serde::Serialize;
