/// Everything a piece can do on its turn.
///
/// A double chains two legs through an intermediate stop; only the
/// fugitive ever holds one. A pass is the sentinel for a piece with
/// no legal travel at all, and never shares a set with other moves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Ticket(Colour, Ticket, Location),
    Double(Colour, (Ticket, Location), (Ticket, Location)),
    Pass(Colour),
}

impl Move {
    pub fn colour(&self) -> Colour {
        match self {
            Self::Ticket(colour, ..) | Self::Double(colour, ..) | Self::Pass(colour) => *colour,
        }
    }
    /// where the piece ends up, if it travels at all
    pub fn destination(&self) -> Option<Location> {
        match self {
            Self::Ticket(_, _, to) => Some(*to),
            Self::Double(_, _, (_, to)) => Some(*to),
            Self::Pass(_) => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ticket(colour, ticket, to) => {
                write!(f, "{} takes the {} to {}", colour, ticket, to)
            }
            Self::Double(colour, (first, mid), (second, end)) => {
                write!(
                    f,
                    "{} doubles: {} to {} then {} to {}",
                    colour, first, mid, second, end
                )
            }
            Self::Pass(colour) => write!(f, "{} {}", colour, "passes".dimmed()),
        }
    }
}

use super::colour::Colour;
use crate::board::location::Location;
use crate::board::ticket::Ticket;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
