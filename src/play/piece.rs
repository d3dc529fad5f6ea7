/// which side a piece plays
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Fugitive,
    Tracker,
}

/// One piece on the board: identity, side, position, tickets.
///
/// The engine reads snapshots of these; position and inventory change
/// only through `Chase::apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    colour: Colour,
    role: Role,
    at: Location,
    tickets: Tickets,
}

impl Piece {
    pub fn new(colour: Colour, role: Role, at: Location, tickets: Tickets) -> Self {
        Self {
            colour,
            role,
            at,
            tickets,
        }
    }
    pub fn fugitive(colour: Colour, at: Location) -> Self {
        Self::new(colour, Role::Fugitive, at, Tickets::fugitive())
    }
    pub fn tracker(colour: Colour, at: Location) -> Self {
        Self::new(colour, Role::Tracker, at, Tickets::tracker())
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn at(&self) -> Location {
        self.at
    }
    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    pub(crate) fn advance(&mut self, to: Location) {
        log::trace!("{} to {}", self.colour, to);
        self.at = to;
    }
    pub(crate) fn spend(&mut self, ticket: Ticket) {
        self.tickets.spend(ticket);
    }
    pub(crate) fn earn(&mut self, ticket: Ticket) {
        self.tickets.earn(ticket);
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} at {} holding {}", self.colour, self.at, self.tickets)
    }
}

use super::colour::Colour;
use super::tickets::Tickets;
use crate::board::location::Location;
use crate::board::ticket::Ticket;
use serde::Deserialize;
use serde::Serialize;
