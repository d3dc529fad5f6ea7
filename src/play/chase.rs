use super::colour::Colour;
use super::moves::Move;
use super::piece::Piece;
use super::piece::Role;
use super::tickets::Tickets;
use crate::board::location::Location;
use crate::board::map::Map;
use crate::board::ticket::Ticket;
use anyhow::ensure;
use anyhow::Result;
use std::collections::BTreeSet;

/// Chase is the full state of the game in between moves: the board,
/// every piece, the rotation, and the rounds left to play.
///
/// Its immutable methods are the rules of movement: `moves` computes
/// the exact legal set for one piece as a pure function of the
/// snapshot. `apply` is the only mutation, fed back by the turn
/// controller with a member of that set.
#[derive(Debug, Clone)]
pub struct Chase {
    map: Map,
    pieces: Vec<Piece>,
    rounds: usize,
    next: usize,
}

impl Chase {
    pub fn new(map: Map, pieces: Vec<Piece>, rounds: usize) -> Result<Self> {
        ensure!(rounds > 0, "a chase needs at least one round");
        ensure!(
            pieces.iter().filter(|p| p.role() == Role::Fugitive).count() == 1,
            "a chase needs exactly one fugitive"
        );
        for (i, piece) in pieces.iter().enumerate() {
            ensure!(
                map.contains(piece.at()),
                "{} starts off the map",
                piece.colour()
            );
            ensure!(
                pieces.iter().skip(i + 1).all(|p| p.colour() != piece.colour()),
                "{} appears twice",
                piece.colour()
            );
            ensure!(
                pieces.iter().skip(i + 1).all(|p| p.at() != piece.at()),
                "two pieces start at {}",
                piece.at()
            );
        }
        for piece in pieces.iter().filter(|p| p.role() == Role::Tracker) {
            for ticket in Ticket::all().iter().filter(|t| t.is_covert()) {
                ensure!(
                    !piece.tickets().has(*ticket),
                    "{} may not hold {} tickets",
                    piece.colour(),
                    ticket
                );
            }
        }
        let mut pieces = pieces;
        pieces.sort_by_key(|p| p.role() == Role::Tracker);
        Ok(Self {
            map,
            pieces,
            rounds,
            next: 0,
        })
    }

    //
    pub fn map(&self) -> &Map {
        &self.map
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    /// whose turn it is. the fugitive opens every round.
    pub fn turn(&self) -> Colour {
        self.pieces[self.next].colour()
    }
    /// asking about a colour that is not in the chase is a caller
    /// contract violation
    pub fn piece(&self, colour: Colour) -> &Piece {
        self.pieces
            .iter()
            .find(|p| p.colour() == colour)
            .expect("colour is in the chase")
    }
    pub fn fugitive(&self) -> &Piece {
        self.pieces.first().expect("rotation keeps the fugitive first")
    }

    //
    /// the exact legal set for one piece. when nothing is legal the
    /// set is exactly one pass, so the caller always has a choice to
    /// hand out.
    pub fn moves(&self, colour: Colour) -> BTreeSet<Move> {
        let piece = self.piece(colour);
        let blocked = self.blocked();
        let mut moves = self.singles(piece, &blocked);
        moves.extend(self.doubles(piece, &blocked));
        if moves.is_empty() {
            moves.insert(Move::Pass(colour));
        }
        moves
    }

    /// locations held by trackers. nobody may end a leg on one.
    /// the fugitive's own location blocks nothing: landing there is
    /// capture.
    fn blocked(&self) -> BTreeSet<Location> {
        self.pieces
            .iter()
            .filter(|p| p.role() == Role::Tracker)
            .map(|p| p.at())
            .collect()
    }

    fn singles(&self, piece: &Piece, blocked: &BTreeSet<Location>) -> BTreeSet<Move> {
        self.legs(piece.at(), piece.tickets(), piece.role(), blocked)
            .into_iter()
            .map(|(ticket, to)| Move::Ticket(piece.colour(), ticket, to))
            .collect()
    }

    /// one-leg candidates from a location: every incident route the
    /// tickets can pay for, to an unblocked destination. the fugitive
    /// may also pay for any route with a cloak. parallel routes of
    /// different tickets to the same stop stay distinct; identical
    /// (ticket, destination) pairs collapse.
    fn legs(
        &self,
        from: Location,
        tickets: &Tickets,
        role: Role,
        blocked: &BTreeSet<Location>,
    ) -> BTreeSet<(Ticket, Location)> {
        self.map
            .routes(from)
            .into_iter()
            .flat_map(|(ticket, to)| match role {
                Role::Fugitive => vec![(ticket, to), (Ticket::Cloak, to)],
                Role::Tracker => vec![(ticket, to)],
            })
            .filter(|(_, to)| !blocked.contains(to))
            .filter(|(ticket, _)| tickets.has(*ticket))
            .collect()
    }

    /// two-leg candidates: fugitive only, gated on a double ticket
    /// and on two rounds left to pay for. both legs check against the
    /// same tracker positions, frozen for the whole turn; the second
    /// leg draws on the inventory with the first leg's ticket already
    /// spent.
    fn doubles(&self, piece: &Piece, blocked: &BTreeSet<Location>) -> BTreeSet<Move> {
        let mut moves = BTreeSet::new();
        if piece.role() != Role::Fugitive {
            return moves;
        }
        if !piece.tickets().has(Ticket::Double) {
            return moves;
        }
        if self.rounds < 2 {
            return moves;
        }
        for (first, mid) in self.legs(piece.at(), piece.tickets(), piece.role(), blocked) {
            let remaining = piece.tickets().less(first);
            for (second, end) in self.legs(mid, &remaining, piece.role(), blocked) {
                moves.insert(Move::Double(piece.colour(), (first, mid), (second, end)));
            }
        }
        moves
    }

    //
    /// play one move and advance the rotation. the controller owns
    /// the choice; feeding a move outside the current legal set is a
    /// contract violation.
    pub fn apply(&mut self, choice: &Move) {
        assert!(!self.escaped(), "the chase is over");
        let colour = self.turn();
        assert!(choice.colour() == colour, "not {}'s turn", choice.colour());
        assert!(self.moves(colour).contains(choice), "{} is not legal", choice);
        log::trace!("{}", choice);
        match *choice {
            Move::Ticket(colour, ticket, to) => {
                self.spend(colour, ticket);
                self.piece_mut(colour).advance(to);
            }
            Move::Double(colour, (first, mid), (second, end)) => {
                self.spend(colour, Ticket::Double);
                self.spend(colour, first);
                self.piece_mut(colour).advance(mid);
                self.spend(colour, second);
                self.piece_mut(colour).advance(end);
            }
            Move::Pass(_) => {}
        }
        self.rotate(choice);
    }

    /// a tracker stands on the fugitive: the chase is over
    pub fn captured(&self) -> Option<Colour> {
        let at = self.fugitive().at();
        self.pieces
            .iter()
            .filter(|p| p.role() == Role::Tracker)
            .find(|p| p.at() == at)
            .map(|p| p.colour())
    }
    /// every round is played out and the fugitive is still free
    pub fn escaped(&self) -> bool {
        self.rounds == 0 && self.pieces[self.next].role() == Role::Fugitive
    }

    /// a tracker's spent ticket passes to the fugitive; the
    /// fugitive's own are gone for good
    fn spend(&mut self, colour: Colour, ticket: Ticket) {
        let role = self.piece(colour).role();
        self.piece_mut(colour).spend(ticket);
        if role == Role::Tracker {
            self.fugitive_mut().earn(ticket);
        }
    }
    /// rounds tick on the fugitive's moves only, one per leg travelled
    fn rotate(&mut self, choice: &Move) {
        if self.pieces[self.next].role() == Role::Fugitive {
            self.rounds -= match choice {
                Move::Double(..) => 2,
                _ => 1,
            };
        }
        self.next += 1;
        self.next %= self.pieces.len();
    }
    fn piece_mut(&mut self, colour: Colour) -> &mut Piece {
        self.pieces
            .iter_mut()
            .find(|p| p.colour() == colour)
            .expect("colour is in the chase")
    }
    fn fugitive_mut(&mut self) -> &mut Piece {
        self.pieces
            .first_mut()
            .expect("rotation keeps the fugitive first")
    }
}

impl std::fmt::Display for Chase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} rounds left, {} to play", self.rounds, self.turn())?;
        for piece in self.pieces.iter() {
            writeln!(f, "{}", piece)?;
        }
        Ok(())
    }
}
