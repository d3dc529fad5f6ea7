/// a person at the terminal, picking from the rendered legal set
pub struct Human;

impl Player for Human {
    fn act(&self, chase: &Chase, moves: &BTreeSet<Move>) -> Move {
        let colour = moves
            .first()
            .expect("legal sets are never empty")
            .colour();
        let piece = chase.piece(colour);
        let choices = moves.iter().map(Move::to_string).collect::<Vec<String>>();
        let selection = Select::new()
            .with_prompt(format!(
                "\nYOU ARE {} AT {} HOLDING {}",
                piece.colour(),
                piece.at(),
                piece.tickets()
            ))
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()
            .expect("terminal selection");
        moves
            .iter()
            .nth(selection)
            .copied()
            .expect("selection is in range")
    }
}

use crate::play::chase::Chase;
use crate::play::moves::Move;
use crate::play::player::Player;
use dialoguer::Select;
use std::collections::BTreeSet;
