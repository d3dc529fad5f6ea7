#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    Black = 0isize,
    Blue = 1isize,
    Green = 2isize,
    Red = 3isize,
    White = 4isize,
    Yellow = 5isize,
}

impl Colour {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Black,
            Self::Blue,
            Self::Green,
            Self::Red,
            Self::White,
            Self::Yellow,
        ]
    }
}

impl From<usize> for Colour {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Red,
            4 => Self::White,
            5 => Self::Yellow,
            _ => panic!("no other colours"),
        }
    }
}
impl From<Colour> for usize {
    fn from(colour: Colour) -> usize {
        colour as usize
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "{}", "black".bold()),
            Self::Blue => write!(f, "{}", "blue".blue()),
            Self::Green => write!(f, "{}", "green".green()),
            Self::Red => write!(f, "{}", "red".red()),
            Self::White => write!(f, "{}", "white".white()),
            Self::Yellow => write!(f, "{}", "yellow".yellow()),
        }
    }
}

impl crate::Arbitrary for Colour {
    fn random() -> Self {
        Self::from(rand::random_range(0..Self::all().len()))
    }
}


use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
