#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ticket {
    Tram = 0isize,
    Bus = 1isize,
    Rail = 2isize,
    Cloak = 3isize,
    Double = 4isize,
}

impl Ticket {
    pub const fn all() -> &'static [Self] {
        &[Self::Tram, Self::Bus, Self::Rail, Self::Cloak, Self::Double]
    }
    /// tickets that pay for one leg of travel.
    /// Double gates compound moves and never labels a route.
    pub const fn is_travel(&self) -> bool {
        !matches!(self, Self::Double)
    }
    /// tickets only the fugitive may hold.
    pub const fn is_covert(&self) -> bool {
        matches!(self, Self::Cloak | Self::Double)
    }
}

impl From<usize> for Ticket {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Tram,
            1 => Self::Bus,
            2 => Self::Rail,
            3 => Self::Cloak,
            4 => Self::Double,
            _ => panic!("no other tickets"),
        }
    }
}
impl From<Ticket> for usize {
    fn from(ticket: Ticket) -> usize {
        ticket as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tram => write!(f, "{}", "tram".yellow()),
            Self::Bus => write!(f, "{}", "bus".green()),
            Self::Rail => write!(f, "{}", "rail".red()),
            Self::Cloak => write!(f, "{}", "cloak".magenta()),
            Self::Double => write!(f, "{}", "double".cyan()),
        }
    }
}

impl crate::Arbitrary for Ticket {
    fn random() -> Self {
        Self::from(rand::random_range(0..Self::all().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn usize_isomorphism() {
        let ticket = Ticket::random();
        assert!(ticket == Ticket::from(usize::from(ticket)));
    }
}

use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
