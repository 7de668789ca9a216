//! Code for addressing squares on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};
use thiserror::Error;

/// A single square on the board, addressed by zero-based row and column.
///
/// A `Location` can only be constructed in bounds, so board lookups through
/// one never fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

/// One of the eight unit steps between adjacent squares.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    delta_row: i8,
    delta_col: i8,
}

impl Direction {
    /// Every direction a run of pieces can extend in: the four orthogonals
    /// and the four diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    const fn new(delta_row: i8, delta_col: i8) -> Self {
        Self {
            delta_row,
            delta_col,
        }
    }
}

impl Location {
    /// Build a location from row and column coordinates.
    /// Returns `None` when the coordinates address no square.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Build a location from a row-major square index (0 is the top left,
    /// 63 the bottom right).
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self {
            row: index / EDGE_LENGTH as u8,
            col: index % EDGE_LENGTH as u8,
        }
    }

    /// Convert into a row-major square index.
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The adjacent square one step away in `dir`, or `None` past the edge.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let row = self.row as i8 + dir.delta_row;
        let col = self.col as i8 + dir.delta_col;
        if (0..EDGE_LENGTH as i8).contains(&row) && (0..EDGE_LENGTH as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate every square in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Self::from_index)
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from letter-digit notation ("D3": column D, row 3).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_char).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        row.checked_sub(1)
            .and_then(|row| Self::from_coords(row, col))
            .ok_or(ParseLocationError)
    }
}

/// Format this [`Location`] in letter-digit notation ("D3").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_char = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_char)?;
        write!(f, "{}", self.row() + 1)
    }
}

/// The squares a player may legally move to, in board scan order.
#[derive(Clone, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Vec<Location>);

impl MoveList {
    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The move at position `index` in scan order.
    pub fn get(&self, index: usize) -> Option<Location> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Some(Location { row: 0, col: 0 })
        );
        assert_eq!(
            Location::from_coords(7, 7),
            Some(Location { row: 7, col: 7 })
        );
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_index_round_trip() {
        assert_eq!(Location::from_index(0).to_index(), 0);
        assert_eq!(Location::from_index(63).to_index(), 63);
        assert_eq!(Location::from_index(10), Location { row: 1, col: 2 });
    }

    #[test]
    #[should_panic]
    fn location_from_index_out_of_range() {
        Location::from_index(64);
    }

    #[test]
    fn step_stays_on_the_board() {
        let corner = Location::from_coords(0, 0).unwrap();
        assert_eq!(corner.step(Direction::new(-1, 0)), None);
        assert_eq!(corner.step(Direction::new(0, -1)), None);
        assert_eq!(
            corner.step(Direction::new(1, 1)),
            Location::from_coords(1, 1)
        );

        let far = Location::from_coords(7, 7).unwrap();
        assert_eq!(far.step(Direction::new(1, 0)), None);
        assert_eq!(far.step(Direction::new(0, 1)), None);
    }

    #[test]
    fn all_covers_every_square_once() {
        let squares: Vec<Location> = Location::all().collect();
        assert_eq!(squares.len(), NUM_SPACES);
        assert_eq!(squares[0], Location { row: 0, col: 0 });
        assert_eq!(squares[63], Location { row: 7, col: 7 });
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location { row: 0, col: 0 }));
        assert_eq!(Location::from_str("h8"), Ok(Location { row: 7, col: 7 }));
        assert_eq!(Location::from_str("D3"), Ok(Location { row: 2, col: 3 }));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location { row: 0, col: 0 }.to_string(), "A1");
        assert_eq!(Location { row: 7, col: 7 }.to_string(), "H8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
    }

    #[test]
    fn move_list_membership_and_order() {
        let moves: MoveList = vec![
            Location::from_coords(2, 3).unwrap(),
            Location::from_coords(3, 2).unwrap(),
        ]
        .into();

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(Location::from_coords(2, 3).unwrap()));
        assert!(!moves.contains(Location::from_coords(0, 0).unwrap()));
        assert_eq!(moves.get(1), Location::from_coords(3, 2));
        assert_eq!(moves.get(2), None);
        assert_eq!(moves.to_string(), "[D3, C4]");
    }
}
