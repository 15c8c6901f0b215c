use std::{
    fmt::{Display, Write},
    ops::Index,
};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::ShapeError;

pub const CORRIDOR_LEN: usize = 11;
pub const ROOM_COUNT: usize = 4;

/// Corridor positions directly above each room's opening.
pub const ROOM_MOUTHS: [usize; ROOM_COUNT] = [2, 4, 6, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    A,
    B,
    C,
    D,
}

impl Token {
    pub const ALL: [Token; ROOM_COUNT] = [Token::A, Token::B, Token::C, Token::D];

    /// Energy spent for each step this token takes.
    pub fn energy(self) -> u32 {
        match self {
            Token::A => 1,
            Token::B => 10,
            Token::C => 100,
            Token::D => 1000,
        }
    }

    /// Index of the room this token must end up in.
    pub fn home(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn from_symbol(c: char) -> Option<Token> {
        match c {
            'A' => Some(Token::A),
            'B' => Some(Token::B),
            'C' => Some(Token::C),
            'D' => Some(Token::D),
            _ => None,
        }
    }
}

pub type Cell = Option<Token>;

/// Room cells, slot 0 is the innermost one.
pub type Room = SmallVec<[Cell; 4]>;

pub fn is_mouth(pos: usize) -> bool {
    ROOM_MOUTHS.contains(&pos)
}

fn cell_symbol(cell: Cell) -> char {
    cell.map_or('.', Token::symbol)
}

/// A location a token can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Place {
    Corridor(usize),
    Room { room: usize, slot: usize },
}

/// One configuration of the burrow: the corridor plus every room.
///
/// Values are never changed once built; moving a token produces a new `Burrow`.
/// Equality and hashing only look at which token type sits in which cell.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Burrow {
    corridor: [Cell; CORRIDOR_LEN],
    rooms: [Room; ROOM_COUNT],
}

impl Burrow {
    pub fn new(
        corridor: [Cell; CORRIDOR_LEN],
        rooms: [Room; ROOM_COUNT],
    ) -> Result<Burrow, ShapeError> {
        let depth = rooms[0].len();
        if depth == 0 {
            return Err(ShapeError::EmptyRooms);
        }

        for (room, cells) in rooms.iter().enumerate() {
            if cells.len() != depth {
                return Err(ShapeError::UnevenRooms {
                    room,
                    depth: cells.len(),
                    expected: depth,
                });
            }

            // rooms fill from the bottom, so nothing may rest above a hole
            if let Some(below) = cells
                .iter()
                .tuple_windows()
                .position(|(below, above)| below.is_none() && above.is_some())
            {
                return Err(ShapeError::FloatingToken {
                    room,
                    slot: below + 1,
                });
            }
        }

        if let Some(&pos) = ROOM_MOUTHS.iter().find(|&&pos| corridor[pos].is_some()) {
            return Err(ShapeError::TokenOnMouth(pos));
        }

        Ok(Burrow { corridor, rooms })
    }

    /// The sorted configuration with the given room depth and an empty corridor.
    pub fn solved(depth: usize) -> Burrow {
        Burrow {
            corridor: [None; CORRIDOR_LEN],
            rooms: Token::ALL.map(|t| SmallVec::from_elem(Some(t), depth)),
        }
    }

    pub fn depth(&self) -> usize {
        self.rooms[0].len()
    }

    pub fn corridor(&self) -> &[Cell] {
        &self.corridor
    }

    pub fn room(&self, room: usize) -> &[Cell] {
        &self.rooms[room]
    }

    pub fn token_count(&self) -> usize {
        self.corridor
            .iter()
            .chain(self.rooms.iter().flatten())
            .filter(|c| c.is_some())
            .count()
    }

    /// Every room holds its own token type in every slot.
    pub fn is_goal(&self) -> bool {
        self.rooms
            .iter()
            .zip(Token::ALL)
            .all(|(cells, home)| cells.iter().all(|&c| c == Some(home)))
    }

    /// The shallowest occupied slot of a room and the token in it.
    pub fn top(&self, room: usize) -> Option<(usize, Token)> {
        self.rooms[room]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(slot, cell)| cell.map(|t| (slot, t)))
    }

    /// True when every token in the room already belongs there.
    pub fn is_settled(&self, room: usize) -> bool {
        self.rooms[room]
            .iter()
            .all(|&c| c.map_or(true, |t| t.home() == room))
    }

    /// Copy of this configuration with the token at `from` moved to `to`.
    pub(crate) fn relocate(&self, from: Place, to: Place) -> Burrow {
        let mut next = self.clone();
        let token = next.cell_mut(from).take();
        debug_assert!(token.is_some(), "nothing to move at {:?}", from);
        debug_assert!(self[to].is_none(), "{:?} is already occupied", to);
        *next.cell_mut(to) = token;
        next
    }

    fn cell_mut(&mut self, place: Place) -> &mut Cell {
        match place {
            Place::Corridor(pos) => &mut self.corridor[pos],
            Place::Room { room, slot } => &mut self.rooms[room][slot],
        }
    }
}

impl Index<Place> for Burrow {
    type Output = Cell;
    fn index(&self, place: Place) -> &Self::Output {
        match place {
            Place::Corridor(pos) => &self.corridor[pos],
            Place::Room { room, slot } => &self.rooms[room][slot],
        }
    }
}

// renders the same diagram format that `parse_burrow` reads
impl Display for Burrow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("#############\n#")?;
        for &c in &self.corridor {
            f.write_char(cell_symbol(c))?;
        }
        f.write_str("#\n")?;

        for slot in (0..self.depth()).rev() {
            let row = self.rooms.iter().map(|r| cell_symbol(r[slot])).join("#");
            if slot + 1 == self.depth() {
                writeln!(f, "###{}###", row)?;
            } else {
                writeln!(f, "  #{}#", row)?;
            }
        }

        f.write_str("  #########")
    }
}
