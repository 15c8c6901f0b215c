//! Minimum-energy sorting of tokens in a burrow: an 11-cell corridor over four
//! rooms, where every token has to end up in its own room.

mod burrow;
mod error;
mod moves;
mod parse;
mod search;

pub use burrow::{
    is_mouth, Burrow, Cell, Place, Room, Token, CORRIDOR_LEN, ROOM_COUNT, ROOM_MOUTHS,
};
pub use error::{ParseError, ShapeError};
pub use moves::{legal_moves, Move};
pub use parse::parse_burrow;
pub use search::{
    cheapest_path, minimum_energy, search, Outcome, SearchLimits, SearchReport, SearchStats,
    UNREACHABLE,
};
