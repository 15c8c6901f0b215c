use thiserror::Error;

/// Violations of the fixed burrow shape, raised by [`crate::Burrow::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("rooms must be at least one cell deep")]
    EmptyRooms,
    #[error("room {room} is {depth} cells deep, expected {expected}")]
    UnevenRooms {
        room: usize,
        depth: usize,
        expected: usize,
    },
    #[error("token resting on the mouth of a room at corridor position {0}")]
    TokenOnMouth(usize),
    #[error("room {room} has a token in slot {slot} above an empty slot")]
    FloatingToken { room: usize, slot: usize },
}

/// Errors produced while reading a burrow diagram. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("diagram has {0} lines, expected at least 4")]
    TooShort(usize),
    #[error("line {line} ends before column {column}")]
    MissingCell { line: usize, column: usize },
    #[error("unrecognized symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },
    #[error("expected a wall at line {line}, column {column}")]
    Misaligned { line: usize, column: usize },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
