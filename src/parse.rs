use crate::{
    burrow::{Burrow, Cell, Room, Token, CORRIDOR_LEN, ROOM_COUNT},
    error::ParseError,
};

// Format:
//
// #############
// #...........#   corridor, cell i at column i + 1
// ###B#C#B#D###   top room slot
//   #A#D#C#A#     ...down to slot 0
//   #########
//
// `.` is an empty cell and A-D are tokens. The number of room rows is the depth.

const CORRIDOR_LINE: usize = 1;
const FIRST_ROOM_LINE: usize = 2;

fn room_column(room: usize) -> usize {
    3 + 2 * room
}

// all positions are reported 1-based
fn symbol_at(lines: &[Vec<char>], line: usize, column: usize) -> Result<char, ParseError> {
    lines[line]
        .get(column)
        .copied()
        .ok_or(ParseError::MissingCell {
            line: line + 1,
            column: column + 1,
        })
}

fn expect_wall(lines: &[Vec<char>], line: usize, column: usize) -> Result<(), ParseError> {
    if symbol_at(lines, line, column)? == '#' {
        Ok(())
    } else {
        Err(ParseError::Misaligned {
            line: line + 1,
            column: column + 1,
        })
    }
}

fn cell_at(lines: &[Vec<char>], line: usize, column: usize) -> Result<Cell, ParseError> {
    match symbol_at(lines, line, column)? {
        '.' => Ok(None),
        symbol => Token::from_symbol(symbol)
            .map(Some)
            .ok_or(ParseError::UnknownSymbol {
                symbol,
                line: line + 1,
                column: column + 1,
            }),
    }
}

/// Reads a burrow diagram. Surrounding blank lines are ignored.
pub fn parse_burrow(diagram: &str) -> Result<Burrow, ParseError> {
    let lines: Vec<Vec<char>> = diagram
        .trim()
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    if lines.len() < 4 {
        return Err(ParseError::TooShort(lines.len()));
    }
    let depth = lines.len() - 3;

    expect_wall(&lines, CORRIDOR_LINE, 0)?;
    expect_wall(&lines, CORRIDOR_LINE, CORRIDOR_LEN + 1)?;

    let mut corridor = [None; CORRIDOR_LEN];
    for (pos, cell) in corridor.iter_mut().enumerate() {
        *cell = cell_at(&lines, CORRIDOR_LINE, pos + 1)?;
    }

    let mut rooms: [Room; ROOM_COUNT] = Default::default();
    for line in FIRST_ROOM_LINE..FIRST_ROOM_LINE + depth {
        for (room, cells) in rooms.iter_mut().enumerate() {
            expect_wall(&lines, line, room_column(room) - 1)?;
            cells.push(cell_at(&lines, line, room_column(room))?);
        }
        expect_wall(&lines, line, room_column(ROOM_COUNT - 1) + 1)?;
    }

    let bottom = lines.len() - 1;
    for room in 0..ROOM_COUNT {
        expect_wall(&lines, bottom, room_column(room))?;
    }

    // rows were read top down, slot 0 is the bottom one
    for cells in &mut rooms {
        cells.reverse();
    }

    Ok(Burrow::new(corridor, rooms)?)
}
