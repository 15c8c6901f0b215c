use auto_enums::auto_enum;
use smallvec::{Array, SmallVec};

use crate::burrow::{is_mouth, Burrow, Place, Token, CORRIDOR_LEN, ROOM_COUNT, ROOM_MOUTHS};

/// A single token relocation together with the number of steps it takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    CorridorToRoom {
        from: usize,
        room: usize,
        slot: usize,
        steps: u32,
        token: Token,
    },
    RoomToCorridor {
        room: usize,
        slot: usize,
        to: usize,
        steps: u32,
        token: Token,
    },
}

impl Move {
    pub fn token(&self) -> Token {
        match *self {
            Move::CorridorToRoom { token, .. } | Move::RoomToCorridor { token, .. } => token,
        }
    }

    pub fn steps(&self) -> u32 {
        match *self {
            Move::CorridorToRoom { steps, .. } | Move::RoomToCorridor { steps, .. } => steps,
        }
    }

    pub fn energy(&self) -> u32 {
        self.steps() * self.token().energy()
    }

    pub fn source(&self) -> Place {
        match *self {
            Move::CorridorToRoom { from, .. } => Place::Corridor(from),
            Move::RoomToCorridor { room, slot, .. } => Place::Room { room, slot },
        }
    }

    pub fn target(&self) -> Place {
        match *self {
            Move::CorridorToRoom { room, slot, .. } => Place::Room { room, slot },
            Move::RoomToCorridor { to, .. } => Place::Corridor(to),
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

// corridor positions walking away from `mouth`, nearest first
#[auto_enum(Iterator)]
fn outward(mouth: usize, direction: Direction) -> impl Iterator<Item = usize> {
    match direction {
        Direction::Left => (0..mouth).rev(),
        Direction::Right => mouth + 1..CORRIDOR_LEN,
    }
}

fn distance(a: usize, b: usize) -> u32 {
    a.abs_diff(b) as u32
}

// every cell after `from` up to and including `to` is free
fn corridor_clear(burrow: &Burrow, from: usize, to: usize) -> bool {
    let path = if from < to {
        &burrow.corridor()[from + 1..=to]
    } else {
        &burrow.corridor()[to..from]
    };

    path.iter().all(Option::is_none)
}

/// Appends every legal move out of `burrow` to `out`.
///
/// Tokens in the corridor may only walk straight into their own room, and only
/// once that room holds nothing but their own type. Tokens leave a room from the
/// top, unless the room is already settled, and may stop on any free corridor
/// cell they can reach that is not a room mouth.
pub fn legal_moves<const N: usize>(burrow: &Burrow, out: &mut SmallVec<[Move; N]>)
where
    [Move; N]: Array<Item = Move>,
{
    let depth = burrow.depth();

    for (from, cell) in burrow.corridor().iter().enumerate() {
        let token = match *cell {
            Some(token) => token,
            None => continue,
        };

        let room = token.home();
        let mouth = ROOM_MOUTHS[room];
        if !burrow.is_settled(room) || !corridor_clear(burrow, from, mouth) {
            continue;
        }

        // rooms fill bottom up, so the deepest free slot is the only choice
        if let Some(slot) = burrow.room(room).iter().position(Option::is_none) {
            out.push(Move::CorridorToRoom {
                from,
                room,
                slot,
                steps: distance(from, mouth) + (depth - slot) as u32,
                token,
            });
        }
    }

    for room in 0..ROOM_COUNT {
        let (slot, token) = match burrow.top(room) {
            Some(top) => top,
            None => continue,
        };

        if burrow.is_settled(room) {
            continue;
        }

        let mouth = ROOM_MOUTHS[room];
        let exit = (depth - slot) as u32;

        for direction in [Direction::Left, Direction::Right] {
            for to in outward(mouth, direction) {
                // NB: a mouth is never occupied, so passing over it does not end the scan
                if is_mouth(to) {
                    continue;
                }

                if burrow.corridor()[to].is_some() {
                    break;
                }

                out.push(Move::RoomToCorridor {
                    room,
                    slot,
                    to,
                    steps: distance(mouth, to) + exit,
                    token,
                });
            }
        }
    }
}

impl Burrow {
    pub fn moves(&self) -> SmallVec<[Move; 32]> {
        let mut buffer = SmallVec::new();
        legal_moves(self, &mut buffer);
        buffer
    }

    /// The configuration reached by making `mv`; `self` is left as it was.
    pub fn apply(&self, mv: &Move) -> Burrow {
        self.relocate(mv.source(), mv.target())
    }

    /// Every configuration one move away, paired with the energy of that move.
    pub fn successors(&self) -> impl Iterator<Item = (Burrow, u32)> + '_ {
        self.moves()
            .into_iter()
            .map(move |mv| (self.apply(&mv), mv.energy()))
    }
}

#[cfg(test)]
mod test {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::parse::parse_burrow;

    const EXAMPLE: &str = "
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    const SHALLOW: &str = "
#############
#...........#
###D#C#B#A###
  #########
";

    fn reachable(start: &Burrow) -> HashSet<Burrow> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back(start.clone());
        while let Some(b) = queue.pop_front() {
            for (next, _) in b.successors() {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    #[test]
    fn opening_moves() {
        let b = parse_burrow(EXAMPLE).unwrap();
        let moves = b.moves();

        // every room top can reach the seven non-mouth cells
        assert_eq!(moves.len(), 4 * 7);
        assert!(moves
            .iter()
            .all(|m| matches!(m, Move::RoomToCorridor { slot: 1, .. })));

        let d_out = moves
            .iter()
            .find(|m| m.target() == Place::Corridor(0) && m.token() == Token::D)
            .unwrap();
        assert_eq!(d_out.steps(), 8 + 1);
        assert_eq!(d_out.energy(), 9000);
    }

    #[test]
    fn goal_has_no_moves() {
        for depth in 1..=4 {
            assert!(Burrow::solved(depth).moves().is_empty());
        }
    }

    #[test]
    fn enters_deepest_free_slot() {
        let b = parse_burrow(
            "
#############
#.........A.#
###.#B#C#D###
  #A#B#C#D#
  #########",
        )
        .unwrap();

        let moves = b.moves();
        assert_eq!(
            moves.as_slice(),
            &[Move::CorridorToRoom {
                from: 9,
                room: 0,
                slot: 1,
                steps: 7 + 1,
                token: Token::A,
            }]
        );
        assert!(b.apply(&moves[0]).is_goal());
    }

    #[test]
    fn blocked_corridor_prevents_entry() {
        let b = parse_burrow(
            "
#############
#...B.....A.#
###.#.#C#D###
  #A#B#C#D#
  #########",
        )
        .unwrap();

        // A at 9 would have to walk through B at 3 to reach mouth 2
        let moves = b.moves();
        assert_eq!(
            moves.as_slice(),
            &[Move::CorridorToRoom {
                from: 3,
                room: 1,
                slot: 1,
                steps: 1 + 1,
                token: Token::B,
            }]
        );
    }

    #[test]
    fn foreign_token_closes_room() {
        let b = parse_burrow(
            "
#############
#.A.........#
###.#B#C#D###
  #D#B#C#A#
  #########",
        )
        .unwrap();

        let moves = b.moves();
        assert!(moves
            .iter()
            .all(|m| !matches!(m, Move::CorridorToRoom { .. })));

        // D leaves room 0 to the right only, A blocks the left side
        let from_room_0: Vec<_> = moves
            .iter()
            .filter(|m| matches!(m, Move::RoomToCorridor { room: 0, .. }))
            .map(|m| m.target())
            .collect();
        assert_eq!(
            from_room_0,
            [3, 5, 7, 9, 10].map(Place::Corridor).to_vec()
        );
    }

    #[test]
    fn scan_skips_mouths() {
        let b = parse_burrow(
            "
#############
#.....A.....#
###.#B#C#D###
  #D#B#C#A#
  #########",
        )
        .unwrap();

        let targets: Vec<_> = b
            .moves()
            .iter()
            .filter(|m| matches!(m, Move::RoomToCorridor { room: 0, .. }))
            .map(|m| m.target())
            .collect();
        assert_eq!(targets, [1, 0, 3].map(Place::Corridor).to_vec());
    }

    #[test]
    fn moves_conserve_tokens_and_cost_steps() {
        let start = parse_burrow(SHALLOW).unwrap();
        let tokens = start.token_count();

        for b in reachable(&start) {
            for mv in b.moves() {
                assert!(mv.steps() >= 1);
                assert_eq!(mv.energy(), mv.steps() * mv.token().energy());

                let next = b.apply(&mv);
                assert_eq!(next.token_count(), tokens);
                assert_eq!(next[mv.target()], Some(mv.token()));
                assert_eq!(next[mv.source()], None);
                assert_eq!(b[mv.target()], None);
            }
        }
    }

    #[test]
    fn every_move_generated_once() {
        let start = parse_burrow(SHALLOW).unwrap();
        for b in reachable(&start) {
            let moves = b.moves();
            let unique: HashSet<_> = moves.iter().map(|m| (m.source(), m.target())).collect();
            assert_eq!(unique.len(), moves.len());
        }
    }
}
