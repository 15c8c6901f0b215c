use std::{
    cmp::Ordering,
    collections::{hash_map::Entry, BinaryHeap, HashMap},
    fmt::Display,
    time::{Duration, Instant},
};

use pathfinding::directed::dijkstra::dijkstra;
use smallvec::SmallVec;

use crate::burrow::Burrow;

/// Printed in place of an energy when no sequence of moves sorts the burrow.
pub const UNREACHABLE: i64 = -1;

/// Bounds on a single search. The default is unbounded.
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    /// Stop after expanding this many configurations.
    pub max_expansions: Option<usize>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Minimum total energy needed to reach the goal.
    Solved(u32),
    /// Every reachable configuration was expanded without finding the goal.
    Unreachable,
    /// A limit stopped the search first; nothing is known about the answer.
    Incomplete,
}

impl Outcome {
    pub fn energy(&self) -> Option<u32> {
        match *self {
            Outcome::Solved(energy) => Some(energy),
            Outcome::Unreachable | Outcome::Incomplete => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Solved(energy) => write!(f, "{}", energy),
            Outcome::Unreachable => write!(f, "{}", UNREACHABLE),
            Outcome::Incomplete => f.write_str("incomplete"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations whose moves were generated.
    pub expanded: usize,
    /// Successors produced across all expansions.
    pub generated: usize,
    /// Frontier entries dropped because a cheaper route had been recorded.
    pub stale: usize,
}

#[derive(Clone, Debug)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

// frontier entry, ordered so that `BinaryHeap` pops the cheapest first
struct SearchNode {
    energy: u32,
    burrow: Burrow,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.energy == other.energy
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.energy.cmp(&self.energy)
    }
}

/// Uniform-cost search from `initial` to the sorted configuration.
///
/// The frontier may hold several entries for one configuration; an entry whose
/// energy exceeds the best recorded for it is skipped rather than expanded, so
/// the first goal popped carries the minimum energy.
pub fn search(initial: &Burrow, limits: &SearchLimits) -> SearchReport {
    let deadline = limits.time_limit.map(|limit| Instant::now() + limit);
    let mut stats = SearchStats::default();

    let mut best: HashMap<Burrow, u32> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    best.insert(initial.clone(), 0);
    frontier.push(SearchNode {
        energy: 0,
        burrow: initial.clone(),
    });

    while let Some(SearchNode { energy, burrow }) = frontier.pop() {
        if best.get(&burrow).map_or(false, |&known| energy > known) {
            stats.stale += 1;
            continue;
        }

        if burrow.is_goal() {
            return SearchReport {
                outcome: Outcome::Solved(energy),
                stats,
            };
        }

        let out_of_budget = limits
            .max_expansions
            .map_or(false, |max| stats.expanded >= max)
            || deadline.map_or(false, |deadline| Instant::now() >= deadline);
        if out_of_budget {
            return SearchReport {
                outcome: Outcome::Incomplete,
                stats,
            };
        }

        stats.expanded += 1;
        for (next, cost) in burrow.successors() {
            stats.generated += 1;
            let total = energy + cost;

            match best.entry(next) {
                Entry::Occupied(mut known) => {
                    if total < *known.get() {
                        known.insert(total);
                        frontier.push(SearchNode {
                            energy: total,
                            burrow: known.key().clone(),
                        });
                    }
                }
                Entry::Vacant(absent) => {
                    frontier.push(SearchNode {
                        energy: total,
                        burrow: absent.key().clone(),
                    });
                    absent.insert(total);
                }
            }
        }
    }

    SearchReport {
        outcome: Outcome::Unreachable,
        stats,
    }
}

/// Minimum energy to sort `initial`, or `None` if it cannot be sorted.
pub fn minimum_energy(initial: &Burrow) -> Option<u32> {
    search(initial, &SearchLimits::default()).outcome.energy()
}

/// One cheapest sequence of configurations from `initial` to the goal, both ends
/// included, along with its total energy.
pub fn cheapest_path(initial: &Burrow) -> Option<(Vec<Burrow>, u32)> {
    dijkstra(
        initial,
        |b| {
            let buffer: SmallVec<[(Burrow, u32); 32]> = b.successors().collect();
            buffer
        },
        |b| b.is_goal(),
    )
}
