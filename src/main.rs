use std::io;

use anyhow::{bail, Context};
use burrow_sort::{parse_burrow, search, Outcome, SearchLimits};

// Reads a diagram such as
//
// #############
// #...........#
// ###B#C#B#D###
//   #A#D#C#A#
//   #########
//
// from stdin and prints the least energy needed to sort it, or -1 if it can't be sorted.
fn main() -> anyhow::Result<()> {
    let input = io::read_to_string(io::stdin()).context("failed to read the diagram from stdin")?;
    let burrow = parse_burrow(&input).context("invalid burrow diagram")?;

    let report = search(&burrow, &SearchLimits::default());
    eprintln!(
        "Expanded {} configurations (generated {} total, {} stale).",
        report.stats.expanded, report.stats.generated, report.stats.stale
    );

    if report.outcome == Outcome::Incomplete {
        bail!("search stopped before finishing");
    }

    println!("{}", report.outcome);
    Ok(())
}
