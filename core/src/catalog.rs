//! Pre-authored puzzle boards, standing in for the server-side catalog the
//! presentation layer fetches from.
//!
//! Selection is deliberately trivial: a caller either asks for a specific
//! index, supplies its own board for a validated echo, or gets a random
//! catalog entry.

use rand::prelude::*;

use crate::{GameError, Layout, Result};

/// Fixed 16x16 puzzle list; index positions are part of the retrieval
/// contract, so entries are never reordered.
pub const PUZZLES: [&str; 4] = [
    concat!(
        "--x----------x--",
        "------x-------x-",
        "x-------x-------",
        "------x------x--",
        "-x-------------x",
        "----x-----x-----",
        "--x---------x---",
        "-------x-x------",
        "x-------------x-",
        "------x-x-------",
        "-x-----------x--",
        "----x------x----",
        "--x------x------",
        "-----x------x---",
        "---x------x-----",
        "------x-------x-",
    ),
    concat!(
        "x--------x------",
        "----x---------x-",
        "-x--------x-----",
        "-------x------x-",
        "--x--------x----",
        "x--------x------",
        "-----x--------x-",
        "--x-------x-----",
        "-------x-------x",
        "-x--------x-----",
        "----x--------x--",
        "x---------x-----",
        "------x-------x-",
        "--x--------x----",
        "-----x--------x-",
        "-x-------x------",
    ),
    concat!(
        "----------------",
        "--xx------xx----",
        "--x--------x----",
        "----------------",
        "------xx--------",
        "-----x--x-------",
        "------xx--------",
        "----------------",
        "-xx----------xx-",
        "-x------------x-",
        "----------------",
        "-----xxxx-------",
        "----------------",
        "--x----------x--",
        "--xx--------xx--",
        "----------------",
    ),
    concat!(
        "x---x---x---x---",
        "----------------",
        "--x---x---x---x-",
        "----------------",
        "x---x---x---x---",
        "----------------",
        "--x---x---x---x-",
        "----------------",
        "x---x---x---x---",
        "----------------",
        "--x---x---x---x-",
        "----------------",
        "x---x---x---x---",
        "----------------",
        "--x---x---x---x-",
        "----------------",
    ),
];

/// Looks up a catalog entry by index.
pub fn get(index: usize) -> Result<&'static str> {
    PUZZLES
        .get(index)
        .copied()
        .ok_or(GameError::PuzzleNotFound { index })
}

/// Picks a random catalog entry.
pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PUZZLES[rng.random_range(0..PUZZLES.len())]
}

/// Resolves a board request the way the retrieval endpoint does: a
/// caller-supplied board is validated and echoed, an explicit index selects
/// that entry or fails, and with neither a random entry is served.
pub fn resolve<R: Rng + ?Sized>(
    index: Option<usize>,
    custom: Option<&str>,
    rng: &mut R,
) -> Result<Layout> {
    match (custom, index) {
        (Some(board), _) => Layout::parse_default(board),
        (None, Some(index)) => Layout::parse_default(get(index)?),
        (None, None) => Layout::parse_default(pick_random(rng)),
    }
}
