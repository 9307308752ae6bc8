use std::collections::{BTreeSet, VecDeque};

use crate::{CellCount, Coord2, Grid, Result, neighbors};

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Carries the number of newly revealed cells, cascade included.
    Revealed(CellCount),
    HitMine,
}

impl RevealOutcome {
    /// Number of cells newly revealed by the operation.
    pub const fn delta(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Revealed(count) => count,
            Self::HitMine => 1,
        }
    }

    pub const fn hit_mine(self) -> bool {
        matches!(self, Self::HitMine)
    }
}

/// Outcome of a flag operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl Grid {
    /// Reveals the cell at `coords` and cascades through connected
    /// zero-count regions.
    ///
    /// Out-of-range coordinates are an error; internally the cascade clips
    /// neighbors at the edges, so the boundary question never recurs. A
    /// target that is already revealed is a no-op, which makes the operation
    /// idempotent. Revealing a mine marks only that one cell and never
    /// cascades. Flags never block a reveal and are preserved on the
    /// revealed cell.
    ///
    /// The cascade is a work-list traversal rather than native recursion, so
    /// a full-board cascade costs no call-stack depth.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if self[coords].revealed {
            return Ok(RevealOutcome::NoChange);
        }

        if self[coords].is_mine {
            self[coords].revealed = true;
            log::debug!("mine hit at {coords:?}");
            return Ok(RevealOutcome::HitMine);
        }

        let count = self.adjacent_mine_count(coords);
        self[coords].revealed = true;
        self[coords].adjacent = Some(count);
        let mut delta: CellCount = 1;
        log::debug!("revealed {coords:?}, adjacent mines: {count}");

        if count == 0 {
            let mut visited = BTreeSet::from([coords]);
            let mut to_visit: VecDeque<_> = neighbors(coords, self.size())
                .filter(|&pos| !self[pos].revealed)
                .collect();
            log::trace!("flood fill from {coords:?}, initial frontier: {to_visit:?}");

            while let Some(visit) = to_visit.pop_front() {
                if !visited.insert(visit) {
                    continue;
                }
                if self[visit].revealed {
                    continue;
                }

                // Only neighbors of zero-count cells land here, and a
                // zero-count cell has no mine next to it.
                let visit_count = self.adjacent_mine_count(visit);
                self[visit].revealed = true;
                self[visit].adjacent = Some(visit_count);
                delta += 1;
                log::trace!("flood revealed {visit:?}, adjacent mines: {visit_count}");

                if visit_count == 0 {
                    to_visit.extend(
                        neighbors(visit, self.size())
                            .filter(|&pos| !self[pos].revealed)
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        Ok(RevealOutcome::Revealed(delta))
    }

    /// Sets or clears the flag annotation at `coords`. Flagging an already
    /// revealed cell is allowed and has no effect on reveal logic.
    pub fn set_flag(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        if self[coords].flagged == flagged {
            return Ok(MarkOutcome::NoChange);
        }
        self[coords].flagged = flagged;
        Ok(MarkOutcome::Changed)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let flagged = self[coords].flagged;
        self.set_flag(coords, !flagged)
    }
}
