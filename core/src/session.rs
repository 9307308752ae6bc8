use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord2, Grid, Layout, Result};

/// Session lifecycle: `Playing -> {Won | Lost}`. Both end states are
/// terminal; only a reset produces a playable session again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a pointer event means for the targeted cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickMode {
    Reveal,
    Flag,
}

/// A single game from layout to win or loss.
///
/// The session exclusively owns its grid; callers only ever see read-only
/// [`SessionView`] snapshots. `won` is derived, never stored: the game is won
/// once every non-mine cell has been visited without a mine going off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    grid: Grid,
    mine_count: CellCount,
    visited_count: CellCount,
    lost: bool,
}

impl GameSession {
    pub fn start(layout: &Layout) -> Self {
        Self {
            grid: Grid::build(layout),
            mine_count: layout.mine_count(),
            visited_count: 0,
            lost: false,
        }
    }

    /// Discards all prior state and starts over from `layout`. Nothing of
    /// the old game survives, the grid and counters are rebuilt wholesale.
    pub fn reset(&mut self, layout: &Layout) {
        *self = Self::start(layout);
    }

    pub fn state(&self) -> SessionState {
        if self.lost {
            SessionState::Lost
        } else if self.visited_count == self.safe_cell_count() {
            SessionState::Won
        } else {
            SessionState::Playing
        }
    }

    pub fn won(&self) -> bool {
        matches!(self.state(), SessionState::Won)
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn visited_count(&self) -> CellCount {
        self.visited_count
    }

    fn safe_cell_count(&self) -> CellCount {
        self.grid.total_cells() - self.mine_count
    }

    /// Dispatches one player command.
    ///
    /// A finished session is frozen: any further click, flag mode included,
    /// is silently ignored and the current state comes back unchanged. Only
    /// [`reset`](Self::reset) leaves a terminal state. Out-of-range
    /// coordinates are still an error on a live session.
    pub fn click(&mut self, coords: Coord2, mode: ClickMode) -> Result<SessionView<'_>> {
        if self.state().is_finished() {
            log::debug!("click at {coords:?} ignored, session is {:?}", self.state());
            return Ok(self.view());
        }

        match mode {
            ClickMode::Reveal => {
                let outcome = self.grid.reveal(coords)?;
                self.visited_count += outcome.delta();
                if outcome.hit_mine() {
                    // Game over on the spot; the other mines stay hidden.
                    self.lost = true;
                    log::debug!("session lost at {coords:?}");
                }
            }
            ClickMode::Flag => {
                self.grid.toggle_flag(coords)?;
            }
        }

        Ok(self.view())
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            grid: &self.grid,
            visited_count: self.visited_count,
            mine_count: self.mine_count,
            state: self.state(),
        }
    }
}

/// Read-only snapshot handed to the presentation layer after each command.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SessionView<'a> {
    pub grid: &'a Grid,
    pub visited_count: CellCount,
    pub mine_count: CellCount,
    pub state: SessionState,
}
