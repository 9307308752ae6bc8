use serde::{Deserialize, Serialize};

/// One board cell as the player can observe it.
///
/// `adjacent` stays `None` until the cell is revealed; it is computed lazily
/// by the reveal engine rather than at build time. Mine cells never carry a
/// count. `flagged` is a pure player annotation and survives a reveal so the
/// presentation layer can decide how to render the combination.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    pub adjacent: Option<u8>,
}

impl Cell {
    pub const fn is_unrevealed(self) -> bool {
        !self.revealed
    }
}
