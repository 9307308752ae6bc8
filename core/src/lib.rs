//! Minesweeper game core: board building, the reveal engine with its
//! flood-fill cascade, and session orchestration with win/loss tracking.
//!
//! Everything here is pure, synchronous computation over in-memory state;
//! transport and rendering live elsewhere and only ever see read-only
//! snapshots.

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use layout::*;
pub use session::*;
pub use types::*;

pub mod catalog;
mod cell;
mod engine;
mod error;
mod grid;
mod layout;
mod session;
mod types;
