//! Grid dungeon model and ASCII map loader.
//!
//! This is the in-repo stand-in for the host game's dungeon state: it owns
//! the cell grid, derives per-edge flags, and implements
//! [`crate::view::ViewSource`] so the viewer binaries and integration-style tests
//! have a real adapter to render from.

mod grid;
mod loader;
mod sight;

pub use grid::{CellKind, Dungeon, EdgeFlags, FloorMap};
pub use loader::{DEMO_LOWER, DEMO_MAP, MapError};
