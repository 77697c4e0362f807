//! Shared types of the view boundary.
//!
//! The renderer never inspects the dungeon grid directly; it consumes a
//! [`ViewSnapshot`] rebuilt each frame by whatever implements [`ViewSource`].

mod facing;
mod snapshot;

pub use facing::{Facing, Pose};
pub use snapshot::{
    CellVec, DoorCell, DoorKind, FloorInfo, PassageCell, PassageKind, Side, SpecialKind,
    SpecialSquare, StairDir, Stairwell, TileKind, TrapKind, ViewSnapshot, ViewSource, WallCell,
};
