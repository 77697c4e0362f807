//! Per-frame view description handed to the renderer.
//!
//! A [`ViewSnapshot`] is rebuilt from scratch every frame by the adapter,
//! consumed by the compositor and discarded.  Cells carry an integer
//! *distance band* (`1` = the adjacent cell) and which face of the corridor
//! they belong to.  Visibility and secret-discovery decisions happen on the
//! adapter side; whatever appears in the snapshot gets drawn.

use glam::IVec2;
use smallvec::SmallVec;

use crate::view::Pose;

/// Snapshot cell lists are small (a handful of cells per frame), so they
/// live inline until they spill.
pub type CellVec<T> = SmallVec<[T; 8]>;

/// Which corridor face a snapshot cell occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Left,
    Right,
}

/// Plain blocking wall at a distance band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallCell {
    pub distance: u8,
    pub side: Side,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorKind {
    Normal,
    /// Already flagged as present by the adapter, but drawn in the
    /// "concealed" style (dashed stroke plus marker glyph).
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoorCell {
    pub distance: u8,
    pub side: Side,
    pub kind: DoorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassageKind {
    Secret,
    Concealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassageCell {
    pub distance: u8,
    pub side: Side,
    pub kind: PassageKind,
}

/// Everything the renderer needs for one frame.
///
/// Distance semantics: a `Front` cell at distance `d` is the plane closing
/// band `d` (between the cells `d-1` and `d` steps ahead); a `Left`/`Right`
/// cell at distance `d` flanks band `d`, i.e. it is a side face of the cell
/// `d-1` steps ahead and spans screen depth `d-1..d`.
#[derive(Clone, Debug)]
pub struct ViewSnapshot {
    pub pose: Pose,
    pub walls: CellVec<WallCell>,
    pub doors: CellVec<DoorCell>,
    pub passages: CellVec<PassageCell>,
}

impl ViewSnapshot {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            walls: CellVec::new(),
            doors: CellVec::new(),
            passages: CellVec::new(),
        }
    }
}

/// Per-floor counters shown by the HUD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloorInfo {
    pub encounters: u32,
    pub special_squares: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapKind {
    Pit,
    Gas,
    Dart,
    Teleporter,
}

impl TrapKind {
    pub fn name(self) -> &'static str {
        match self {
            TrapKind::Pit => "PIT TRAP",
            TrapKind::Gas => "GAS TRAP",
            TrapKind::Dart => "DART TRAP",
            TrapKind::Teleporter => "TELEPORTER",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StairDir {
    Up,
    Down,
}

/// Recorded stair location of a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stairwell {
    pub pos: IVec2,
    pub dir: StairDir,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialKind {
    Fountain,
    Altar,
    Message,
    Chute,
}

impl SpecialKind {
    pub fn name(self) -> &'static str {
        match self {
            SpecialKind::Fountain => "FOUNTAIN",
            SpecialKind::Altar => "ALTAR",
            SpecialKind::Message => "INSCRIPTION",
            SpecialKind::Chute => "CHUTE",
        }
    }

    /// Interaction hint shown on the banner's second line.
    pub fn hint(self) -> &'static str {
        match self {
            SpecialKind::Fountain => "PRESS SPACE TO DRINK",
            SpecialKind::Altar => "PRESS SPACE TO PRAY",
            SpecialKind::Message => "PRESS SPACE TO READ",
            SpecialKind::Chute => "STEP CAREFULLY",
        }
    }
}

/// Recorded special square of a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialSquare {
    pub pos: IVec2,
    pub kind: SpecialKind,
}

/// Exact tile type under a grid cell, used by the indicator overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Trap(TrapKind),
    Stairs(StairDir),
    Special,
    Solid,
}

/// The external dungeon/view adapter the renderer consumes.
///
/// `viewing_info` returns `None` while the dungeon is not ready; the
/// renderer then falls back to its static placeholder frame.
pub trait ViewSource {
    /// Fresh snapshot for this pose, with cells out to `max_distance` bands.
    fn viewing_info(&self, pose: &Pose, max_distance: u8) -> Option<ViewSnapshot>;

    /// HUD counters for one floor.
    fn floor_info(&self, floor: u8) -> FloorInfo;

    /// Exact tile type at a grid cell (solid for out-of-bounds).
    fn tile(&self, floor: u8, pos: IVec2) -> TileKind;

    /// The floor's recorded stair location, if any.
    fn stairs(&self, floor: u8) -> Option<Stairwell>;

    /// The floor's recorded special square at `pos`, if any.
    fn special_at(&self, floor: u8, pos: IVec2) -> Option<SpecialSquare>;
}
