//! Cell grid and derived edge flags.

use bitflags::bitflags;
use glam::IVec2;

use crate::view::{Facing, Pose, SpecialSquare, Stairwell, TileKind};

bitflags! {
    /// What the boundary between two cells does to sight and movement.
    ///
    /// `BLOCKED` alone is a plain wall.  `DOOR`/`PASSAGE` refine a blocked
    /// edge into something that can be walked through; `HIDDEN` marks the
    /// concealed variants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EdgeFlags: u8 {
        const BLOCKED = 0x01;
        const DOOR    = 0x02;
        const PASSAGE = 0x04;
        const HIDDEN  = 0x08;
    }
}

/// What one grid cell is made of.
///
/// Door and passage cells are thin feature cells: they block sight, can be
/// stepped into, and stamp their feature onto every edge facing an open
/// neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Solid,
    Door,
    HiddenDoor,
    SecretPassage,
    ConcealedPassage,
    Open(TileKind),
}

impl CellKind {
    fn edge_flags(self) -> EdgeFlags {
        match self {
            CellKind::Solid => EdgeFlags::BLOCKED,
            CellKind::Door => EdgeFlags::BLOCKED | EdgeFlags::DOOR,
            CellKind::HiddenDoor => EdgeFlags::BLOCKED | EdgeFlags::DOOR | EdgeFlags::HIDDEN,
            CellKind::SecretPassage => EdgeFlags::BLOCKED | EdgeFlags::PASSAGE,
            CellKind::ConcealedPassage => {
                EdgeFlags::BLOCKED | EdgeFlags::PASSAGE | EdgeFlags::HIDDEN
            }
            CellKind::Open(_) => EdgeFlags::empty(),
        }
    }
}

/// One dungeon floor: the cell grid plus its recorded stairwell, special
/// squares and encounter counter.
#[derive(Clone, Debug)]
pub struct FloorMap {
    pub width: i32,
    pub height: i32,
    cells: Vec<CellKind>,
    pub stairs: Option<Stairwell>,
    pub specials: Vec<SpecialSquare>,
    pub encounters: u32,
}

impl FloorMap {
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<CellKind>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            cells,
            stairs: None,
            specials: Vec::new(),
            encounters: 0,
        }
    }

    /// Cell kind at `pos`; everything out of bounds is solid rock.
    pub fn cell(&self, pos: IVec2) -> CellKind {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return CellKind::Solid;
        }
        self.cells[(pos.y * self.width + pos.x) as usize]
    }

    /// Flags of the edge leaving `pos` towards `facing`, derived from the
    /// neighbouring cell.
    pub fn edge(&self, pos: IVec2, facing: Facing) -> EdgeFlags {
        self.cell(pos + facing.step()).edge_flags()
    }

    /// Exact tile type at `pos` for the indicator overlay.  Feature cells
    /// you can stand inside count as plain floor.
    pub fn tile(&self, pos: IVec2) -> TileKind {
        match self.cell(pos) {
            CellKind::Open(tile) => tile,
            CellKind::Solid => TileKind::Solid,
            _ => TileKind::Floor,
        }
    }

    pub fn special_at(&self, pos: IVec2) -> Option<SpecialSquare> {
        self.specials.iter().copied().find(|s| s.pos == pos)
    }
}

/// A stack of floors.  An empty dungeon is "not initialised": the view
/// adapter reports no snapshot and the renderer shows its placeholder.
#[derive(Clone, Debug, Default)]
pub struct Dungeon {
    floors: Vec<FloorMap>,
    start: Option<Pose>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_floor(&mut self, floor: FloorMap) {
        self.floors.push(floor);
    }

    pub(crate) fn set_start(&mut self, pose: Pose) {
        self.start = Some(pose);
    }

    pub fn floor(&self, idx: u8) -> Option<&FloorMap> {
        self.floors.get(idx as usize)
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Initial viewer pose: the parsed start marker, or the first open cell.
    pub fn start(&self) -> Option<Pose> {
        if let Some(pose) = self.start {
            return Some(pose);
        }
        let floor = self.floors.first()?;
        for y in 0..floor.height {
            for x in 0..floor.width {
                let pos = IVec2::new(x, y);
                if matches!(floor.cell(pos), CellKind::Open(_)) {
                    return Some(Pose::new(pos, 0, Facing::North));
                }
            }
        }
        None
    }

    /// Can the viewer step from `pose` one cell forward?  Plain walls
    /// block; doors and passages swing open when walked through.
    pub fn passable(&self, pose: &Pose) -> bool {
        let Some(floor) = self.floor(pose.floor) else {
            return false;
        };
        let edge = floor.edge(pose.pos, pose.facing);
        !edge.contains(EdgeFlags::BLOCKED)
            || edge.intersects(EdgeFlags::DOOR | EdgeFlags::PASSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one(a: CellKind, b: CellKind) -> FloorMap {
        FloorMap::from_cells(2, 1, vec![a, b])
    }

    #[test]
    fn edges_derive_from_the_neighbouring_cell() {
        let floor = two_by_one(CellKind::Open(TileKind::Floor), CellKind::HiddenDoor);
        let edge = floor.edge(IVec2::new(0, 0), Facing::East);
        assert!(edge.contains(EdgeFlags::BLOCKED | EdgeFlags::DOOR | EdgeFlags::HIDDEN));
        assert!(!edge.contains(EdgeFlags::PASSAGE));
    }

    #[test]
    fn out_of_bounds_is_solid() {
        let floor = two_by_one(CellKind::Open(TileKind::Floor), CellKind::Solid);
        assert_eq!(floor.cell(IVec2::new(-1, 0)), CellKind::Solid);
        assert_eq!(floor.tile(IVec2::new(5, 5)), TileKind::Solid);
        assert_eq!(
            floor.edge(IVec2::new(0, 0), Facing::North),
            EdgeFlags::BLOCKED
        );
    }

    #[test]
    fn doors_are_passable_but_walls_are_not() {
        let mut dungeon = Dungeon::new();
        dungeon.push_floor(two_by_one(CellKind::Open(TileKind::Floor), CellKind::Door));
        let towards_door = Pose::new(IVec2::new(0, 0), 0, Facing::East);
        let towards_rock = Pose::new(IVec2::new(0, 0), 0, Facing::West);
        assert!(dungeon.passable(&towards_door));
        assert!(!dungeon.passable(&towards_rock));
    }

    #[test]
    fn start_falls_back_to_the_first_open_cell() {
        let mut dungeon = Dungeon::new();
        dungeon.push_floor(two_by_one(CellKind::Solid, CellKind::Open(TileKind::Floor)));
        let pose = dungeon.start().unwrap();
        assert_eq!(pose.pos, IVec2::new(1, 0));
    }

    #[test]
    fn empty_dungeon_has_no_start() {
        assert!(Dungeon::new().start().is_none());
    }
}
