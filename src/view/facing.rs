use glam::IVec2;

/// Cardinal viewing direction on the grid.
///
/// Grid axes follow map-text order: `+x` east, `+y` south (row index grows
/// downwards), so north is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// One forward step in grid coordinates.
    #[inline]
    pub fn step(self) -> IVec2 {
        match self {
            Facing::North => IVec2::new(0, -1),
            Facing::East => IVec2::new(1, 0),
            Facing::South => IVec2::new(0, 1),
            Facing::West => IVec2::new(-1, 0),
        }
    }

    /// Facing after a quarter turn counter-clockwise.
    #[inline]
    pub fn left(self) -> Facing {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// Facing after a quarter turn clockwise.
    #[inline]
    pub fn right(self) -> Facing {
        self.left().left().left()
    }

    /// Single-letter compass label for the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Facing::North => "N",
            Facing::East => "E",
            Facing::South => "S",
            Facing::West => "W",
        }
    }
}

/// Viewer position and heading: grid cell, floor index, cardinal facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pose {
    pub pos: IVec2,
    pub floor: u8,
    pub facing: Facing,
}

impl Pose {
    pub fn new(pos: IVec2, floor: u8, facing: Facing) -> Self {
        Self { pos, floor, facing }
    }

    /// Grid cell `d` steps ahead of the viewer.
    #[inline]
    pub fn ahead(&self, d: i32) -> IVec2 {
        self.pos + self.facing.step() * d
    }
}
