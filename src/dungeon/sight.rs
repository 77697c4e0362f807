//! Snapshot builder: the dungeon's [`ViewSource`] implementation.
//!
//! Walks the grid ahead of the viewer band by band.  Band `d` is flanked by
//! the side edges of the cell `d-1` steps ahead and closed by the edge
//! between the cells `d-1` and `d` steps ahead; the walk stops at the first
//! blocking front edge (doors and secret passages block sight just like
//! walls).  At most one front cell per band by construction.

use glam::IVec2;

use crate::dungeon::grid::{Dungeon, EdgeFlags};
use crate::view::{
    DoorCell, DoorKind, FloorInfo, PassageCell, PassageKind, Pose, Side, SpecialSquare, Stairwell,
    TileKind, ViewSnapshot, ViewSource, WallCell,
};

fn push_edge(snap: &mut ViewSnapshot, edge: EdgeFlags, distance: u8, side: Side) {
    if !edge.contains(EdgeFlags::BLOCKED) {
        return;
    }
    if edge.contains(EdgeFlags::DOOR) {
        let kind = if edge.contains(EdgeFlags::HIDDEN) {
            DoorKind::Hidden
        } else {
            DoorKind::Normal
        };
        snap.doors.push(DoorCell {
            distance,
            side,
            kind,
        });
    } else if edge.contains(EdgeFlags::PASSAGE) {
        let kind = if edge.contains(EdgeFlags::HIDDEN) {
            PassageKind::Concealed
        } else {
            PassageKind::Secret
        };
        snap.passages.push(PassageCell {
            distance,
            side,
            kind,
        });
    } else {
        snap.walls.push(WallCell { distance, side });
    }
}

impl ViewSource for Dungeon {
    fn viewing_info(&self, pose: &Pose, max_distance: u8) -> Option<ViewSnapshot> {
        let floor = self.floor(pose.floor)?;
        let mut snap = ViewSnapshot::new(*pose);
        let left = pose.facing.left();
        let right = pose.facing.right();

        for d in 1..=max_distance {
            let cell = pose.ahead(d as i32 - 1);
            push_edge(&mut snap, floor.edge(cell, left), d, Side::Left);
            push_edge(&mut snap, floor.edge(cell, right), d, Side::Right);

            let front = floor.edge(cell, pose.facing);
            if front.contains(EdgeFlags::BLOCKED) {
                push_edge(&mut snap, front, d, Side::Front);
                break;
            }
        }
        Some(snap)
    }

    fn floor_info(&self, floor: u8) -> FloorInfo {
        self.floor(floor)
            .map(|f| FloorInfo {
                encounters: f.encounters,
                special_squares: f.specials.len() as u32,
            })
            .unwrap_or_default()
    }

    fn tile(&self, floor: u8, pos: IVec2) -> TileKind {
        self.floor(floor)
            .map(|f| f.tile(pos))
            .unwrap_or(TileKind::Solid)
    }

    fn stairs(&self, floor: u8) -> Option<Stairwell> {
        self.floor(floor)?.stairs
    }

    fn special_at(&self, floor: u8, pos: IVec2) -> Option<SpecialSquare> {
        self.floor(floor)?.special_at(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Facing;

    /// 5x3 east-west corridor, walls above and below everywhere.
    fn corridor() -> Dungeon {
        Dungeon::from_maps(["\
#####
#..@#
#####"])
        .unwrap()
    }

    fn snap(dungeon: &Dungeon, pose: Pose, max: u8) -> ViewSnapshot {
        dungeon.viewing_info(&pose, max).unwrap()
    }

    #[test]
    fn not_ready_dungeon_yields_no_snapshot() {
        let dungeon = Dungeon::new();
        let pose = Pose::new(IVec2::new(0, 0), 0, Facing::North);
        assert!(dungeon.viewing_info(&pose, 5).is_none());
    }

    #[test]
    fn own_cell_sides_flank_the_first_band() {
        let dungeon = corridor();
        let pose = Pose::new(IVec2::new(3, 1), 0, Facing::West);
        let s = snap(&dungeon, pose, 5);
        assert!(
            s.walls
                .iter()
                .any(|w| w.distance == 1 && w.side == Side::Left)
        );
        assert!(
            s.walls
                .iter()
                .any(|w| w.distance == 1 && w.side == Side::Right)
        );
    }

    #[test]
    fn blocking_front_wall_ends_the_walk() {
        let dungeon = corridor();
        // facing north from inside the corridor: wall immediately ahead
        let pose = Pose::new(IVec2::new(2, 1), 0, Facing::North);
        let s = snap(&dungeon, pose, 5);
        assert!(
            s.walls
                .iter()
                .any(|w| w.distance == 1 && w.side == Side::Front)
        );
        assert!(s.walls.iter().all(|w| w.distance == 1));
    }

    #[test]
    fn front_blocks_appear_at_their_band() {
        let dungeon = corridor();
        // from x=3 facing west: open cells at 2 and 1, wall plane at band 3
        let pose = Pose::new(IVec2::new(3, 1), 0, Facing::West);
        let s = snap(&dungeon, pose, 5);
        let front: Vec<_> = s.walls.iter().filter(|w| w.side == Side::Front).collect();
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].distance, 3);
    }

    #[test]
    fn doors_and_passages_block_sight() {
        let dungeon = Dungeon::from_maps(["\
######
#@.H.#
######"])
        .unwrap();
        let pose = Pose::new(IVec2::new(1, 1), 0, Facing::East);
        let s = snap(&dungeon, pose, 5);
        let door: Vec<_> = s.doors.iter().filter(|c| c.side == Side::Front).collect();
        assert_eq!(door.len(), 1);
        assert_eq!(door[0].distance, 2);
        assert_eq!(door[0].kind, DoorKind::Hidden);
        // nothing visible beyond the door
        assert!(s.walls.iter().all(|w| w.distance <= 2));
    }

    #[test]
    fn side_features_attach_to_their_band() {
        let dungeon = Dungeon::from_maps(["\
#####
#P###
#@..#
#####"])
        .unwrap();
        // the secret passage sits north of the start cell; facing east it
        // flanks band 1 on the left
        let pose = Pose::new(IVec2::new(1, 2), 0, Facing::East);
        let s = snap(&dungeon, pose, 5);
        assert!(
            s.passages
                .iter()
                .any(|p| p.distance == 1 && p.side == Side::Left && p.kind == PassageKind::Secret)
        );
    }

    #[test]
    fn clamps_to_max_distance() {
        let dungeon = Dungeon::from_maps(["\
##########
#@.......#
##########"])
        .unwrap();
        let pose = Pose::new(IVec2::new(1, 1), 0, Facing::East);
        let s = snap(&dungeon, pose, 3);
        assert!(s.walls.iter().all(|w| w.distance <= 3));
        assert!(s.walls.iter().all(|w| w.side != Side::Front));
    }
}
