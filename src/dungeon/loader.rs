//! ASCII map loader.
//!
//! One text block per floor.  Blank lines and `;` comments are skipped,
//! `key: value` lines are directives (only `encounters` so far), everything
//! else is a grid row:
//!
//! ```text
//! #   solid rock            .   open floor        @   viewer start
//! D   door                  H   hidden door
//! P   secret passage        C   concealed passage
//! T   pit trap              G   gas trap
//! <   stairs up             >   stairs down
//! *   inscription           F   fountain    A   altar    O   chute
//! ```

use glam::IVec2;
use thiserror::Error;

use crate::dungeon::grid::{CellKind, Dungeon, FloorMap};
use crate::view::{Facing, Pose, SpecialKind, SpecialSquare, StairDir, Stairwell, TileKind, TrapKind};

/// Errors that can be encountered while parsing a map block.
#[derive(Error, Debug)]
pub enum MapError {
    /// No grid rows at all.
    #[error("map has no rows")]
    Empty,

    /// Every row must be as wide as the first one.
    #[error("row {row} is {got} cells wide, expected {want}")]
    RaggedRow { row: usize, want: usize, got: usize },

    #[error("unknown map glyph '{glyph}' at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("bad directive '{0}'")]
    BadDirective(String),
}

/// Parse one floor block; also returns the `@` start cell if present.
pub fn parse_floor(text: &str) -> Result<(FloorMap, Option<IVec2>), MapError> {
    let mut rows: Vec<&str> = Vec::new();
    let mut encounters = 0u32;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            match key.trim() {
                "encounters" => {
                    encounters = value
                        .trim()
                        .parse()
                        .map_err(|_| MapError::BadDirective(trimmed.to_string()))?;
                }
                _ => return Err(MapError::BadDirective(trimmed.to_string())),
            }
            continue;
        }
        rows.push(line);
    }

    if rows.is_empty() {
        return Err(MapError::Empty);
    }
    let width = rows[0].chars().count();
    let height = rows.len();

    let mut cells = Vec::with_capacity(width * height);
    let mut stairs: Option<Stairwell> = None;
    let mut specials: Vec<SpecialSquare> = Vec::new();
    let mut start: Option<IVec2> = None;

    for (y, row) in rows.iter().enumerate() {
        let got = row.chars().count();
        if got != width {
            return Err(MapError::RaggedRow {
                row: y,
                want: width,
                got,
            });
        }
        for (x, glyph) in row.chars().enumerate() {
            let pos = IVec2::new(x as i32, y as i32);
            let kind = match glyph {
                '#' | ' ' => CellKind::Solid,
                '.' => CellKind::Open(TileKind::Floor),
                '@' => {
                    start = Some(pos);
                    CellKind::Open(TileKind::Floor)
                }
                'D' => CellKind::Door,
                'H' => CellKind::HiddenDoor,
                'P' => CellKind::SecretPassage,
                'C' => CellKind::ConcealedPassage,
                'T' => CellKind::Open(TileKind::Trap(TrapKind::Pit)),
                'G' => CellKind::Open(TileKind::Trap(TrapKind::Gas)),
                '<' | '>' => {
                    let dir = if glyph == '<' {
                        StairDir::Up
                    } else {
                        StairDir::Down
                    };
                    // first stairwell is the floor's recorded one
                    stairs.get_or_insert(Stairwell { pos, dir });
                    CellKind::Open(TileKind::Stairs(dir))
                }
                '*' | 'F' | 'A' | 'O' => {
                    let kind = match glyph {
                        '*' => SpecialKind::Message,
                        'F' => SpecialKind::Fountain,
                        'A' => SpecialKind::Altar,
                        _ => SpecialKind::Chute,
                    };
                    specials.push(SpecialSquare { pos, kind });
                    CellKind::Open(TileKind::Special)
                }
                other => {
                    return Err(MapError::UnknownGlyph {
                        glyph: other,
                        x,
                        y,
                    });
                }
            };
            cells.push(kind);
        }
    }

    let mut floor = FloorMap::from_cells(width as i32, height as i32, cells);
    floor.stairs = stairs;
    floor.specials = specials;
    floor.encounters = encounters;
    Ok((floor, start))
}

impl Dungeon {
    /// Build a dungeon from one map block per floor, top floor first.
    pub fn from_maps<'a, I>(maps: I) -> Result<Dungeon, MapError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut dungeon = Dungeon::new();
        let mut have_start = false;
        for (idx, text) in maps.into_iter().enumerate() {
            let (floor, start) = parse_floor(text)?;
            if let Some(pos) = start {
                // the first @ marker across all floors wins
                if !have_start {
                    dungeon.set_start(Pose::new(pos, idx as u8, Facing::North));
                    have_start = true;
                }
            }
            dungeon.push_floor(floor);
        }
        if dungeon.floor_count() == 0 {
            return Err(MapError::Empty);
        }
        Ok(dungeon)
    }

    /// The built-in two-floor demo dungeon.
    pub fn demo() -> Dungeon {
        Dungeon::from_maps([DEMO_MAP, DEMO_LOWER]).expect("built-in demo map parses")
    }
}

/// Built-in demo floor 1.
pub const DEMO_MAP: &str = "\
; demo floor 1
encounters: 4
############
#@...D....>#
#.##.#.##.##
#.#T.#.#..G#
#.#.##.#.#.#
#..*#..H.#.#
##.##.##.#.#
#..P.....#.#
##C#.##.#..#
############";

/// Built-in demo floor 2.
pub const DEMO_LOWER: &str = "\
; demo floor 2
encounters: 2
########
#<....F#
#.####.#
#......#
########";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::EdgeFlags;

    #[test]
    fn demo_maps_parse() {
        let dungeon = Dungeon::demo();
        assert_eq!(dungeon.floor_count(), 2);
        let first = dungeon.floor(0).unwrap();
        assert_eq!((first.width, first.height), (12, 10));
        assert_eq!(first.encounters, 4);
        assert_eq!(dungeon.floor(1).unwrap().encounters, 2);
    }

    #[test]
    fn start_marker_sets_the_initial_pose() {
        let pose = Dungeon::demo().start().unwrap();
        assert_eq!(pose.pos, IVec2::new(1, 1));
        assert_eq!(pose.floor, 0);
    }

    #[test]
    fn stairwells_and_specials_are_recorded() {
        let dungeon = Dungeon::demo();
        let first = dungeon.floor(0).unwrap();
        let stairs = first.stairs.unwrap();
        assert_eq!(stairs.dir, StairDir::Down);
        assert_eq!(first.tile(stairs.pos), TileKind::Stairs(StairDir::Down));
        assert!(first.special_at(IVec2::new(3, 5)).is_some());
    }

    #[test]
    fn feature_cells_stamp_their_edges() {
        let dungeon = Dungeon::demo();
        let first = dungeon.floor(0).unwrap();
        // the door east of the start corridor
        let edge = first.edge(IVec2::new(4, 1), Facing::East);
        assert!(edge.contains(EdgeFlags::DOOR));
        assert!(!edge.contains(EdgeFlags::HIDDEN));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_floor("###\n##").unwrap_err();
        assert!(matches!(err, MapError::RaggedRow { row: 1, want: 3, got: 2 }));
    }

    #[test]
    fn unknown_glyphs_are_rejected() {
        let err = parse_floor("#?#").unwrap_err();
        assert!(matches!(err, MapError::UnknownGlyph { glyph: '?', x: 1, y: 0 }));
    }

    #[test]
    fn directives_must_be_known_and_numeric() {
        assert!(matches!(
            parse_floor("monsters: 3\n###").unwrap_err(),
            MapError::BadDirective(_)
        ));
        assert!(matches!(
            parse_floor("encounters: lots\n###").unwrap_err(),
            MapError::BadDirective(_)
        ));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let (floor, _) = parse_floor("; header\n\n###\n#.#\n###").unwrap();
        assert_eq!((floor.width, floor.height), (3, 3));
    }
}
