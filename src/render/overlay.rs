//! Status and indicator overlay.
//!
//! Runs after every depth layer, independent of the snapshot: the HUD reads
//! the viewer's exact current tile from the adapter, not the distance-banded
//! cell lists.  At most one contextual banner is shown per frame, in
//! precedence order trap, stairs, special square.

use glam::Vec2;

use crate::render::compositor::ViewRenderer;
use crate::render::{BANNER_BG, BANNER_TEXT, HUD_TEXT};
use crate::surface::{GLYPH_ADVANCE, Prim, Stroke, WallQuad};
use crate::view::{Pose, StairDir, TileKind, ViewSource};

const BANNER_H: f32 = 44.0;

impl ViewRenderer {
    pub(crate) fn draw_overlay(&mut self, source: &impl ViewSource, pose: &Pose) {
        let info = source.floor_info(pose.floor);

        self.text(
            Vec2::new(8.0, 8.0),
            format!(
                "FLOOR {}  ({},{})  {}",
                pose.floor + 1,
                pose.pos.x,
                pose.pos.y,
                pose.facing.label()
            ),
        );
        self.text(
            Vec2::new(8.0, 20.0),
            format!(
                "ENCOUNTERS {}  SPECIALS {}",
                info.encounters, info.special_squares
            ),
        );

        // one banner per frame; trap wins over stairs, stairs over specials
        if let TileKind::Trap(kind) = source.tile(pose.floor, pose.pos) {
            self.banner(b'!', kind.name(), "WATCH YOUR STEP");
            return;
        }
        if let Some(stairs) = source.stairs(pose.floor) {
            if stairs.pos == pose.pos {
                let (icon, title, hint) = match stairs.dir {
                    StairDir::Up => (b'^', "STAIRS LEADING UP", "PRESS RETURN TO ASCEND"),
                    StairDir::Down => (b'v', "STAIRS LEADING DOWN", "PRESS RETURN TO DESCEND"),
                };
                self.banner(icon, title, hint);
                return;
            }
        }
        if let Some(special) = source.special_at(pose.floor, pose.pos) {
            self.banner(b'*', special.kind.name(), special.kind.hint());
        }
    }

    fn text(&mut self, pos: Vec2, text: String) {
        self.push(
            None,
            Prim::Text {
                pos,
                text,
                color: HUD_TEXT,
            },
        );
    }

    /// Bottom strip with an icon glyph, a title line and a hint line.
    fn banner(&mut self, icon: u8, title: &str, hint: &str) {
        let vp = self.viewport();
        let top = vp.height - BANNER_H;
        let cx = vp.width / 2.0;

        self.push(
            None,
            Prim::Quad {
                quad: WallQuad::rect(0.0, top, vp.width, vp.height),
                fill: Some(BANNER_BG),
                stroke: Some(BANNER_TEXT),
                style: Stroke::Solid,
            },
        );
        self.push(
            None,
            Prim::Glyph {
                pos: Vec2::new(24.0, top + BANNER_H / 2.0),
                ch: icon,
                color: BANNER_TEXT,
                scale: 2,
            },
        );
        let title_w = title.len() as f32 * GLYPH_ADVANCE;
        let hint_w = hint.len() as f32 * GLYPH_ADVANCE;
        self.push(
            None,
            Prim::Text {
                pos: Vec2::new(cx - title_w / 2.0, top + 8.0),
                text: title.into(),
                color: BANNER_TEXT,
            },
        );
        self.push(
            None,
            Prim::Text {
                pos: Vec2::new(cx - hint_w / 2.0, top + 24.0),
                text: hint.into(),
                color: HUD_TEXT,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewRenderer;
    use crate::view::{
        Facing, FloorInfo, SpecialKind, SpecialSquare, Stairwell, TrapKind, ViewSnapshot,
    };
    use glam::IVec2;

    /// Adapter whose current tile carries every banner trigger we ask for.
    struct TileStub {
        tile: TileKind,
        stairs: Option<Stairwell>,
        special: Option<SpecialSquare>,
    }

    impl ViewSource for TileStub {
        fn viewing_info(&self, pose: &Pose, _: u8) -> Option<ViewSnapshot> {
            Some(ViewSnapshot::new(*pose))
        }
        fn floor_info(&self, _: u8) -> FloorInfo {
            FloorInfo {
                encounters: 3,
                special_squares: 1,
            }
        }
        fn tile(&self, _: u8, _: IVec2) -> TileKind {
            self.tile
        }
        fn stairs(&self, _: u8) -> Option<Stairwell> {
            self.stairs
        }
        fn special_at(&self, _: u8, _: IVec2) -> Option<SpecialSquare> {
            self.special
        }
    }

    fn here() -> IVec2 {
        IVec2::new(4, 4)
    }

    fn pose() -> Pose {
        Pose::new(here(), 0, Facing::East)
    }

    fn texts(r: &ViewRenderer) -> Vec<String> {
        r.ops()
            .iter()
            .filter_map(|op| match &op.prim {
                Prim::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn hud_reports_pose_and_counters() {
        let mut r = ViewRenderer::new(800, 600);
        let src = TileStub {
            tile: TileKind::Floor,
            stairs: None,
            special: None,
        };
        r.draw_overlay(&src, &pose());
        let texts = texts(&r);
        assert!(texts.iter().any(|t| t.contains("FLOOR 1") && t.contains("(4,4)") && t.contains('E')));
        assert!(texts.iter().any(|t| t.contains("ENCOUNTERS 3")));
    }

    #[test]
    fn trap_banner_wins_over_stairs_and_special() {
        let mut r = ViewRenderer::new(800, 600);
        let src = TileStub {
            tile: TileKind::Trap(TrapKind::Gas),
            stairs: Some(Stairwell {
                pos: here(),
                dir: StairDir::Down,
            }),
            special: Some(SpecialSquare {
                pos: here(),
                kind: SpecialKind::Altar,
            }),
        };
        r.draw_overlay(&src, &pose());
        let texts = texts(&r);
        assert!(texts.iter().any(|t| t == "GAS TRAP"));
        assert!(!texts.iter().any(|t| t.contains("STAIRS")));
        assert!(!texts.iter().any(|t| t == "ALTAR"));
    }

    #[test]
    fn stairs_banner_shows_direction_and_hint_on_the_stair_tile() {
        for (dir, title, hint) in [
            (StairDir::Up, "STAIRS LEADING UP", "PRESS RETURN TO ASCEND"),
            (StairDir::Down, "STAIRS LEADING DOWN", "PRESS RETURN TO DESCEND"),
        ] {
            let mut r = ViewRenderer::new(800, 600);
            let src = TileStub {
                tile: TileKind::Stairs(dir),
                stairs: Some(Stairwell { pos: here(), dir }),
                special: None,
            };
            r.draw_overlay(&src, &pose());
            let texts = texts(&r);
            assert!(texts.iter().any(|t| t == title), "missing {title}");
            assert!(texts.iter().any(|t| t == hint), "missing {hint}");
        }
    }

    #[test]
    fn stairs_banner_only_on_the_recorded_tile() {
        let mut r = ViewRenderer::new(800, 600);
        let src = TileStub {
            tile: TileKind::Floor,
            stairs: Some(Stairwell {
                pos: IVec2::new(9, 9),
                dir: StairDir::Up,
            }),
            special: None,
        };
        r.draw_overlay(&src, &pose());
        assert!(!texts(&r).iter().any(|t| t.contains("STAIRS")));
    }

    #[test]
    fn special_banner_shows_category_and_hint() {
        let mut r = ViewRenderer::new(800, 600);
        let src = TileStub {
            tile: TileKind::Special,
            stairs: None,
            special: Some(SpecialSquare {
                pos: here(),
                kind: SpecialKind::Fountain,
            }),
        };
        r.draw_overlay(&src, &pose());
        let texts = texts(&r);
        assert!(texts.iter().any(|t| t == "FOUNTAIN"));
        assert!(texts.iter().any(|t| t == "PRESS SPACE TO DRINK"));
    }
}
