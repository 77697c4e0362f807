//! Door and secret-passage insets.
//!
//! Features are always drawn after the walls of their band, inset inside
//! the wall plane so they read as recesses rather than floating shapes.
//! Hidden variants get a dashed stroke and a single centred marker glyph;
//! whether a hidden feature appears at all is the adapter's call.

use glam::Vec2;

use crate::render::compositor::ViewRenderer;
use crate::render::{DOOR_EDGE, DOOR_FILL, SECRET_EDGE};
use crate::surface::{Prim, Stroke, WallQuad};
use crate::view::{DoorCell, DoorKind, PassageCell, PassageKind, Side};

/// Door inset: 80% of the band width, 90% of its height.
const DOOR_W: f32 = 0.8;
const DOOR_H: f32 = 0.9;
/// Passage inset: 80% width, full band height.
const PASSAGE_W: f32 = 0.8;

const HIDDEN_DOOR_GLYPH: u8 = b'H';
const SECRET_GLYPH: u8 = b'S';
const CONCEALED_GLYPH: u8 = b'C';

/// Shrink a quad towards its centre by the given width/height fractions,
/// staying on the (possibly slanted) wall plane.
fn inset_quad(q: &WallQuad, fx: f32, fy: f32) -> WallQuad {
    let margin = (q.x1 - q.x0) * (1.0 - fx) / 2.0;
    let x0 = q.x0 + margin;
    let x1 = q.x1 - margin;

    let shrink = |top: f32, bot: f32| {
        let mid = (top + bot) / 2.0;
        let half = (bot - top) / 2.0 * fy;
        (mid - half, mid + half)
    };
    let (y_top0, y_bot0) = shrink(q.top_at(x0), q.bot_at(x0));
    let (y_top1, y_bot1) = shrink(q.top_at(x1), q.bot_at(x1));

    WallQuad {
        x0,
        x1,
        y_top0,
        y_top1,
        y_bot0,
        y_bot1,
    }
}

/// Centre point of a quad, for marker glyphs.
fn quad_center(q: &WallQuad) -> Vec2 {
    let cx = (q.x0 + q.x1) / 2.0;
    Vec2::new(cx, (q.top_at(cx) + q.bot_at(cx)) / 2.0)
}

impl ViewRenderer {
    /// Wall-plane quad a feature at this band/side is inset into.
    fn feature_plane(&mut self, distance: u8, side: Side) -> WallQuad {
        match side {
            Side::Front => {
                let f = self.frame(distance);
                WallQuad::rect(f.left_x, f.top_y, f.right_x, f.bottom_y)
            }
            side => self.side_quad(distance, side),
        }
    }

    pub(crate) fn draw_door(&mut self, door: &DoorCell) {
        let plane = self.feature_plane(door.distance, door.side);
        let quad = inset_quad(&plane, DOOR_W, DOOR_H);
        let style = match door.kind {
            DoorKind::Normal => Stroke::Solid,
            DoorKind::Hidden => Stroke::Dashed,
        };
        self.push(
            Some(door.distance),
            Prim::Quad {
                quad,
                fill: Some(DOOR_FILL),
                stroke: Some(DOOR_EDGE),
                style,
            },
        );
        if door.kind == DoorKind::Hidden {
            self.push(
                Some(door.distance),
                Prim::Glyph {
                    pos: quad_center(&quad),
                    ch: HIDDEN_DOOR_GLYPH,
                    color: DOOR_EDGE,
                    scale: glyph_scale(door.distance),
                },
            );
        }
    }

    pub(crate) fn draw_passage(&mut self, passage: &PassageCell) {
        let plane = self.feature_plane(passage.distance, passage.side);
        let quad = inset_quad(&plane, PASSAGE_W, 1.0);
        self.push(
            Some(passage.distance),
            Prim::Quad {
                quad,
                fill: None,
                stroke: Some(SECRET_EDGE),
                style: Stroke::Dashed,
            },
        );
        let ch = match passage.kind {
            PassageKind::Secret => SECRET_GLYPH,
            PassageKind::Concealed => CONCEALED_GLYPH,
        };
        self.push(
            Some(passage.distance),
            Prim::Glyph {
                pos: quad_center(&quad),
                ch,
                color: SECRET_EDGE,
                scale: glyph_scale(passage.distance),
            },
        );
    }
}

/// Marker glyphs shrink with distance so far features stay inside their band.
fn glyph_scale(distance: u8) -> u32 {
    if distance <= 2 { 2 } else { 1 }
}
