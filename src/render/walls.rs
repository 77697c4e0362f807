//! Wall geometry: front-blocking rectangles and the side-wall stitcher.
//!
//! Side walls are what sell the tunnel illusion.  The quad for band `d`
//! takes its far corners from `frame(d)` and its near corners from the
//! *already larger* `frame(d-1)` — or the canvas outer edge for the first
//! band — so adjacent bands share corners and the wall reads as one
//! unbroken tapering surface instead of floating rectangles.

use crate::render::compositor::ViewRenderer;
use crate::render::frame::PerspectiveFrame;
use crate::render::{WALL_EDGE, WALL_FILL};
use crate::surface::{Prim, Stroke, WallQuad};
use crate::view::Side;

impl ViewRenderer {
    /// Near geometry of band `d`: the previous frame, except the first
    /// band, which connects directly to the canvas edge (full screen
    /// height on its side).
    pub(crate) fn near_frame(&mut self, d: u8) -> PerspectiveFrame {
        if d <= 1 {
            PerspectiveFrame::screen(&self.viewport())
        } else {
            self.frame(d - 1)
        }
    }

    /// Screen-space quad of the left or right wall surface flanking band `d`.
    pub(crate) fn side_quad(&mut self, d: u8, side: Side) -> WallQuad {
        let near = self.near_frame(d);
        let far = self.frame(d);
        match side {
            Side::Left => WallQuad {
                x0: near.left_x,
                x1: far.left_x,
                y_top0: near.top_y,
                y_top1: far.top_y,
                y_bot0: near.bottom_y,
                y_bot1: far.bottom_y,
            },
            // mirrored: the far edge is the left end of the quad on screen
            _ => WallQuad {
                x0: far.right_x,
                x1: near.right_x,
                y_top0: far.top_y,
                y_top1: near.top_y,
                y_bot0: far.bottom_y,
                y_bot1: near.bottom_y,
            },
        }
    }

    /// Opaque blocking wall closing band `d`.
    pub(crate) fn draw_front_wall(&mut self, d: u8) {
        let f = self.frame(d);
        self.push(
            Some(d),
            Prim::Quad {
                quad: WallQuad::rect(f.left_x, f.top_y, f.right_x, f.bottom_y),
                fill: Some(WALL_FILL),
                stroke: Some(WALL_EDGE),
                style: Stroke::Solid,
            },
        );
    }

    /// One continuous side-wall segment for band `d`.
    pub(crate) fn draw_side_wall(&mut self, d: u8, side: Side) {
        let quad = self.side_quad(d, side);
        self.push(
            Some(d),
            Prim::Quad {
                quad,
                fill: Some(WALL_FILL),
                stroke: Some(WALL_EDGE),
                style: Stroke::Solid,
            },
        );
    }
}
