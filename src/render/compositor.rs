//! Depth-ordered render orchestrator.
//!
//! One `compose` call produces one complete frame as an ordered display
//! list: clear, guide frame, then distance bands walked **far to near**
//! (painter's algorithm — with no depth buffer, correctness depends
//! entirely on nearer opaque geometry being painted later), then the
//! status overlay on top of everything.

use glam::Vec2;

use crate::render::{
    BACKGROUND, FrameCache, PerspectiveFrame, TITLE_TEXT, Viewport, WALL_EDGE,
};
use crate::surface::{DrawOp, GLYPH_ADVANCE, Prim, Rgba, Stroke, Surface, SurfaceExt, WallQuad};
use crate::view::{Pose, Side, ViewSource};

/// Default number of distance bands walked per frame.
pub const DEFAULT_VIEW_DISTANCE: u8 = 5;

const PLACEHOLDER_TITLE: &str = "GRIDCRAWL";
const PLACEHOLDER_STATUS: &str = "Initializing dungeon...";

/// The renderer instance: viewport constants, the frame cache (its only
/// cross-frame mutable state) and a reusable display-list scratch vector.
pub struct ViewRenderer {
    width: u32,
    height: u32,
    vp: Viewport,
    max_view_distance: u8,
    cache: FrameCache,
    ops: Vec<DrawOp>,
}

impl ViewRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_view_distance(width, height, DEFAULT_VIEW_DISTANCE)
    }

    pub fn with_view_distance(width: u32, height: u32, max_view_distance: u8) -> Self {
        let max_view_distance = max_view_distance.max(1);
        Self {
            width,
            height,
            vp: Viewport::new(width, height),
            max_view_distance,
            cache: FrameCache::with_capacity(max_view_distance),
            ops: Vec::new(),
        }
    }

    /// Resize the drawing surface: new dimensions, recomputed split lines
    /// and an emptied frame cache, applied in one step.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.vp = Viewport::new(width, height);
        self.cache.clear();
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn max_view_distance(&self) -> u8 {
        self.max_view_distance
    }

    /// Cached perspective frame for band `d`.
    pub fn frame(&mut self, d: u8) -> PerspectiveFrame {
        self.cache.frame(d, &self.vp)
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.vp
    }

    pub(crate) fn push(&mut self, band: Option<u8>, prim: Prim) {
        self.ops.push(DrawOp { band, prim });
    }

    /// Display list of the most recent `compose` call.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Build the display list for one frame and return it.
    ///
    /// Never fails: an adapter that cannot supply a snapshot yet gets the
    /// static placeholder frame instead.
    pub fn compose(&mut self, source: &impl ViewSource, pose: &Pose) -> &[DrawOp] {
        self.ops.clear();
        self.push(None, Prim::Clear { color: BACKGROUND });

        let Some(snap) = source.viewing_info(pose, self.max_view_distance) else {
            self.compose_placeholder();
            return &self.ops;
        };

        self.draw_guide_frame();

        // far to near; within a band: front wall first so the side-wall
        // corner seams overlap its edge, features last so they read as
        // recesses in the wall plane
        for d in (1..=self.max_view_distance).rev() {
            if snap
                .walls
                .iter()
                .any(|w| w.distance == d && w.side == Side::Front)
            {
                self.draw_front_wall(d);
            }
            for wall in snap
                .walls
                .iter()
                .filter(|w| w.distance == d && w.side != Side::Front)
            {
                self.draw_side_wall(d, wall.side);
            }
            for door in snap.doors.iter().filter(|c| c.distance == d) {
                self.draw_door(door);
            }
            for passage in snap.passages.iter().filter(|c| c.distance == d) {
                self.draw_passage(passage);
            }
        }

        self.draw_overlay(source, pose);
        &self.ops
    }

    /// Compose and rasterise in one go; `submit` receives the loaned
    /// finished buffer exactly once.
    pub fn render<S, F>(&mut self, source: &impl ViewSource, pose: &Pose, surface: &mut S, submit: F)
    where
        S: Surface,
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.compose(source, pose);
        let (w, h) = (self.width as usize, self.height as usize);
        surface.draw_frame(w, h, &self.ops, submit);
    }

    /// Static fallback frame for an adapter that is not ready yet.
    fn compose_placeholder(&mut self) {
        let vp = self.vp;
        let cx = vp.width / 2.0;
        let cy = vp.height / 2.0;

        self.push(
            None,
            Prim::Quad {
                quad: WallQuad::rect(8.0, 8.0, vp.width - 8.0, vp.height - 8.0),
                fill: None,
                stroke: Some(WALL_EDGE),
                style: Stroke::Solid,
            },
        );

        // enlarged title, one glyph at a time
        let scale = 3u32;
        let advance = GLYPH_ADVANCE * scale as f32;
        let total = advance * PLACEHOLDER_TITLE.len() as f32;
        let mut gx = cx - total / 2.0 + advance / 2.0;
        for &ch in PLACEHOLDER_TITLE.as_bytes() {
            self.push(
                None,
                Prim::Glyph {
                    pos: Vec2::new(gx, cy - 24.0),
                    ch,
                    color: TITLE_TEXT,
                    scale,
                },
            );
            gx += advance;
        }

        let status_w = PLACEHOLDER_STATUS.len() as f32 * GLYPH_ADVANCE;
        self.push(
            None,
            Prim::Text {
                pos: Vec2::new(cx - status_w / 2.0, cy + 12.0),
                text: PLACEHOLDER_STATUS.into(),
                color: TITLE_TEXT,
            },
        );
    }
}
