//! Drawing-surface abstraction.
//!
//! *The renderer never touches a pixel buffer directly.*  It produces an
//! ordered display list of [`DrawOp`]s (far-to-near, then overlay) and hands
//! it to a type implementing [`Surface`].
//!
//! * Backends only have to honour draw order — occlusion comes entirely from
//!   painting sequence, never from depth testing.
//! * The blanket impl [`SurfaceExt`] adds `draw_frame` so call-sites stay
//!   short.

use glam::Vec2;

mod font;
mod software;

pub use software::SoftwareSurface;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Stroke style of outline primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

/// Vertical-edged trapezoid: `x0..x1` maps to screen columns, top/bottom
/// edges interpolate linearly between the two ends.  This is the shape of a
/// tapering side wall; front walls are the `y_top0 == y_top1` special case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallQuad {
    pub x0: f32,
    pub x1: f32,
    pub y_top0: f32, // top edge at x0
    pub y_top1: f32, // top edge at x1
    pub y_bot0: f32, // bottom edge at x0
    pub y_bot1: f32, // bottom edge at x1
}

impl WallQuad {
    /// Axis-aligned rectangle as a degenerate-slope quad.
    pub fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0,
            x1,
            y_top0: y0,
            y_top1: y0,
            y_bot0: y1,
            y_bot1: y1,
        }
    }

    /// Top edge height at column `x` (linear between the ends).
    pub fn top_at(&self, x: f32) -> f32 {
        self.y_top0 + (self.y_top1 - self.y_top0) * self.frac(x)
    }

    /// Bottom edge height at column `x`.
    pub fn bot_at(&self, x: f32) -> f32 {
        self.y_bot0 + (self.y_bot1 - self.y_bot0) * self.frac(x)
    }

    fn frac(&self, x: f32) -> f32 {
        let span = self.x1 - self.x0;
        if span.abs() < f32::EPSILON {
            0.0
        } else {
            (x - self.x0) / span
        }
    }
}

/// One immediate-mode primitive.
#[derive(Clone, Debug)]
pub enum Prim {
    /// Flood the whole surface.
    Clear { color: Rgba },
    /// Opaque quad fill, optionally outlined.
    Quad {
        quad: WallQuad,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        style: Stroke,
    },
    Line {
        a: Vec2,
        b: Vec2,
        color: Rgba,
        style: Stroke,
    },
    /// Top-left anchored string in the built-in 8x8 font (6 px advance).
    Text {
        pos: Vec2,
        text: String,
        color: Rgba,
    },
    /// Single character centred on `pos`, magnified `scale` times.
    Glyph {
        pos: Vec2,
        ch: u8,
        color: Rgba,
        scale: u32,
    },
}

/// One tagged entry of a frame's display list.
///
/// `band` is the distance band the primitive belongs to (`None` for the
/// clear, the guide frame and the overlay).  Tags exist so paint order is
/// checkable; backends ignore them.
#[derive(Clone, Debug)]
pub struct DrawOp {
    pub band: Option<u8>,
    pub prim: Prim,
}

/// A surface that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure, which
/// typically forwards it to the window manager.
pub trait Surface {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one primitive into the internal buffer.
    fn draw(&mut self, op: &DrawOp);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait SurfaceExt: Surface {
    fn draw_frame<F>(&mut self, width: usize, height: usize, ops: &[DrawOp], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for op in ops {
            self.draw(op);
        }
        self.end_frame(submit);
    }
}
impl<T: Surface + ?Sized> SurfaceExt for T {}

/// Pixel advance of one character of the built-in font.
pub const GLYPH_ADVANCE: f32 = font::CHAR_W as f32;
/// Pixel height of one character of the built-in font.
pub const GLYPH_HEIGHT: f32 = font::CHAR_H as f32;
