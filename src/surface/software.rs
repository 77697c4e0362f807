//! Software (CPU) backend over a `Vec<u32>` frame-buffer.
//!
//! * Fills an internal scratch buffer in **0xAARRGGBB** format.
//! * Relies on the compositor to feed *far-to-near* [`DrawOp`]s, so no
//!   depth buffer is needed: later ops simply overwrite earlier pixels.
//!
//! Quads are rasterised per screen column, walking the interpolated
//! top/bottom edges; lines are integer Bresenham with an optional dash
//! counter.

use glam::Vec2;

use crate::surface::{DrawOp, Prim, Rgba, Stroke, Surface, WallQuad, font};

pub struct SoftwareSurface {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Default for SoftwareSurface {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl Surface for SoftwareSurface {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(0xFF_000000);
    }

    fn draw(&mut self, op: &DrawOp) {
        match &op.prim {
            Prim::Clear { color } => self.scratch.fill(*color),
            Prim::Quad {
                quad,
                fill,
                stroke,
                style,
            } => self.draw_quad(quad, *fill, *stroke, *style),
            Prim::Line { a, b, color, style } => self.draw_line(*a, *b, *color, *style),
            Prim::Text { pos, text, color } => self.draw_text(*pos, text, *color),
            Prim::Glyph {
                pos,
                ch,
                color,
                scale,
            } => self.draw_glyph(*pos, *ch, *color, (*scale).max(1)),
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

impl SoftwareSurface {
    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.scratch[y as usize * self.width + x as usize] = color;
        }
    }

    /// Column-walk fill, then the four outline edges.
    fn draw_quad(&mut self, q: &WallQuad, fill: Option<Rgba>, stroke: Option<Rgba>, style: Stroke) {
        if let Some(color) = fill {
            let x_start = q.x0.min(q.x1).round() as i32;
            let x_end = q.x0.max(q.x1).round() as i32;
            for x in x_start..=x_end {
                let xf = x as f32;
                let y0 = q.top_at(xf).round() as i32;
                let y1 = q.bot_at(xf).round() as i32;
                for y in y0..=y1 {
                    self.put(x, y, color);
                }
            }
        }
        if let Some(color) = stroke {
            let tl = Vec2::new(q.x0, q.y_top0);
            let tr = Vec2::new(q.x1, q.y_top1);
            let bl = Vec2::new(q.x0, q.y_bot0);
            let br = Vec2::new(q.x1, q.y_bot1);
            self.draw_line(tl, tr, color, style);
            self.draw_line(bl, br, color, style);
            self.draw_line(tl, bl, color, style);
            self.draw_line(tr, br, color, style);
        }
    }

    /// Integer Bresenham; dashed strokes skip alternating 4-pixel runs.
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Rgba, style: Stroke) {
        let mut x0 = a.x.round() as i32;
        let mut y0 = a.y.round() as i32;
        let x1 = b.x.round() as i32;
        let y1 = b.y.round() as i32;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut step = 0u32;

        loop {
            let ink = match style {
                Stroke::Solid => true,
                Stroke::Dashed => (step / 4) % 2 == 0,
            };
            if ink {
                self.put(x0, y0, color);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            step += 1;
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Rgba) {
        let mut cx = pos.x.round() as i32;
        let cy = pos.y.round() as i32;
        for &ch in text.as_bytes() {
            self.blit_glyph(cx, cy, ch, color, 1);
            cx += font::CHAR_W as i32;
        }
    }

    fn draw_glyph(&mut self, center: Vec2, ch: u8, color: Rgba, scale: u32) {
        let half = 4 * scale as i32;
        let x = center.x.round() as i32 - half;
        let y = center.y.round() as i32 - half;
        self.blit_glyph(x, y, ch, color, scale);
    }

    fn blit_glyph(&mut self, x: i32, y: i32, ch: u8, color: Rgba, scale: u32) {
        let Some(rows) = font::glyph(ch) else { return };
        let scale = scale as i32;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..8i32 {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        self.put(
                            x + col * scale + dx,
                            y + row as i32 * scale + dy,
                            color,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceExt;

    fn grab(ops: &[DrawOp]) -> (Vec<Rgba>, usize, usize) {
        let mut sw = SoftwareSurface::default();
        let mut out = (Vec::new(), 0, 0);
        sw.draw_frame(32, 32, ops, |fb, w, h| out = (fb.to_vec(), w, h));
        out
    }

    fn op(prim: Prim) -> DrawOp {
        DrawOp { band: None, prim }
    }

    #[test]
    fn quad_fill_writes_pixels() {
        let (fb, w, _) = grab(&[op(Prim::Quad {
            quad: WallQuad::rect(4.0, 4.0, 12.0, 12.0),
            fill: Some(0xFF_0000FF),
            stroke: None,
            style: Stroke::Solid,
        })]);
        assert_eq!(fb[8 * w + 8], 0xFF_0000FF);
        assert_eq!(fb[0], 0xFF_000000, "outside the quad stays clear");
    }

    #[test]
    fn later_ops_overwrite_earlier_ones() {
        let far = op(Prim::Quad {
            quad: WallQuad::rect(0.0, 0.0, 31.0, 31.0),
            fill: Some(0xFF_111111),
            stroke: None,
            style: Stroke::Solid,
        });
        let near = op(Prim::Quad {
            quad: WallQuad::rect(8.0, 8.0, 24.0, 24.0),
            fill: Some(0xFF_EE0000),
            stroke: None,
            style: Stroke::Solid,
        });
        let (fb, w, _) = grab(&[far, near]);
        assert_eq!(fb[16 * w + 16], 0xFF_EE0000, "near quad paints over far");
        assert_eq!(fb[2 * w + 2], 0xFF_111111);
    }

    #[test]
    fn dashed_line_has_gaps() {
        let (fb, w, _) = grab(&[op(Prim::Line {
            a: Vec2::new(0.0, 16.0),
            b: Vec2::new(31.0, 16.0),
            color: 0xFF_FFFFFF,
            style: Stroke::Dashed,
        })]);
        let row: Vec<Rgba> = fb[16 * w..17 * w].to_vec();
        assert!(row.iter().any(|&px| px == 0xFF_FFFFFF));
        assert!(row.iter().any(|&px| px == 0xFF_000000), "dashes leave gaps");
    }

    #[test]
    fn text_renders_ink() {
        let (fb, _, _) = grab(&[op(Prim::Text {
            pos: Vec2::new(2.0, 2.0),
            text: "HI".into(),
            color: 0xFF_00FF00,
        })]);
        assert!(fb.iter().any(|&px| px == 0xFF_00FF00));
    }

    #[test]
    fn slanted_quad_fills_between_edges() {
        // left wall shape: full height at x0, pinched at x1
        let q = WallQuad {
            x0: 0.0,
            x1: 16.0,
            y_top0: 0.0,
            y_top1: 8.0,
            y_bot0: 31.0,
            y_bot1: 24.0,
        };
        let (fb, w, _) = grab(&[op(Prim::Quad {
            quad: q,
            fill: Some(0xFF_336699),
            stroke: None,
            style: Stroke::Solid,
        })]);
        assert_eq!(fb[16 * w + 8], 0xFF_336699, "mid column inside the quad");
        assert_eq!(fb[1 * w + 12], 0xFF_000000, "above the slanted top edge");
    }
}
