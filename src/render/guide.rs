//! Perspective guide frame.
//!
//! Drawn before the depth loop: the four convergence lines from the canvas
//! corners towards the farthest frame, plus that frame's outline.  An open
//! corridor with no wall cells at all still reads as a receding tunnel
//! because of these lines (and nearer geometry simply paints over them).

use glam::Vec2;

use crate::render::GUIDE_LINE;
use crate::render::compositor::ViewRenderer;
use crate::surface::{Prim, Stroke, WallQuad};

impl ViewRenderer {
    pub(crate) fn draw_guide_frame(&mut self) {
        let vp = self.viewport();
        let far = self.frame(self.max_view_distance());

        let corners = [
            (Vec2::new(0.0, 0.0), Vec2::new(far.left_x, far.top_y)),
            (Vec2::new(vp.width, 0.0), Vec2::new(far.right_x, far.top_y)),
            (Vec2::new(0.0, vp.height), Vec2::new(far.left_x, far.bottom_y)),
            (
                Vec2::new(vp.width, vp.height),
                Vec2::new(far.right_x, far.bottom_y),
            ),
        ];
        for (a, b) in corners {
            self.push(
                None,
                Prim::Line {
                    a,
                    b,
                    color: GUIDE_LINE,
                    style: Stroke::Solid,
                },
            );
        }

        self.push(
            None,
            Prim::Quad {
                quad: WallQuad::rect(far.left_x, far.top_y, far.right_x, far.bottom_y),
                fill: None,
                stroke: Some(GUIDE_LINE),
                style: Stroke::Solid,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewRenderer;

    #[test]
    fn guide_converges_on_the_farthest_frame() {
        let mut r = ViewRenderer::new(800, 600);
        let far = r.frame(r.max_view_distance());
        r.draw_guide_frame();

        let lines: Vec<(Vec2, Vec2)> = r
            .ops()
            .iter()
            .filter_map(|op| match op.prim {
                Prim::Line { a, b, .. } => Some((a, b)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].0, Vec2::new(0.0, 0.0));
        assert_eq!(lines[0].1, Vec2::new(far.left_x, far.top_y));
        // plus the far frame outline
        assert!(
            r.ops()
                .iter()
                .any(|op| matches!(op.prim, Prim::Quad { fill: None, .. }))
        );
    }
}
