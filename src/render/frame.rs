//! Perspective-frame math and its per-distance cache.
//!
//! A frame is the screen-space trapezoid bound of one distance band.  It is
//! a pure function of the integer distance and the viewport constants, so
//! frames are memoised in a fixed-size slot array indexed by distance and
//! recomputed only after a resize clears the cache.

/// Ceiling split line as a fraction of viewport height.
pub const CEIL_SPLIT: f32 = 0.25;
/// Floor split line as a fraction of viewport height.
pub const FLOOR_SPLIT: f32 = 0.75;

/// Static per-viewport constants every frame derives from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Fixed ceiling split line the frame tops converge towards.
    pub ceil_y: f32,
    /// Fixed floor split line the frame bottoms converge towards.
    pub floor_y: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            width: w,
            height: h,
            ceil_y: h * CEIL_SPLIT,
            floor_y: h * FLOOR_SPLIT,
        }
    }
}

/// Screen-space bounds of one distance band.
///
/// Frames strictly nest as distance grows: `left_x` increases, `right_x`
/// decreases and the vertical span shrinks, which is what makes far-to-near
/// painting occlude correctly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveFrame {
    pub scale: f32,
    pub left_x: f32,
    pub right_x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl PerspectiveFrame {
    /// Closed-form frame for distance `d >= 1`.
    ///
    /// `scale = 1 / (d * 0.5 + 0.5)` — exactly 1 at the nearest band, and
    /// asymptotically approaching the split lines for large `d` without
    /// ever dividing by zero.
    pub fn compute(d: u8, vp: &Viewport) -> Self {
        let scale = 1.0 / (d as f32 * 0.5 + 0.5);
        let wall_w = vp.width * scale;
        let left_x = (vp.width - wall_w) / 2.0;
        let right_x = vp.width - left_x;
        // tops/bottoms interpolate from the canvas edges (scale 1) towards
        // the fixed split lines (scale -> 0)
        let top_y = vp.ceil_y * (1.0 - scale);
        let bottom_y = vp.height - (vp.height - vp.floor_y) * (1.0 - scale);
        Self {
            scale,
            left_x,
            right_x,
            top_y,
            bottom_y,
            center_x: vp.width / 2.0,
            center_y: (top_y + bottom_y) / 2.0,
        }
    }

    /// The whole canvas as a pseudo-frame; near geometry of the first band.
    pub fn screen(vp: &Viewport) -> Self {
        Self {
            scale: 1.0,
            left_x: 0.0,
            right_x: vp.width,
            top_y: 0.0,
            bottom_y: vp.height,
            center_x: vp.width / 2.0,
            center_y: vp.height / 2.0,
        }
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right_x - self.left_x
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom_y - self.top_y
    }
}

/// Slot-array memo of frames, indexed by distance.
///
/// Distances are small bounded integers, so an indexed arena beats a hash
/// map here.  Slots persist across render calls; `clear` is only ever
/// driven by a viewport resize.
#[derive(Debug, Default)]
pub struct FrameCache {
    slots: Vec<Option<PerspectiveFrame>>,
}

impl FrameCache {
    pub fn with_capacity(max_distance: u8) -> Self {
        Self {
            slots: vec![None; max_distance as usize + 1],
        }
    }

    /// Cached frame for `d`, computing and storing it on first request.
    pub fn frame(&mut self, d: u8, vp: &Viewport) -> PerspectiveFrame {
        let idx = d as usize;
        if idx >= self.slots.len() {
            self.slots.resize(idx + 1, None);
        }
        *self.slots[idx].get_or_insert_with(|| PerspectiveFrame::compute(d, vp))
    }

    /// Drop every memoised frame (viewport changed).
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn vp() -> Viewport {
        Viewport::new(800, 600)
    }

    #[test]
    fn nearest_band_spans_the_canvas() {
        let f = PerspectiveFrame::compute(1, &vp());
        assert!((f.scale - 1.0).abs() < EPS);
        assert!(f.left_x.abs() < EPS);
        assert!((f.right_x - 800.0).abs() < EPS);
        assert!(f.top_y.abs() < EPS);
        assert!((f.bottom_y - 600.0).abs() < EPS);
    }

    #[test]
    fn band_five_is_a_third_scale() {
        // scale = 1 / (5 * 0.5 + 0.5) = 1/3
        let f = PerspectiveFrame::compute(5, &vp());
        assert!((f.scale - 1.0 / 3.0).abs() < EPS);
        assert!((f.width() - 800.0 / 3.0).abs() < 0.1);
        assert!((f.left_x - 266.666).abs() < 0.1);
        assert!((f.right_x - 533.333).abs() < 0.1);
    }

    #[test]
    fn frames_nest_strictly_with_distance() {
        let vp = vp();
        for d in 1..=9u8 {
            let near = PerspectiveFrame::compute(d, &vp);
            let far = PerspectiveFrame::compute(d + 1, &vp);
            assert!(far.left_x > near.left_x, "left edge at d={d}");
            assert!(far.right_x < near.right_x, "right edge at d={d}");
            assert!(far.top_y > near.top_y, "top edge at d={d}");
            assert!(far.bottom_y < near.bottom_y, "bottom edge at d={d}");
        }
    }

    #[test]
    fn deep_bands_never_cross_the_split_lines() {
        let vp = vp();
        let f = PerspectiveFrame::compute(200, &vp);
        assert!(f.top_y < vp.ceil_y);
        assert!(f.bottom_y > vp.floor_y);
        assert!(f.left_x < f.right_x);
    }

    #[test]
    fn cache_is_idempotent_between_clears() {
        let vp = vp();
        let mut cache = FrameCache::with_capacity(5);
        let a = cache.frame(3, &vp);
        let b = cache.frame(3, &vp);
        assert_eq!(a, b);
    }

    #[test]
    fn clear_forces_recompute_against_new_viewport() {
        let mut cache = FrameCache::with_capacity(5);
        let before = cache.frame(2, &Viewport::new(800, 600));
        cache.clear();
        let after = cache.frame(2, &Viewport::new(1024, 768));
        assert_ne!(before, after);
        // same geometry again once re-cached
        assert_eq!(after, cache.frame(2, &Viewport::new(1024, 768)));
    }

    #[test]
    fn requests_past_capacity_grow_the_arena() {
        let mut cache = FrameCache::with_capacity(2);
        let f = cache.frame(7, &vp());
        assert!(f.scale > 0.0);
    }
}
