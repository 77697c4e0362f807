//! The wireframe perspective renderer.
//!
//! [`ViewRenderer`] is the depth-ordered compositor; the sibling files hang
//! its wall, feature, guide-frame and overlay stages off the same type, the
//! way the bands are drawn: guide frame first, then far-to-near geometry,
//! then the HUD overlay.

mod compositor;
mod features;
mod frame;
mod guide;
mod overlay;
mod walls;

pub use compositor::{DEFAULT_VIEW_DISTANCE, ViewRenderer};
pub use frame::{CEIL_SPLIT, FLOOR_SPLIT, FrameCache, PerspectiveFrame, Viewport};

use crate::surface::Rgba;

/* wireframe palette (0xAARRGGBB) */
pub(crate) const BACKGROUND: Rgba = 0xFF_0D0D12;
pub(crate) const WALL_FILL: Rgba = 0xFF_1A1A24;
pub(crate) const WALL_EDGE: Rgba = 0xFF_9AA7C4;
pub(crate) const GUIDE_LINE: Rgba = 0xFF_3A4254;
pub(crate) const DOOR_FILL: Rgba = 0xFF_221E2B;
pub(crate) const DOOR_EDGE: Rgba = 0xFF_C9A227;
pub(crate) const SECRET_EDGE: Rgba = 0xFF_5FB0A6;
pub(crate) const HUD_TEXT: Rgba = 0xFF_E8E8E8;
pub(crate) const BANNER_BG: Rgba = 0xFF_241C28;
pub(crate) const BANNER_TEXT: Rgba = 0xFF_FFD24D;
pub(crate) const TITLE_TEXT: Rgba = 0xFF_C4CEE8;
