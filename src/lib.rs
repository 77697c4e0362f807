//! First-person wireframe dungeon view renderer.
//!
//! Turns a flat grid-dungeon description (walls, doors, secret passages at
//! discrete forward/side offsets) and a viewer pose into a layered line-art
//! corridor, using manual perspective-frame math and painter's-algorithm
//! compositing — no 3D pipeline, no depth buffer.
//!
//! * [`view`]: the adapter boundary: pose, per-frame [`view::ViewSnapshot`],
//!   and the [`view::ViewSource`] trait the host dungeon model implements.
//! * [`render`]: perspective frames, the depth-ordered compositor and its
//!   wall/feature/overlay stages.  Emits an ordered display list.
//! * [`surface`]: the 2D immediate-mode drawing contract plus a software
//!   frame-buffer backend.
//! * [`dungeon`]: a grid dungeon with an ASCII map loader; the in-repo
//!   [`view::ViewSource`] used by the viewer binaries and integration-style tests.

pub mod dungeon;
pub mod render;
pub mod surface;
pub mod view;
