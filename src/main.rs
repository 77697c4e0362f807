//! Minimal top-down 2D dungeon map viewer.
//!
//! ```bash
//! cargo run --bin gridcrawl_rs -- [floor.map] [floor_idx]
//! ```
//!
//! Debug aid: renders one floor of a parsed map (or the demo dungeon) as a
//! flat cell grid so map files can be eyeballed before crawling them.

use glam::Vec2;
use minifb::{Key, Window, WindowOptions};

use gridcrawl_rs::dungeon::{CellKind, Dungeon};
use gridcrawl_rs::surface::{DrawOp, Prim, Rgba, SoftwareSurface, Stroke, SurfaceExt, WallQuad};
use gridcrawl_rs::view::TileKind;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

const ROCK: Rgba = 0xFF_262633;
const OPEN: Rgba = 0xFF_0D0D12;
const DOOR: Rgba = 0xFF_C9A227;
const SECRET: Rgba = 0xFF_5FB0A6;
const MARK: Rgba = 0xFF_E8E8E8;

fn main() -> anyhow::Result<()> {
    // ─────────── parse CLI ────────────
    let mut args = std::env::args().skip(1);
    let dungeon = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            Dungeon::from_maps([text.as_str()])?
        }
        None => Dungeon::demo(),
    };
    let floor_idx: u8 = args.next().unwrap_or_else(|| "0".into()).parse()?;
    let floor = dungeon
        .floor(floor_idx)
        .ok_or_else(|| anyhow::anyhow!("floor {floor_idx} out of range"))?;

    // ─────────── map-space → screen-space transform ────────────
    let cell = ((WIDTH as f32 / floor.width as f32).min(HEIGHT as f32 / floor.height as f32)
        * 0.9)
        .floor();
    let off_x = (WIDTH as f32 - cell * floor.width as f32) / 2.0;
    let off_y = (HEIGHT as f32 - cell * floor.height as f32) / 2.0;

    // ─────────── build the display list ────────────
    let mut ops = vec![DrawOp {
        band: None,
        prim: Prim::Clear { color: OPEN },
    }];
    for y in 0..floor.height {
        for x in 0..floor.width {
            let pos = glam::IVec2::new(x, y);
            let x0 = off_x + x as f32 * cell;
            let y0 = off_y + y as f32 * cell;
            let rect = WallQuad::rect(x0, y0, x0 + cell - 1.0, y0 + cell - 1.0);
            let center = Vec2::new(x0 + cell / 2.0, y0 + cell / 2.0);

            let (fill, glyph) = match floor.cell(pos) {
                CellKind::Solid => (Some(ROCK), None),
                CellKind::Door => (Some(DOOR), None),
                CellKind::HiddenDoor => (Some(DOOR), Some(b'H')),
                CellKind::SecretPassage => (Some(SECRET), Some(b'S')),
                CellKind::ConcealedPassage => (Some(SECRET), Some(b'C')),
                CellKind::Open(tile) => {
                    let glyph = match tile {
                        TileKind::Trap(_) => Some(b'!'),
                        TileKind::Stairs(_) => Some(b'='),
                        TileKind::Special => Some(b'*'),
                        _ => None,
                    };
                    (None, glyph)
                }
            };
            if let Some(color) = fill {
                ops.push(DrawOp {
                    band: None,
                    prim: Prim::Quad {
                        quad: rect,
                        fill: Some(color),
                        stroke: None,
                        style: Stroke::Solid,
                    },
                });
            }
            if let Some(ch) = glyph {
                ops.push(DrawOp {
                    band: None,
                    prim: Prim::Glyph {
                        pos: center,
                        ch,
                        color: MARK,
                        scale: 1,
                    },
                });
            }
        }
    }

    // ─────────── rasterise once, then show ────────────
    let mut surface = SoftwareSurface::default();
    let mut buffer: Vec<Rgba> = Vec::new();
    surface.draw_frame(WIDTH, HEIGHT, &ops, |fb, _, _| {
        buffer.extend_from_slice(fb);
    });

    let mut window = Window::new("Dungeon map", WIDTH, HEIGHT, WindowOptions::default())?;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}
