//! Interactive first-person dungeon viewer.
//!
//! ```bash
//! cargo run --release --bin crawler -- [floor1.map floor2.map ...]
//! ```
//!
//! Arrow keys turn and step, Enter takes stairs, Escape quits.  With no map
//! arguments the built-in demo dungeon is loaded.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use gridcrawl_rs::dungeon::Dungeon;
use gridcrawl_rs::render::ViewRenderer;
use gridcrawl_rs::surface::SoftwareSurface;
use gridcrawl_rs::view::{Pose, StairDir, ViewSource};

#[derive(Parser)]
#[command(about = "First-person wireframe dungeon viewer")]
struct Args {
    /// ASCII map files, one floor per file, top floor first
    maps: Vec<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: usize,

    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Furthest distance band drawn per frame
    #[arg(long, default_value_t = 5)]
    depth: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let dungeon = if args.maps.is_empty() {
        Dungeon::demo()
    } else {
        let mut blocks = Vec::with_capacity(args.maps.len());
        for path in &args.maps {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            blocks.push(text);
        }
        Dungeon::from_maps(blocks.iter().map(String::as_str))?
    };
    let mut pose = dungeon.start().context("map has no open cells")?;

    println!(
        "dungeon: {} floor(s), starting at ({}, {})",
        dungeon.floor_count(),
        pose.pos.x,
        pose.pos.y
    );

    let mut renderer =
        ViewRenderer::with_view_distance(args.width as u32, args.height as u32, args.depth);
    let mut surface = SoftwareSurface::default();

    let mut win = Window::new("Gridcrawl", args.width, args.height, WindowOptions::default())?;
    win.set_target_fps(30);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* turning ---------------------------------------------------------- */
        if win.is_key_pressed(Key::Left, KeyRepeat::Yes) {
            pose.facing = pose.facing.left();
        }
        if win.is_key_pressed(Key::Right, KeyRepeat::Yes) {
            pose.facing = pose.facing.right();
        }

        /* grid-aligned stepping -------------------------------------------- */
        if win.is_key_pressed(Key::Up, KeyRepeat::Yes) && dungeon.passable(&pose) {
            pose.pos = pose.ahead(1);
        }
        if win.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            let back = Pose {
                facing: pose.facing.left().left(),
                ..pose
            };
            if dungeon.passable(&back) {
                pose.pos = back.ahead(1);
            }
        }

        /* stairs ------------------------------------------------------------ */
        if win.is_key_pressed(Key::Enter, KeyRepeat::No) {
            if let Some(stairs) = dungeon.stairs(pose.floor) {
                if stairs.pos == pose.pos {
                    let next = match stairs.dir {
                        StairDir::Down => pose.floor + 1,
                        StairDir::Up => pose.floor.saturating_sub(1),
                    };
                    if next != pose.floor && dungeon.floor(next).is_some() {
                        pose.floor = next;
                        // land on the destination floor's stairwell
                        if let Some(dst) = dungeon.stairs(next) {
                            pose.pos = dst.pos;
                        }
                    }
                }
            }
        }

        /* draw */
        renderer.render(&dungeon, &pose, &mut surface, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h).unwrap()
        });

        // ─────────── accumulate & report every ~3 s ────────────────────────
        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
