// What you SEE when you run this:
// • Concentric rings expand from the window center and restart at the rim,
//   like a pulsing radar/locator indicator.
// • --mode staggered: three evenly spaced rings, thick strokes, fixed radius.
// • --mode spawning (default): rings trickle in one by one, spaced by
//   --density, rim radius follows the window width. Resize to see it re-seed.
// • S saves the current frame as a PNG. ESC quits.

mod config;
mod draw;
mod error;
mod ripple;
mod snapshot;
mod types;

use clap::{Parser, ValueEnum};
use config::{RippleConfig, parse_color};
use draw::{Drawer, draw_disc, draw_ring, draw_text_5x7};
use error::Error;
use ripple::RippleAnimator;
use std::path::Path;
use std::time::{Duration, Instant};
use types::FrameBuffer;

/// Rim radius for the staggered variant; a fixed constant, not window-derived.
const STAGGERED_MAX_RADIUS: f32 = 300.0;
/// Staggered strokes are thick and taper from 40px; spawned rings are thin.
const STAGGERED_STROKE: f32 = 40.0;
const SPAWNING_STROKE: f32 = 8.0;
/// Model cadence per variant. The staggered variant steps at ~60 Hz, the
/// spawning one at 50 Hz; present rate is independent of both.
const STAGGERED_TICK: Duration = Duration::from_millis(16);
const SPAWNING_TICK: Duration = Duration::from_millis(20);
/// Backdrop color; dark so the rings and their fade read clearly.
const BACKGROUND: u32 = 0x00101418;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Three rings seeded a third of the radius apart
    Staggered,
    /// Rings spawn over time, spaced by --density
    Spawning,
}

#[derive(Parser, Debug)]
#[command(name = "ripple-view", about = "Pulsing radar-style ripple rings in a window")]
struct Options {
    /// Animation variant to run
    #[arg(long, value_enum, default_value = "spawning")]
    mode: Mode,

    /// Ring color as RRGGBB hex, leading '#' optional
    #[arg(long, default_value = "00AAEE")]
    color: String,

    /// Radius gained per tick, in pixels
    #[arg(long, default_value_t = 2.0)]
    speed: f32,

    /// Minimum radius gap between spawned rings (spawning mode)
    #[arg(long, default_value_t = 24.0)]
    density: f32,

    /// Stroke thickness at radius 0; defaults to 40 staggered / 8 spawning
    #[arg(long)]
    stroke: Option<f32>,

    /// Draw filled discs instead of stroke rings
    #[arg(long)]
    fill: bool,

    /// Disable the alpha fade as rings approach the rim
    #[arg(long)]
    no_fade: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 640)]
    height: usize,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let opts = Options::parse();

    /* --- Configuration, captured once and validated before anything opens ---
       Bad values (zero speed, zero density) fail here, not mid-animation. */
    let cfg = RippleConfig {
        color: parse_color(&opts.color)?,
        speed: opts.speed,
        density: opts.density,
        stroke_width: opts.stroke.unwrap_or(match opts.mode {
            Mode::Staggered => STAGGERED_STROKE,
            Mode::Spawning => SPAWNING_STROKE,
        }),
        fill: opts.fill,
        fade: !opts.no_fade,
    };
    cfg.validate()?;
    log::info!("starting in {:?} mode: {cfg:?}", opts.mode);

    /* --- Window + reusable screen buffer ---
       Visual: a dark window appears; this buffer is the image you see. */
    let resizable = opts.mode == Mode::Spawning;
    let mut drawer = Drawer::new("Ripple View", opts.width, opts.height, resizable)?;
    let (mut width, mut height) = (opts.width, opts.height);
    let mut screen = FrameBuffer::new(width, height);

    /* --- The animation model ---
       Everything that moves lives here; the loop below only ticks and reads. */
    let mut animator = match opts.mode {
        Mode::Staggered => {
            RippleAnimator::staggered(STAGGERED_MAX_RADIUS, cfg.stroke_width, cfg.speed, cfg.fade)?
        }
        Mode::Spawning => RippleAnimator::spawning(
            width as f32 / 2.0,
            cfg.stroke_width,
            cfg.speed,
            cfg.density,
            cfg.fade,
        )?,
    };
    let tick = match opts.mode {
        Mode::Staggered => STAGGERED_TICK,
        Mode::Spawning => SPAWNING_TICK,
    };

    /* --- HUD / FPS ---
       Visual: small text in the corner shows mode, ring count and FPS. */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    let mut snapshots_saved: u32 = 0;
    let mut pending = Duration::ZERO;
    let mut last_frame_time = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        pending += now - last_frame_time; // time owed to the model
        last_frame_time = now;

        /* 1) Follow window resizes (spawning mode only: rim = width/2).
           Visual: after a resize the animation restarts from a single ring. */
        if resizable {
            let (new_width, new_height) = drawer.size();
            if (new_width, new_height) != (width, height) && new_width > 0 && new_height > 0 {
                width = new_width;
                height = new_height;
                screen = FrameBuffer::new(width, height);
                animator.resize(width as f32 / 2.0, cfg.density)?;
                log::info!("resized to {width}x{height}, rim radius {}", width as f32 / 2.0);
            }
        }

        /* 2) Advance the model on its fixed cadence, decoupled from how fast
           we can present. Ticks and rendering stay on this one thread. */
        while pending >= tick {
            animator.tick();
            pending -= tick;
        }

        /* 3) Repaint: backdrop, then every ring oldest-first, then the HUD. */
        screen.clear(BACKGROUND);
        let (cx, cy) = (width as i32 / 2, height as i32 / 2);
        for r in animator.ripples() {
            let params = animator.draw_params(r);
            if cfg.fill {
                draw_disc(&mut screen, cx, cy, params.radius, cfg.color, params.alpha);
            } else {
                draw_ring(
                    &mut screen,
                    cx,
                    cy,
                    params.radius,
                    params.stroke_width,
                    cfg.color,
                    params.alpha,
                );
            }
        }

        let tag = match opts.mode {
            Mode::Staggered => "STAGGERED",
            Mode::Spawning => "SPAWNING",
        };
        let hud = format!("{tag} | RINGS: {} | {}", animator.ripples().len(), hud_fps_text);
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00FFFFFF);

        /* 4) Snapshot on S: write what is on screen right now to a PNG. */
        if drawer.s_pressed_once() {
            snapshots_saved += 1;
            let name = format!("ripple-{snapshots_saved}.png");
            snapshot::save_png(&screen, Path::new(&name))?;
            log::info!("saved snapshot {name}");
        }

        /* 5) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 6) FPS counter (updates the HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
