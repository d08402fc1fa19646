//! Headless ring gallery demo.
//!
//! Runs the engine against the in-memory surface on a fixed-step clock:
//! the pointer circles the ring, then an item is focused and the gallery
//! reset. Optionally writes a per-frame JSON trace and the options schema.

use std::cell::RefCell;
use std::f32::consts::TAU;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use rondo::engine::start_loop;
use rondo::focus::GalleryPhase;
use rondo::render::SceneSurface;
use rondo::scheduler::FixedStepDriver;
use rondo::title::LogTitles;
use rondo::{Gallery, InputEvent, Options, TitleCatalog};
use serde::Serialize;
use web_time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rondo", about = "Drive the ring gallery headlessly")]
struct Cli {
    /// TOML preset to load instead of the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to run.
    #[arg(long, default_value_t = 480)]
    ticks: u32,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write a per-frame JSON trace here.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Write the options JSON schema here and exit.
    #[arg(long)]
    schema: Option<PathBuf>,
}

#[derive(Serialize)]
struct TraceFrame {
    frame: u64,
    millis: f64,
    phase: String,
    group_rotation: f32,
    group_scale: f32,
    group_translate_y: f32,
    flips: Vec<f32>,
}

/// Scripted input keyed by frame.
struct Script {
    fps: u32,
    sweep_end: u32,
    focus_at: u32,
    reset_at: u32,
}

impl Script {
    fn new(fps: u32) -> Self {
        let frame = |secs: f32| (secs * fps as f32) as u32;
        Self {
            fps,
            sweep_end: frame(1.0),
            focus_at: frame(1.0),
            reset_at: frame(4.0),
        }
    }

    fn events(&self, frame: u32, center: Vec2, radius: f32) -> Vec<InputEvent> {
        if frame < self.sweep_end {
            let theta = TAU * frame as f32 / self.fps as f32;
            let position = center + Vec2::new(theta.cos(), theta.sin()) * radius;
            return vec![InputEvent::PointerMoved { position }];
        }
        if frame == self.focus_at {
            return vec![InputEvent::PointerLeft, InputEvent::Click { item: Some(5) }];
        }
        if frame == self.reset_at {
            return vec![InputEvent::Click { item: None }];
        }
        Vec::new()
    }
}

fn catalog(contents: usize) -> TitleCatalog {
    (0..contents).map(|i| format!("Plate {i} in silver")).collect()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.schema {
        write_json(path, &Options::json_schema())?;
        log::info!("schema written to {}", path.display());
        return Ok(());
    }

    let options = match &cli.config {
        Some(path) => Options::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let radius = options.ring.radius;
    let contents = options.ring.content_count;
    let gallery: Rc<RefCell<Gallery<SceneSurface, LogTitles>>> =
        Rc::new(RefCell::new(Gallery::headless(options, catalog(contents))?));
    let center = gallery.borrow().surface().container_center();

    let start = Instant::now();
    let mut driver = FixedStepDriver::new(start, cli.fps);
    let _tick = start_loop(&mut driver, &gallery)?;
    let script = Script::new(cli.fps);

    let mut trace = Vec::new();
    for frame in 0..cli.ticks {
        for event in script.events(frame, center, radius) {
            let outcome = gallery.borrow_mut().handle_event(event, driver.now());
            log::debug!("frame {frame}: {event:?} -> {outcome:?}");
        }
        driver.advance(1);

        let g = gallery.borrow();
        if let Some(entered) = g.last_tick().advance.entered {
            log::info!("frame {frame}: entered {entered:?}");
        }
        if cli.trace.is_some() {
            let group = g.group();
            trace.push(TraceFrame {
                frame: g.frames(),
                millis: driver.now().duration_since(start).as_secs_f64() * 1000.0,
                phase: format!("{:?}", g.phase()),
                group_rotation: group.rotation,
                group_scale: group.scale,
                group_translate_y: group.translate_y,
                flips: g.states().iter().map(|s| s.current().rotation).collect(),
            });
        }
    }

    let g = gallery.borrow();
    log::info!(
        "{} frames, final phase {:?}, {} item commands, {} group commands",
        g.frames(),
        g.phase(),
        g.surface().item_commands(),
        g.surface().group_commands()
    );
    if g.phase() != GalleryPhase::Idle {
        log::warn!("run ended mid-cycle; raise --ticks to see the reset finish");
    }
    drop(g);

    if let Some(path) = &cli.trace {
        write_json(path, &trace)?;
        log::info!("trace written to {}", path.display());
    }
    Ok(())
}
