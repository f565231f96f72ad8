//! Terminal dinosaur runner (default binary).
//!
//! Polls crossterm for key presses with a timeout that ends at the next tick,
//! so a single thread interleaves input, the 30 Hz simulation and drawing.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_dino::core::{GameSnapshot, PressOutcome, SessionConfig};
use tui_dino::engine::{GameLoop, TICK_PERIOD};
use tui_dino::input::{map_key, should_quit};
use tui_dino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_dino::types::SPAWN_INTERVAL_TICKS;

/// How long to block on input while the game is over and ticking is paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "tui-dino", version, about = "Jump the cacti. Up or space to jump, q to quit.")]
struct Cli {
    /// Ticks between obstacle spawns
    #[arg(long, value_name = "TICKS", default_value_t = SPAWN_INTERVAL_TICKS)]
    spawn_interval: u32,

    /// Draw without colors
    #[arg(long)]
    monochrome: bool,

    /// Write logs to this file (filter with RUST_LOG, default `info`)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = SessionConfig::default().with_spawn_interval(cli.spawn_interval);
    let game = GameLoop::with_config(config, TICK_PERIOD, Instant::now())
        .context("invalid game configuration")?;
    let view = if cli.monochrome {
        GameView::monochrome()
    } else {
        GameView::default()
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &view);

    // Always try to restore terminal state.
    let _ = term.exit();
    let high_score = result?;
    tracing::info!(high_score, "exited");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Play until the user quits. Returns the session's high score.
fn run(term: &mut TerminalRenderer, mut game: GameLoop, view: &GameView) -> Result<u32> {
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = game.time_until_next(Instant::now()).unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(game.session().high_score());
                    }
                    if let Some(k) = map_key(key) {
                        if game.press(k, Instant::now()) == PressOutcome::Restarted {
                            dirty = true;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if game.poll(Instant::now()) {
            dirty = true;
        }
    }
}
