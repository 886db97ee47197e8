use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{cursor, event, event::Event, terminal, ExecutableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use flappy_term::compute::{init_state, step};
use flappy_term::config::GameConfig;
use flappy_term::display::{self, Viewport};
use flappy_term::entities::Input;
use flappy_term::input::{classify, FrameInput};
use flappy_term::score_store::ScoreStore;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "flappy_term", version, about = "Flap through the pipes in your terminal")]
struct Args {
    /// TOML file overriding any of the game constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for gap placement; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output here (filtered by RUST_LOG, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Where the best score is kept.
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Do not read or write the best score.
    #[arg(long)]
    no_save: bool,
}

/// stderr is hidden behind the alternate screen, so logs only go to a file.
/// Without one the logger stays uninstalled and every record is dropped.
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  The best score is persisted as soon as a
/// life ends above it, so a crash later on does not lose it.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    store: Option<&ScoreStore>,
) -> anyhow::Result<()> {
    let frame = config.tick_duration();
    let mut state = init_state(config);
    let mut best_score = store.map(ScoreStore::load).unwrap_or(0);
    // The overlay announces a new best relative to the start of the life.
    let mut best_before_life = best_score;
    log::info!("best score so far: {}", best_score);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let input = match classify(rx.try_iter()) {
            FrameInput::Quit => break,
            FrameInput::Step(input) => input,
        };
        if input == Input::Reset {
            best_before_life = best_score;
        }

        let was_over = state.is_over;
        state = step(&state, input, config, rng);

        if state.is_over && !was_over {
            best_score = record_best(store, best_score, state.score);
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, config, Viewport::new(cols, rows), best_before_life)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }

    // Quitting mid-flight still counts.
    record_best(store, best_score, state.score);
    Ok(())
}

/// Persist `score` if it beats `best`; returns the new best.
fn record_best(store: Option<&ScoreStore>, best: u32, score: u32) -> u32 {
    if score <= best {
        return best;
    }
    if let Some(store) = store {
        if let Err(err) = store.save(score) {
            log::warn!("{}", err);
        }
    }
    score
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = if args.no_save {
        None
    } else {
        Some(ScoreStore::new(
            args.score_file.clone().unwrap_or_else(ScoreStore::default_path),
        ))
    };
    log::info!("starting with seed {:?}", args.seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::error!("input thread stopped: {}", err);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &config, &mut rng, &rx, store.as_ref());

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
