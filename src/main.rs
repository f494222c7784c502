mod display;
mod input;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use egg_catcher::clock::FrameClock;
use egg_catcher::compute::{handle_action, init_state, set_playfield_bounds, tick};
use egg_catcher::config::Config;
use egg_catcher::consts::{TICK_MS, WIN_H};
use egg_catcher::entities::SessionState;
use egg_catcher::highscore::HighScoreStore;

use display::{Viewport, PX_PER_COL};

const FRAME: Duration = Duration::from_millis(TICK_MS as u64); // ≈60 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode, so log lines go to a file.
/// If the file can't be opened the game simply runs without a logger.
fn init_logging(config: &Config) {
    let Ok(file) = File::options()
        .create(true)
        .append(true)
        .open(&config.log_path)
    else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// ── High-score persistence ────────────────────────────────────────────────────

/// Write the high score whenever the session logic has raised it.
/// Persistence is best effort; failures are logged and play continues.
fn persist_high_score(store: &HighScoreStore, state: &SessionState, persisted: &mut i32) {
    let current = state.score.high_score;
    if current > *persisted {
        if let Err(e) = store.save(current) {
            log::warn!("Could not save high score: {}", e);
        }
        *persisted = current;
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Single owner of the session: input events are drained between ticks,
/// so every mutation happens on this thread, once per frame.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    store: &HighScoreStore,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut clock = FrameClock::new();
    let epoch = Instant::now();

    let (cols, rows) = terminal::size()?;
    let mut view = Viewport::new(cols, rows);
    let mut persisted = store.load();
    let mut state = init_state(persisted, view.playfield_width(), WIN_H);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(cols, rows) = ev {
                view = Viewport::new(cols, rows);
                state = set_playfield_bounds(&state, view.playfield_width(), WIN_H);
                continue;
            }
            if let Some(action) = input::map_event(&ev, PX_PER_COL) {
                state = handle_action(&state, action);
            }
        }

        if state.quit_requested {
            persist_high_score(store, &state, &mut persisted);
            log::info!("Quit");
            return Ok(());
        }

        let dt_ms = clock.delta_ms(epoch.elapsed().as_millis() as u64);
        state = tick(&state, dt_ms, &mut rng);
        persist_high_score(store, &state, &mut persisted);

        display::render(out, &state, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    log::info!("Egg Catcher starting");

    let store = HighScoreStore::new(&config.score_path);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle("Egg Catcher"))?;
    let mouse = out.execute(EnableMouseCapture).is_ok();

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
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, &store);

    // Always restore the terminal
    if mouse {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    result
}
