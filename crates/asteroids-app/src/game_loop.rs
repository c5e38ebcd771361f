//! Game loop thread: runs the simulation at 50 Hz and hands snapshots to
//! the renderer.
//!
//! The simulation is created inside this thread, which then owns it.
//! Inputs arrive via `mpsc` channel and are applied before the tick that
//! follows them. The latest snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{error, info};

use asteroids_core::constants::TICK_RATE;
use asteroids_core::error::SimError;
use asteroids_core::state::Renderer;
use asteroids_sim::{SimConfig, Simulation};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer and the thread handle,
/// which yields the error that stopped the loop, if any.
pub fn spawn_game_loop(
    config: SimConfig,
    max_ticks: Option<u64>,
    mut renderer: Box<dyn Renderer + Send>,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<Result<(), SimError>>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("asteroids-game-loop".into())
        .spawn(move || {
            let sim = Simulation::new(config);
            run_game_loop(sim, &cmd_rx, renderer.as_mut(), &latest_snapshot, max_ticks)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, the tick limit, or a failing tick.
///
/// A disconnected channel only means no more input will arrive; the
/// simulation keeps ticking.
pub fn run_game_loop(
    mut sim: Simulation,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    renderer: &mut dyn Renderer,
    latest_snapshot: &SharedSnapshot,
    max_ticks: Option<u64>,
) -> Result<(), SimError> {
    let mut next_tick_time = Instant::now();
    let mut input_open = true;

    loop {
        // 1. Drain all pending commands; later writes overwrite earlier ones.
        while input_open {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(input)) => sim.apply_input(input),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = sim.time().tick, "game loop shutting down");
                    return Ok(());
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = sim.time().tick, "input closed, running on");
                    input_open = false;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = match sim.tick() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(tick = sim.time().tick, error = %e, "tick failed");
                return Err(e);
            }
        };

        // 3. Hand the snapshot to the renderer
        renderer.render(&snapshot);

        // 4. Store latest snapshot for polling
        let tick = snapshot.time.tick;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if max_ticks.is_some_and(|limit| tick >= limit) {
            info!(tick, "tick limit reached");
            return Ok(());
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; drop the missed ticks rather than catching up
            next_tick_time = now;
        }
    }
}
