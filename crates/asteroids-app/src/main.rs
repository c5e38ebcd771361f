use tracing::info;

use asteroids_app::display::LocationsTable;
use asteroids_app::state::shared_snapshot;
use asteroids_app::{config, game_loop, input};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = config::load()?;
    info!(
        seed = config.sim.seed,
        asteroids = config.sim.asteroid_count,
        max_ticks = ?config.max_ticks,
        "starting simulation"
    );

    let latest = shared_snapshot();
    let renderer = LocationsTable::new(config.display_interval_ticks);
    let (cmd_tx, handle) = game_loop::spawn_game_loop(
        config.sim,
        config.max_ticks,
        Box::new(renderer),
        latest.clone(),
    )?;

    // The reader thread is left detached: it blocks on stdin and ends with
    // the process.
    input::spawn_stdin_reader(cmd_tx)?;

    match handle.join() {
        Ok(result) => result?,
        Err(_) => anyhow::bail!("game loop thread panicked"),
    }

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            info!(
                tick = snapshot.time.tick,
                bodies = snapshot.bodies.len(),
                "simulation finished"
            );
        }
    }
    Ok(())
}
