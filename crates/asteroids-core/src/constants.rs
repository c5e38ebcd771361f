//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World ---

/// Default playfield width in world units.
pub const WORLD_WIDTH: f64 = 800.0;

/// Default playfield height in world units.
pub const WORLD_HEIGHT: f64 = 600.0;

/// Player spawn offset along +x from the well.
pub const PLAYER_SPAWN_OFFSET_X: f64 = 100.0;

// --- Well ---

/// Default well pull (acceleration units). Also its drawn radius.
pub const WELL_STRENGTH: f64 = 20.0;

// --- Player ---

/// Thrust applied while a thrust key is held.
pub const PLAYER_THRUST_CONST: f64 = 50.0;

/// Turn rate while a turn key is held (rad/s).
pub const PLAYER_TURN_SPEED: f64 = 2.0;

/// Hull height for drawing.
pub const PLAYER_HULL_HEIGHT: f64 = 12.0;

/// Hull length for drawing.
pub const PLAYER_HULL_WIDTH: f64 = 18.0;

pub const PLAYER_NAME: &str = "The player";

// --- Asteroids ---

/// Asteroids spawned at scene start.
pub const ASTEROID_COUNT: usize = 15;

pub const ASTEROID_RADIUS: f64 = 10.0;

/// Orbital kick = distance to well / this.
pub const ORBIT_IMPULSE_DIVISOR: f64 = 3.0;

pub const ASTEROID_NAMES: [&str; 20] = [
    "Algernon", "Bertie", "Cecily", "Dahlia", "Edwin", "Fergus", "Gertrude", "Horatio",
    "Ignatius", "Jairus", "Kenneth", "Leopold", "Matilda", "Neville", "Oriel", "Petroc",
    "Quentin", "Reginald", "Sadie", "Tarquin",
];

// --- Bullets ---

/// Forward impulse given to a freshly fired bullet.
pub const BULLET_IMPULSE: f64 = 50.0;

pub const BULLET_RADIUS: f64 = 2.0;

pub const BULLET_NAME: &str = "A bullet";

// --- Display ---

/// Player velocity samples kept for the velocity chart.
pub const VELOCITY_HISTORY_LEN: usize = 1000;
