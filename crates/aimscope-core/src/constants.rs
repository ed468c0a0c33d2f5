//! Session constants and tuning parameters.

/// Nominal frame rate the host drives `tick` at (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Default session length driven by the external countdown (seconds).
pub const DEFAULT_SESSION_SECS: f64 = 60.0;

// --- Spawn volume ---

/// Horizontal spawn range (world X).
pub const SPAWN_X_MIN: f64 = -5.0;
pub const SPAWN_X_MAX: f64 = 5.0;

/// Vertical spawn range (world Y). Brackets the default eye height.
pub const SPAWN_Y_MIN: f64 = 1.0;
pub const SPAWN_Y_MAX: f64 = 4.0;

/// Depth spawn range (world Z). Always negative, i.e. into the scene.
pub const SPAWN_Z_MIN: f64 = -13.0;
pub const SPAWN_Z_MAX: f64 = -8.0;

/// Fixed spawn point for the tracking lane: centered, at eye height, mid depth.
pub const TRACKING_SPAWN: [f64; 3] = [0.0, 2.5, -10.0];

// --- Targets ---

/// Hit sphere radius for normal targets.
pub const TARGET_RADIUS: f64 = 0.5;

/// Hit sphere radius for the precision scenario.
pub const PRECISION_TARGET_RADIUS: f64 = 0.3;

/// Horizontal speed range for tracking targets (units/s). Sign is random.
pub const TRACKING_SPEED_MIN: f64 = 2.0;
pub const TRACKING_SPEED_MAX: f64 = 4.0;

/// Horizontal bound at which moving targets reflect (±units).
pub const BOUNCE_LIMIT_X: f64 = 8.0;

/// Live target pool for the rapid-fire scenario.
pub const GRIDSHOT_TARGET_COUNT: usize = 3;

/// Live target pool for single-target scenarios.
pub const SINGLE_TARGET_COUNT: usize = 1;

// --- Scoring ---

/// Points awarded per destroyed target.
pub const SCORE_PER_HIT: u32 = 1;

// --- Geometry ---

/// Below this |dot(forward, direction)| the fire ray is treated as parallel
/// to the miss projection plane.
pub const PARALLEL_EPSILON: f64 = 1e-9;

// --- Analysis heuristic ---

/// A tracking bias must exceed the opposite count by this ratio.
pub const TRACKING_BIAS_RATIO: f64 = 1.5;

/// A tracking bias also needs strictly more than this many occurrences.
pub const TRACKING_BIAS_MIN_COUNT: u32 = 3;

/// A directional bias must exceed this share of all misses.
pub const DIRECTIONAL_BIAS_SHARE: f64 = 0.5;

/// Mean |relative_x| above which misses count as wide scatter.
pub const WIDE_SPREAD_THRESHOLD: f64 = 1.5;
