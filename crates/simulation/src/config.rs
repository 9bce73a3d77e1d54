/// Seconds between simulation ticks.
pub const TICK_SECONDS: f64 = 3.0;

/// Lower bound for bus speed in km/h.
pub const SPEED_MIN: f32 = 40.0;

/// Upper bound for bus speed in km/h.
pub const SPEED_MAX: f32 = 60.0;

/// Per-tick displacement in degrees per km/h of speed. The motion model is a
/// planar approximation, not great-circle navigation; fine at these distances.
pub const DEGREES_PER_KMH: f64 = 0.0001;

/// Probability that a bus's status is resampled on a given tick.
pub const STATUS_RESAMPLE_CHANCE: f64 = 0.05;

/// ETA ceiling in minutes; a delayed bus stops accumulating past this.
pub const ETA_MAX_MINUTES: u32 = 30;

/// ETA floor in minutes; an early bus never drops below this.
pub const ETA_MIN_MINUTES: u32 = 1;

/// Padding in degrees added to every side of the computed viewport bounds.
pub const BOUNDS_PADDING_DEG: f64 = 0.01;
