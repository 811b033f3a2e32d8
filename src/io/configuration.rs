//! Generation constants and runtime configuration defaults

// Placement bounds guaranteeing termination
/// Trial budget per word in word-search placement
pub const MAX_PLACEMENT_TRIALS: usize = 100;

/// Total placement attempts before the assembler settles for the best seen
pub const MAX_ASSEMBLY_ATTEMPTS: usize = 4;

/// Minimum fraction of words that must place before a layout is accepted
pub const MIN_PLACEMENT_RATE: f64 = 0.6;

// Crossword candidate scoring; the weights are a tuning choice
/// Reward per additional intersection a candidate creates
pub const INTERSECTION_WEIGHT: f64 = 2.0;
/// Penalty per cell of bounding-box growth a candidate causes
pub const GROWTH_WEIGHT: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default width and height for word-search grids
pub const DEFAULT_GRID_SIZE: usize = 15;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_puzzle";
