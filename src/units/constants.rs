//! Defaults for the unit conversion pipeline.

// Conversion defaults. rpx is authored against a 750-wide reference viewport,
// the convention carried over from 750px design mockups.
pub const DEFAULT_RPX_COEFFICIENT: f64 = 1.0; // Pixels per rpx on the native runtime
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 750.0; // Reference width for vw conversion
pub const DEFAULT_UNIT_PRECISION: u32 = 4; // Decimal places kept on vw values

// Upper bound on memoized conversion results per converter.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
