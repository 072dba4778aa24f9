//! Shared numeric constants for the canvas crate.

// ── Placement ───────────────────────────────────────────────────

/// Offset applied up and left of the drop point so a default-sized feature
/// lands centered under the cursor.
pub const DROP_OFFSET: f64 = 50.0;

/// Width given to a freshly dropped feature, in canvas units.
pub const DEFAULT_FEATURE_WIDTH: f64 = 100.0;

// ── Resize ──────────────────────────────────────────────────────

/// Multiplicative width step applied per wheel tick.
pub const SCALE_STEP: f64 = 1.1;

/// Smallest width a wheel resize may produce.
pub const MIN_FEATURE_WIDTH: f64 = 16.0;

/// Largest width a wheel resize may produce when the canvas size is unknown.
pub const MAX_FEATURE_WIDTH: f64 = 4096.0;

// ── Layering ────────────────────────────────────────────────────

/// Initial value of the z-index counter. The first selection lands at `Z_INDEX_BASE + 1`.
pub const Z_INDEX_BASE: i64 = 10;

// ── Export ──────────────────────────────────────────────────────

/// File name offered for the downloaded sketch.
pub const EXPORT_FILE_NAME: &str = "face-sketch.png";

/// Delay between forced deselection and rasterization, in milliseconds.
pub const EXPORT_SETTLE_MS: u32 = 100;
