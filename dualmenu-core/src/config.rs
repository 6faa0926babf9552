//! Configuration type definitions
//!
//! These types describe the display geometry checked at start-up and the
//! editor step sizes applied when a node is built without explicit steps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Columns the engine lays out for
pub const VIEWPORT_COLS: u8 = 16;

/// Rows the engine lays out for
pub const VIEWPORT_ROWS: u8 = 2;

/// Character display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Columns in characters
    pub cols: u8,
    /// Rows in characters
    pub rows: u8,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            cols: VIEWPORT_COLS,
            rows: VIEWPORT_ROWS,
        }
    }
}

impl Geometry {
    /// Create a geometry
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self { cols, rows }
    }

    /// Check that the two-row, sixteen-column viewport fits
    pub fn fits_viewport(&self) -> bool {
        self.cols >= VIEWPORT_COLS && self.rows >= VIEWPORT_ROWS
    }
}

/// Integer editor steps
///
/// Encoder A applies `coarse`, encoder B applies `fine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LongSteps {
    pub coarse: i32,
    pub fine: i32,
}

impl Default for LongSteps {
    fn default() -> Self {
        Self {
            coarse: 100,
            fine: 1,
        }
    }
}

impl LongSteps {
    /// Use `coarse`/`fine` where positive, falling back to `defaults`
    pub fn or_defaults(coarse: i32, fine: i32, defaults: LongSteps) -> Self {
        Self {
            coarse: if coarse > 0 { coarse } else { defaults.coarse },
            fine: if fine > 0 { fine } else { defaults.fine },
        }
    }
}

/// Float editor steps
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatSteps {
    pub coarse: f32,
    pub fine: f32,
}

impl Default for FloatSteps {
    fn default() -> Self {
        Self {
            coarse: 0.05,
            fine: 0.001,
        }
    }
}

/// Menu system configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuConfig {
    /// Fallback steps for integer editors
    pub long_steps: LongSteps,
    /// Steps for float editors
    pub float_steps: FloatSteps,
}
