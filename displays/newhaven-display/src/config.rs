//! Display configuration
//!
//! Geometry and start-up levels for one LCD module. With the `serde`
//! feature the types can be stored alongside the rest of a board's
//! configuration.

use newhaven_protocol::scale::{BRIGHTNESS_PERCENT_DEFAULT, CONTRAST_PERCENT_DEFAULT};

use crate::format::DEFAULT_PADDING_CHAR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of character rows
pub const ROW_COUNT_DEFAULT: u8 = 4;

/// Default number of character columns
pub const COL_COUNT_DEFAULT: u8 = 20;

/// DDRAM address of the first cell of each row on 4-line modules
///
/// Rows 2 and 3 continue rows 0 and 1, so their offsets depend on the
/// column count (0x14 / 0x54 on a 20-column module).
const ROW_BASE: [u8; 2] = [0x00, 0x40];

/// Character grid of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Number of character rows
    pub rows: u8,
    /// Number of character columns
    pub cols: u8,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(ROW_COUNT_DEFAULT, COL_COUNT_DEFAULT)
    }
}

impl Geometry {
    pub const fn new(rows: u8, cols: u8) -> Self {
        Self { rows, cols }
    }

    /// Check whether a zero-based cell lies on the screen
    pub const fn contains(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols
    }

    /// Absolute cursor position of a zero-based cell
    ///
    /// Returns `None` for cells outside the grid.
    pub fn position(&self, row: u8, col: u8) -> Option<u8> {
        if !self.contains(row, col) {
            return None;
        }

        let base = ROW_BASE[(row % 2) as usize];
        let wrap = if row >= 2 { self.cols } else { 0 };
        base.checked_add(wrap)?.checked_add(col)
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Character grid
    pub geometry: Geometry,
    /// Initial padding character for padded prints
    pub padding_char: char,
    /// Contrast applied by `apply_levels` (percent)
    pub contrast_percent: i32,
    /// Backlight brightness applied by `apply_levels` (percent)
    pub brightness_percent: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            padding_char: DEFAULT_PADDING_CHAR,
            contrast_percent: CONTRAST_PERCENT_DEFAULT,
            brightness_percent: BRIGHTNESS_PERCENT_DEFAULT,
        }
    }
}

impl DisplayConfig {
    /// Default configuration for a module with the given grid
    pub fn with_geometry(rows: u8, cols: u8) -> Self {
        Self {
            geometry: Geometry::new(rows, cols),
            ..Self::default()
        }
    }
}
