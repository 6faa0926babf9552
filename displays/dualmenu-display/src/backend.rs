//! Display backend trait
//!
//! Defines the interface the menu engine renders through.

use crate::glyph::GlyphBitmap;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Cursor position outside the character grid
    InvalidCoordinates,
    /// Custom glyph slot outside 0-7
    InvalidGlyph,
    /// Display not initialized
    NotInitialized,
}

/// Character display trait
///
/// Provides a hardware-agnostic interface to a character LCD with a
/// fixed grid of cells and up to eight user-defined glyphs.
pub trait CharDisplay {
    /// Power up the controller and switch the backlight on
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the entire display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column number in characters (0-based)
    /// - `row`: Row number (0-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Print text at the cursor, advancing it
    ///
    /// Characters `'\u{1}'` to `'\u{7}'` select custom glyphs registered
    /// with [`CharDisplay::create_char`].
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Upload a custom 5x8 glyph into CGRAM slot `index` (0-7)
    fn create_char(&mut self, index: u8, bitmap: &GlyphBitmap) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
