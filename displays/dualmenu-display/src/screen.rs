//! In-memory character LCD
//!
//! Provides a 16x2 character grid that behaves like an HD44780 controller:
//! a cursor, auto-advance on print, writes past the last column dropped.

use heapless::String;

use crate::backend::{CharDisplay, DisplayError};
use crate::glyph::GlyphBitmap;

/// Number of character rows
pub const LCD_ROWS: usize = 2;

/// Number of character columns
pub const LCD_COLS: usize = 16;

/// Read-back capacity: codes above 0x7F take two UTF-8 bytes
const LINE_BYTES: usize = 2 * LCD_COLS;

/// Number of CGRAM glyph slots
const GLYPH_SLOTS: usize = 8;

/// Character grid implementing [`CharDisplay`]
///
/// Cells hold raw character codes, so custom glyph codes (1-7) read back as
/// the control characters `'\u{1}'` to `'\u{7}'`.
#[derive(Clone)]
pub struct LcdBuffer {
    /// Cell contents, one byte per character
    cells: [[u8; LCD_COLS]; LCD_ROWS],
    /// Cursor (col, row); col reaches `LCD_COLS` after printing into the last cell
    cursor: (u8, u8),
    /// Registered custom glyphs
    glyphs: [Option<GlyphBitmap>; GLYPH_SLOTS],
    /// `init` has been called
    ready: bool,
    /// Number of `clear` calls, for render assertions
    clears: u32,
}

impl Default for LcdBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LcdBuffer {
    /// Create a blank display
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; LCD_COLS]; LCD_ROWS],
            cursor: (0, 0),
            glyphs: [None; GLYPH_SLOTS],
            ready: false,
            clears: 0,
        }
    }

    /// Get the content of a row, trailing blanks included
    pub fn line(&self, row: usize) -> String<LINE_BYTES> {
        let mut line = String::new();
        if let Some(cells) = self.cells.get(row) {
            for &byte in cells {
                let _ = line.push(char::from(byte));
            }
        }
        line
    }

    /// Get the content of a row with trailing blanks removed
    pub fn trimmed_line(&self, row: usize) -> String<LINE_BYTES> {
        let mut line = self.line(row);
        while line.ends_with(' ') {
            line.pop();
        }
        line
    }

    /// Character at a cell
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(|&byte| char::from(byte))
    }

    /// Glyph registered in a CGRAM slot
    pub fn glyph(&self, index: u8) -> Option<&GlyphBitmap> {
        self.glyphs.get(index as usize).and_then(|g| g.as_ref())
    }

    /// Current cursor position (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Whether `init` has been called
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of times the display was cleared
    pub fn clear_count(&self) -> u32 {
        self.clears
    }
}

impl CharDisplay for LcdBuffer {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.ready = true;
        self.clear()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col as usize >= LCD_COLS || row as usize >= LCD_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        let (mut col, row) = (self.cursor.0 as usize, self.cursor.1 as usize);
        for ch in text.chars() {
            if col >= LCD_COLS {
                break;
            }
            // Outside the controller's 8-bit character set
            let byte = u8::try_from(u32::from(ch)).unwrap_or(b'?');
            self.cells[row][col] = byte;
            col += 1;
        }
        self.cursor.0 = col as u8;
        Ok(())
    }

    fn create_char(&mut self, index: u8, bitmap: &GlyphBitmap) -> Result<(), DisplayError> {
        let slot = self
            .glyphs
            .get_mut(index as usize)
            .ok_or(DisplayError::InvalidGlyph)?;
        *slot = Some(*bitmap);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (LCD_COLS as u8, LCD_ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LcdBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Lcd[");
        for row in 0..LCD_ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.line(row).as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> LcdBuffer {
        let mut lcd = LcdBuffer::new();
        lcd.init().unwrap();
        lcd
    }

    #[test]
    fn test_print_at_cursor() {
        let mut lcd = ready();
        lcd.set_cursor(3, 1).unwrap();
        lcd.print("Hello").unwrap();
        assert_eq!(lcd.trimmed_line(1).as_str(), "   Hello");
        assert_eq!(lcd.trimmed_line(0).as_str(), "");
    }

    #[test]
    fn test_print_drops_overflow() {
        let mut lcd = ready();
        lcd.set_cursor(10, 0).unwrap();
        lcd.print("0123456789").unwrap();
        assert_eq!(lcd.line(0).as_str(), "          012345");
        assert_eq!(lcd.trimmed_line(1).as_str(), "");
    }

    #[test]
    fn test_consecutive_prints_advance() {
        let mut lcd = ready();
        lcd.print("ab").unwrap();
        lcd.print("cd").unwrap();
        assert_eq!(lcd.trimmed_line(0).as_str(), "abcd");
    }

    #[test]
    fn test_glyph_codes_stored_raw() {
        let mut lcd = ready();
        lcd.set_cursor(15, 0).unwrap();
        lcd.print("\u{1}").unwrap();
        assert_eq!(lcd.char_at(15, 0), Some('\u{1}'));
    }

    #[test]
    fn test_latin1_row_reads_back_whole() {
        let mut lcd = ready();
        lcd.print("25 °C          \u{1}").unwrap();
        assert_eq!(lcd.line(0).as_str(), "25 °C          \u{1}");
        assert_eq!(lcd.char_at(15, 0), Some('\u{1}'));
    }

    #[test]
    fn test_invalid_cursor() {
        let mut lcd = ready();
        assert_eq!(lcd.set_cursor(16, 0), Err(DisplayError::InvalidCoordinates));
        assert_eq!(lcd.set_cursor(0, 2), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_print_before_init() {
        let mut lcd = LcdBuffer::new();
        assert_eq!(lcd.print("x"), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_clear() {
        let mut lcd = ready();
        lcd.print("Hello").unwrap();
        lcd.clear().unwrap();
        assert_eq!(lcd.trimmed_line(0).as_str(), "");
        assert_eq!(lcd.cursor(), (0, 0));
        // init clears once
        assert_eq!(lcd.clear_count(), 2);
    }

    #[test]
    fn test_create_char_slot_range() {
        let mut lcd = ready();
        assert!(lcd.create_char(7, &[0; 8]).is_ok());
        assert_eq!(lcd.create_char(8, &[0; 8]), Err(DisplayError::InvalidGlyph));
    }
}
