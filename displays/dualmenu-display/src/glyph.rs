//! Glyph codes and custom character bitmaps
//!
//! The engine embeds these one-byte codes directly in printed text, so the
//! glyphs must be registered before the first render.

use crate::backend::{CharDisplay, DisplayError};

/// One 5x8 custom character, one byte per pixel row (low five bits used)
pub type GlyphBitmap = [u8; 8];

/// Return to parent (up-and-left arrow)
pub const RETURN: char = '\u{1}';
/// Enter sub-menu (down-and-right arrow)
pub const ENTER: char = '\u{2}';
/// Cycle value in place
pub const ROTATE: char = '\u{3}';
/// Run an action
pub const ACTION: char = '\u{4}';
/// Edit value; the HD44780 ROM right arrow, no registration needed
pub const EDIT: char = '\u{7e}';

const RETURN_BITMAP: GlyphBitmap = [
    0b00100, 0b01110, 0b11111, 0b00100, 0b00100, 0b11100, 0b00000, 0b00000,
];

const ENTER_BITMAP: GlyphBitmap = [
    0b00000, 0b00000, 0b11100, 0b00100, 0b00100, 0b11111, 0b01110, 0b00100,
];

const ROTATE_BITMAP: GlyphBitmap = [
    0b00100, 0b00010, 0b11111, 0b00000, 0b11111, 0b01000, 0b00100, 0b00000,
];

const ACTION_BITMAP: GlyphBitmap = [
    0b00001, 0b00010, 0b00100, 0b01111, 0b11110, 0b00100, 0b01000, 0b10000,
];

/// Custom glyphs as (CGRAM slot, bitmap)
pub const CUSTOM_GLYPHS: [(u8, GlyphBitmap); 4] = [
    (RETURN as u8, RETURN_BITMAP),
    (ENTER as u8, ENTER_BITMAP),
    (ROTATE as u8, ROTATE_BITMAP),
    (ACTION as u8, ACTION_BITMAP),
];

/// Upload all custom glyphs to the display
pub fn register_glyphs<D: CharDisplay>(display: &mut D) -> Result<(), DisplayError> {
    for (index, bitmap) in CUSTOM_GLYPHS.iter() {
        display.create_char(*index, bitmap)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::LcdBuffer;

    #[test]
    fn test_glyph_slots() {
        let slots: [u8; 4] = CUSTOM_GLYPHS.map(|(slot, _)| slot);
        assert_eq!(slots, [1, 2, 3, 4]);
    }

    #[test]
    fn test_bitmaps_are_five_pixels_wide() {
        for (_, bitmap) in CUSTOM_GLYPHS.iter() {
            assert!(bitmap.iter().all(|row| *row < 0b100000));
        }
    }

    #[test]
    fn test_register_glyphs() {
        let mut lcd = LcdBuffer::new();
        register_glyphs(&mut lcd).unwrap();
        assert_eq!(lcd.glyph(1), Some(&RETURN_BITMAP));
        assert_eq!(lcd.glyph(4), Some(&ACTION_BITMAP));
        assert_eq!(lcd.glyph(5), None);
    }
}
