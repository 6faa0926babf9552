//! Character display abstraction for the dualmenu engine
//!
//! This crate provides:
//! - `CharDisplay` trait for HD44780-style character LCDs
//! - The custom 5x8 glyphs the menu engine prints (return, enter, rotate, action)
//! - `LcdBuffer`, an in-memory 16x2 character grid implementing `CharDisplay`
//!
//! # Architecture
//!
//! The menu engine only ever positions the cursor and prints fixed-width
//! text. Real drivers (I2C backpack LCDs and similar) implement
//! `CharDisplay` in the board crate; `LcdBuffer` stands in for them on the
//! host and in tests.

#![no_std]

pub mod backend;
pub mod glyph;
pub mod screen;

// Re-export key types
pub use backend::{CharDisplay, DisplayError};
pub use glyph::{register_glyphs, GlyphBitmap, CUSTOM_GLYPHS};
pub use screen::{LcdBuffer, LCD_COLS, LCD_ROWS};
