//! Labels and fixed-width output lines
//!
//! Every row the engine prints is at most 16 columns. Text that does not
//! fit is cut, never reported.

use core::fmt::{self, Write};

use heapless::String;

/// Maximum label length in characters
pub const LABEL_LEN: usize = 14;

/// Output line width in characters
pub const LINE_LEN: usize = 16;

/// Marker in front of the selected row
pub const SELECTION_MARKER: char = '>';

/// Marker in front of an unselected row
pub const BLANK_MARKER: char = ' ';

/// Shown in place of missing text
const NOT_AVAILABLE: &str = "N/A";

/// Backing capacity in UTF-8 bytes; widths are counted in characters
const LABEL_BYTES: usize = 4 * LABEL_LEN;
const LINE_BYTES: usize = 4 * LINE_LEN;

/// Owned display label, truncated to [`LABEL_LEN`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String<LABEL_BYTES>);

impl Label {
    /// Copy `text`, keeping the first 14 characters
    ///
    /// Empty text becomes "N/A".
    pub fn new(text: &str) -> Self {
        Self::truncated(if text.is_empty() { NOT_AVAILABLE } else { text })
    }

    /// Copy `text` cut to 14 characters, empty text kept empty
    pub fn truncated(text: &str) -> Self {
        let mut label = String::new();
        for ch in text.chars().take(LABEL_LEN) {
            if label.push(ch).is_err() {
                break;
            }
        }
        Self(label)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Label {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.0.as_str());
    }
}

/// One output line of at most [`LINE_LEN`] characters
///
/// Writes past the end are dropped silently, so `write!` into a `Line`
/// never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line(String<LINE_BYTES>);

impl Line {
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Build a line from format arguments
    pub fn from_fmt(args: fmt::Arguments<'_>) -> Self {
        let mut line = Self::new();
        let _ = line.write_fmt(args);
        line
    }

    /// Build a row: marker, label padded to 14 columns, trailer
    pub fn row(marker: char, label: &str, trailer: char) -> Self {
        Self::from_fmt(format_args!("{}{:<14}{}", marker, label, trailer))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Width in characters
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl Write for Line {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut width = self.width();
        for ch in s.chars() {
            if width == LINE_LEN || self.0.push(ch).is_err() {
                break;
            }
            width += 1;
        }
        Ok(())
    }
}

/// Selection marker for a flag
pub fn marker(selected: bool) -> char {
    if selected {
        SELECTION_MARKER
    } else {
        BLANK_MARKER
    }
}
