//! String lists and the in-row rotary list editor

use core::cell::Cell;

use heapless::Vec;

use crate::format::{marker, Label, Line};
use crate::router::MenuError;

use super::NodeType;

/// Maximum entries in a string list
pub const MAX_LIST_ITEMS: usize = 16;

/// Engine-owned copies of list labels, each cut to 14 characters
#[derive(Debug, Clone, Default)]
pub struct ListItems(Vec<Label, MAX_LIST_ITEMS>);

impl ListItems {
    pub fn new(items: &[&str]) -> Result<Self, MenuError> {
        let mut labels = Vec::new();
        for item in items {
            labels
                .push(Label::truncated(item))
                .map_err(|_| MenuError::CapacityExceeded)?;
        }
        Ok(Self(labels))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(Label::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clamp an index into the list
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.0.len().saturating_sub(1))
    }
}

/// List value cycled in place inside its container's row
///
/// Never takes over the viewport: it renders on the row its container last
/// drew it on.
pub struct RotaryList<'a> {
    items: ListItems,
    value: Option<&'a Cell<usize>>,
    row: u8,
    selected: bool,
}

impl<'a> RotaryList<'a> {
    pub fn new(items: ListItems, value: Option<&'a Cell<usize>>) -> Self {
        Self {
            items,
            value,
            row: 0,
            selected: false,
        }
    }

    /// Remember where the container drew this node
    pub fn place(&mut self, row: u8, selected: bool) {
        self.row = row;
        self.selected = selected;
    }

    /// Step to the next entry, wrapping to the first
    ///
    /// Returns false if unbound or the list is empty.
    pub fn advance(&self) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        if self.items.is_empty() {
            return false;
        }
        let next = value.get().saturating_add(1);
        value.set(if next >= self.items.len() { 0 } else { next });
        true
    }

    /// Render the current entry for the remembered row
    ///
    /// Pulls an out-of-range bound index back onto the last entry.
    pub fn render(&self) -> Option<(u8, Line)> {
        let value = self.value?;
        let index = self.items.clamp(value.get());
        let item = self.items.get(index)?;
        value.set(index);
        let trailer = if self.selected {
            NodeType::RotaryListValue.indicator()
        } else {
            ' '
        };
        Some((self.row, Line::row(marker(self.selected), item, trailer)))
    }
}
