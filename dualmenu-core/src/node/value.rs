//! Bounded value editors
//!
//! Each editor binds one externally owned scalar through a `Cell`. A turn
//! changes the value and the editor re-renders row 1; an unbound editor
//! (`None`) ignores turns and renders nothing.

use core::cell::Cell;

use dualmenu_display::glyph;

use crate::config::{FloatSteps, LongSteps};
use crate::format::{marker, Label, Line, LINE_LEN, SELECTION_MARKER};
use crate::input::{InputEvent, Source};

use super::list::ListItems;

/// Two-option flag editor
pub struct BoolValue<'a> {
    false_option: Label,
    true_option: Label,
    value: Option<&'a Cell<bool>>,
}

impl<'a> BoolValue<'a> {
    pub fn new(false_option: &str, true_option: &str, value: Option<&'a Cell<bool>>) -> Self {
        Self {
            false_option: Label::new(false_option),
            true_option: Label::new(true_option),
            value,
        }
    }

    /// Set the flag from the rotation direction
    ///
    /// Forward selects the true option, anything else the false option.
    pub fn turn(&self, event: InputEvent) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        value.set(event.is_forward());
        true
    }

    /// Both options, the active one marked, true option right-aligned
    pub fn render(&self) -> Option<Line> {
        let value = self.value?.get();
        let true_text = Line::from_fmt(format_args!("{}{}", marker(value), self.true_option.as_str()));
        let width = LINE_LEN.saturating_sub(self.false_option.as_str().chars().count() + 2);
        Some(Line::from_fmt(format_args!(
            "{}{} {:>width$}",
            marker(!value),
            self.false_option.as_str(),
            true_text.as_str(),
            width = width
        )))
    }
}

/// Integer editor with coarse (encoder A) and fine (encoder B) steps
pub struct LongValue<'a> {
    units: Label,
    min: i32,
    max: i32,
    steps: LongSteps,
    value: Option<&'a Cell<i32>>,
}

impl<'a> LongValue<'a> {
    /// `min == max` leaves the value unbounded
    pub fn new(units: &str, min: i32, max: i32, steps: LongSteps, value: Option<&'a Cell<i32>>) -> Self {
        Self {
            units: Label::truncated(units),
            min: min.min(max),
            max: min.max(max),
            steps,
            value,
        }
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn turn(&self, event: InputEvent) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        let step = match event.source {
            Source::A => self.steps.coarse,
            Source::B => self.steps.fine,
        };
        let mut next = if event.is_forward() {
            value.get().saturating_add(step)
        } else {
            value.get().saturating_sub(step)
        };
        if self.min != self.max {
            next = next.clamp(self.min, self.max);
        }
        value.set(next);
        true
    }

    pub fn render(&self) -> Option<Line> {
        let value = self.value?.get();
        let text = Line::from_fmt(format_args!("{} {}", value, self.units.as_str()));
        Some(Line::from_fmt(format_args!("{:<15}{}", text.as_str(), glyph::RETURN)))
    }
}

/// Small float editor, shown with three decimals
pub struct FloatValue<'a> {
    units: Label,
    min: f32,
    max: f32,
    steps: FloatSteps,
    value: Option<&'a Cell<f32>>,
}

impl<'a> FloatValue<'a> {
    /// `min == max` leaves the value unbounded
    pub fn new(units: &str, min: f32, max: f32, steps: FloatSteps, value: Option<&'a Cell<f32>>) -> Self {
        Self {
            units: Label::truncated(units),
            min: min.min(max),
            max: min.max(max),
            steps,
            value,
        }
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn turn(&self, event: InputEvent) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        let step = match event.source {
            Source::A => self.steps.coarse,
            Source::B => self.steps.fine,
        };
        let mut next = value.get() + if event.is_forward() { step } else { -step };
        if self.min != self.max {
            if next > self.max {
                next = self.max;
            } else if next < self.min {
                next = self.min;
            }
        }
        value.set(next);
        true
    }

    pub fn render(&self) -> Option<Line> {
        let value = self.value?.get();
        let text = Line::from_fmt(format_args!("{:.3} {}", value, self.units.as_str()));
        Some(Line::from_fmt(format_args!("{:<14} {}", text.as_str(), glyph::RETURN)))
    }
}

/// Index into a string list, clamped at both ends
pub struct DropDownList<'a> {
    items: ListItems,
    value: Option<&'a Cell<usize>>,
}

impl<'a> DropDownList<'a> {
    pub fn new(items: ListItems, value: Option<&'a Cell<usize>>) -> Self {
        Self { items, value }
    }

    pub fn turn(&self, event: InputEvent) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        if self.items.is_empty() {
            return false;
        }
        let next = if event.is_forward() {
            value.get().saturating_add(1)
        } else {
            value.get().saturating_sub(1)
        };
        value.set(self.items.clamp(next));
        true
    }

    /// Active entry, marked; an out-of-range index shows the nearest entry
    pub fn render(&self) -> Option<Line> {
        let index = self.items.clamp(self.value?.get());
        let item = self.items.get(index)?;
        Some(Line::from_fmt(format_args!("{}{:<15}", SELECTION_MARKER, item)))
    }
}
