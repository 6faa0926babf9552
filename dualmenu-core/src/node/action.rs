//! Action node
//!
//! Runs a callback instead of presenting an editor. The callback receives
//! the menu system so it can draw and hand focus back itself.

use crate::router::{ActionFn, InputFn};

/// Callbacks bound to an action node
pub struct Action<D> {
    /// Called on first entry (`returning == None`) and whenever a node this
    /// action gave focus to returns it (`returning == Some(child)`)
    pub on_focus: ActionFn<D>,
    /// Receives every event while focused; when absent a press returns focus
    pub on_input: Option<InputFn<D>>,
}

impl<D> Action<D> {
    pub fn new(on_focus: ActionFn<D>, on_input: Option<InputFn<D>>) -> Self {
        Self { on_focus, on_input }
    }
}

impl<D> Clone for Action<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Action<D> {}
