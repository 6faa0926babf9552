//! Container selection state
//!
//! A container holds child node ids and a selection index. Index -1 is the
//! "return to parent" row and only exists when the container has a parent.

use heapless::Vec;

use super::NodeId;
use crate::router::MenuError;

/// Maximum children per container
pub const MAX_CHILDREN: usize = 16;

/// Selection index of the return row
pub const RETURN_ROW: i16 = -1;

/// Which rows the two-line viewport shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Window {
    /// Row 0 is the highlighted return row, row 1 the first child
    ReturnRow,
    /// Row 0 is the parent (or own) label, row 1 the selected first child
    Header,
    /// Child `first` unselected on row 0, child `first + 1` selected on row 1
    Trailing { first: usize },
}

/// Container node state
#[derive(Debug, Clone)]
pub struct Container {
    children: Vec<NodeId, MAX_CHILDREN>,
    selected: i16,
}

impl Container {
    pub fn new(children: &[NodeId]) -> Result<Self, MenuError> {
        let children = Vec::from_slice(children).map_err(|_| MenuError::CapacityExceeded)?;
        Ok(Self {
            children,
            selected: RETURN_ROW,
        })
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Current selection index
    pub fn selected(&self) -> i16 {
        self.selected
    }

    /// Selected child, if the selection is on a child row
    pub fn selected_child(&self) -> Option<NodeId> {
        usize::try_from(self.selected)
            .ok()
            .and_then(|index| self.children.get(index).copied())
    }

    /// Select the first child
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Move the selection one row
    ///
    /// The floor is the return row when `has_parent`, else the first child;
    /// the ceiling is the last child. Returns false if there are no children.
    pub fn turn(&mut self, forward: bool, has_parent: bool) -> bool {
        if self.children.is_empty() {
            return false;
        }
        let floor = if has_parent { RETURN_ROW } else { 0 };
        let ceiling = self.children.len() as i16 - 1;
        let step = if forward { 1 } else { -1 };
        self.selected = (self.selected + step).max(floor).min(ceiling);
        true
    }

    /// Viewport for the current selection
    ///
    /// A root container cannot sit on the return row; its selection is moved
    /// to the first child.
    pub fn window(&mut self, has_parent: bool) -> Window {
        if !has_parent && self.selected == RETURN_ROW {
            self.selected = 0;
        }
        match self.selected {
            RETURN_ROW => Window::ReturnRow,
            0 => Window::Header,
            selected => Window::Trailing {
                first: selected.max(1) as usize - 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn container(count: u8) -> Container {
        let ids: std::vec::Vec<NodeId> = (0..count).map(NodeId::new).collect();
        let mut container = Container::new(&ids).unwrap();
        container.reset();
        container
    }

    #[test]
    fn test_new_starts_on_return_row() {
        let c = Container::new(&[NodeId::new(0)]).unwrap();
        assert_eq!(c.selected(), RETURN_ROW);
    }

    #[test]
    fn test_too_many_children() {
        let ids: std::vec::Vec<NodeId> = (0..=MAX_CHILDREN as u8).map(NodeId::new).collect();
        assert_eq!(Container::new(&ids).err(), Some(MenuError::CapacityExceeded));
    }

    #[test]
    fn test_turn_clamps_at_last_child() {
        let mut c = container(2);
        assert!(c.turn(true, false));
        assert!(c.turn(true, false));
        assert_eq!(c.selected(), 1);
        assert_eq!(c.selected_child(), Some(NodeId::new(1)));
    }

    #[test]
    fn test_root_floor_is_first_child() {
        let mut c = container(3);
        c.turn(false, false);
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn test_child_floor_is_return_row() {
        let mut c = container(3);
        c.turn(false, true);
        c.turn(false, true);
        assert_eq!(c.selected(), RETURN_ROW);
        assert_eq!(c.selected_child(), None);
    }

    #[test]
    fn test_empty_container_ignores_turns() {
        let mut c = container(0);
        assert!(!c.turn(true, true));
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn test_window_trails_selection() {
        let mut c = container(4);
        assert_eq!(c.window(true), Window::Header);
        c.turn(true, true);
        assert_eq!(c.window(true), Window::Trailing { first: 0 });
        c.turn(true, true);
        c.turn(true, true);
        assert_eq!(c.window(true), Window::Trailing { first: 2 });
    }

    #[test]
    fn test_window_return_row() {
        let mut c = container(2);
        c.turn(false, true);
        assert_eq!(c.window(true), Window::ReturnRow);
    }

    #[test]
    fn test_root_window_leaves_return_row() {
        let mut c = Container::new(&[NodeId::new(0)]).unwrap();
        assert_eq!(c.window(false), Window::Header);
        assert_eq!(c.selected(), 0);
    }

    proptest! {
        #[test]
        fn prop_selection_stays_in_range(
            count in 1u8..=16,
            has_parent in any::<bool>(),
            turns in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut c = container(count);
            let floor = if has_parent { RETURN_ROW } else { 0 };
            for forward in turns {
                c.turn(forward, has_parent);
                prop_assert!(c.selected() >= floor);
                prop_assert!(c.selected() <= count as i16 - 1);
            }
        }
    }
}
