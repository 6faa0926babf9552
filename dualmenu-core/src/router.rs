//! Focus router
//!
//! [`MenuSystem`] owns every node for its lifetime, the display sink and
//! the id of the focused node. Encoder events are dispatched to the focused
//! node only; nodes move focus with `take_focus` / `return_focus`.
//!
//! The engine is single-threaded: each dispatch runs to completion before
//! the next event may be delivered. Interrupt-driven encoders must go
//! through [`EncoderQueue`] rather than call `dispatch` from the handler.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use dualmenu_display::{glyph, register_glyphs, CharDisplay};

use crate::config::{FloatSteps, Geometry, LongSteps, MenuConfig};
use crate::format::{marker, Line, SELECTION_MARKER};
use crate::input::{DualEncoder, InputEvent, RotaryEncoder, Source, FORCE_REDRAW_PAYLOAD};
use crate::node::{
    Action, BoolValue, Container, DropDownList, FloatValue, ListItems, LongValue, Node, NodeId,
    NodeKind, NodeType, RotaryList, Window, MAX_CHILDREN, MAX_NODES,
};
use crate::queue::{wait_event, EncoderQueue};

/// Action callback: `(menu, this, event, returning)`
///
/// `returning` is `None` on first entry and the returning child otherwise.
pub type ActionFn<D> = fn(&mut MenuSystem<'_, D>, NodeId, InputEvent, Option<NodeId>);

/// Action input callback: `(menu, this, event)`
///
/// Owns the node's input entirely, including calling `return_focus`.
pub type InputFn<D> = fn(&mut MenuSystem<'_, D>, NodeId, InputEvent);

/// Errors building a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Node arena, child list or string list is full
    CapacityExceeded,
    /// A child id does not name an existing node
    UnknownNode,
}

/// What an input handler decided
enum Transition<D> {
    Nothing,
    Redraw,
    Return,
    Focus(NodeId),
    Custom(InputFn<D>),
}

/// Menu arena and focus router
pub struct MenuSystem<'a, D> {
    nodes: Vec<Node<'a, D>, MAX_NODES>,
    focus: Option<NodeId>,
    display: Option<D>,
    config: MenuConfig,
    initialised: bool,
}

impl<'a, D: CharDisplay> Default for MenuSystem<'a, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, D: CharDisplay> MenuSystem<'a, D> {
    pub fn new() -> Self {
        Self::with_config(MenuConfig::default())
    }

    pub fn with_config(config: MenuConfig) -> Self {
        Self {
            nodes: Vec::new(),
            focus: None,
            display: None,
            config,
            initialised: false,
        }
    }

    // --- Construction ---

    fn push(&mut self, label: &str, kind: NodeKind<'a, D>) -> Result<NodeId, MenuError> {
        let id = NodeId::new(self.nodes.len() as u8);
        self.nodes
            .push(Node::new(label, kind))
            .map_err(|_| MenuError::CapacityExceeded)?;
        Ok(id)
    }

    /// Add a container listing `children` in display order
    pub fn add_container(&mut self, label: &str, children: &[NodeId]) -> Result<NodeId, MenuError> {
        if children.iter().any(|child| child.index() >= self.nodes.len()) {
            return Err(MenuError::UnknownNode);
        }
        if children.len() > MAX_CHILDREN {
            return Err(MenuError::CapacityExceeded);
        }
        let container = Container::new(children)?;
        self.push(label, NodeKind::Container(container))
    }

    /// Add an action node
    pub fn add_action(
        &mut self,
        label: &str,
        on_focus: ActionFn<D>,
        on_input: Option<InputFn<D>>,
    ) -> Result<NodeId, MenuError> {
        self.push(label, NodeKind::Action(Action::new(on_focus, on_input)))
    }

    /// Add a flag editor showing `false_option` and `true_option`
    pub fn add_bool(
        &mut self,
        label: &str,
        false_option: &str,
        true_option: &str,
        value: Option<&'a Cell<bool>>,
    ) -> Result<NodeId, MenuError> {
        let editor = BoolValue::new(false_option, true_option, value);
        self.push(label, NodeKind::Bool(editor))
    }

    /// Add an integer editor
    ///
    /// Non-positive steps fall back to the configured defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn add_long(
        &mut self,
        label: &str,
        units: &str,
        min: i32,
        max: i32,
        coarse: i32,
        fine: i32,
        value: Option<&'a Cell<i32>>,
    ) -> Result<NodeId, MenuError> {
        let steps = LongSteps::or_defaults(coarse, fine, self.config.long_steps);
        let editor = LongValue::new(units, min, max, steps, value);
        self.push(label, NodeKind::Long(editor))
    }

    /// Add a float editor using the configured steps
    pub fn add_float(
        &mut self,
        label: &str,
        units: &str,
        min: f32,
        max: f32,
        value: Option<&'a Cell<f32>>,
    ) -> Result<NodeId, MenuError> {
        let steps = self.config.float_steps;
        self.add_float_with_steps(label, units, min, max, steps, value)
    }

    /// Add a float editor with explicit steps
    pub fn add_float_with_steps(
        &mut self,
        label: &str,
        units: &str,
        min: f32,
        max: f32,
        steps: FloatSteps,
        value: Option<&'a Cell<f32>>,
    ) -> Result<NodeId, MenuError> {
        let editor = FloatValue::new(units, min, max, steps, value);
        self.push(label, NodeKind::Float(editor))
    }

    /// Add a full-screen list editor
    pub fn add_drop_down(
        &mut self,
        label: &str,
        items: &[&str],
        value: Option<&'a Cell<usize>>,
    ) -> Result<NodeId, MenuError> {
        let editor = DropDownList::new(ListItems::new(items)?, value);
        self.push(label, NodeKind::DropDown(editor))
    }

    /// Add a list editor cycled in place within its container row
    pub fn add_rotary_list(
        &mut self,
        label: &str,
        items: &[&str],
        value: Option<&'a Cell<usize>>,
    ) -> Result<NodeId, MenuError> {
        let editor = RotaryList::new(ListItems::new(items)?, value);
        self.push(label, NodeKind::Rotary(editor))
    }

    // --- Start-up ---

    /// Wire the display and both encoders
    ///
    /// Stays uninitialised if a handle is missing, either the declared
    /// geometry or the display's reported size is smaller than 16x2, or the
    /// display fails to set up. Returns the encoder pair
    /// funnelled into one event stream, to be drained with [`Self::poll`].
    pub fn begin<A: RotaryEncoder, B: RotaryEncoder>(
        &mut self,
        geometry: Geometry,
        display: Option<D>,
        encoder_a: Option<A>,
        encoder_b: Option<B>,
    ) -> Option<DualEncoder<A, B>> {
        if self.initialised {
            warn!("Menu system already initialised");
            return None;
        }
        let (Some(mut display), Some(a), Some(b)) = (display, encoder_a, encoder_b) else {
            warn!("Display or encoder missing, menu not initialised");
            return None;
        };
        if !geometry.fits_viewport() {
            warn!("Display {}x{} smaller than 16x2", geometry.cols, geometry.rows);
            return None;
        }
        let (cols, rows) = display.dimensions();
        if !Geometry::new(cols, rows).fits_viewport() {
            warn!("Display reports {}x{}, smaller than 16x2", cols, rows);
            return None;
        }

        let setup = display
            .init()
            .and_then(|_| register_glyphs(&mut display))
            .and_then(|_| display.set_cursor(0, 0));
        if let Err(e) = setup {
            warn!("Display setup failed: {}", e);
            return None;
        }

        self.display = Some(display);
        self.initialised = true;
        debug!("Menu system initialised, {} nodes", self.nodes.len());
        Some(DualEncoder::new(a, b))
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Give focus to the root node
    pub fn start(&mut self, root: NodeId) {
        self.take_focus(root);
    }

    // --- Queries ---

    pub fn focused(&self) -> Option<NodeId> {
        self.focus
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<'a, D>> {
        self.nodes.get(id.index())
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::label)
    }

    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::previous)
    }

    pub fn node_type(&self, id: NodeId) -> Option<NodeType> {
        self.node(id).map(Node::node_type)
    }

    /// Selection index of a container
    pub fn selection(&self, id: NodeId) -> Option<i16> {
        match &self.node(id)?.kind {
            NodeKind::Container(container) => Some(container.selected()),
            _ => None,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    /// Display sink, for action callbacks drawing their own screen
    pub fn display_mut(&mut self) -> Option<&mut D> {
        self.display.as_mut()
    }

    // --- Node contract ---

    /// Draw a node's one-line summary on `row`
    pub fn display_node(&mut self, id: NodeId, row: u8, selected: bool) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        if let NodeKind::Rotary(list) = &mut node.kind {
            list.place(row, selected);
            self.display_value(id);
            return;
        }
        let trailer = if selected {
            node.node_type().indicator()
        } else {
            ' '
        };
        let line = Line::row(marker(selected), node.label(), trailer);
        self.write_line(0, row, &line);
    }

    /// Draw a node's value region
    pub fn display_value(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id.index()) else {
            return;
        };
        match &node.kind {
            NodeKind::Container(_) => self.display_container(id),
            NodeKind::Action(_) => {}
            NodeKind::Bool(editor) => {
                if let Some(line) = editor.render() {
                    self.write_str(15, 0, RETURN_GLYPH);
                    self.write_line(0, 1, &line);
                }
            }
            NodeKind::Long(editor) => {
                if let Some(line) = editor.render() {
                    self.write_line(0, 1, &line);
                }
            }
            NodeKind::Float(editor) => {
                if let Some(line) = editor.render() {
                    self.write_line(0, 1, &line);
                }
            }
            NodeKind::DropDown(editor) => {
                if let Some(line) = editor.render() {
                    self.write_line(0, 1, &line);
                }
            }
            NodeKind::Rotary(list) => {
                if let Some((row, line)) = list.render() {
                    self.write_line(0, row, &line);
                }
            }
        }
    }

    /// Container viewport: the window trails the selection by one row
    fn display_container(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        let previous = node.previous;
        let NodeKind::Container(container) = &mut node.kind else {
            return;
        };
        let window = container.window(previous.is_some());
        let children: Vec<NodeId, MAX_CHILDREN> =
            Vec::from_slice(container.children()).unwrap_or_default();

        match window {
            Window::ReturnRow | Window::Header => {
                let header = {
                    let parent = previous.and_then(|p| self.label(p));
                    match (parent, window) {
                        (Some(parent), Window::ReturnRow) => Line::from_fmt(format_args!(
                            "{}{:<14}{}",
                            SELECTION_MARKER,
                            parent,
                            glyph::RETURN
                        )),
                        (Some(parent), _) => Line::from_fmt(format_args!(" {:<15}", parent)),
                        (None, _) => {
                            let own = self.label(id).unwrap_or_default();
                            Line::from_fmt(format_args!("{:<16}", own))
                        }
                    }
                };
                self.write_line(0, 0, &header);
                if let Some(&child) = children.first() {
                    self.display_node(child, 1, window == Window::Header);
                }
            }
            Window::Trailing { first } => {
                if let Some(&above) = children.get(first) {
                    self.display_node(above, 0, false);
                }
                if let Some(&selected) = children.get(first + 1) {
                    self.display_node(selected, 1, true);
                }
            }
        }
    }

    /// Move focus to `id`, remembering the caller as its previous node
    pub fn take_focus(&mut self, id: NodeId) {
        if !self.ready() {
            return;
        }
        let caller = self.focus;
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        if caller != Some(id) {
            node.previous = caller;
        }
        self.focus = Some(id);
        debug!("Focus -> {}", id);

        match &mut node.kind {
            NodeKind::Container(container) => {
                container.reset();
                self.clear_screen();
                self.display_value(id);
            }
            NodeKind::Rotary(_) => {
                // Stay in the container's row; the press only forces a redraw
                self.handle_input(id, InputEvent::pressed(Source::A, FORCE_REDRAW_PAYLOAD));
            }
            NodeKind::Action(action) => {
                let on_focus = action.on_focus;
                on_focus(self, id, InputEvent::pressed(Source::A, 0), None);
            }
            NodeKind::Bool(_) | NodeKind::DropDown(_) => {
                self.show_editor(id);
                self.write_str(15, 0, RETURN_GLYPH);
            }
            NodeKind::Long(_) | NodeKind::Float(_) => self.show_editor(id),
        }
    }

    /// Full-screen editor: label on row 0, value on row 1
    fn show_editor(&mut self, id: NodeId) {
        self.clear_screen();
        if let Some(label) = self.node(id).map(|node| node.label.clone()) {
            self.write_str(0, 0, label.as_str());
        }
        self.display_value(id);
    }

    /// Hand focus back to the node that gave it; no-op for the root
    pub fn return_focus(&mut self, id: NodeId, event: InputEvent) {
        if !self.ready() {
            return;
        }
        match self.previous(id) {
            Some(previous) => self.retake_focus(previous, id, event),
            None => trace!("{} has no previous node", id),
        }
    }

    /// Focus comes back to `id` from `returning`
    pub fn retake_focus(&mut self, id: NodeId, returning: NodeId, event: InputEvent) {
        if !self.ready() {
            return;
        }
        let Some(node) = self.nodes.get(id.index()) else {
            return;
        };
        self.focus = Some(id);
        debug!("Focus <- {} from {}", id, returning);

        match &node.kind {
            NodeKind::Action(action) => {
                let on_focus = action.on_focus;
                on_focus(self, id, event, Some(returning));
            }
            NodeKind::Container(_) => {
                self.display_value(id);
                // The turn that ended a child's edit also moves the selection
                if event.is_turn() {
                    self.handle_input(id, event);
                }
            }
            _ => self.display_value(id),
        }
    }

    /// Apply an event to a node
    pub fn handle_input(&mut self, id: NodeId, event: InputEvent) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        let has_parent = node.previous.is_some();

        let transition = match &mut node.kind {
            NodeKind::Container(container) => {
                if event.is_press() {
                    match container.selected_child() {
                        Some(child) => Transition::Focus(child),
                        None if container.selected() == -1 => Transition::Return,
                        None => Transition::Nothing,
                    }
                } else if container.turn(event.is_forward(), has_parent) {
                    Transition::Redraw
                } else {
                    Transition::Nothing
                }
            }
            NodeKind::Bool(editor) => edit(event, |e| editor.turn(e)),
            NodeKind::Long(editor) => edit(event, |e| editor.turn(e)),
            NodeKind::Float(editor) => edit(event, |e| editor.turn(e)),
            NodeKind::DropDown(editor) => edit(event, |e| editor.turn(e)),
            NodeKind::Rotary(list) => {
                if event.is_turn() {
                    Transition::Return
                } else if list.advance() {
                    Transition::Redraw
                } else {
                    Transition::Nothing
                }
            }
            NodeKind::Action(action) => match action.on_input {
                Some(on_input) => Transition::Custom(on_input),
                None if event.is_press() => Transition::Return,
                None => Transition::Nothing,
            },
        };

        match transition {
            Transition::Nothing => {}
            Transition::Redraw => self.display_value(id),
            Transition::Return => self.return_focus(id, event),
            Transition::Focus(child) => self.take_focus(child),
            Transition::Custom(on_input) => on_input(self, id, event),
        }
    }

    // --- Event dispatch ---

    /// Route one encoder event to the focused node
    pub fn dispatch(&mut self, event: InputEvent) {
        if !self.initialised {
            warn!("Menu not initialised, dropping {}", event);
            return;
        }
        debug!("Encoder {} {} ({})", event.source, event.kind, event.value);
        match self.focus {
            Some(id) => self.handle_input(id, event),
            None => trace!("No focused node"),
        }
    }

    /// Dispatch every pending encoder event; returns how many were handled
    pub fn poll<A: RotaryEncoder, B: RotaryEncoder>(&mut self, encoders: &mut DualEncoder<A, B>) -> usize {
        let mut handled = 0;
        while let Some(event) = encoders.next_event() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    /// Wait for one event from either queue and dispatch it
    pub async fn next<M: RawMutex, const N: usize>(&mut self, a: &EncoderQueue<M, N>, b: &EncoderQueue<M, N>) {
        let event = wait_event(a, b).await;
        self.dispatch(event);
    }

    /// Serve both encoder queues forever
    pub async fn run<M: RawMutex, const N: usize>(&mut self, a: &EncoderQueue<M, N>, b: &EncoderQueue<M, N>) {
        loop {
            self.next(a, b).await;
        }
    }

    // --- Display helpers ---

    fn ready(&self) -> bool {
        if !self.initialised {
            warn!("Menu not initialised");
        }
        self.initialised
    }

    fn clear_screen(&mut self) {
        if let Some(display) = self.display.as_mut() {
            if let Err(e) = display.clear().and_then(|_| display.set_cursor(0, 0)) {
                warn!("Display clear failed: {}", e);
            }
        }
    }

    fn write_line(&mut self, col: u8, row: u8, line: &Line) {
        self.write_str(col, row, line.as_str());
    }

    fn write_str(&mut self, col: u8, row: u8, text: &str) {
        if let Some(display) = self.display.as_mut() {
            if let Err(e) = display.set_cursor(col, row).and_then(|_| display.print(text)) {
                warn!("Display write failed: {}", e);
            }
        }
    }
}

/// Return glyph as printable text
const RETURN_GLYPH: &str = "\u{1}";

/// Shared editor input rule: press exits, turn edits
fn edit<D>(event: InputEvent, turn: impl FnOnce(InputEvent) -> bool) -> Transition<D> {
    if event.is_press() {
        Transition::Return
    } else if turn(event) {
        Transition::Redraw
    } else {
        Transition::Nothing
    }
}
