//! Encoder input events
//!
//! Two encoders, each producing rotation steps and press pulses. The
//! engine sees every pulse as an [`InputEvent`] tagged with its source.

/// Which encoder produced an event
///
/// Value editors use A for coarse and B for fine steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    A,
    B,
}

/// Kind of encoder event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Knob rotated one detent
    Turned,
    /// Knob pushed
    Pressed,
}

/// Payload of the press synthesised to force a redraw
pub const FORCE_REDRAW_PAYLOAD: u32 = 1000;

/// A routed encoder event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub source: Source,
    pub kind: EventKind,
    /// Rotation step (two's complement) or press payload
    pub value: u32,
}

impl InputEvent {
    /// Rotation by `delta` steps
    pub const fn turned(source: Source, delta: i32) -> Self {
        Self {
            source,
            kind: EventKind::Turned,
            value: delta as u32,
        }
    }

    /// Press carrying an arbitrary payload
    pub const fn pressed(source: Source, payload: u32) -> Self {
        Self {
            source,
            kind: EventKind::Pressed,
            value: payload,
        }
    }

    pub fn is_turn(&self) -> bool {
        self.kind == EventKind::Turned
    }

    pub fn is_press(&self) -> bool {
        self.kind == EventKind::Pressed
    }

    /// Rotation direction: only a value of exactly 1 counts as forward
    pub fn is_forward(&self) -> bool {
        self.value == 1
    }
}

/// What a single encoder reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderAction {
    /// Signed rotation step
    Turned(i32),
    /// Press with payload
    Pressed(u32),
}

impl EncoderAction {
    /// Tag with the encoder it came from
    pub fn into_event(self, source: Source) -> InputEvent {
        match self {
            EncoderAction::Turned(delta) => InputEvent::turned(source, delta),
            EncoderAction::Pressed(payload) => InputEvent::pressed(source, payload),
        }
    }
}

/// Rotary encoder handle
///
/// Implemented by the board's decoder/debounce layer. `poll` returns the
/// next completed detent or press, if any.
pub trait RotaryEncoder {
    fn poll(&mut self) -> Option<EncoderAction>;
}

/// Both encoders funnelled into one serialized event stream
///
/// Encoder A is polled before encoder B each round.
pub struct DualEncoder<A, B> {
    a: A,
    b: B,
    /// Source polled first on the next call
    next: Source,
}

impl<A: RotaryEncoder, B: RotaryEncoder> DualEncoder<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            next: Source::A,
        }
    }

    /// Next event from either encoder
    pub fn next_event(&mut self) -> Option<InputEvent> {
        let order = match self.next {
            Source::A => [Source::A, Source::B],
            Source::B => [Source::B, Source::A],
        };
        for source in order {
            if let Some(action) = self.poll_source(source) {
                // Finish the round before going back to A
                self.next = match source {
                    Source::A => Source::B,
                    Source::B => Source::A,
                };
                return Some(action.into_event(source));
            }
        }
        self.next = Source::A;
        None
    }

    fn poll_source(&mut self, source: Source) -> Option<EncoderAction> {
        match source {
            Source::A => self.a.poll(),
            Source::B => self.b.poll(),
        }
    }
}
