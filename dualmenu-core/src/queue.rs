//! Interrupt-fed encoder queues
//!
//! For encoders that raise real hardware interrupts. The interrupt handlers
//! only enqueue; one loop drains the queues and dispatches, so the menu is
//! never re-entered while a dispatch is running.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use crate::input::{EncoderAction, InputEvent, RotaryEncoder, Source};

/// Default queue depth per encoder
pub const ENCODER_QUEUE_SIZE: usize = 8;

/// Pending actions from one encoder
///
/// `on_turned` and `on_pressed` are the interrupt-side callbacks. Use a
/// `CriticalSectionRawMutex` when they run in interrupt context.
pub struct EncoderQueue<M: RawMutex, const N: usize = ENCODER_QUEUE_SIZE> {
    channel: Channel<M, EncoderAction, N>,
}

impl<M: RawMutex, const N: usize> Default for EncoderQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> EncoderQueue<M, N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Rotation callback
    ///
    /// Returns false if the queue was full and the step was dropped.
    pub fn on_turned(&self, delta: i32) -> bool {
        self.push(EncoderAction::Turned(delta))
    }

    /// Press callback
    ///
    /// Returns false if the queue was full and the press was dropped.
    pub fn on_pressed(&self, payload: u32) -> bool {
        self.push(EncoderAction::Pressed(payload))
    }

    fn push(&self, action: EncoderAction) -> bool {
        if self.channel.try_send(action).is_err() {
            warn!("Encoder queue full, dropping {}", action);
            return false;
        }
        true
    }

    /// Take the oldest pending action
    pub fn try_take(&self) -> Option<EncoderAction> {
        self.channel.try_receive().ok()
    }

    /// Wait for the next action
    pub async fn take(&self) -> EncoderAction {
        self.channel.receive().await
    }

    /// Number of pending actions
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl<M: RawMutex, const N: usize> RotaryEncoder for &EncoderQueue<M, N> {
    fn poll(&mut self) -> Option<EncoderAction> {
        self.try_take()
    }
}

/// Wait for the first event from either encoder queue
pub async fn wait_event<M: RawMutex, const N: usize>(
    a: &EncoderQueue<M, N>,
    b: &EncoderQueue<M, N>,
) -> InputEvent {
    match select(a.take(), b.take()).await {
        Either::First(action) => action.into_event(Source::A),
        Either::Second(action) => action.into_event(Source::B),
    }
}
