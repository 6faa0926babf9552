//! Board-agnostic menu engine for two-encoder character displays
//!
//! This crate contains all menu logic that does not depend on a specific
//! LCD or encoder driver:
//!
//! - Menu node variants (container, action, value editors, in-row list)
//! - Focus router dispatching encoder events to the focused node
//! - Two-row viewport windowing for containers
//! - Encoder event funnels (polled and interrupt-queued)
//! - Configuration type definitions
//!
//! Nodes live in an arena owned by [`MenuSystem`] for its whole lifetime
//! and refer to each other by [`NodeId`]. The focus stack is implicit: each
//! node remembers the node that held focus before it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod format;
pub mod input;
pub mod node;
pub mod queue;
pub mod router;

pub use config::{FloatSteps, Geometry, LongSteps, MenuConfig};
pub use format::{Label, Line};
pub use input::{DualEncoder, EncoderAction, EventKind, InputEvent, RotaryEncoder, Source};
pub use node::{NodeId, NodeType};
pub use queue::{wait_event, EncoderQueue};
pub use router::{ActionFn, InputFn, MenuError, MenuSystem};
