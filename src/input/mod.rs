//! Input handling: platform-agnostic events, key bindings, and the input
//! processor that samples held keys into per-frame flight commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events and key state into flight commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
