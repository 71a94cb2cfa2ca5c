//! Converts raw platform events into flight commands.
//!
//! The `InputProcessor` owns all transient input state (held keys, queued
//! one-shot commands, pointer and scroll samples) and the key-binding map.
//! Once per frame the engine drains it with
//! [`frame_commands`](InputProcessor::frame_commands).

use std::collections::HashMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::camera::controller::Movement;
use crate::engine::command::FlightCommand;

/// Maps physical key strings to [`FlightCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"ArrowUp"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`FlightCommand`] that can be
/// key-bound (parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Throttle up (held).
    Forward,
    /// Brake / reverse (held).
    Backward,
    /// Yaw left (held).
    Left,
    /// Yaw right (held).
    Right,
    /// Nose up (held).
    PitchUp,
    /// Nose down (held).
    PitchDown,
    /// Bank left (held).
    RollLeft,
    /// Bank right (held).
    RollRight,
    /// Leave the ground.
    TakeOff,
    /// Touch down.
    Land,
    /// Return to the start position.
    Reset,
    /// Swap perspective/orthographic projection.
    ToggleProjection,
}

impl KeyCommandTag {
    /// Movement applied every frame while the key is held, if any.
    #[must_use]
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::Forward => Some(Movement::Forward),
            Self::Backward => Some(Movement::Backward),
            Self::Left => Some(Movement::Left),
            Self::Right => Some(Movement::Right),
            Self::PitchUp => Some(Movement::Up),
            Self::PitchDown => Some(Movement::Down),
            Self::RollLeft => Some(Movement::RollLeft),
            Self::RollRight => Some(Movement::RollRight),
            Self::TakeOff | Self::Land | Self::Reset | Self::ToggleProjection => {
                None
            }
        }
    }

    /// Convert to the corresponding parameterless [`FlightCommand`].
    #[must_use]
    pub fn to_command(self) -> FlightCommand {
        match self {
            Self::Forward => FlightCommand::Move(Movement::Forward),
            Self::Backward => FlightCommand::Move(Movement::Backward),
            Self::Left => FlightCommand::Move(Movement::Left),
            Self::Right => FlightCommand::Move(Movement::Right),
            Self::PitchUp => FlightCommand::Move(Movement::Up),
            Self::PitchDown => FlightCommand::Move(Movement::Down),
            Self::RollLeft => FlightCommand::Move(Movement::RollLeft),
            Self::RollRight => FlightCommand::Move(Movement::RollRight),
            Self::TakeOff => FlightCommand::TakeOff,
            Self::Land => FlightCommand::Land,
            Self::Reset => FlightCommand::Reset,
            Self::ToggleProjection => FlightCommand::ToggleProjection,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyCommandTag::Forward),
            ("KeyS".into(), KeyCommandTag::Backward),
            ("KeyA".into(), KeyCommandTag::Left),
            ("KeyD".into(), KeyCommandTag::Right),
            ("ArrowUp".into(), KeyCommandTag::PitchUp),
            ("ArrowDown".into(), KeyCommandTag::PitchDown),
            ("KeyQ".into(), KeyCommandTag::RollLeft),
            ("KeyE".into(), KeyCommandTag::RollRight),
            ("Space".into(), KeyCommandTag::TakeOff),
            ("KeyL".into(), KeyCommandTag::Land),
            ("KeyR".into(), KeyCommandTag::Reset),
            ("KeyP".into(), KeyCommandTag::ToggleProjection),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command tag for a physical key string.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.get(key).copied()
    }

    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<FlightCommand> {
        self.tag(key).map(KeyCommandTag::to_command)
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Samples raw input into the commands for one frame.
///
/// Held movement keys repeat every frame until released; one-shot keys,
/// pointer, scroll and resize events are queued in arrival order and
/// delivered once.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_key("KeyW", true);
/// input.handle_event(InputEvent::CursorMoved { x, y });
///
/// // Once per frame:
/// for cmd in input.frame_commands() {
///     engine.execute(cmd, dt);
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Key string → command mapping.
    key_bindings: KeyBindings,
    /// Currently held physical keys.
    held_keys: FxHashSet<String>,
    /// One-shot commands waiting for the next frame.
    pending: Vec<FlightCommand>,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Record a key press or release. Auto-repeat presses of an already held
    /// key are ignored. Returns whether the key is bound.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        let Some(tag) = self.key_bindings.tag(key) else {
            return false;
        };

        if !pressed {
            let _ = self.held_keys.remove(key);
            return true;
        }

        let newly_pressed = self.held_keys.insert(key.to_owned());
        if newly_pressed && tag.movement().is_none() {
            self.pending.push(tag.to_command());
        }
        true
    }

    /// Queue the command produced by a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        let command = match event {
            InputEvent::CursorMoved { x, y } => FlightCommand::Look { x, y },
            InputEvent::Scroll { delta } => FlightCommand::Zoom { delta },
            InputEvent::Resized { width, height } => {
                FlightCommand::Resize { width, height }
            }
            InputEvent::FocusLost => {
                self.release_all();
                return;
            }
        };
        self.pending.push(command);
    }

    /// Release every held key without emitting anything.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
    }

    /// Movements for the currently held keys, in [`Movement`] order.
    #[must_use]
    pub fn held_movements(&self) -> Vec<Movement> {
        let mut movements: Vec<Movement> = self
            .held_keys
            .iter()
            .filter_map(|key| self.key_bindings.tag(key))
            .filter_map(KeyCommandTag::movement)
            .collect();
        movements.sort_unstable();
        movements.dedup();
        movements
    }

    /// Drain this frame's commands: queued events first, then one
    /// [`FlightCommand::Move`] per held movement.
    pub fn frame_commands(&mut self) -> Vec<FlightCommand> {
        let mut commands = std::mem::take(&mut self.pending);
        commands.extend(
            self.held_movements().into_iter().map(FlightCommand::Move),
        );
        commands
    }
}
