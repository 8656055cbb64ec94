//! Pointer event model
//!
//! The engine never installs platform listeners itself; the host routes its
//! pointer events through these types (dismissal, hover tracking).

/// Opaque identifier for a host view node (widget, DOM element, ...)
pub type NodeId = u64;

/// Event type identifier
pub type EventType = u32;

/// Pointer event types the engine reacts to
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 3;
    pub const POINTER_LEAVE: EventType = 4;
}

/// A pointer event with its host target
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// The node the event occurred on
    pub target: NodeId,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Copy, Debug, Default)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    #[default]
    None,
}

impl Event {
    /// Create a pointer-down event on `target`
    pub fn pointer_down(target: NodeId) -> Self {
        Self {
            event_type: event_types::POINTER_DOWN,
            target,
            data: EventData::None,
            propagation_stopped: false,
        }
    }

    /// Attach pointer coordinates
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.data = EventData::Pointer { x, y, button: 0 };
        self
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
