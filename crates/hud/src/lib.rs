//! Payload escort HUD.
//!
//! Tracks the cart of one team from game events and turns that state into
//! layout commands once per display tick:
//! - [`events`] classifies raw game events
//! - [`escort`] holds the last known cart state
//! - [`control_points`] keeps the per-slot control-point markers
//! - [`overlay`] ties them together and samples a [`layout::LayoutFrame`] per tick

pub mod config;
pub mod console;
pub mod control_points;
pub mod escort;
pub mod events;
pub mod layout;
pub mod objective;
pub mod overlay;
pub mod script;
pub mod simulation;
pub mod team;

pub use config::HudConfig;
pub use escort::{CapperStatus, CartSpeed, EscortState, Progress};
pub use events::GameEvent;
pub use layout::{DisplayContext, Element, LayoutCommand, LayoutFrame, TextBinding};
pub use objective::{ObjectiveResource, TrackObjectives, MAX_CONTROL_POINTS};
pub use overlay::EscortOverlay;
pub use team::Team;
