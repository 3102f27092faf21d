//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous pipeline pass per display frame
//! - Timestamp sampled once per frame by the caller
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod entity;
pub mod geom;
pub mod state;
pub mod tick;

pub use entity::{Entity, EntityId, EntityKind, EntityStore};
pub use geom::Aabb;
pub use state::{GameState, Outcome};
pub use tick::{FrameInput, PointerEvent, tick};
