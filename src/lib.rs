//! Gridfire - a lockstep-formation arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, update systems, round state)
//!
//! Rendering, raw input capture, and on-screen UI are external collaborators:
//! the embedding frame driver buffers pointer events, feeds them into
//! [`sim::tick`] once per display frame together with a timestamp sampled
//! once for that frame, and reads the entity store back for drawing.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions (pixels, origin top-left)
    pub const PLAYFIELD_WIDTH: f32 = 360.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    /// The player sits this far above the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 50.0;

    /// Enemy grid defaults
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    pub const ENEMY_ROWS: u32 = 2;
    pub const ENEMY_COLS: u32 = 5;
    /// Spacing between grid cells
    pub const ENEMY_GAP: f32 = 10.0;
    /// Top-left corner of the initial formation
    pub const FORMATION_ORIGIN_X: f32 = 50.0;
    pub const FORMATION_ORIGIN_Y: f32 = 50.0;
    /// Horizontal travel per frame
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Vertical step applied to the whole formation on an edge hit
    pub const FORMATION_DROP: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    /// Upward travel per frame
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Explosion lifetime in seconds
    pub const EXPLOSION_DURATION: f64 = 0.5;
    /// Enemies whose bottom edge reaches this line end the round
    pub const DEFENSE_LINE_Y: f32 = PLAYFIELD_HEIGHT;
}
