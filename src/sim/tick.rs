//! Per-frame simulation pipeline
//!
//! One synchronous pass over the ordered update systems per display frame.
//! The caller samples a monotonic clock once per frame and hands the same
//! timestamp to every timing decision, so all entities agree on "now".

use glam::Vec2;

use super::entity::{EntityId, EntityKind};
use super::state::{GameState, Outcome};
use crate::consts::*;

/// One buffered pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to an absolute horizontal coordinate
    Move { x: f32 },
    /// Fire button press
    Press,
}

/// Input batch for a single frame (empty is the common case)
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<PointerEvent>,
}

impl FrameInput {
    /// Last move coordinate of the frame, if any (last one wins)
    fn move_target(&self) -> Option<f32> {
        self.events.iter().rev().find_map(|e| match e {
            PointerEvent::Move { x } => Some(*x),
            _ => None,
        })
    }

    fn press_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PointerEvent::Press))
            .count()
    }
}

/// Advance the round by one frame
///
/// `now` is a monotonic timestamp in seconds, sampled once by the caller.
/// A finished round is inert until [`GameState::reset`].
pub fn tick(state: &mut GameState, input: &FrameInput, now: f64) {
    if state.outcome != Outcome::InProgress {
        return;
    }

    move_player(state, input);
    advance_formation(state);

    // Loss takes precedence over everything later in the frame, so a frame
    // where the last enemy both crosses the line and would be shot down
    // resolves deterministically as a loss.
    if formation_breached(state) {
        state.outcome = Outcome::Lost;
        log::info!("defense line breached, round lost at score {}", state.score);
        return;
    }

    fire_projectiles(state, input);
    advance_projectiles(state);
    resolve_collisions(state, now);
    expire_explosions(state, now);
    evaluate_win(state);
}

/// Snap the player to the last pointer position of the frame, clamped to
/// the playfield. No player means no-op.
fn move_player(state: &mut GameState, input: &FrameInput) {
    let Some(x) = input.move_target() else { return };
    let Some(player) = state.store.player_mut() else {
        return;
    };
    let max_x = PLAYFIELD_WIDTH - player.size.x;
    player.pos.x = (x - player.size.x / 2.0).clamp(0.0, max_x);
}

/// March every enemy sideways in lockstep. If any enemy's leading edge
/// reached a playfield boundary this frame (post-move positions), the whole
/// formation drops and reverses - exactly once, no matter how many enemies
/// touched an edge.
fn advance_formation(state: &mut GameState) {
    let mut edge_hit = false;
    for e in state.store.iter_mut() {
        if let EntityKind::Enemy { direction } = e.kind {
            e.pos.x += direction * ENEMY_SPEED;
            if e.pos.x + e.size.x >= PLAYFIELD_WIDTH || e.pos.x <= 0.0 {
                edge_hit = true;
            }
        }
    }

    if edge_hit {
        for e in state.store.iter_mut() {
            if let EntityKind::Enemy { ref mut direction } = e.kind {
                e.pos.y += FORMATION_DROP;
                *direction = -*direction;
            }
        }
    }
}

/// Has any enemy's bottom edge reached the defense line?
fn formation_breached(state: &GameState) -> bool {
    state
        .store
        .iter()
        .any(|e| e.kind.is_enemy() && e.pos.y + e.size.y >= DEFENSE_LINE_Y)
}

/// One projectile per press event, centered on the player and just above
/// it. There is no cooldown: every press fires.
fn fire_projectiles(state: &mut GameState, input: &FrameInput) {
    let presses = input.press_count();
    if presses == 0 {
        return;
    }
    let Some(player) = state.store.player() else {
        return;
    };
    let muzzle = Vec2::new(
        player.pos.x + player.size.x / 2.0 - PROJECTILE_WIDTH / 2.0,
        player.pos.y - PROJECTILE_HEIGHT,
    );
    for _ in 0..presses {
        state.store.spawn(
            EntityKind::Projectile,
            muzzle,
            Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        );
    }
}

/// Move projectiles up, then drop any that left the top of the playfield
/// before collision testing sees them
fn advance_projectiles(state: &mut GameState) {
    for e in state.store.iter_mut() {
        if e.kind.is_projectile() {
            e.pos.y -= PROJECTILE_SPEED;
        }
    }
    state
        .store
        .retain(|e| !e.kind.is_projectile() || e.pos.y >= 0.0);
}

/// The first overlapping enemy consumes the projectile: the enemy becomes a
/// timed explosion under its own id, the projectile is removed, and the
/// score advances. A projectile is consumed by at most one enemy.
fn resolve_collisions(state: &mut GameState, now: f64) {
    let projectile_ids: Vec<EntityId> = state
        .store
        .iter()
        .filter(|e| e.kind.is_projectile())
        .map(|e| e.id)
        .collect();

    for pid in projectile_ids {
        // Tolerate entities removed earlier in this pass
        let Some(projectile) = state.store.get(pid) else {
            continue;
        };
        let shot = projectile.aabb();

        let struck = state
            .store
            .iter()
            .find(|e| e.kind.is_enemy() && e.aabb().overlaps(&shot))
            .map(|e| e.id);

        if let Some(eid) = struck {
            if let Some(enemy) = state.store.get_mut(eid) {
                enemy.kind = EntityKind::Explosion {
                    expires_at: now + EXPLOSION_DURATION,
                };
            }
            state.store.remove(pid);
            state.score += 1;
            log::debug!("enemy {eid} destroyed, score {}", state.score);
        }
    }
}

/// Drop explosions whose timer elapsed relative to this frame's timestamp
fn expire_explosions(state: &mut GameState, now: f64) {
    state.store.retain(|e| match e.kind {
        EntityKind::Explosion { expires_at } => now <= expires_at,
        _ => true,
    });
}

/// The round is won once no enemies remain, the last explosion has burned
/// out, and the player is still standing. Waiting for explosions lets the
/// final kill finish its animation before the sim goes inert.
fn evaluate_win(state: &mut GameState) {
    if state.store.enemy_count() == 0
        && !state.store.has_explosions()
        && state.store.player().is_some()
    {
        state.outcome = Outcome::Won;
        log::info!("formation cleared, round won at score {}", state.score);
    }
}
