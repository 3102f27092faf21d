//! Round state and initial entity layout
//!
//! Everything the renderer reads after a frame lives here: the entity
//! store, the score, and the round outcome. The whole state is a
//! serializable snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, EntityStore};
use crate::consts::*;

/// Round-level terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub store: EntityStore,
    /// Kills this round; never decreases
    pub score: u32,
    pub outcome: Outcome,
}

impl GameState {
    /// Start a fresh round: the player at the bottom center, enemies in an
    /// `ENEMY_ROWS x ENEMY_COLS` grid marching right.
    pub fn new() -> Self {
        let mut store = EntityStore::new();

        store.spawn(
            EntityKind::Player,
            Vec2::new(
                PLAYFIELD_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                PLAYFIELD_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            Vec2::splat(PLAYER_SIZE),
        );

        for row in 0..ENEMY_ROWS {
            for col in 0..ENEMY_COLS {
                store.spawn(
                    EntityKind::Enemy { direction: 1.0 },
                    Vec2::new(
                        col as f32 * (ENEMY_WIDTH + ENEMY_GAP) + FORMATION_ORIGIN_X,
                        row as f32 * (ENEMY_HEIGHT + ENEMY_GAP) + FORMATION_ORIGIN_Y,
                    ),
                    Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                );
            }
        }

        log::info!(
            "round start: {} enemies in a {}x{} formation",
            store.enemy_count(),
            ENEMY_ROWS,
            ENEMY_COLS
        );

        Self {
            store,
            score: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Discard the current round and rebuild the initial entities
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Entities for the render feed, in stable id order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.store.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();

        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert!(state.store.player().is_some());
        assert_eq!(
            state.store.enemy_count(),
            (ENEMY_ROWS * ENEMY_COLS) as usize
        );

        // First enemy sits at the formation origin
        let first = state
            .store
            .iter()
            .find(|e| e.kind.is_enemy())
            .expect("grid spawned");
        assert_eq!(first.pos, Vec2::new(FORMATION_ORIGIN_X, FORMATION_ORIGIN_Y));
    }

    #[test]
    fn test_reset_restores_initial_round() {
        let mut state = GameState::new();
        state.score = 7;
        state.outcome = Outcome::Lost;
        state.store.retain(|e| e.kind == EntityKind::Player);

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(
            state.store.enemy_count(),
            (ENEMY_ROWS * ENEMY_COLS) as usize
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored.score, state.score);
        assert_eq!(restored.outcome, state.outcome);
        assert_eq!(restored.store.len(), state.store.len());
        for (a, b) in restored.store.iter().zip(state.store.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.size, b.size);
        }
    }
}
