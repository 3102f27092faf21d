//! Entities and the per-round entity store
//!
//! The store is the authoritative id -> entity mapping for the current
//! frame. It has one exclusive owner (the frame loop) and is mutated in
//! place by each system in sequence, so no locking is ever needed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;

/// Unique per-round entity identifier
pub type EntityId = u32;

/// What an entity is, with kind-specific simulation state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's ship; exactly one while the round is in progress
    Player,
    /// A formation enemy; `direction` is the horizontal travel sign (-1 or +1)
    Enemy { direction: f32 },
    /// A player shot travelling up the playfield
    Projectile,
    /// A spent enemy; removed once the frame timestamp passes `expires_at`
    Explosion { expires_at: f64 },
}

impl EntityKind {
    #[inline]
    pub fn is_enemy(&self) -> bool {
        matches!(self, EntityKind::Enemy { .. })
    }

    #[inline]
    pub fn is_projectile(&self) -> bool {
        matches!(self, EntityKind::Projectile)
    }

    #[inline]
    pub fn is_explosion(&self) -> bool {
        matches!(self, EntityKind::Explosion { .. })
    }
}

/// One simulated object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Entity {
    /// Bounding box for collision and boundary tests
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Authoritative entity container for the current round
///
/// Ids come from a monotonic counter owned by the store and are never
/// reassigned while the original referent exists. Entities stay in spawn
/// (= id) order, so iteration is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id: EntityId,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a fresh id and insert a new entity under it
    pub fn spawn(&mut self, kind: EntityKind, pos: Vec2, size: Vec2) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity { id, kind, pos, size });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Remove by id; an absent id is ignored (the entity may already have
    /// been removed earlier in the same pass)
    pub fn remove(&mut self, id: EntityId) {
        self.entities.retain(|e| e.id != id);
    }

    /// Keep only entities matching the predicate
    pub fn retain<F: FnMut(&Entity) -> bool>(&mut self, f: F) {
        self.entities.retain(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The player entity, if one exists
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind == EntityKind::Player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.kind == EntityKind::Player)
    }

    /// Number of live enemies
    pub fn enemy_count(&self) -> usize {
        self.entities.iter().filter(|e| e.kind.is_enemy()).count()
    }

    /// Whether any explosion is still burning out
    pub fn has_explosions(&self) -> bool {
        self.entities.iter().any(|e| e.kind.is_explosion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = EntityStore::new();
        let a = store.spawn(EntityKind::Player, Vec2::ZERO, Vec2::splat(30.0));
        let b = store.spawn(EntityKind::Projectile, Vec2::ZERO, Vec2::splat(5.0));
        assert!(b > a);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut store = EntityStore::new();
        let a = store.spawn(EntityKind::Projectile, Vec2::ZERO, Vec2::splat(5.0));
        let b = store.spawn(EntityKind::Projectile, Vec2::ZERO, Vec2::splat(5.0));
        store.remove(a);
        let c = store.spawn(EntityKind::Projectile, Vec2::ZERO, Vec2::splat(5.0));
        assert!(c > b);
        assert!(store.get(a).is_none());
        assert!(store.get(c).is_some());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = EntityStore::new();
        store.spawn(EntityKind::Player, Vec2::ZERO, Vec2::splat(30.0));
        store.remove(999);
        assert_eq!(store.len(), 1);
    }
}
