//! Entity registry — the authoritative live-object set.
//!
//! Five ordered collections plus the optional player and the static city.
//! Every insertion and removal goes through here so the renderer sees a
//! matching `Spawned`/`Despawned` event for each entity.

use skyraid_core::components::*;
use skyraid_core::enums::{EntityKind, RemovalCause};
use skyraid_core::events::SimEvent;
use skyraid_core::types::EntityId;

/// All live entities of one session.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    pub player: Option<Player>,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub smoke: Vec<Smoke>,
    pub explosions: Vec<ExplosionParticle>,
    pub buildings: Vec<Building>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Drop every entity, announcing each removal.
    pub fn clear(&mut self, events: &mut Vec<SimEvent>) {
        if let Some(player) = self.player.take() {
            despawned(events, player.id, EntityKind::Player, RemovalCause::Reset);
        }
        drain_all(&mut self.enemies, events, EntityKind::Enemy, |e| e.id);
        drain_all(&mut self.player_bullets, events, EntityKind::PlayerBullet, |b| b.id);
        drain_all(&mut self.enemy_bullets, events, EntityKind::EnemyBullet, |b| b.id);
        drain_all(&mut self.smoke, events, EntityKind::Smoke, |s| s.id);
        drain_all(&mut self.explosions, events, EntityKind::ExplosionParticle, |p| p.id);
        drain_all(&mut self.buildings, events, EntityKind::Building, |b| b.id);
    }

    // --- Insertion ---

    pub fn set_player(&mut self, player: Player, events: &mut Vec<SimEvent>) {
        spawned(events, player.id, EntityKind::Player);
        self.player = Some(player);
    }

    pub fn push_enemy(&mut self, enemy: Enemy, events: &mut Vec<SimEvent>) {
        spawned(events, enemy.id, EntityKind::Enemy);
        self.enemies.push(enemy);
    }

    pub fn push_player_bullet(&mut self, bullet: PlayerBullet, events: &mut Vec<SimEvent>) {
        spawned(events, bullet.id, EntityKind::PlayerBullet);
        self.player_bullets.push(bullet);
    }

    pub fn push_enemy_bullet(&mut self, bullet: EnemyBullet, events: &mut Vec<SimEvent>) {
        spawned(events, bullet.id, EntityKind::EnemyBullet);
        self.enemy_bullets.push(bullet);
    }

    pub fn push_smoke(&mut self, smoke: Smoke, events: &mut Vec<SimEvent>) {
        spawned(events, smoke.id, EntityKind::Smoke);
        self.smoke.push(smoke);
    }

    pub fn push_explosion(&mut self, particle: ExplosionParticle, events: &mut Vec<SimEvent>) {
        spawned(events, particle.id, EntityKind::ExplosionParticle);
        self.explosions.push(particle);
    }

    pub fn push_building(&mut self, building: Building, events: &mut Vec<SimEvent>) {
        spawned(events, building.id, EntityKind::Building);
        self.buildings.push(building);
    }

    // --- Removal ---
    //
    // Removals keep the order of the remaining entities. Callers scanning a
    // collection either walk it in reverse or re-check the index they removed.

    /// Remove the player, returning its last state.
    pub fn take_player(
        &mut self,
        cause: RemovalCause,
        events: &mut Vec<SimEvent>,
    ) -> Option<Player> {
        let player = self.player.take()?;
        despawned(events, player.id, EntityKind::Player, cause);
        Some(player)
    }

    pub fn remove_enemy(
        &mut self,
        index: usize,
        cause: RemovalCause,
        events: &mut Vec<SimEvent>,
    ) -> Enemy {
        let enemy = self.enemies.remove(index);
        despawned(events, enemy.id, EntityKind::Enemy, cause);
        enemy
    }

    pub fn remove_player_bullet(
        &mut self,
        index: usize,
        cause: RemovalCause,
        events: &mut Vec<SimEvent>,
    ) -> PlayerBullet {
        let bullet = self.player_bullets.remove(index);
        despawned(events, bullet.id, EntityKind::PlayerBullet, cause);
        bullet
    }

    pub fn remove_enemy_bullet(
        &mut self,
        index: usize,
        cause: RemovalCause,
        events: &mut Vec<SimEvent>,
    ) -> EnemyBullet {
        let bullet = self.enemy_bullets.remove(index);
        despawned(events, bullet.id, EntityKind::EnemyBullet, cause);
        bullet
    }

    pub fn remove_smoke(&mut self, index: usize, events: &mut Vec<SimEvent>) -> Smoke {
        let smoke = self.smoke.remove(index);
        despawned(events, smoke.id, EntityKind::Smoke, RemovalCause::Decayed);
        smoke
    }

    pub fn remove_explosion(
        &mut self,
        index: usize,
        events: &mut Vec<SimEvent>,
    ) -> ExplosionParticle {
        let particle = self.explosions.remove(index);
        despawned(
            events,
            particle.id,
            EntityKind::ExplosionParticle,
            RemovalCause::Decayed,
        );
        particle
    }

    /// Number of dynamic entities (everything except buildings).
    pub fn dynamic_count(&self) -> usize {
        usize::from(self.player.is_some())
            + self.enemies.len()
            + self.player_bullets.len()
            + self.enemy_bullets.len()
            + self.smoke.len()
            + self.explosions.len()
    }
}

fn spawned(events: &mut Vec<SimEvent>, id: EntityId, kind: EntityKind) {
    events.push(SimEvent::Spawned { id, kind });
}

fn despawned(events: &mut Vec<SimEvent>, id: EntityId, kind: EntityKind, cause: RemovalCause) {
    events.push(SimEvent::Despawned { id, kind, cause });
}

fn drain_all<T>(
    items: &mut Vec<T>,
    events: &mut Vec<SimEvent>,
    kind: EntityKind,
    id_of: impl Fn(&T) -> EntityId,
) {
    for item in items.drain(..) {
        despawned(events, id_of(&item), kind, RemovalCause::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyraid_core::types::{Orientation, Vec3};

    fn enemy(registry: &mut EntityRegistry, z: f32) -> Enemy {
        Enemy {
            id: registry.allocate_id(),
            position: Vec3::new(0.0, 10.0, z),
            yaw: 0.0,
            jitter_phase: 0.0,
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = EntityRegistry::new();
        let a = registry.allocate_id();
        let b = registry.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_keeps_order_and_reports() {
        let mut registry = EntityRegistry::new();
        let mut events = Vec::new();
        for z in [-1.0, -2.0, -3.0] {
            let e = enemy(&mut registry, z);
            registry.push_enemy(e, &mut events);
        }
        assert_eq!(events.len(), 3);

        let removed = registry.remove_enemy(1, RemovalCause::Shot, &mut events);
        assert_eq!(removed.position.z, -2.0);
        let zs: Vec<f32> = registry.enemies.iter().map(|e| e.position.z).collect();
        assert_eq!(zs, vec![-1.0, -3.0]);
        assert_eq!(
            events.last(),
            Some(&SimEvent::Despawned {
                id: removed.id,
                kind: EntityKind::Enemy,
                cause: RemovalCause::Shot,
            })
        );
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut registry = EntityRegistry::new();
        let mut events = Vec::new();
        let player = Player {
            id: registry.allocate_id(),
            position: Vec3::Y,
            orientation: Orientation::default(),
        };
        registry.set_player(player, &mut events);
        let e = enemy(&mut registry, -5.0);
        registry.push_enemy(e, &mut events);
        assert_eq!(registry.dynamic_count(), 2);

        events.clear();
        registry.clear(&mut events);
        assert!(registry.player.is_none());
        assert_eq!(registry.dynamic_count(), 0);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(
            e,
            SimEvent::Despawned {
                cause: RemovalCause::Reset,
                ..
            }
        )));
    }

    #[test]
    fn test_take_player_only_once() {
        let mut registry = EntityRegistry::new();
        let mut events = Vec::new();
        let player = Player {
            id: registry.allocate_id(),
            position: Vec3::Y,
            orientation: Orientation::default(),
        };
        registry.set_player(player, &mut events);
        assert!(registry.take_player(RemovalCause::Ground, &mut events).is_some());
        assert!(registry.take_player(RemovalCause::Ground, &mut events).is_none());
    }
}
