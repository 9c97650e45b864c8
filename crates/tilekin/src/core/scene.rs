use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec.
///
/// Iteration order is spawn order and stays stable across despawns; the
/// entity-entity collision sweep depends on it.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        Some(self.entities.remove(idx))
    }

    /// Position of an entity in iteration order.
    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Entity at position `idx` in iteration order.
    pub fn at(&self, idx: usize) -> Option<&Entity> {
        self.entities.get(idx)
    }

    /// Two distinct entities borrowed mutably at once, by index.
    /// Returns None if `a == b` or either index is out of range.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Entity, &mut Entity)> {
        if a == b || a >= self.entities.len() || b >= self.entities.len() {
            return None;
        }
        if a < b {
            let (lo, hi) = self.entities.split_at_mut(b);
            Some((&mut lo[a], &mut hi[0]))
        } else {
            let (lo, hi) = self.entities.split_at_mut(a);
            Some((&mut hi[0], &mut lo[b]))
        }
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Indices of entities matching `filter`, in iteration order.
    pub fn indices_where(&self, filter: impl Fn(&Entity) -> bool) -> Vec<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| filter(e))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::transform::Transform;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_transform(Transform::new(10.0, 20.0, 16.0, 16.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.transform.unwrap().x, 10.0);
    }

    #[test]
    fn despawn_keeps_order() {
        let mut scene = Scene::new();
        for i in 1..=4 {
            scene.spawn(Entity::new(EntityId(i)));
        }
        scene.despawn(EntityId(2));
        let ids: Vec<_> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(scene.despawn(EntityId(2)).is_none());
    }

    #[test]
    fn pair_mut_returns_disjoint_borrows() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        scene.spawn(Entity::new(EntityId(2)));
        let (a, b) = scene.pair_mut(1, 0).unwrap();
        assert_eq!(a.id, EntityId(2));
        assert_eq!(b.id, EntityId(1));
        assert!(scene.pair_mut(0, 0).is_none());
        assert!(scene.pair_mut(0, 5).is_none());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_transform(Transform::new(0.0, 0.0, 8.0, 8.0)));
        scene.get_mut(EntityId(1)).unwrap().transform.as_mut().unwrap().x = 5.0;
        assert_eq!(scene.get(EntityId(1)).unwrap().transform.unwrap().x, 5.0);
        assert!(scene.get_mut(EntityId(2)).is_none());
        assert_eq!(scene.len(), 1);
        assert!(!scene.is_empty());
    }

    #[test]
    fn indices_where_filters_in_order() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).solid());
        scene.spawn(Entity::new(EntityId(2)));
        scene.spawn(Entity::new(EntityId(3)).solid());
        assert_eq!(scene.indices_where(|e| e.solid), vec![0, 2]);
    }
}
