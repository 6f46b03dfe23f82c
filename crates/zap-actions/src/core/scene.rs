use slotmap::SlotMap;
use crate::api::types::ActorId;
use crate::components::actor::Actor;
use crate::core::target::{Target, TargetStore};

/// Actor storage backed by a generational arena.
/// Stale handles resolve to `None`, which is how actions detect dead targets.
pub struct Scene {
    actors: SlotMap<ActorId, Actor>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_capacity_and_key(256),
        }
    }

    /// Create a scene with a specific actor capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actors: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Add an actor to the scene and return its handle.
    pub fn spawn(&mut self, actor: Actor) -> ActorId {
        self.actors.insert(actor)
    }

    /// Remove an actor by handle. Returns the removed actor if it was alive.
    pub fn despawn(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(id)
    }

    /// Whether the handle still refers to a live actor.
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(id)
    }

    /// Get a reference to an actor by handle.
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Get a mutable reference to an actor by handle.
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// Iterate over all actors.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter()
    }

    /// Find the first actor with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<ActorId> {
        self.actors
            .iter()
            .find(|(_, a)| a.tag == tag)
            .map(|(id, _)| id)
    }

    /// Number of actors in the scene.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Clear all actors. Every outstanding handle goes stale.
    pub fn clear(&mut self) {
        self.actors.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetStore for Scene {
    fn target_mut(&mut self, id: ActorId) -> Option<&mut dyn Target> {
        self.actors.get_mut(id).map(|a| a as &mut dyn Target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new().with_pos(Vec2::new(10.0, 20.0)));
        let a = scene.get(id).unwrap();
        assert_eq!(a.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn despawn_makes_handle_stale() {
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());
        assert_eq!(scene.len(), 1);
        scene.despawn(id);
        assert!(!scene.contains(id));
        assert!(scene.target_mut(id).is_none());

        // A new actor reusing the slot must not revive the old handle.
        let fresh = scene.spawn(Actor::new());
        assert_ne!(fresh, id);
        assert!(scene.get(id).is_none());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        let hero = scene.spawn(Actor::new().with_tag("hero"));
        scene.spawn(Actor::new().with_tag("enemy"));
        assert_eq!(scene.find_by_tag("hero"), Some(hero));
        assert_eq!(scene.find_by_tag("boss"), None);
    }
}
