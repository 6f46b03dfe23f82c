// systems/manager.rs
//
// Action runtime: keeps action trees attached to actors and steps them
// once per frame. Completely decoupled from Actor/Scene internals: targets
// are resolved through `TargetStore` on every step.
//
// Usage:
//   let mut actions = ActionManager::new();
//   actions.attach(actor_id, move_to(100.0, 0.0, 0.5, Easing::QuadOut));
//   actions.update(&mut scene, dt);  // Steps every attached tree, retires finished ones

use crate::actions::Action;
use crate::api::types::{ActionId, ActorId};
use crate::config::ActionConfig;
use crate::core::target::TargetStore;
use crate::systems::pool::ActionPool;

#[derive(Debug)]
struct Attached {
    id: ActionId,
    target: ActorId,
    action: Action,
    paused: bool,
}

/// Owns all attached action trees, in attachment order.
#[derive(Debug)]
pub struct ActionManager {
    attached: Vec<Attached>,
    next_id: u32,
    config: ActionConfig,
    pool: ActionPool,
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionManager {
    pub fn new() -> Self {
        Self::with_config(ActionConfig::default())
    }

    /// Build with `config`. An invalid delta cap is logged and ignored.
    pub fn with_config(config: ActionConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("{err}; stepping without a delta cap");
        }
        Self {
            attached: Vec::new(),
            next_id: 0,
            pool: ActionPool::new(config.pool_capacity),
            config,
        }
    }

    pub fn config(&self) -> &ActionConfig {
        &self.config
    }

    /// Attach an action tree to a target. Returns a handle for later control.
    ///
    /// Several trees may share a target; they are stepped in the order they
    /// were attached, so a later tree's writes win within a frame.
    pub fn attach(&mut self, target: ActorId, action: Action) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        log::debug!("attach {:?} ({:?}) to {:?}", id, action.kind(), target);
        self.attached.push(Attached {
            id,
            target,
            action,
            paused: false,
        });
        id
    }

    /// Detach an action by handle. Property values stay as last written.
    pub fn detach(&mut self, id: ActionId) -> Option<Action> {
        let idx = self.attached.iter().position(|a| a.id == id)?;
        let entry = self.attached.remove(idx);
        log::debug!("detach {:?} from {:?}", id, entry.target);
        Some(entry.action)
    }

    /// Detach every action on a target, in attachment order.
    pub fn detach_target(&mut self, target: ActorId) -> Vec<Action> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.attached)
            .into_iter()
            .partition(|a| a.target == target);
        self.attached = kept;
        if !removed.is_empty() {
            log::debug!("detached {} action(s) from {:?}", removed.len(), target);
        }
        removed.into_iter().map(|a| a.action).collect()
    }

    /// Detach every action on a target and return them to the pool.
    pub fn remove_target(&mut self, target: ActorId) -> usize {
        let removed = self.detach_target(target);
        let count = removed.len();
        for action in removed {
            self.pool.release(action);
        }
        count
    }

    /// Step the actions attached to one target.
    ///
    /// Returns the handles that completed during this step. Those actions are
    /// already detached (and pooled, if `pool_completed` is set). A stale
    /// target handle completes every action attached to it.
    pub fn step_all<S>(&mut self, store: &mut S, target: ActorId, dt: f32) -> Vec<ActionId>
    where
        S: TargetStore + ?Sized,
    {
        self.step_where(store, dt, Some(target))
    }

    /// Step every attached action, in attachment order.
    pub fn update<S>(&mut self, store: &mut S, dt: f32) -> Vec<ActionId>
    where
        S: TargetStore + ?Sized,
    {
        self.step_where(store, dt, None)
    }

    fn step_where<S>(&mut self, store: &mut S, dt: f32, only: Option<ActorId>) -> Vec<ActionId>
    where
        S: TargetStore + ?Sized,
    {
        let dt = self.config.clamp_delta(dt);
        let mut completed = Vec::new();

        for entry in self.attached.iter_mut() {
            if entry.paused || only.is_some_and(|t| t != entry.target) {
                continue;
            }

            let target = store.target_mut(entry.target);
            if target.is_none() {
                log::warn!("{:?}: target {:?} is gone, completing", entry.id, entry.target);
            }
            if entry.action.step(target, dt) {
                completed.push(entry.id);
            }
        }

        if !completed.is_empty() {
            self.retire(&completed);
        }
        completed
    }

    fn retire(&mut self, ids: &[ActionId]) {
        let (done, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.attached)
            .into_iter()
            .partition(|a| ids.contains(&a.id));
        self.attached = kept;

        for entry in done {
            log::trace!("{:?} on {:?} complete", entry.id, entry.target);
            if self.config.pool_completed {
                self.pool.release(entry.action);
            }
        }
    }

    /// Reset an attached tree to its not-yet-started state.
    pub fn restart(&mut self, id: ActionId) -> bool {
        match self.get_mut(id) {
            Some(action) => {
                action.restart();
                true
            }
            None => false,
        }
    }

    /// Completion flag of an attached action; `None` once it is detached.
    pub fn is_complete(&self, id: ActionId) -> Option<bool> {
        self.get(id).map(Action::is_complete)
    }

    /// Pause an action. Paused actions are skipped by `step_all`/`update`.
    pub fn pause(&mut self, id: ActionId) {
        if let Some(entry) = self.attached.iter_mut().find(|a| a.id == id) {
            entry.paused = true;
        }
    }

    /// Resume a paused action.
    pub fn resume(&mut self, id: ActionId) {
        if let Some(entry) = self.attached.iter_mut().find(|a| a.id == id) {
            entry.paused = false;
        }
    }

    /// Pause all actions.
    pub fn pause_all(&mut self) {
        for entry in &mut self.attached {
            entry.paused = true;
        }
    }

    /// Resume all actions.
    pub fn resume_all(&mut self) {
        for entry in &mut self.attached {
            entry.paused = false;
        }
    }

    pub fn is_paused(&self, id: ActionId) -> Option<bool> {
        self.attached.iter().find(|a| a.id == id).map(|a| a.paused)
    }

    /// Get an action by handle.
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.attached.iter().find(|a| a.id == id).map(|a| &a.action)
    }

    /// Get an action mutably.
    pub fn get_mut(&mut self, id: ActionId) -> Option<&mut Action> {
        self.attached.iter_mut().find(|a| a.id == id).map(|a| &mut a.action)
    }

    /// The target an action is attached to.
    pub fn target_of(&self, id: ActionId) -> Option<ActorId> {
        self.attached.iter().find(|a| a.id == id).map(|a| a.target)
    }

    /// Actions attached to `target`, in attachment order.
    pub fn actions_for(&self, target: ActorId) -> impl Iterator<Item = (ActionId, &Action)> + '_ {
        self.attached
            .iter()
            .filter(move |a| a.target == target)
            .map(|a| (a.id, &a.action))
    }

    /// Number of attached actions.
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Whether there are no attached actions.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Detach and drop everything.
    pub fn clear(&mut self) {
        log::debug!("clearing {} attached action(s)", self.attached.len());
        self.attached.clear();
    }

    pub fn pool(&self) -> &ActionPool {
        &self.pool
    }

    /// Pool access for building trees from recycled shells.
    pub fn pool_mut(&mut self) -> &mut ActionPool {
        &mut self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::actions::{delay, forever, move_by, move_to, parallel, rotate_to, sequence};
    use crate::actions::ActionKind;
    use crate::components::actor::Actor;
    use crate::core::scene::Scene;
    use crate::core::target::Target;
    use crate::extensions::easing::Easing;

    #[test]
    fn step_moves_and_retires() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new().with_pos(Vec2::ZERO));

        let handle = actions.attach(id, move_to(100.0, 0.0, 1.0, Easing::Linear));

        // Tick halfway
        assert!(actions.step_all(&mut scene, id, 0.25).is_empty());
        assert!(actions.step_all(&mut scene, id, 0.25).is_empty());
        let a = scene.get(id).unwrap();
        assert!((a.pos.x - 50.0).abs() < 0.01);

        // Tick to completion
        actions.step_all(&mut scene, id, 0.25);
        let done = actions.step_all(&mut scene, id, 0.25);
        assert_eq!(done, vec![handle]);
        assert_eq!(scene.get(id).unwrap().pos.x, 100.0);

        // Action should be detached and pooled
        assert!(actions.is_empty());
        assert_eq!(actions.is_complete(handle), None);
        assert_eq!(actions.pool().available(ActionKind::MoveTo), 1);
    }

    #[test]
    fn same_target_steps_in_attachment_order() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        let first = actions.attach(id, move_to(10.0, 0.0, 0.0, Easing::Linear));
        let second = actions.attach(id, move_to(20.0, 0.0, 0.0, Easing::Linear));

        let done = actions.step_all(&mut scene, id, 0.1);
        assert_eq!(done, vec![first, second]);
        assert_eq!(scene.get(id).unwrap().pos.x, 20.0);
    }

    #[test]
    fn step_all_only_touches_its_target() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let a = scene.spawn(Actor::new());
        let b = scene.spawn(Actor::new());

        actions.attach(a, move_by(1.0, 0.0, 1.0, Easing::Linear));
        actions.attach(b, move_by(1.0, 0.0, 1.0, Easing::Linear));

        actions.step_all(&mut scene, a, 0.25);
        assert!((scene.get(a).unwrap().pos.x - 0.25).abs() < 1e-4);
        assert_eq!(scene.get(b).unwrap().pos.x, 0.0);

        actions.update(&mut scene, 0.25);
        assert!((scene.get(a).unwrap().pos.x - 0.5).abs() < 1e-4);
        assert!((scene.get(b).unwrap().pos.x - 0.25).abs() < 1e-4);
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn despawned_target_completes_its_actions() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        let looping = actions.attach(id, forever(delay(1.0)));
        scene.despawn(id);

        let done = actions.update(&mut scene, 0.1);
        assert_eq!(done, vec![looping]);
        assert!(actions.is_empty());
    }

    #[test]
    fn forever_stays_attached_until_removed() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        actions.attach(id, forever(move_by(1.0, 0.0, 0.5, Easing::Linear)));
        for _ in 0..10 {
            assert!(actions.update(&mut scene, 0.25).is_empty());
        }
        assert_eq!(actions.len(), 1);

        assert_eq!(actions.remove_target(id), 1);
        assert!(actions.is_empty());
        assert_eq!(actions.pool().available(ActionKind::Forever), 1);
        assert_eq!(actions.pool().available(ActionKind::MoveBy), 1);

        // Removal leaves the last written value in place.
        assert!((scene.get(id).unwrap().pos.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn pause_and_resume() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        let handle = actions.attach(id, rotate_to(90.0, 1.0, Easing::Linear));
        actions.pause(handle);
        actions.update(&mut scene, 0.25);
        assert_eq!(scene.get(id).unwrap().rotation, 0.0);
        assert_eq!(actions.is_paused(handle), Some(true));

        actions.resume(handle);
        actions.update(&mut scene, 0.25);
        assert!((scene.get(id).unwrap().rotation - 22.5).abs() < 1e-4);
    }

    #[test]
    fn restart_by_handle() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        let handle = actions.attach(
            id,
            sequence([move_to(10.0, 0.0, 0.5, Easing::Linear), delay(1.0)]),
        );
        actions.update(&mut scene, 0.25);
        actions.update(&mut scene, 0.25);
        assert_eq!(scene.get(id).unwrap().pos.x, 10.0);

        scene.get_mut(id).unwrap().pos.x = 0.0;
        assert!(actions.restart(handle));
        actions.update(&mut scene, 0.25);
        assert!((scene.get(id).unwrap().pos.x - 5.0).abs() < 1e-4);
        assert_eq!(actions.is_complete(handle), Some(false));
        assert!(!actions.restart(ActionId(999)));
    }

    #[test]
    fn detach_returns_action_without_rollback() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        let handle = actions.attach(id, move_to(10.0, 0.0, 1.0, Easing::Linear));
        actions.update(&mut scene, 0.25);
        let action = actions.detach(handle).unwrap();
        assert!(!action.is_complete());
        assert!((scene.get(id).unwrap().pos.x - 2.5).abs() < 1e-4);
        assert!(actions.detach(handle).is_none());
    }

    #[test]
    fn delta_is_capped() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        actions.attach(id, move_to(10.0, 0.0, 1.0, Easing::Linear));
        actions.update(&mut scene, 5.0);
        assert!((scene.get(id).unwrap().pos.x - 2.5).abs() < 1e-4);
    }

    #[test]
    fn manager_caps_delta_but_direct_step_does_not() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());
        actions.attach(id, move_to(10.0, 0.0, 1.0, Easing::Linear));
        actions.update(&mut scene, 0.5);
        assert!((scene.get(id).unwrap().pos.x - 2.5).abs() < 1e-4);

        let mut actor = Actor::new();
        let mut direct = move_to(10.0, 0.0, 1.0, Easing::Linear);
        direct.step(Some(&mut actor as &mut dyn Target), 0.5);
        assert!((actor.pos.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn uncapped_manager_uses_full_delta() {
        let config = ActionConfig {
            max_delta: None,
            ..ActionConfig::default()
        };
        let mut actions = ActionManager::with_config(config);
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());
        actions.attach(id, move_to(10.0, 0.0, 1.0, Easing::Linear));
        actions.update(&mut scene, 0.5);
        assert!((scene.get(id).unwrap().pos.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn nan_frame_delta_advances_nothing() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());
        let handle = actions.attach(id, move_to(100.0, 0.0, 1.0, Easing::Linear));

        assert!(actions.update(&mut scene, f32::NAN).is_empty());
        assert_eq!(scene.get(id).unwrap().pos.x, 0.0);
        assert_eq!(actions.is_complete(handle), Some(false));
    }

    #[test]
    fn invalid_delta_cap_does_not_freeze_actions() {
        let config = ActionConfig {
            max_delta: Some(-1.0),
            ..ActionConfig::default()
        };
        let mut actions = ActionManager::with_config(config);
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());
        actions.attach(id, move_to(10.0, 0.0, 1.0, Easing::Linear));
        actions.update(&mut scene, 0.1);
        assert!((scene.get(id).unwrap().pos.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn pooling_can_be_disabled() {
        let config = ActionConfig {
            pool_completed: false,
            ..ActionConfig::default()
        };
        let mut actions = ActionManager::with_config(config);
        let mut scene = Scene::new();
        let id = scene.spawn(Actor::new());

        actions.attach(id, parallel([move_to(1.0, 1.0, 0.0, Easing::Linear)]));
        assert_eq!(actions.update(&mut scene, 0.1).len(), 1);
        assert_eq!(actions.pool().available(ActionKind::Parallel), 0);
        assert_eq!(actions.pool().stats().released, 0);
    }

    #[test]
    fn actions_for_lists_in_order() {
        let mut actions = ActionManager::new();
        let mut scene = Scene::new();
        let a = scene.spawn(Actor::new());
        let b = scene.spawn(Actor::new());

        let first = actions.attach(a, delay(1.0));
        actions.attach(b, delay(1.0));
        let third = actions.attach(a, delay(2.0));

        let ids: Vec<_> = actions.actions_for(a).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, third]);
        assert_eq!(actions.target_of(third), Some(a));
    }
}
