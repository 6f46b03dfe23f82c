use slotmap::new_key_type;

new_key_type! {
    /// Generational handle to an actor in a [`Scene`](crate::Scene).
    ///
    /// Handles never keep an actor alive: once the actor is despawned the
    /// handle goes stale and resolves to nothing.
    pub struct ActorId;
}

/// Handle to an action attached to an [`ActionManager`](crate::ActionManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub u32);
