// systems/pool.rs
//
// Arena of reusable action shells keyed by kind. Releasing an action resets
// it (and, recursively, its children) so nothing from a previous lifecycle
// leaks into the next one.

use std::collections::HashMap;

use glam::Vec2;

use crate::actions::temporal::Temporal;
use crate::actions::{Action, ActionKind, Node};
use crate::extensions::easing::Easing;

/// Counters for pool traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Shells handed out.
    pub acquired: u64,
    /// Hand-outs served from the pool rather than freshly built.
    pub reused: u64,
    /// Actions (including children) returned to the pool.
    pub released: u64,
    /// Released actions dropped because their kind was at capacity.
    pub discarded: u64,
}

#[derive(Debug)]
pub struct ActionPool {
    free: HashMap<ActionKind, Vec<Action>>,
    capacity: usize,
    stats: PoolStats,
    scratch: Vec<Action>,
}

impl Default for ActionPool {
    fn default() -> Self {
        Self::new(64)
    }
}

impl ActionPool {
    /// Create a pool keeping at most `capacity` shells per kind.
    pub fn new(capacity: usize) -> Self {
        Self {
            free: HashMap::new(),
            capacity,
            stats: PoolStats::default(),
            scratch: Vec::new(),
        }
    }

    /// Take a reset shell of `kind`, building one if none is pooled.
    pub fn acquire(&mut self, kind: ActionKind) -> Action {
        self.stats.acquired += 1;
        match self.free.get_mut(&kind).and_then(Vec::pop) {
            Some(action) => {
                self.stats.reused += 1;
                action
            }
            None => Action::new(Node::empty(kind)),
        }
    }

    /// Return an action tree to the pool. Every node is reset and filed
    /// under its own kind.
    pub fn release(&mut self, action: Action) {
        let mut pending = std::mem::take(&mut self.scratch);
        pending.push(action);

        while let Some(mut action) = pending.pop() {
            action.take_children(&mut pending);
            action.reset();
            self.stats.released += 1;

            let kind = action.kind();
            let slot = self.free.entry(kind).or_default();
            if slot.len() < self.capacity {
                slot.push(action);
            } else {
                self.stats.discarded += 1;
                log::debug!("action pool full for {:?}, dropping shell", kind);
            }
        }

        self.scratch = pending;
    }

    /// Number of pooled shells of `kind`.
    pub fn available(&self, kind: ActionKind) -> usize {
        self.free.get(&kind).map_or(0, Vec::len)
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Drop every pooled shell. Stats are kept.
    pub fn clear(&mut self) {
        self.free.clear();
    }

    // -- Typed obtain helpers --

    pub fn move_to(&mut self, x: f32, y: f32, duration: f32, easing: Easing) -> Action {
        let mut action = self.acquire(ActionKind::MoveTo);
        if let Node::MoveTo(m) = action.node_mut() {
            m.end = Vec2::new(x, y);
            m.timing = Temporal::new(duration, easing);
        }
        action
    }

    pub fn rotate_to(&mut self, degrees: f32, duration: f32, easing: Easing) -> Action {
        let mut action = self.acquire(ActionKind::RotateTo);
        if let Node::RotateTo(r) = action.node_mut() {
            r.end = degrees;
            r.timing = Temporal::new(duration, easing);
        }
        action
    }

    pub fn scale_to(&mut self, x: f32, y: f32, duration: f32, easing: Easing) -> Action {
        let mut action = self.acquire(ActionKind::ScaleTo);
        if let Node::ScaleTo(s) = action.node_mut() {
            s.end = Vec2::new(x, y);
            s.timing = Temporal::new(duration, easing);
        }
        action
    }

    pub fn alpha_to(&mut self, alpha: f32, duration: f32, easing: Easing) -> Action {
        let mut action = self.acquire(ActionKind::AlphaTo);
        if let Node::AlphaTo(a) = action.node_mut() {
            a.end = alpha;
            a.timing = Temporal::new(duration, easing);
        }
        action
    }

    pub fn delay(&mut self, duration: f32) -> Action {
        let mut action = self.acquire(ActionKind::Delay);
        if let Node::Delay(d) = action.node_mut() {
            d.duration = duration;
        }
        action
    }

    pub fn sequence(&mut self, actions: impl IntoIterator<Item = Action>) -> Action {
        let mut action = self.acquire(ActionKind::Sequence);
        if let Node::Sequence(s) = action.node_mut() {
            s.children.extend(actions);
            s.restart();
        }
        action
    }

    pub fn parallel(&mut self, actions: impl IntoIterator<Item = Action>) -> Action {
        let mut action = self.acquire(ActionKind::Parallel);
        if let Node::Parallel(p) = action.node_mut() {
            p.children.extend(actions);
            p.restart();
        }
        action
    }

    pub fn repeat(&mut self, count: u32, child: Action) -> Action {
        let mut action = self.acquire(ActionKind::Repeat);
        if let Node::Repeat(r) = action.node_mut() {
            r.child = Some(Box::new(child));
            r.count = count;
            r.restart();
        }
        action
    }

    pub fn forever(&mut self, child: Action) -> Action {
        let mut action = self.acquire(ActionKind::Forever);
        if let Node::Forever(f) = action.node_mut() {
            f.child = Some(Box::new(child));
            f.restart();
        }
        action
    }
}
