// actions/combinator.rs
//
// Actions that own and schedule child actions.

use super::temporal::accumulate;
use super::Action;
use crate::core::target::Target;

/// Upper bound on child passes a `Repeat` or `Forever` runs in one step
/// when carrying leftover time into the next pass.
const MAX_PASSES_PER_STEP: usize = 64;

/// Waits for a fixed time without touching the target.
#[derive(Debug, Clone, Default)]
pub struct Delay {
    pub duration: f32,
    elapsed: f32,
    overshoot: f32,
}

impl Delay {
    pub fn new(duration: f32) -> Self {
        Self { duration, elapsed: 0.0, overshoot: 0.0 }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub(crate) fn act(&mut self, dt: f32) -> bool {
        (self.elapsed, self.overshoot) = accumulate(self.elapsed, self.duration, dt);
        // NaN or non-positive durations are over at once.
        !(self.elapsed < self.duration)
    }

    pub(crate) fn leftover(&self) -> f32 {
        self.overshoot
    }

    pub(crate) fn restart(&mut self) {
        self.elapsed = 0.0;
        self.overshoot = 0.0;
    }
}

/// Runs children one at a time, in order.
///
/// A child starts only after every earlier child has completed. At most one
/// child completes per step; leftover time is not carried into the next one.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    pub(crate) children: Vec<Action>,
    index: usize,
}

impl Sequence {
    pub fn new(children: Vec<Action>) -> Self {
        Self { children, index: 0 }
    }

    pub fn children(&self) -> &[Action] {
        &self.children
    }

    /// Index of the child currently running (== len once finished).
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        if let Some(child) = self.children.get_mut(self.index) {
            if child.act(target, dt) {
                self.index += 1;
            }
        }
        self.index >= self.children.len()
    }

    /// Only the last child runs in the final step, so its leftover is ours.
    pub(crate) fn leftover(&self) -> f32 {
        self.children.last().map_or(0.0, Action::leftover)
    }

    pub(crate) fn restart(&mut self) {
        self.index = 0;
        for child in &mut self.children {
            child.restart();
        }
    }
}

/// Runs all children side by side; done when every child has completed.
#[derive(Debug, Clone, Default)]
pub struct Parallel {
    pub(crate) children: Vec<Action>,
    /// Indices of children that have not completed yet.
    pending: Vec<usize>,
    leftover: f32,
}

impl Parallel {
    pub fn new(children: Vec<Action>) -> Self {
        let pending = (0..children.len()).collect();
        Self { children, pending, leftover: 0.0 }
    }

    pub fn children(&self) -> &[Action] {
        &self.children
    }

    /// Number of children still running.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        let children = &mut self.children;
        let mut leftover = f32::INFINITY;
        // Finished children drop out and are never stepped again.
        self.pending.retain(|&i| {
            let child = &mut children[i];
            if child.act(&mut *target, dt) {
                leftover = leftover.min(child.leftover());
                false
            } else {
                true
            }
        });
        if !self.pending.is_empty() {
            return false;
        }
        // The group ends with whichever child finished last.
        if leftover.is_finite() {
            self.leftover = leftover;
        }
        true
    }

    pub(crate) fn leftover(&self) -> f32 {
        self.leftover
    }

    pub(crate) fn restart(&mut self) {
        self.leftover = 0.0;
        self.pending.clear();
        self.pending.extend(0..self.children.len());
        for child in &mut self.children {
            child.restart();
        }
    }
}

/// Runs its child `count` times, restarting it after each completion.
///
/// A restarted child re-captures its start values on its next step. Time
/// left over when a pass ends goes into the next pass, so `count` passes of
/// a child lasting `d` take `count * d` seconds at any frame rate.
#[derive(Debug, Clone, Default)]
pub struct Repeat {
    pub(crate) child: Option<Box<Action>>,
    pub count: u32,
    remaining: u32,
    leftover: f32,
}

impl Repeat {
    pub fn new(count: u32, child: Action) -> Self {
        Self {
            child: Some(Box::new(child)),
            count,
            remaining: count,
            leftover: 0.0,
        }
    }

    pub fn child(&self) -> Option<&Action> {
        self.child.as_deref()
    }

    /// Completions still required.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub(crate) fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        if self.remaining == 0 {
            return true;
        }
        let Some(child) = self.child.as_deref_mut() else {
            self.remaining = 0;
            return true;
        };
        let mut dt = dt;
        for _ in 0..MAX_PASSES_PER_STEP {
            if !child.act(&mut *target, dt) {
                return false;
            }
            let rest = child.leftover();
            self.remaining -= 1;
            if self.remaining == 0 {
                self.leftover = rest;
                return true;
            }
            child.restart();
            // An instant child consumes nothing; wait for the next step.
            if !(rest > 0.0 && rest < dt) {
                return false;
            }
            dt = rest;
        }
        false
    }

    pub(crate) fn leftover(&self) -> f32 {
        self.leftover
    }

    pub(crate) fn restart(&mut self) {
        self.remaining = self.count;
        self.leftover = 0.0;
        if let Some(child) = self.child.as_deref_mut() {
            child.restart();
        }
    }
}

/// Runs its child over and over. Never completes on its own.
#[derive(Debug, Clone, Default)]
pub struct Forever {
    pub(crate) child: Option<Box<Action>>,
    cycles: u64,
}

impl Forever {
    pub fn new(child: Action) -> Self {
        Self {
            child: Some(Box::new(child)),
            cycles: 0,
        }
    }

    pub fn child(&self) -> Option<&Action> {
        self.child.as_deref()
    }

    /// Completed passes of the child since the last restart.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub(crate) fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        let Some(child) = self.child.as_deref_mut() else {
            return true;
        };
        let mut dt = dt;
        for _ in 0..MAX_PASSES_PER_STEP {
            if !child.act(&mut *target, dt) {
                break;
            }
            let rest = child.leftover();
            self.cycles += 1;
            child.restart();
            if !(rest > 0.0 && rest < dt) {
                break;
            }
            dt = rest;
        }
        false
    }

    pub(crate) fn restart(&mut self) {
        self.cycles = 0;
        if let Some(child) = self.child.as_deref_mut() {
            child.restart();
        }
    }
}

/// Steps its child with a scaled time delta.
#[derive(Debug, Clone)]
pub struct TimeScale {
    pub(crate) child: Option<Box<Action>>,
    pub scale: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self { child: None, scale: 1.0 }
    }
}

impl TimeScale {
    pub fn new(scale: f32, child: Action) -> Self {
        Self {
            child: Some(Box::new(child)),
            scale,
        }
    }

    pub fn child(&self) -> Option<&Action> {
        self.child.as_deref()
    }

    pub(crate) fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        match self.child.as_deref_mut() {
            Some(child) => child.act(target, dt * self.scale),
            None => true,
        }
    }

    /// Child leftover, back in unscaled time.
    pub(crate) fn leftover(&self) -> f32 {
        match self.child.as_deref() {
            Some(child) if self.scale > 0.0 => child.leftover() / self.scale,
            _ => 0.0,
        }
    }

    pub(crate) fn restart(&mut self) {
        if let Some(child) = self.child.as_deref_mut() {
            child.restart();
        }
    }
}
