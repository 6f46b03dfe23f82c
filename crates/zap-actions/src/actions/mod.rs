// actions/mod.rs
//
// Composable actions: leaf tweens plus combinators, stepped once per frame.
//
// Usage:
//   let mut bounce = sequence([
//       move_to(100.0, 300.0, 3.0, Easing::SWING_IN),
//       scale_to(2.0, 2.0, 2.0, Easing::BounceOut),
//       delay(1.0),
//   ]);
//   bounce.step(Some(&mut actor), dt);  // true once the whole tree is done

pub mod combinator;
pub mod leaf;
pub mod temporal;

use glam::Vec2;

use crate::core::target::Target;
use crate::extensions::easing::Easing;
use crate::extensions::path::PathKind;
use combinator::{Delay, Forever, Parallel, Repeat, Sequence, TimeScale};
use leaf::{act_tween, AlphaTo, MoveAlong, MoveBy, MoveTo, RotateBy, RotateTo, ScaleBy, ScaleTo};
use temporal::Temporal;

/// Discriminant of [`Node`], used to key the action pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    MoveTo,
    MoveBy,
    MoveAlong,
    RotateTo,
    RotateBy,
    ScaleTo,
    ScaleBy,
    AlphaTo,
    Delay,
    Sequence,
    Parallel,
    Repeat,
    Forever,
    TimeScale,
}

impl ActionKind {
    pub const ALL: [ActionKind; 14] = [
        ActionKind::MoveTo,
        ActionKind::MoveBy,
        ActionKind::MoveAlong,
        ActionKind::RotateTo,
        ActionKind::RotateBy,
        ActionKind::ScaleTo,
        ActionKind::ScaleBy,
        ActionKind::AlphaTo,
        ActionKind::Delay,
        ActionKind::Sequence,
        ActionKind::Parallel,
        ActionKind::Repeat,
        ActionKind::Forever,
        ActionKind::TimeScale,
    ];
}

/// The state of one action, by kind.
#[derive(Debug, Clone)]
pub enum Node {
    MoveTo(MoveTo),
    MoveBy(MoveBy),
    MoveAlong(MoveAlong),
    RotateTo(RotateTo),
    RotateBy(RotateBy),
    ScaleTo(ScaleTo),
    ScaleBy(ScaleBy),
    AlphaTo(AlphaTo),
    Delay(Delay),
    Sequence(Sequence),
    Parallel(Parallel),
    Repeat(Repeat),
    Forever(Forever),
    TimeScale(TimeScale),
}

impl Node {
    /// A default-configured node of the given kind.
    pub fn empty(kind: ActionKind) -> Self {
        match kind {
            ActionKind::MoveTo => Node::MoveTo(MoveTo::default()),
            ActionKind::MoveBy => Node::MoveBy(MoveBy::default()),
            ActionKind::MoveAlong => Node::MoveAlong(MoveAlong::default()),
            ActionKind::RotateTo => Node::RotateTo(RotateTo::default()),
            ActionKind::RotateBy => Node::RotateBy(RotateBy::default()),
            ActionKind::ScaleTo => Node::ScaleTo(ScaleTo::default()),
            ActionKind::ScaleBy => Node::ScaleBy(ScaleBy::default()),
            ActionKind::AlphaTo => Node::AlphaTo(AlphaTo::default()),
            ActionKind::Delay => Node::Delay(Delay::default()),
            ActionKind::Sequence => Node::Sequence(Sequence::default()),
            ActionKind::Parallel => Node::Parallel(Parallel::default()),
            ActionKind::Repeat => Node::Repeat(Repeat::default()),
            ActionKind::Forever => Node::Forever(Forever::default()),
            ActionKind::TimeScale => Node::TimeScale(TimeScale::default()),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Node::MoveTo(_) => ActionKind::MoveTo,
            Node::MoveBy(_) => ActionKind::MoveBy,
            Node::MoveAlong(_) => ActionKind::MoveAlong,
            Node::RotateTo(_) => ActionKind::RotateTo,
            Node::RotateBy(_) => ActionKind::RotateBy,
            Node::ScaleTo(_) => ActionKind::ScaleTo,
            Node::ScaleBy(_) => ActionKind::ScaleBy,
            Node::AlphaTo(_) => ActionKind::AlphaTo,
            Node::Delay(_) => ActionKind::Delay,
            Node::Sequence(_) => ActionKind::Sequence,
            Node::Parallel(_) => ActionKind::Parallel,
            Node::Repeat(_) => ActionKind::Repeat,
            Node::Forever(_) => ActionKind::Forever,
            Node::TimeScale(_) => ActionKind::TimeScale,
        }
    }

    /// The clock of a leaf tween, `None` for combinators and delays.
    pub fn timing(&self) -> Option<&Temporal> {
        match self {
            Node::MoveTo(a) => Some(&a.timing),
            Node::MoveBy(a) => Some(&a.timing),
            Node::MoveAlong(a) => Some(&a.timing),
            Node::RotateTo(a) => Some(&a.timing),
            Node::RotateBy(a) => Some(&a.timing),
            Node::ScaleTo(a) => Some(&a.timing),
            Node::ScaleBy(a) => Some(&a.timing),
            Node::AlphaTo(a) => Some(&a.timing),
            _ => None,
        }
    }

    pub fn timing_mut(&mut self) -> Option<&mut Temporal> {
        match self {
            Node::MoveTo(a) => Some(&mut a.timing),
            Node::MoveBy(a) => Some(&mut a.timing),
            Node::MoveAlong(a) => Some(&mut a.timing),
            Node::RotateTo(a) => Some(&mut a.timing),
            Node::RotateBy(a) => Some(&mut a.timing),
            Node::ScaleTo(a) => Some(&mut a.timing),
            Node::ScaleBy(a) => Some(&mut a.timing),
            Node::AlphaTo(a) => Some(&mut a.timing),
            _ => None,
        }
    }

    fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        match self {
            Node::MoveTo(a) => act_tween(a, target, dt),
            Node::MoveBy(a) => act_tween(a, target, dt),
            Node::MoveAlong(a) => act_tween(a, target, dt),
            Node::RotateTo(a) => act_tween(a, target, dt),
            Node::RotateBy(a) => act_tween(a, target, dt),
            Node::ScaleTo(a) => act_tween(a, target, dt),
            Node::ScaleBy(a) => act_tween(a, target, dt),
            Node::AlphaTo(a) => act_tween(a, target, dt),
            Node::Delay(a) => a.act(dt),
            Node::Sequence(a) => a.act(target, dt),
            Node::Parallel(a) => a.act(target, dt),
            Node::Repeat(a) => a.act(target, dt),
            Node::Forever(a) => a.act(target, dt),
            Node::TimeScale(a) => a.act(target, dt),
        }
    }

    fn leftover(&self) -> f32 {
        match self {
            Node::Delay(a) => a.leftover(),
            Node::Sequence(a) => a.leftover(),
            Node::Parallel(a) => a.leftover(),
            Node::Repeat(a) => a.leftover(),
            Node::Forever(_) => 0.0,
            Node::TimeScale(a) => a.leftover(),
            leaf => leaf.timing().map_or(0.0, Temporal::overshoot),
        }
    }

    fn restart(&mut self) {
        match self {
            Node::Delay(a) => a.restart(),
            Node::Sequence(a) => a.restart(),
            Node::Parallel(a) => a.restart(),
            Node::Repeat(a) => a.restart(),
            Node::Forever(a) => a.restart(),
            Node::TimeScale(a) => a.restart(),
            leaf => {
                if let Some(timing) = leaf.timing_mut() {
                    timing.restart();
                }
            }
        }
    }
}

/// A node in an action tree.
///
/// Completion is sticky: once `step` has returned true it keeps returning
/// true without touching the target until the action is restarted.
#[derive(Debug, Clone)]
pub struct Action {
    node: Node,
    complete: bool,
}

impl Action {
    pub fn new(node: Node) -> Self {
        Self { node, complete: false }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    pub fn kind(&self) -> ActionKind {
        self.node.kind()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance the tree by `dt` seconds against `target`.
    ///
    /// `None` means the target is gone: the action goes inert and reports
    /// completion without writing anything. Returns whether the whole tree
    /// is complete.
    pub fn step(&mut self, target: Option<&mut dyn Target>, dt: f32) -> bool {
        match target {
            Some(target) => self.act(target, dt),
            None => {
                self.complete = true;
                true
            }
        }
    }

    pub(crate) fn act(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        if self.complete {
            return true;
        }
        self.complete = self.node.act(target, dt);
        self.complete
    }

    /// Seconds of the last step that ran past the end of a completed tree.
    /// Zero while the tree is still running.
    pub fn leftover(&self) -> f32 {
        if self.complete {
            self.node.leftover()
        } else {
            0.0
        }
    }

    /// Return the whole tree to its not-yet-started state.
    ///
    /// Configuration (goals, durations, children) is kept; start values are
    /// captured again on the next step.
    pub fn restart(&mut self) {
        self.complete = false;
        self.node.restart();
    }

    /// Turn this action into a default shell of the same kind: progress
    /// cleared, parameters defaulted, children dropped. Buffers keep their
    /// capacity.
    pub fn reset(&mut self) {
        self.complete = false;
        match &mut self.node {
            Node::MoveAlong(a) => {
                a.clear();
                a.timing = Temporal::default();
                a.path = PathKind::default();
            }
            Node::Sequence(a) => {
                a.children.clear();
                a.restart();
            }
            Node::Parallel(a) => {
                a.children.clear();
                a.restart();
            }
            node => *node = Node::empty(node.kind()),
        }
    }

    /// Direct children, in order. Empty for leaves.
    pub fn children(&self) -> &[Action] {
        match &self.node {
            Node::Sequence(a) => a.children(),
            Node::Parallel(a) => a.children(),
            Node::Repeat(a) => a.child().map(std::slice::from_ref).unwrap_or(&[]),
            Node::Forever(a) => a.child().map(std::slice::from_ref).unwrap_or(&[]),
            Node::TimeScale(a) => a.child().map(std::slice::from_ref).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Move the children out, leaving this node childless.
    pub(crate) fn take_children(&mut self, out: &mut Vec<Action>) {
        match &mut self.node {
            Node::Sequence(a) => out.append(&mut a.children),
            Node::Parallel(a) => out.append(&mut a.children),
            Node::Repeat(a) => out.extend(a.child.take().map(|c| *c)),
            Node::Forever(a) => out.extend(a.child.take().map(|c| *c)),
            Node::TimeScale(a) => out.extend(a.child.take().map(|c| *c)),
            _ => {}
        }
    }

    // -- Builder methods (leaf tweens only; no-ops on combinators) --

    pub fn with_easing(mut self, easing: Easing) -> Self {
        if let Some(timing) = self.node.timing_mut() {
            timing.easing = easing;
        }
        self
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        if let Node::Delay(d) = &mut self.node {
            d.duration = duration;
        } else if let Some(timing) = self.node.timing_mut() {
            timing.duration = duration;
        }
        self
    }

    pub fn reversed(mut self) -> Self {
        if let Some(timing) = self.node.timing_mut() {
            timing.reverse = !timing.reverse;
        }
        self
    }
}

impl From<Node> for Action {
    fn from(node: Node) -> Self {
        Action::new(node)
    }
}

// ── Constructors ─────────────────────────────────────────────────────────

/// Move to `(x, y)`.
pub fn move_to(x: f32, y: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::MoveTo(MoveTo::new(Vec2::new(x, y), Temporal::new(duration, easing))))
}

/// Move by `(dx, dy)` relative to wherever the target is.
pub fn move_by(dx: f32, dy: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::MoveBy(MoveBy::new(Vec2::new(dx, dy), Temporal::new(duration, easing))))
}

/// Move from the current position through `waypoints` along `path`.
pub fn move_along(
    waypoints: impl IntoIterator<Item = Vec2>,
    path: PathKind,
    duration: f32,
    easing: Easing,
) -> Action {
    let waypoints = waypoints.into_iter().collect();
    Action::new(Node::MoveAlong(MoveAlong::new(waypoints, path, Temporal::new(duration, easing))))
}

/// Rotate to `degrees`.
pub fn rotate_to(degrees: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::RotateTo(RotateTo::new(degrees, Temporal::new(duration, easing))))
}

/// Rotate by `degrees`.
pub fn rotate_by(degrees: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::RotateBy(RotateBy::new(degrees, Temporal::new(duration, easing))))
}

/// Scale to `(x, y)`.
pub fn scale_to(x: f32, y: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::ScaleTo(ScaleTo::new(Vec2::new(x, y), Temporal::new(duration, easing))))
}

/// Add `(dx, dy)` to the scale.
pub fn scale_by(dx: f32, dy: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::ScaleBy(ScaleBy::new(Vec2::new(dx, dy), Temporal::new(duration, easing))))
}

/// Fade to `alpha`.
pub fn alpha_to(alpha: f32, duration: f32, easing: Easing) -> Action {
    Action::new(Node::AlphaTo(AlphaTo::new(alpha, Temporal::new(duration, easing))))
}

/// Fade to fully opaque.
pub fn fade_in(duration: f32, easing: Easing) -> Action {
    alpha_to(1.0, duration, easing)
}

/// Fade to fully transparent.
pub fn fade_out(duration: f32, easing: Easing) -> Action {
    alpha_to(0.0, duration, easing)
}

/// Wait `duration` seconds.
pub fn delay(duration: f32) -> Action {
    Action::new(Node::Delay(Delay::new(duration)))
}

/// Run `actions` one after another. Empty sequences complete on their first step.
pub fn sequence(actions: impl IntoIterator<Item = Action>) -> Action {
    Action::new(Node::Sequence(Sequence::new(actions.into_iter().collect())))
}

/// Run `actions` side by side. Empty groups complete on their first step.
pub fn parallel(actions: impl IntoIterator<Item = Action>) -> Action {
    Action::new(Node::Parallel(Parallel::new(actions.into_iter().collect())))
}

/// Run `action` `count` times. A count of zero completes on the first step.
pub fn repeat(count: u32, action: Action) -> Action {
    Action::new(Node::Repeat(Repeat::new(count, action)))
}

/// Run `action` until removed.
pub fn forever(action: Action) -> Action {
    Action::new(Node::Forever(Forever::new(action)))
}

/// Run `action` with its time delta multiplied by `scale`.
pub fn time_scale(scale: f32, action: Action) -> Action {
    Action::new(Node::TimeScale(TimeScale::new(scale, action)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::actor::Actor;

    const EPS: f32 = 1e-4;

    fn step(action: &mut Action, actor: &mut Actor, dt: f32) -> bool {
        action.step(Some(actor as &mut dyn Target), dt)
    }

    #[test]
    fn instant_move_lands_exactly() {
        let mut actor = Actor::new();
        let mut mv = move_to(100.0, 100.0, 0.0, Easing::ElasticOut);
        assert!(step(&mut mv, &mut actor, 0.016));
        assert_eq!(actor.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn negative_duration_is_instant() {
        let mut actor = Actor::new().with_pos(Vec2::new(0.3, 0.7));
        let mut mv = move_to(-12.5, 99.9, -1.0, Easing::Linear);
        assert!(step(&mut mv, &mut actor, 0.5));
        assert_eq!(actor.pos, Vec2::new(-12.5, 99.9));
    }

    #[test]
    fn completed_step_is_a_noop() {
        let mut actor = Actor::new();
        let mut mv = move_to(10.0, 0.0, 1.0, Easing::Linear);
        assert!(step(&mut mv, &mut actor, 1.0));

        actor.pos = Vec2::new(-5.0, -5.0);
        assert!(step(&mut mv, &mut actor, 1.0));
        assert_eq!(actor.pos, Vec2::new(-5.0, -5.0), "must not re-apply");
    }

    #[test]
    fn sequence_runs_children_in_order() {
        let mut actor = Actor::new();
        let mut seq = sequence([
            move_to(10.0, 0.0, 1.0, Easing::Linear),
            rotate_to(90.0, 1.0, Easing::Linear),
        ]);

        assert!(!step(&mut seq, &mut actor, 0.5));
        assert!((actor.pos.x - 5.0).abs() < EPS);
        assert_eq!(actor.rotation, 0.0, "second child must wait");

        assert!(!step(&mut seq, &mut actor, 0.5));
        assert_eq!(actor.pos.x, 10.0);
        assert_eq!(actor.rotation, 0.0);

        assert!(!step(&mut seq, &mut actor, 0.5));
        assert!((actor.rotation - 45.0).abs() < EPS);

        assert!(step(&mut seq, &mut actor, 0.5));
        assert_eq!(actor.rotation, 90.0);

        // Fifth step: still complete, nothing rewritten.
        actor.rotation = 7.0;
        assert!(step(&mut seq, &mut actor, 0.5));
        assert_eq!(actor.rotation, 7.0);
    }

    #[test]
    fn parallel_waits_for_slowest_child() {
        let mut actor = Actor::new();
        let mut par = parallel([
            move_to(10.0, 0.0, 1.0, Easing::Linear),
            rotate_to(90.0, 2.0, Easing::Linear),
        ]);

        assert!(!step(&mut par, &mut actor, 0.5));
        assert!(!step(&mut par, &mut actor, 0.5));
        assert_eq!(actor.pos.x, 10.0);
        assert!((actor.rotation - 45.0).abs() < EPS);
        if let Node::Parallel(p) = par.node() {
            assert_eq!(p.pending(), 1);
        }

        assert!(!step(&mut par, &mut actor, 0.5));
        assert!(step(&mut par, &mut actor, 0.5));
        assert_eq!(actor.rotation, 90.0);
    }

    #[test]
    fn parallel_does_not_restep_finished_children() {
        let mut actor = Actor::new();
        let mut par = parallel([
            move_by(10.0, 0.0, 0.0, Easing::Linear),
            delay(1.0),
        ]);
        step(&mut par, &mut actor, 0.25);
        step(&mut par, &mut actor, 0.25);
        step(&mut par, &mut actor, 0.25);
        assert_eq!(actor.pos.x, 10.0);
    }

    #[test]
    fn repeat_takes_count_times_duration() {
        let mut actor = Actor::new();
        let mut rep = repeat(3, move_by(1.0, 0.0, 1.0, Easing::Linear));
        let mut total = 0.0_f32;
        while !step(&mut rep, &mut actor, 0.5) {
            total += 0.5;
            assert!(total < 10.0, "repeat never finished");
        }
        total += 0.5;
        assert!((total - 3.0).abs() < EPS);
        assert!((actor.pos.x - 3.0).abs() < EPS);
    }

    #[test]
    fn repeat_at_sixty_hz_takes_count_times_duration() {
        let mut actor = Actor::new();
        let mut rep = repeat(3, move_to(10.0, 0.0, 1.0, Easing::Linear));
        let mut frames = 1;
        while !step(&mut rep, &mut actor, 1.0 / 60.0) {
            frames += 1;
            assert!(frames < 400, "repeat never finished");
        }
        assert_eq!(frames, 180);
        assert_eq!(actor.pos.x, 10.0);
    }

    #[test]
    fn repeat_carries_leftover_into_next_pass() {
        let mut actor = Actor::new();
        let mut rep = repeat(3, move_to(10.0, 0.0, 1.0, Easing::Linear));
        let mut steps = 1;
        while !step(&mut rep, &mut actor, 0.3) {
            steps += 1;
            assert!(steps < 40, "repeat never finished");
        }
        // 10 × 0.3 s = 3 s; dropping the overshoot would need 12 steps.
        assert_eq!(steps, 10);
        assert_eq!(actor.pos.x, 10.0);
    }

    #[test]
    fn repeat_of_instant_child_takes_one_step_per_pass() {
        let mut actor = Actor::new();
        let mut rep = repeat(3, move_by(1.0, 0.0, 0.0, Easing::Linear));
        assert!(!step(&mut rep, &mut actor, 0.1));
        assert!(!step(&mut rep, &mut actor, 0.1));
        assert!(step(&mut rep, &mut actor, 0.1));
        assert_eq!(actor.pos.x, 3.0);
    }

    #[test]
    fn forever_carries_leftover_into_next_cycle() {
        let mut actor = Actor::new();
        let mut loop_ = forever(move_by(1.0, 0.0, 1.0, Easing::Linear));
        for _ in 0..10 {
            assert!(!step(&mut loop_, &mut actor, 0.3));
        }
        assert!((actor.pos.x - 3.0).abs() < EPS);
        if let Node::Forever(f) = loop_.node() {
            assert_eq!(f.cycles(), 3);
        }
    }

    #[test]
    fn nan_delay_does_not_stall_a_sequence() {
        let mut actor = Actor::new();
        let mut seq = sequence([delay(f32::NAN), move_to(5.0, 0.0, 0.0, Easing::Linear)]);
        assert!(!step(&mut seq, &mut actor, 0.1));
        assert!(step(&mut seq, &mut actor, 0.1));
        assert_eq!(actor.pos.x, 5.0);
    }

    #[test]
    fn parallel_leftover_comes_from_last_finisher() {
        let mut actor = Actor::new();
        let mut par = parallel([delay(0.5), delay(1.0)]);
        step(&mut par, &mut actor, 0.6);
        assert_eq!(par.leftover(), 0.0);
        assert!(step(&mut par, &mut actor, 0.6));
        assert!((par.leftover() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn repeat_recaptures_start_each_pass() {
        let mut actor = Actor::new();
        let mut rep = repeat(2, move_to(10.0, 0.0, 1.0, Easing::Linear));

        step(&mut rep, &mut actor, 1.0);
        assert_eq!(actor.pos.x, 10.0);

        // Something else shoves the actor between passes.
        actor.pos.x = 30.0;
        step(&mut rep, &mut actor, 0.5);
        assert!((actor.pos.x - 20.0).abs() < EPS, "second pass starts from 30");
        assert!(step(&mut rep, &mut actor, 0.5));
        assert_eq!(actor.pos.x, 10.0);
    }

    #[test]
    fn repeat_zero_completes_immediately() {
        let mut actor = Actor::new();
        let mut rep = repeat(0, move_to(10.0, 0.0, 1.0, Easing::Linear));
        assert!(step(&mut rep, &mut actor, 0.1));
        assert_eq!(actor.pos.x, 0.0);
    }

    #[test]
    fn empty_combinators_complete_immediately() {
        let mut actor = Actor::new();
        assert!(step(&mut sequence([]), &mut actor, 0.1));
        assert!(step(&mut parallel([]), &mut actor, 0.1));
    }

    #[test]
    fn forever_never_completes() {
        let mut actor = Actor::new();
        let mut loop_ = forever(move_by(1.0, 0.0, 1.0, Easing::Linear));
        for _ in 0..20 {
            assert!(!step(&mut loop_, &mut actor, 0.5));
        }
        assert!((actor.pos.x - 10.0).abs() < EPS);
        if let Node::Forever(f) = loop_.node() {
            assert_eq!(f.cycles(), 10);
        }
    }

    #[test]
    fn dead_target_completes_everything() {
        let mut loop_ = forever(delay(1.0));
        assert!(loop_.step(None, 0.016));
        assert!(loop_.is_complete());
    }

    #[test]
    fn delay_has_no_effect() {
        let mut actor = Actor::new().with_pos(Vec2::new(3.0, 4.0));
        let mut wait = delay(1.0);
        assert!(!step(&mut wait, &mut actor, 0.6));
        assert!(step(&mut wait, &mut actor, 0.6));
        assert_eq!(actor.pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn time_scale_speeds_up_child() {
        let mut actor = Actor::new();
        let mut fast = time_scale(2.0, move_to(10.0, 0.0, 1.0, Easing::Linear));
        assert!(!step(&mut fast, &mut actor, 0.25));
        assert!((actor.pos.x - 5.0).abs() < EPS);
        assert!(step(&mut fast, &mut actor, 0.25));
    }

    #[test]
    fn restart_resets_whole_tree() {
        let mut actor = Actor::new();
        let mut seq = sequence([
            move_to(10.0, 0.0, 1.0, Easing::Linear),
            parallel([rotate_to(90.0, 1.0, Easing::Linear), delay(0.5)]),
        ]);
        while !step(&mut seq, &mut actor, 0.5) {}
        assert!(seq.is_complete());

        seq.restart();
        assert!(!seq.is_complete());
        assert!(seq.children().iter().all(|c| !c.is_complete()));
        if let Node::Sequence(s) = seq.node() {
            assert_eq!(s.index(), 0);
        }

        actor.pos.x = 0.0;
        step(&mut seq, &mut actor, 0.5);
        assert!((actor.pos.x - 5.0).abs() < EPS);
    }

    #[test]
    fn reversed_tween_returns_to_start() {
        let mut actor = Actor::new();
        let mut mv = move_to(10.0, 0.0, 1.0, Easing::Linear).reversed();
        step(&mut mv, &mut actor, 0.25);
        assert!((actor.pos.x - 7.5).abs() < EPS);
        assert!(step(&mut mv, &mut actor, 0.75));
        assert_eq!(actor.pos.x, 0.0);
    }

    #[test]
    fn reset_produces_default_shell() {
        let mut mv = move_to(10.0, 0.0, 2.0, Easing::BounceOut);
        let mut actor = Actor::new();
        step(&mut mv, &mut actor, 2.0);
        mv.reset();
        assert!(!mv.is_complete());
        match mv.node_mut() {
            Node::MoveTo(m) => {
                assert_eq!(m.end, Vec2::ZERO);
                assert_eq!(m.timing, Temporal::default());
            }
            other => panic!("unexpected node {other:?}"),
        }

        let mut seq = sequence([delay(1.0), delay(1.0)]);
        seq.reset();
        assert_eq!(seq.kind(), ActionKind::Sequence);
        assert!(seq.children().is_empty());
    }

    #[test]
    fn with_easing_only_touches_leaves() {
        let mv = move_to(1.0, 1.0, 1.0, Easing::Linear).with_easing(Easing::QuadIn);
        if let Node::MoveTo(m) = mv.node() {
            assert_eq!(m.timing.easing, Easing::QuadIn);
        }
        let seq = sequence([delay(1.0)]).with_easing(Easing::QuadIn);
        assert_eq!(seq.kind(), ActionKind::Sequence);
    }
}
