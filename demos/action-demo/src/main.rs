//! Headless replay of the showcase action trees.
//!
//! Spawns six actors, attaches one tree to each and drives the manager at a
//! fixed 60 Hz. Run with `RUST_LOG=debug` to see attach/complete traffic.

use glam::Vec2;
use zap_actions::{
    delay, forever, move_along, move_to, parallel, repeat, rotate_to, scale_to, sequence,
    Action, ActionConfig, ActionManager, Actor, Easing, PathKind, Scene,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const RUN_SECONDS: u32 = 30;

/// Fly out, spin, puff up, come back down.
fn showcase(out: Vec2, back: Vec2) -> Action {
    sequence([
        move_to(out.x, out.y, 3.0, Easing::SWING_IN),
        rotate_to(60.0, 0.0, Easing::Linear),
        scale_to(2.0, 2.0, 2.0, Easing::BounceInOut),
        delay(2.0),
        scale_to(1.0, 1.0, 0.0, Easing::Linear),
        rotate_to(0.0, 0.0, Easing::Linear),
        delay(2.0),
        move_to(back.x, back.y, 3.0, Easing::ElasticIn),
    ])
}

fn spin_and_grow() -> Action {
    sequence([
        parallel([
            rotate_to(360.0, 3.0, Easing::CircInOut),
            scale_to(2.0, 2.0, 2.0, Easing::BounceInOut),
        ]),
        move_to(300.0, 300.0, 0.0, Easing::Linear),
        scale_to(1.0, 1.0, 3.0, Easing::BounceOut),
    ])
}

fn patrol() -> Action {
    forever(sequence([
        move_to(500.0, 400.0, 5.0, Easing::SWING),
        move_to(200.0, 400.0, 5.0, Easing::SWING_OUT),
    ]))
}

fn hop() -> Action {
    repeat(
        4,
        sequence([
            move_to(600.0, 300.0, 2.0, Easing::BounceOut),
            move_to(600.0, 100.0, 2.0, Easing::BounceIn),
        ]),
    )
}

fn glide() -> Action {
    move_along(
        [
            Vec2::new(150.0, 250.0),
            Vec2::new(350.0, 150.0),
            Vec2::new(550.0, 250.0),
        ],
        PathKind::CatmullRom,
        6.0,
        Easing::SineInOut,
    )
}

fn main() {
    env_logger::init();

    let mut scene = Scene::new();
    let mut actions = ActionManager::with_config(ActionConfig::default());

    let trees = [
        ("bird-1", Vec2::new(50.0, 100.0), showcase(Vec2::new(100.0, 300.0), Vec2::new(100.0, 100.0))),
        ("bird-2", Vec2::new(50.0, 200.0), showcase(Vec2::new(400.0, 200.0), Vec2::new(200.0, 200.0))),
        ("bird-3", Vec2::new(50.0, 300.0), spin_and_grow()),
        ("bird-4", Vec2::new(200.0, 400.0), patrol()),
        ("bird-5", Vec2::new(600.0, 100.0), hop()),
        ("bird-6", Vec2::new(0.0, 250.0), glide()),
    ];

    for (tag, pos, tree) in trees {
        let id = scene.spawn(Actor::new().with_tag(tag).with_pos(pos));
        actions.attach(id, tree);
    }

    let frames_per_second = (1.0 / FRAME_DT).round() as u32;
    for frame in 1..=RUN_SECONDS * frames_per_second {
        for done in actions.update(&mut scene, FRAME_DT) {
            log::info!("frame {frame}: {done:?} finished");
        }

        if frame % frames_per_second == 0 {
            for (_, actor) in scene.iter() {
                log::debug!(
                    "t={:>2}s {} pos=({:.1}, {:.1}) rot={:.1} scale={:.2}",
                    frame / frames_per_second,
                    actor.tag,
                    actor.pos.x,
                    actor.pos.y,
                    actor.rotation,
                    actor.scale.x,
                );
            }
        }
    }

    let stats = actions.pool().stats();
    log::info!(
        "{} action(s) still running, pool: {} released, {} reused",
        actions.len(),
        stats.released,
        stats.reused,
    );

    for (_, actor) in scene.iter() {
        println!(
            "{:<7} pos=({:>6.1}, {:>6.1}) rot={:>6.1} scale=({:.2}, {:.2})",
            actor.tag, actor.pos.x, actor.pos.y, actor.rotation, actor.scale.x, actor.scale.y,
        );
    }
}
