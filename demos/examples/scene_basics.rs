// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene basics.
//!
//! Build a scene on a phone-sized canvas, classify its rectangles, and apply the
//! edits a view would send for swipe and double-tap gestures.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_overlap_demos --example scene_basics`
//! - Pass a JSON config path as the first argument to override the defaults.

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_overlap_scene::{Paint, Scene, SceneCommand, SceneConfig};

fn print_scene(scene: &Scene) {
    let (paints, elapsed) = scene.timed_paints();
    let red = paints.iter().filter(|(_, p)| *p == Paint::Collision).count();
    println!(
        "{} rects via {}: {} red, {} mint ({:.3} ms)",
        paints.len(),
        scene.strategy().name(),
        red,
        paints.len() - red,
        elapsed.as_secs_f64() * 1000.0
    );
    for (rect, paint) in paints {
        println!(
            "  {:>9} x={:>4} y={:>4} w={:>3} h={:>3}",
            format!("{paint:?}"),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load_or_default(path).expect("config should be valid JSON"),
        None => SceneConfig::default(),
    };

    let mut scene = Scene::with_seed(Rect::new(0.0, 0.0, 390.0, 844.0), config, 2022)
        .expect("the canvas fits the default sizes");
    print_scene(&scene);

    // Swipe up: one more rectangle, freshly placed.
    scene.apply(SceneCommand::AddRect).unwrap();
    print_scene(&scene);

    // Swipe down twice.
    scene.apply(SceneCommand::RemoveRect).unwrap();
    scene.apply(SceneCommand::RemoveRect).unwrap();
    print_scene(&scene);

    // Double tap: same count, new layout.
    scene.apply(SceneCommand::Reset).unwrap();
    print_scene(&scene);

    // Rotate the device.
    scene.set_canvas(Rect::new(0.0, 0.0, 844.0, 390.0)).unwrap();
    print_scene(&scene);
}
