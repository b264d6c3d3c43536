use glam::{Vec2, Vec3};
use strider::{Buttons, ControllerConfig, InputSample, Simulation, TestArena};

const TICK_RATE: u32 = 60;

fn forward(buttons: Buttons) -> InputSample {
    InputSample {
        move_axes: Vec2::new(0.0, 1.0),
        look_delta: Vec2::ZERO,
        buttons,
    }
}

fn idle() -> InputSample {
    InputSample::default()
}

fn run_ticks(sim: &mut Simulation, sample: InputSample, ticks: u32) {
    for _ in 0..ticks {
        sim.step(sample);
    }
}

fn settle(sim: &mut Simulation) {
    run_ticks(sim, idle(), TICK_RATE);
    assert!(sim.grounded(), "actor failed to settle onto the floor");
}

#[test]
fn actor_settles_onto_arena_floor() {
    let mut sim = Simulation::new(ControllerConfig::default(), TICK_RATE, Vec3::new(0.0, 1.0, 0.0))
        .unwrap();

    run_ticks(&mut sim, idle(), TICK_RATE * 2);

    assert!(sim.grounded());
    let feet = sim.feet_position();
    assert!(feet.y.abs() < 0.2, "feet at {}", feet.y);
    // Idle input produces no planar drift.
    assert!(feet.x.abs() < 1e-3 && feet.z.abs() < 1e-3);
}

#[test]
fn walking_covers_configured_distance() {
    let config = ControllerConfig::default();
    let walk_speed = config.walk_speed;
    let mut sim = Simulation::new(config, TICK_RATE, Vec3::new(0.0, 0.5, 0.0)).unwrap();
    settle(&mut sim);

    let start = sim.feet_position();
    run_ticks(&mut sim, forward(Buttons::empty()), TICK_RATE * 2);
    let travelled = sim.feet_position().z - start.z;

    let expected = walk_speed * 2.0;
    assert!(
        (travelled - expected).abs() < expected * 0.1,
        "travelled {travelled}, expected about {expected}"
    );
}

#[test]
fn sprinting_scales_walk_distance() {
    let config = ControllerConfig::default();
    let multiplier = config.sprint_multiplier;
    let mut sim = Simulation::new(config.clone(), TICK_RATE, Vec3::new(0.0, 0.5, 0.0)).unwrap();
    settle(&mut sim);
    let start = sim.feet_position();
    run_ticks(&mut sim, forward(Buttons::empty()), TICK_RATE);
    let walked = sim.feet_position().z - start.z;

    let mut sim = Simulation::new(config, TICK_RATE, Vec3::new(0.0, 0.5, 0.0)).unwrap();
    settle(&mut sim);
    let start = sim.feet_position();
    run_ticks(&mut sim, forward(Buttons::SPRINT), TICK_RATE);
    let sprinted = sim.feet_position().z - start.z;

    let ratio = sprinted / walked;
    assert!(
        (ratio - multiplier).abs() < 0.15,
        "sprint ratio {ratio}, expected about {multiplier}"
    );
}

#[test]
fn jump_apex_approaches_configured_height() {
    let config = ControllerConfig::default();
    let jump_height = config.jump_height;
    let mut sim = Simulation::new(config, TICK_RATE, Vec3::new(0.0, 0.5, 0.0)).unwrap();
    settle(&mut sim);
    let floor = sim.feet_position().y;

    sim.step(InputSample {
        buttons: Buttons::JUMP,
        ..Default::default()
    });

    let mut apex = floor;
    for _ in 0..(TICK_RATE * 2) {
        sim.step(idle());
        apex = apex.max(sim.feet_position().y);
    }

    let rise = apex - floor;
    assert!(
        rise > jump_height * 0.8 && rise < jump_height * 1.15,
        "apex rise {rise}, configured jump height {jump_height}"
    );
    // Two seconds is plenty of time to land again.
    assert!(sim.grounded());
}

#[test]
fn double_jump_outclimbs_single_jump() {
    let config = ControllerConfig::default();
    let mut sim = Simulation::new(config, TICK_RATE, Vec3::new(0.0, 0.5, 0.0)).unwrap();
    settle(&mut sim);
    let floor = sim.feet_position().y;

    sim.step(InputSample {
        buttons: Buttons::JUMP,
        ..Default::default()
    });
    // Release, rise for a quarter second, then jump again mid-air.
    run_ticks(&mut sim, idle(), TICK_RATE / 4);
    sim.step(InputSample {
        buttons: Buttons::JUMP,
        ..Default::default()
    });

    let mut apex = floor;
    for _ in 0..(TICK_RATE * 2) {
        sim.step(idle());
        apex = apex.max(sim.feet_position().y);
    }

    let rise = apex - floor;
    let single = sim.controller().config().jump_height;
    assert!(
        rise > single * 1.2,
        "double jump rise {rise} should clear a single jump height {single}"
    );
}

#[test]
fn tunnel_forces_crouch_until_clear() {
    let config = ControllerConfig::default();
    let crouch_height = config.crouch_height;
    let standing = Simulation::PLAYER_HEIGHT;
    let mut sim = Simulation::new(config, TICK_RATE, Vec3::new(0.0, 0.5, 36.0)).unwrap();
    settle(&mut sim);

    // Crouch-walk into the tunnel.
    run_ticks(&mut sim, forward(Buttons::CROUCH), TICK_RATE * 3);
    let feet = sim.feet_position();
    assert!(
        feet.z > TestArena::TUNNEL_NEAR_Z && feet.z < TestArena::TUNNEL_FAR_Z,
        "expected to be inside the tunnel, at z {}",
        feet.z
    );
    assert!((sim.state.current_height - crouch_height).abs() < 0.05);

    // Releasing crouch under the roof must not raise the capsule.
    run_ticks(&mut sim, forward(Buttons::empty()), TICK_RATE / 2);
    assert!(sim.state.is_crouching);
    assert!(sim.state.current_height < crouch_height + 0.1);

    // Keep walking; once clear of the roof the capsule rises again.
    run_ticks(&mut sim, forward(Buttons::empty()), TICK_RATE * 3);
    let feet = sim.feet_position();
    assert!(feet.z > TestArena::TUNNEL_FAR_Z, "still under roof at z {}", feet.z);
    assert!(!sim.state.is_crouching);
    assert!((sim.state.current_height - standing).abs() < 0.05);
}

#[test]
fn auto_run_moves_without_held_axes() {
    let mut sim = Simulation::new(ControllerConfig::default(), TICK_RATE, Vec3::new(0.0, 0.5, 0.0))
        .unwrap();
    settle(&mut sim);
    let start = sim.feet_position();

    // Single pulse toggles auto-run on; axes stay neutral afterwards.
    sim.step(InputSample {
        buttons: Buttons::AUTO_RUN,
        ..Default::default()
    });
    run_ticks(&mut sim, idle(), TICK_RATE);

    let travelled = sim.feet_position().z - start.z;
    assert!(travelled > 3.0, "auto-run only covered {travelled}");
}
