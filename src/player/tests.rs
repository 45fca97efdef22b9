//! Player domain: tests for jump gating, impulses, movement, and the attack
//! lock.

use super::components::{AttackLock, ControllerState, Facing};
use super::resources::ControllerTuning;
use super::systems::movement::{cut_jump_velocity, horizontal_step};

fn tuning() -> ControllerTuning {
    ControllerTuning {
        move_speed: 5.0,
        jump_impulse: 5.0,
        extra_jump_scale: 1.2,
        allowed_jumps: 1,
        ground_ray_length: 0.1,
        continuous_jump_cut: false,
    }
}

// -----------------------------------------------------------------------------
// Jump gating
// -----------------------------------------------------------------------------

#[test]
fn test_jump_allowed_when_grounded() {
    let state = ControllerState {
        on_ground: true,
        ..default_state()
    };
    assert!(state.can_jump(1));
}

#[test]
fn test_jump_allowed_with_budget_in_air() {
    let state = ControllerState {
        on_ground: false,
        jumps_used: 0,
        ..default_state()
    };
    assert!(state.can_jump(1));
}

#[test]
fn test_jump_blocked_without_budget() {
    let state = ControllerState {
        on_ground: false,
        jumps_used: 1,
        ..default_state()
    };
    assert!(!state.can_jump(1));
    // A bigger budget unblocks it
    assert!(state.can_jump(2));
}

#[test]
fn test_register_jump_queues_shaping() {
    let mut state = default_state();
    state.register_jump();
    assert_eq!(state.jumps_used, 1);
    assert!(state.jump_queued);
}

#[test]
fn test_grounded_reset_refunds_budget() {
    let mut state = ControllerState {
        on_ground: true,
        jumps_used: 2,
        ..default_state()
    };
    if state.on_ground && state.jumps_used > 0 {
        state.jumps_used = 0;
    }
    assert_eq!(state.jumps_used, 0);
}

// -----------------------------------------------------------------------------
// Jump impulses
// -----------------------------------------------------------------------------

#[test]
fn test_first_jump_uses_base_impulse() {
    assert_eq!(tuning().jump_impulse_for(0), 5.0);
}

#[test]
fn test_subsequent_jumps_scale_impulse() {
    let t = tuning();
    assert!((t.jump_impulse_for(1) - 6.0).abs() < 1e-6);
    assert!((t.jump_impulse_for(2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_single_jump_budget_scenario() {
    let t = tuning();
    let mut state = ControllerState {
        on_ground: true,
        ..default_state()
    };

    // Grounded press: jump goes through with the base impulse
    assert!(state.can_jump(t.allowed_jumps));
    let impulse = t.jump_impulse_for(state.jumps_used);
    assert_eq!(impulse, 5.0);
    state.register_jump();
    assert_eq!(state.jumps_used, 1);
    assert!(state.jump_queued);

    // Airborne press with the budget spent: blocked
    state.on_ground = false;
    assert!(!state.can_jump(t.allowed_jumps));

    // Landing refunds the budget on the next frame update
    state.on_ground = true;
    if state.on_ground && state.jumps_used > 0 {
        state.jumps_used = 0;
    }
    assert_eq!(state.jumps_used, 0);
    assert!(state.can_jump(t.allowed_jumps));
}

// -----------------------------------------------------------------------------
// Jump-arc shaping
// -----------------------------------------------------------------------------

#[test]
fn test_cut_halves_ascent_when_released() {
    assert_eq!(cut_jump_velocity(6.0, false), 3.0);
}

#[test]
fn test_cut_noop_while_held() {
    assert_eq!(cut_jump_velocity(6.0, true), 6.0);
}

#[test]
fn test_cut_noop_while_descending() {
    assert_eq!(cut_jump_velocity(-4.0, false), -4.0);
    assert_eq!(cut_jump_velocity(0.0, false), 0.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_step_scenario() {
    // axis 0.5, speed 5, dt 0.02 -> 0.05 units
    assert!((horizontal_step(0.5, 5.0, 0.02) - 0.05).abs() < 1e-6);
    assert!((horizontal_step(-0.5, 5.0, 0.02) + 0.05).abs() < 1e-6);
}

#[test]
fn test_facing_follows_axis_sign() {
    assert_eq!(Facing::from_axis(0.5, Facing::Left), Facing::Right);
    assert_eq!(Facing::from_axis(-0.5, Facing::Right), Facing::Left);
    // Zero input keeps the current facing
    assert_eq!(Facing::from_axis(0.0, Facing::Left), Facing::Left);
}

// -----------------------------------------------------------------------------
// Move intent edges
// -----------------------------------------------------------------------------

#[test]
fn test_move_edge_sets_moving() {
    let mut state = default_state();

    assert!(state.apply_move_axis(0.5));
    assert!(state.moving);
    assert_eq!(state.move_axis, 0.5);

    assert!(state.apply_move_axis(0.0));
    assert!(!state.moving);
}

#[test]
fn test_unchanged_axis_is_not_a_notification() {
    let mut state = default_state();
    assert!(state.apply_move_axis(1.0));
    assert!(!state.apply_move_axis(1.0));
}

#[test]
fn test_held_key_does_not_reassert_moving_during_attack() {
    let mut state = default_state();
    state.apply_move_axis(1.0);
    assert!(state.moving);

    state.begin_attack();
    assert!(!state.moving);

    // Axis unchanged while held: no notification, moving stays suppressed
    assert!(!state.apply_move_axis(1.0));
    assert!(!state.moving);

    state.end_attack();
    assert!(state.moving);
}

// -----------------------------------------------------------------------------
// Attack lock
// -----------------------------------------------------------------------------

#[test]
fn test_attack_flags_on_begin_and_end() {
    let mut state = default_state();
    state.moving = true;

    state.begin_attack();
    assert!(state.attacking);
    assert!(!state.moving);

    state.end_attack();
    assert!(!state.attacking);
    // Restored unconditionally, even without re-checking the input
    assert!(state.moving);
}

#[test]
fn test_attack_lock_lifecycle() {
    let mut lock = AttackLock::default();
    assert!(!lock.is_active());
    assert!(!lock.tick(0.1));

    lock.start(0.24);
    assert!(lock.is_active());
    assert!(!lock.tick(0.1));
    assert!(lock.tick(0.2));
    // Already expired: no second expiry
    assert!(!lock.tick(0.1));
}

#[test]
fn test_retrigger_during_lock_keeps_timer() {
    let mut state = default_state();
    let mut lock = AttackLock::default();

    state.begin_attack();
    lock.start(0.24);
    lock.tick(0.1);
    let remaining = lock.timer;

    // Second press is gated on the attacking flag and never restarts the lock
    if !state.attacking {
        lock.start(0.24);
    }
    assert_eq!(lock.timer, remaining);
}

// -----------------------------------------------------------------------------
// Tuning
// -----------------------------------------------------------------------------

#[test]
fn test_tuning_defaults() {
    let t = ControllerTuning::default();
    assert!(t.move_speed > 0.0);
    assert!(t.jump_impulse > 0.0);
    assert!(t.allowed_jumps >= 1);
    assert!(t.ground_ray_length > 0.0);
    assert!(!t.continuous_jump_cut);
}

fn default_state() -> ControllerState {
    ControllerState::default()
}
