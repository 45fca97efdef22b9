//! Player domain: input sampling and intent application.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::Animator;
use crate::player::{AttackLock, ControllerInput, ControllerState, ControllerTuning, Player};

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<ControllerInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x;
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    input.attack_just_pressed =
        keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Move notifications are change-only: the stored axis (and the animator's
/// moving parameter with it) updates only when the sampled value differs.
/// A key merely held down re-asserts nothing.
pub(crate) fn apply_move_intent(
    input: Res<ControllerInput>,
    mut query: Query<(&mut ControllerState, &mut Animator), With<Player>>,
) {
    for (mut state, mut animator) in &mut query {
        if state.apply_move_axis(input.axis_x) {
            animator.set_moving(state.moving);
        }
    }
}

pub(crate) fn apply_jump_intent(
    input: Res<ControllerInput>,
    tuning: Res<ControllerTuning>,
    mut query: Query<(&mut ControllerState, &mut Animator, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut animator, mut velocity) in &mut query {
        if input.jump_just_pressed {
            state.jump_held = true;
            // Allow a jump while grounded, or while jump budget remains
            if state.can_jump(tuning.allowed_jumps) {
                perform_jump(&mut state, &mut animator, &mut velocity, &tuning);
            }
        }
        if input.jump_just_released {
            state.jump_held = false;
        }
    }
}

/// Zero the vertical velocity, fire the jump trigger, apply this jump's
/// impulse, and queue arc shaping for the next fixed tick. Preconditions are
/// the caller's problem; this always succeeds.
fn perform_jump(
    state: &mut ControllerState,
    animator: &mut Animator,
    velocity: &mut LinearVelocity,
    tuning: &ControllerTuning,
) {
    velocity.y = 0.0;
    animator.trigger_jump();
    velocity.y += tuning.jump_impulse_for(state.jumps_used);
    state.register_jump();
    debug!("Jump {}: impulse {}", state.jumps_used, velocity.y);
}

pub(crate) fn apply_attack_intent(
    input: Res<ControllerInput>,
    mut query: Query<(&mut ControllerState, &mut AttackLock, &mut Animator), With<Player>>,
) {
    for (mut state, mut lock, mut animator) in &mut query {
        if !input.attack_just_pressed {
            continue;
        }
        // A second press during the lock is ignored outright
        if state.attacking {
            continue;
        }
        animator.trigger_attack();
        state.begin_attack();
        // The lock runs for the authored length of the attack animation,
        // read at trigger time
        lock.start(animator.state_length());
        debug!("Attack lock started: {:.2}s", lock.timer);
    }
}
