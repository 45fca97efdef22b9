//! Player domain: per-frame displacement, fixed-tick jump shaping, and the
//! attack-lock countdown.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{AttackLock, ControllerState, ControllerTuning, Facing, Player};

/// Horizontal displacement for one frame.
pub(crate) fn horizontal_step(axis: f32, speed: f32, dt: f32) -> f32 {
    axis * speed * dt
}

/// Halve ascent velocity when the jump button has been released.
pub(crate) fn cut_jump_velocity(vy: f32, jump_held: bool) -> f32 {
    if vy > 0.0 && !jump_held { vy * 0.5 } else { vy }
}

/// Displace the transform directly while the moving flag is set; suppression
/// during an attack happens solely through that flag.
pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    tuning: Res<ControllerTuning>,
    mut query: Query<(&mut Transform, &mut Sprite, &mut ControllerState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut sprite, mut state) in &mut query {
        if !state.moving {
            continue;
        }
        transform.translation.x += horizontal_step(state.move_axis, tuning.move_speed, dt);
        sprite.flip_x = state.move_axis < 0.0;
        state.facing = Facing::from_axis(state.move_axis, state.facing);
    }
}

/// Consume the queued jump on this fixed tick. Shaping applies only here
/// unless the continuous variant is enabled in tuning, in which case every
/// released ascending tick is cut.
pub(crate) fn shape_jump_arc(
    tuning: Res<ControllerTuning>,
    mut query: Query<(&mut ControllerState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.jump_queued {
            velocity.y = cut_jump_velocity(velocity.y, state.jump_held);
            // One-shot: cleared whether or not the cut branch ran
            state.jump_queued = false;
        } else if tuning.continuous_jump_cut && !state.on_ground {
            velocity.y = cut_jump_velocity(velocity.y, state.jump_held);
        }
    }
}

pub(crate) fn tick_attack_lock(
    time: Res<Time>,
    mut query: Query<(&mut ControllerState, &mut AttackLock), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut lock) in &mut query {
        if lock.tick(dt) {
            state.end_attack();
            debug!("Attack lock released");
        }
    }
}
