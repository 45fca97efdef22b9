//! Player domain: controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AttackLock, ControllerState, Facing, GameLayer, Ground, Player};
pub use resources::{ControllerInput, ControllerTuning};

use bevy::prelude::*;

use crate::player::bootstrap::spawn_player;
use crate::player::systems::{
    apply_attack_intent, apply_horizontal_movement, apply_jump_intent, apply_move_intent,
    detect_ground, reset_jumps_on_ground, sample_input, shape_jump_arc, tick_attack_lock,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<ControllerInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    sample_input,
                    apply_move_intent,
                    apply_jump_intent,
                    apply_attack_intent,
                    detect_ground,
                    reset_jumps_on_ground,
                    apply_horizontal_movement,
                    tick_attack_lock,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, shape_jump_arc);
    }
}
