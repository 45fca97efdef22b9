//! Player domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerTuning {
    pub move_speed: f32,
    /// Vertical velocity granted by the first jump.
    pub jump_impulse: f32,
    /// Multiplier applied to every jump after the first.
    pub extra_jump_scale: f32,
    /// Jumps allowed before a grounded reset is required.
    pub allowed_jumps: u32,
    /// Reach of the downward grounded probe, in world units.
    pub ground_ray_length: f32,
    /// When true, ascent velocity is cut on every fixed tick the jump button
    /// is released, instead of only on the tick that consumes a queued jump.
    pub continuous_jump_cut: bool,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            move_speed: 260.0,
            jump_impulse: 640.0,
            extra_jump_scale: 1.2,
            allowed_jumps: 1,
            ground_ray_length: 4.0,
            continuous_jump_cut: false,
        }
    }
}

impl ControllerTuning {
    /// Impulse magnitude for the next jump, given how many were already used.
    pub fn jump_impulse_for(&self, jumps_used: u32) -> f32 {
        if jumps_used == 0 {
            self.jump_impulse
        } else {
            self.jump_impulse * self.extra_jump_scale
        }
    }
}

/// Edge-detected input intents, rewritten every frame by input sampling.
#[derive(Resource, Debug, Default)]
pub struct ControllerInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub attack_just_pressed: bool,
}
