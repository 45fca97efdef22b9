//! Player domain: system modules for controller updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, reset_jumps_on_ground};
pub(crate) use input::{apply_attack_intent, apply_jump_intent, apply_move_intent, sample_input};
pub(crate) use movement::{apply_horizontal_movement, shape_jump_arc, tick_attack_lock};
