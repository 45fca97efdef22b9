//! Animation domain: frame-stepped state machine plugin and exports.

mod state;


pub use state::{AnimationFinished, AnimationState, Animator};

use bevy::prelude::*;

use crate::animation::state::{advance_frames, settle_finished};

pub struct AnimatorPlugin;

impl Plugin for AnimatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>()
            .add_systems(Update, (advance_frames, settle_finished).chain());
    }
}
