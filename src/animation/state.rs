//! Animation state machine and playback.
//!
//! Handles animation states (idle, run, jump, attack) and frame progression.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

/// Animation states for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Attack,
}

impl AnimationState {
    fn looping(self) -> bool {
        matches!(self, AnimationState::Idle | AnimationState::Run)
    }

    fn frame_count(self) -> u32 {
        match self {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Attack => 3,
        }
    }

    fn frame_duration(self) -> f32 {
        match self {
            AnimationState::Attack => 0.08, // Faster attacks
            _ => 0.15,
        }
    }
}

/// Component for animation playback. The controller drives it through the
/// boolean moving parameter and the jump/attack triggers.
#[derive(Component, Debug)]
pub struct Animator {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Boolean parameter set from the move input.
    pub moving: bool,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for Animator {
    fn default() -> Self {
        let state = AnimationState::Idle;
        Self {
            state,
            previous_state: state,
            moving: false,
            current_frame: 0,
            total_frames: state.frame_count(),
            frame_timer: 0.0,
            frame_duration: state.frame_duration(),
            looping: state.looping(),
            finished: false,
        }
    }
}

impl Animator {
    /// Set the animation state, resetting playback if the state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.looping = state.looping();
        self.total_frames = state.frame_count();
        self.frame_duration = state.frame_duration();
    }

    /// Boolean "moving" parameter. Locomotion follows it immediately when no
    /// one-shot state is playing, and again once a one-shot settles.
    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
        if self.state.looping() {
            let next = self.locomotion_state();
            self.set_state(next);
        }
    }

    pub fn trigger_jump(&mut self) {
        self.force_state(AnimationState::Jump);
    }

    pub fn trigger_attack(&mut self) {
        self.force_state(AnimationState::Attack);
    }

    /// Duration of the currently playing state.
    pub fn state_length(&self) -> f32 {
        self.total_frames as f32 * self.frame_duration
    }

    /// Which looping state the moving parameter currently selects.
    pub fn locomotion_state(&self) -> AnimationState {
        if self.moving {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }

    /// Triggers restart playback even when the state is already active.
    fn force_state(&mut self, state: AnimationState) {
        if self.state == state {
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;
        } else {
            self.set_state(state);
        }
    }
}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// System that advances animation frames based on time.
pub(crate) fn advance_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut Animator)>,
    mut finished: MessageWriter<AnimationFinished>,
) {
    for (entity, mut animator) in &mut query {
        if animator.finished {
            continue;
        }

        animator.frame_timer += time.delta_secs();

        if animator.frame_timer >= animator.frame_duration {
            animator.frame_timer -= animator.frame_duration;
            animator.current_frame += 1;

            if animator.current_frame >= animator.total_frames {
                if animator.looping {
                    animator.current_frame = 0;
                } else {
                    animator.current_frame = animator.total_frames - 1;
                    animator.finished = true;
                    finished.write(AnimationFinished {
                        entity,
                        state: animator.state,
                    });
                }
            }
        }
    }
}

/// Finished one-shots fall back to the locomotion state.
pub(crate) fn settle_finished(mut query: Query<&mut Animator>) {
    for mut animator in &mut query {
        if animator.finished {
            let next = animator.locomotion_state();
            animator.set_state(next);
        }
    }
}
