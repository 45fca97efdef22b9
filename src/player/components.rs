//! Player domain: controller state, physics layers, and the attack lock.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing follows the axis sign; zero input keeps the current facing.
    pub fn from_axis(axis: f32, current: Facing) -> Facing {
        if axis < 0.0 {
            Facing::Left
        } else if axis > 0.0 {
            Facing::Right
        } else {
            current
        }
    }
}

/// Controller flags and counters, owned exclusively by the player systems.
#[derive(Component, Debug, Default)]
pub struct ControllerState {
    /// Last reported horizontal axis value, in [-1, 1].
    pub move_axis: f32,
    /// Jumps performed since the last grounded reset.
    pub jumps_used: u32,
    pub on_ground: bool,
    pub moving: bool,
    /// One-shot: a jump impulse is pending for the next fixed tick.
    pub jump_queued: bool,
    pub attacking: bool,
    pub jump_held: bool,
    pub facing: Facing,
}

impl ControllerState {
    /// A jump is allowed while grounded or while jump budget remains.
    pub fn can_jump(&self, allowed_jumps: u32) -> bool {
        self.on_ground || self.jumps_used < allowed_jumps
    }

    /// Store a new axis value and derive the moving flag. Returns false when
    /// the value is unchanged; callers treat that as no notification at all.
    pub fn apply_move_axis(&mut self, axis: f32) -> bool {
        if axis == self.move_axis {
            return false;
        }
        self.move_axis = axis;
        self.moving = axis != 0.0;
        true
    }

    /// Book-keeping for a jump that was just performed.
    pub fn register_jump(&mut self) {
        self.jumps_used += 1;
        self.jump_queued = true;
    }

    pub fn begin_attack(&mut self) {
        self.moving = false;
        self.attacking = true;
    }

    /// End of the attack lock. Restores `moving` without consulting the
    /// current input state; with the axis at zero this still displaces
    /// nothing.
    pub fn end_attack(&mut self) {
        self.attacking = false;
        self.moving = true;
    }
}

/// Countdown active while the attack animation plays. Expiry performs the
/// idle transition synchronously within the frame update.
#[derive(Component, Debug, Default)]
pub struct AttackLock {
    pub timer: f32,
}

impl AttackLock {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    pub fn start(&mut self, duration: f32) {
        self.timer = duration;
    }

    /// Tick the lock down. Returns true on the frame it expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.timer <= 0.0 {
            return false;
        }
        self.timer -= dt;
        self.timer <= 0.0
    }
}
