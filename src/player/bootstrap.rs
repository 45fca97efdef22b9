//! Player domain: character spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::Animator;
use crate::player::{AttackLock, ControllerState, GameLayer, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        // Identity & controller state
        (
            Player,
            ControllerState::default(),
            AttackLock::default(),
            Animator::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 40.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
