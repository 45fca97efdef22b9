//! Core domain: camera and the static test stage.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, Ground};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, spawn_stage));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Floor slab plus two raised platforms, all on the ground layer.
fn spawn_stage(mut commands: Commands) {
    let slabs = [
        (Vec2::new(0.0, -200.0), Vec2::new(1200.0, 40.0)),
        (Vec2::new(-280.0, -60.0), Vec2::new(180.0, 20.0)),
        (Vec2::new(260.0, 20.0), Vec2::new(180.0, 20.0)),
    ];

    for (position, size) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color: Color::srgb(0.25, 0.3, 0.35),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }
}
