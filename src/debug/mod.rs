//! Debug domain: dev overlay for live controller state.
//!
//! Toggled with F1 or backtick. Shows the controller flags and draws the
//! grounded probe ray so its reach can be tuned visually.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{ControllerState, ControllerTuning, Player};

/// Resource tracking overlay visibility.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay text node.
#[derive(Component, Debug)]
pub struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay, draw_ground_ray).chain());
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;

    if debug_state.overlay_visible {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    debug_state: Res<DebugState>,
    player: Query<(&Transform, &LinearVelocity, &ControllerState), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }

    if let (Ok((transform, velocity, state)), Ok(mut text)) = (player.single(), overlay.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nGrounded: {}\nJumps used: {}\nMoving: {}  Attacking: {}\nJump held: {}  Queued: {}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            state.on_ground,
            state.jumps_used,
            state.moving,
            state.attacking,
            state.jump_held,
            state.jump_queued,
        );
    }
}

fn draw_ground_ray(
    debug_state: Res<DebugState>,
    tuning: Res<ControllerTuning>,
    player: Query<(&Transform, &Collider, &ControllerState), With<Player>>,
    mut gizmos: Gizmos,
) {
    if !debug_state.overlay_visible {
        return;
    }

    for (transform, collider, state) in &player {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };
        let origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let end = origin - Vec2::new(0.0, tuning.ground_ray_length);
        let color = if state.on_ground {
            Color::srgb(0.3, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.3)
        };
        gizmos.line_2d(origin, end, color);
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
