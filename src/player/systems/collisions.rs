//! Player domain: grounded probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{ControllerState, ControllerTuning, GameLayer, Player};

/// Cast a short ray downward from the player's feet against the ground
/// layer. Pure query, runs every frame.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<ControllerTuning>,
    mut query: Query<(&Transform, &Collider, &mut ControllerState), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_ray_length,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Landed: jumps_used={}", state.jumps_used);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: jumps_used={}", state.jumps_used);
        }
    }
}

/// Grounded contact refunds the whole jump budget.
pub(crate) fn reset_jumps_on_ground(mut query: Query<&mut ControllerState, With<Player>>) {
    for mut state in &mut query {
        if state.on_ground && state.jumps_used > 0 {
            state.jumps_used = 0;
        }
    }
}
