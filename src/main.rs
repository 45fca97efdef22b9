mod animation;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bramble".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 1800.0))
    .add_plugins((
        config::ConfigPlugin,
        core::CorePlugin,
        animation::AnimatorPlugin,
        player::PlayerPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
