use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use pierside::clock::Scheduler;
use pierside::shared::*;
use pierside::{crafting, data, fishing, input, player, ui, world};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pierside".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(ClearColor(Color::srgb(0.85, 1.0, 0.976)))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<Inventory>()
        .init_resource::<PlayerInput>()
        .init_resource::<FishingConfig>()
        .init_resource::<TrackLayout>()
        .init_resource::<Scheduler>()
        // Events
        .add_event::<FishingOutcomeEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(fishing::FishingPlugin)
        .add_plugins(crafting::CookingPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Camera, once the layout has been loaded
        .add_systems(OnEnter(GameState::Playing), setup_camera)
        .run();
}

/// Fixed camera over the whole pier, from the oven to the pole.
fn setup_camera(
    mut commands: Commands,
    layout: Res<TrackLayout>,
    existing: Query<(), With<Camera2d>>,
) {
    if !existing.is_empty() {
        return;
    }
    commands.spawn((Camera2d, Transform::from_xyz(layout.midpoint(), TRACK_Y, 0.0)));
}
