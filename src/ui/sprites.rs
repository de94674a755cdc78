//! Placeholder visuals: coloured blocks for the player and fixtures, and the
//! arrow prompt above the pole.

use bevy::prelude::*;

use crate::fishing::FishingSession;
use crate::player::PlayerMovement;
use crate::shared::*;
use crate::world::{FishingPole, Oven};

const COLOR_PLAYER: Color = Color::srgb(0.2, 0.5, 0.8);
const COLOR_POLE: Color = Color::srgb(0.55, 0.35, 0.15);
const COLOR_OVEN: Color = Color::srgb(0.45, 0.45, 0.5);
const COLOR_ARROW: Color = Color::srgb(1.0, 0.9, 0.2);

/// Height of every placeholder block.
const BLOCK_HEIGHT: f32 = 21.0;
const ARROW_SIZE: f32 = 12.0;

#[derive(Component, Debug)]
pub struct ArrowPrompt;

/// Give newly spawned track entities something to draw.
pub fn attach_placeholder_sprites(
    mut commands: Commands,
    added: Query<
        (Entity, &Footprint, Has<Player>, Has<FishingPole>, Has<Oven>),
        Added<Footprint>,
    >,
) {
    for (entity, footprint, is_player, is_pole, is_oven) in &added {
        let color = if is_player {
            COLOR_PLAYER
        } else if is_pole {
            COLOR_POLE
        } else if is_oven {
            COLOR_OVEN
        } else {
            continue;
        };
        commands.entity(entity).insert((
            Sprite {
                color,
                custom_size: Some(Vec2::new(footprint.half_width * 2.0, BLOCK_HEIGHT)),
                ..default()
            },
            Visibility::default(),
        ));
    }
}

pub fn spawn_arrow_prompt(mut commands: Commands, layout: Res<TrackLayout>) {
    commands.spawn((
        ArrowPrompt,
        Sprite {
            color: COLOR_ARROW,
            custom_size: Some(Vec2::splat(ARROW_SIZE)),
            ..default()
        },
        Transform::from_xyz(layout.fishing_spot.anchor, TRACK_Y + BLOCK_HEIGHT, 20.0),
        Visibility::Hidden,
    ));
}

pub fn update_arrow_prompt(
    session: Res<FishingSession>,
    mut query: Query<&mut Visibility, With<ArrowPrompt>>,
) {
    if !session.is_changed() {
        return;
    }
    let shown = session.challenge().is_visible();
    for mut visibility in &mut query {
        *visibility = if shown {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub fn face_player_sprite(mut query: Query<(&PlayerMovement, &mut Sprite), With<Player>>) {
    for (movement, mut sprite) in &mut query {
        sprite.flip_x = movement.facing_left;
    }
}
