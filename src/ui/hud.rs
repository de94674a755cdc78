use bevy::prelude::*;

use crate::fishing::FishingSession;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug)]
pub struct HudRoot;

#[derive(Component, Debug)]
pub struct HudCountdownText;

#[derive(Component, Debug)]
pub struct HudSlotText;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN HUD
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(28.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
        ))
        .with_children(|bar| {
            bar.spawn((
                HudSlotText,
                Text::new(slot_label(FishSlot::Empty)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(slot_color(FishSlot::Empty)),
            ));
            bar.spawn((
                HudCountdownText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn despawn_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE
// ═══════════════════════════════════════════════════════════════════════

pub fn update_countdown_display(
    session: Res<FishingSession>,
    mut query: Query<&mut Text, With<HudCountdownText>>,
) {
    if !session.is_changed() {
        return;
    }
    for mut text in &mut query {
        **text = countdown_label(session.remaining_seconds());
    }
}

pub fn update_slot_display(
    inventory: Res<Inventory>,
    mut query: Query<(&mut Text, &mut TextColor), With<HudSlotText>>,
) {
    if !inventory.is_changed() {
        return;
    }
    let slot = inventory.current();
    for (mut text, mut color) in &mut query {
        **text = slot_label(slot).to_string();
        *color = TextColor(slot_color(slot));
    }
}

/// Blank while no session is running.
pub fn countdown_label(remaining: Option<u32>) -> String {
    remaining.map(|s| s.to_string()).unwrap_or_default()
}

pub fn slot_label(slot: FishSlot) -> &'static str {
    match slot {
        FishSlot::Empty => "Slot: empty",
        FishSlot::Caught => "Slot: raw fish",
        FishSlot::Cooked => "Slot: cooked fish",
    }
}

pub fn slot_color(slot: FishSlot) -> Color {
    match slot {
        FishSlot::Empty => Color::srgb(0.8, 0.8, 0.8),
        FishSlot::Caught => Color::srgb(0.5, 0.75, 1.0),
        FishSlot::Cooked => Color::srgb(1.0, 0.6, 0.3),
    }
}
