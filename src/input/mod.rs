use bevy::input::InputSystem;
use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<KeyBindings>()
            .add_systems(PreUpdate, reset_and_read_input.after(InputSystem));
    }
}

/// The single point where hardware input becomes game intents.
fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    state: Res<State<GameState>>,
    mut input: ResMut<PlayerInput>,
) {
    *input = match state.get() {
        GameState::Loading => PlayerInput::default(),
        GameState::Playing => read_intents(&keys, &bindings),
    };
}

/// Map the keyboard onto intents. Walking is a level (held), every other
/// intent is an edge so one press is one event.
pub fn read_intents(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> PlayerInput {
    PlayerInput {
        move_left: keys.pressed(bindings.move_left)
            || bindings.alt_left.is_some_and(|key| keys.pressed(key)),
        move_right: keys.pressed(bindings.move_right)
            || bindings.alt_right.is_some_and(|key| keys.pressed(key)),
        start_fishing: keys.just_pressed(bindings.start_fishing),
        hit: keys.just_pressed(bindings.hit),
        interact: keys.just_pressed(bindings.interact),
        consume: keys.just_pressed(bindings.consume),
    }
}
