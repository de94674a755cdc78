use bevy::prelude::*;
use crate::shared::*;
use super::spawn::PlayerMovement;

/// Walking direction for this frame. Left wins when both are held.
pub fn walk_direction(input: &PlayerInput) -> f32 {
    if input.move_left {
        -1.0
    } else if input.move_right {
        1.0
    } else {
        0.0
    }
}

/// Next x position: constant speed, clamped to the walkable stretch between
/// the oven and the pole. The clamp stands in for the fixtures' colliders.
pub fn step_position(x: f32, direction: f32, speed: f32, dt: f32, bounds: (f32, f32)) -> f32 {
    (x + direction * speed * dt).clamp(bounds.0, bounds.1)
}

/// Reads move intents and slides the player along the track.
pub fn player_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    layout: Res<TrackLayout>,
    mut query: Query<(&mut Transform, &mut PlayerMovement, &Footprint), With<Player>>,
) {
    let Ok((mut transform, mut movement, footprint)) = query.get_single_mut() else {
        return;
    };

    let direction = walk_direction(&input);
    if direction != 0.0 {
        movement.facing_left = direction < 0.0;
    }

    let bounds = layout.walkable_range(footprint.half_width);
    transform.translation.x = step_position(
        transform.translation.x,
        direction,
        layout.walk_speed,
        time.delta_secs(),
        bounds,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_direction_prefers_left() {
        let both = PlayerInput {
            move_left: true,
            move_right: true,
            ..default()
        };
        assert_eq!(walk_direction(&both), -1.0);
        let right = PlayerInput {
            move_right: true,
            ..default()
        };
        assert_eq!(walk_direction(&right), 1.0);
        assert_eq!(walk_direction(&PlayerInput::default()), 0.0);
    }

    #[test]
    fn test_step_position_moves_at_speed() {
        assert_eq!(step_position(240.0, 1.0, 100.0, 0.5, (52.0, 462.0)), 290.0);
        assert_eq!(step_position(240.0, -1.0, 100.0, 0.5, (52.0, 462.0)), 190.0);
        assert_eq!(step_position(240.0, 0.0, 100.0, 0.5, (52.0, 462.0)), 240.0);
    }

    #[test]
    fn test_step_position_stops_at_fixtures() {
        assert_eq!(step_position(455.0, 1.0, 100.0, 1.0, (52.0, 462.0)), 462.0);
        assert_eq!(step_position(60.0, -1.0, 100.0, 1.0, (52.0, 462.0)), 52.0);
    }
}
