use hecs::World;

use crate::components::{Paddle, Side};
use crate::map::GameMap;
use crate::resources::{KeyState, KEY_DOWN, KEY_UP};

/// Move the player paddle from the held arrow keys.
///
/// Up and down are applied one after the other, each clamped, so holding both
/// cancels out anywhere away from the edges.
pub fn apply_player_input(world: &mut World, keys: &KeyState, map: &GameMap) {
    let up = keys.is_pressed(KEY_UP);
    let down = keys.is_pressed(KEY_DOWN);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        if up {
            paddle.move_by(-paddle.speed, map);
        }
        if down {
            paddle.move_by(paddle.speed, map);
        }
    }
}
