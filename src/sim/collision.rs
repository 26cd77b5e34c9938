//! Collision detection
//!
//! The bird is tested as a single point: its radius is only visual, so a bird
//! that grazes a pipe corner with its edge is not a hit.

use super::bird::Bird;
use super::pipe::Pipe;

/// Bird centre above the ceiling or below the floor
pub fn out_of_bounds(bird: &Bird, field_height: f32) -> bool {
    bird.pos.y < 0.0 || bird.pos.y > field_height
}

/// Bird centre strictly inside the pipe rectangle
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe) -> bool {
    let p = bird.pos;
    p.x > pipe.x && p.x < pipe.right() && p.y > pipe.y && p.y < pipe.bottom()
}

/// Whether any bird has crashed
pub fn any_collision(birds: &[Bird], pipes: &[Pipe], field_height: f32) -> bool {
    birds.iter().any(|bird| {
        out_of_bounds(bird, field_height) || pipes.iter().any(|pipe| bird_pipe_collision(bird, pipe))
    })
}
