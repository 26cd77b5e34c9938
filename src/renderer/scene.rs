//! Scene rendering
//!
//! A pure read of the game state: clear, pipes, then birds on top.

use super::Surface;
use crate::sim::{Bird, GameState, Pipe};

/// Draw one frame of the given state
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let config = &state.config;
    surface.clear_rect(0.0, 0.0, config.field_width, config.field_height);

    for pipe in &state.pipes {
        draw_pipe(pipe, &config.pipe_color, surface);
    }
    for bird in &state.birds {
        draw_bird(bird, &config.bird_color, surface);
    }
}

fn draw_pipe<S: Surface + ?Sized>(pipe: &Pipe, color: &str, surface: &mut S) {
    surface.fill_rect(pipe.x, pipe.y, pipe.width, pipe.height, color);
}

fn draw_bird<S: Surface + ?Sized>(bird: &Bird, color: &str, surface: &mut S) {
    surface.fill_circle(bird.pos.x, bird.pos.y, bird.radius, color);
}
