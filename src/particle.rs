// Simple particle struct to keep track of individual position, velocity, size, and color.
// Only the position changes once a particle is spawned.

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use std::f64::consts::PI;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    // Uniform position over the surface, random heading and speed within the config's range
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let heading = rng.gen::<f64>() * 2.0 * PI;
        let speed = rng.gen::<f64>() * (config.max_speed - config.min_speed) + config.min_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let color = config.particle_colors.sample(rng);
        Particle::new(
            [wrap(pos_x, width), wrap(pos_y, height)],
            [speed * heading.cos(), speed * heading.sin()],
            radius,
            color,
        )
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    // Moves one frame along the velocity, reappearing on the opposite edge when
    // leaving the `width` x `height` surface.
    pub fn advance(&mut self, width: f64, height: f64) {
        let moved = vecmath::vec2_add(self.pos, self.vel);
        self.pos = [wrap(moved[0], width), wrap(moved[1], height)];
    }
}

// Wraps `value` into `[0, bound)`. A surface with no extent pins the axis at 0.
pub fn wrap(value: f64, bound: f64) -> f64 {
    if !(bound > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round up to `bound` for tiny negative inputs
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}
