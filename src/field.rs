// The drifting particle field: a fixed-size generation of particles over a
// surface, stepped once per frame and joined by faint lines when close.

use crate::config::FieldConfig;
use crate::error::AnimatorError;
use crate::particle::Particle;
use crate::renderer::Renderer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecmath::Vector2;

// A line between two particles closer than the link distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub alpha: f64,
}

pub struct ParticleField<R: Rng = StdRng> {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(width: f64, height: f64, config: FieldConfig) -> Result<Self, AnimatorError> {
        ParticleField::with_rng(width, height, config, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(width: f64, height: f64, config: FieldConfig, rng: R) -> Result<Self, AnimatorError> {
        config.validate()?;
        let mut field = ParticleField {
            width: extent(width),
            height: extent(height),
            config,
            particles: Vec::new(),
            rng,
        };
        field.regenerate();
        Ok(field)
    }

    // Throws away every particle and spawns a fresh generation for the current size.
    pub fn regenerate(&mut self) {
        let count = self.config.particle_count(self.width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, self.width, self.height, &self.config);
            self.particles.push(p);
        }
        log::debug!(
            "spawned {} particles for {}x{} surface",
            count,
            self.width,
            self.height
        );
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = extent(width);
        self.height = extent(height);
        self.regenerate();
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    // Every unordered pair strictly closer than `link_distance`, faded by distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max_dist = self.config.link_distance;
        let max_dist_sq = max_dist * max_dist;
        let link_alpha = self.config.link_alpha;
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let dist_sq = vecmath::vec2_square_len(vecmath::vec2_sub(a.pos, b.pos));
                if dist_sq < max_dist_sq {
                    Some(Link {
                        from: a.pos,
                        to: b.pos,
                        alpha: link_alpha * (1.0 - dist_sq.sqrt() / max_dist),
                    })
                } else {
                    None
                }
            })
        })
    }

    pub fn draw<D: Renderer + ?Sized>(&self, renderer: &mut D) {
        for particle in &self.particles {
            renderer.fill_circle(particle.pos, particle.radius, particle.color);
        }
        for link in self.links() {
            renderer.stroke_line(
                link.from,
                link.to,
                self.config.link_color.with_alpha(link.alpha),
                self.config.line_width,
            );
        }
    }

    // One frame: clear, move everything, then paint circles and lines.
    pub fn tick<D: Renderer + ?Sized>(&mut self, renderer: &mut D) {
        renderer.clear(self.width, self.height);
        self.step();
        self.draw(renderer);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
impl<R: Rng> ParticleField<R> {
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

fn extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
