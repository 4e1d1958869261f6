// The particle field: a fixed-size set of drifting particles, bounced off the
// surface edges and linked by faint lines when close together.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::{GradientStop, Surface};
use rand::rngs::ThreadRng;
use rand::Rng;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

/// Opacity of a connection at `distance`, falling linearly from 1 at zero
/// distance to 0 at `threshold` and beyond.
pub fn link_opacity(distance: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / threshold).max(0.0)
}

pub struct ParticleField<R = ThreadRng> {
    config: FieldConfig,
    rng: R,
    width: u32,
    height: u32,
    // dimensions at the last regeneration, compared against the tolerance
    seeded_at: Option<(u32, u32)>,
    particles: Vec<Particle>,
    pointer: Option<Vector2<f64>>,
}

impl ParticleField<ThreadRng> {
    pub fn new(config: FieldConfig) -> Self {
        ParticleField::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        ParticleField {
            config,
            rng,
            width: 0,
            height: 0,
            seeded_at: None,
            particles: Vec::with_capacity(config.particle_count),
            pointer: None,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Adopts new surface dimensions. Returns `true` when the particle set
    /// was regenerated: on the first call, or when either dimension moved by
    /// more than `resize_tolerance` since the last regeneration.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.width = width;
        self.height = height;

        let tolerance = self.config.resize_tolerance;
        let needs_reseed = match self.seeded_at {
            None => true,
            Some((w, h)) => diff(w, width) > tolerance || diff(h, height) > tolerance,
        };

        if needs_reseed {
            self.reseed();
        } else {
            let (w, h) = (width as f64, height as f64);
            for particle in &mut self.particles {
                particle.contain(w, h);
            }
        }
        needs_reseed
    }

    /// Throws away every particle and samples a fresh set for the current size.
    pub fn reseed(&mut self) {
        let (width, height) = (self.width, self.height);
        self.seeded_at = Some((width, height));
        self.particles.clear();
        for _ in 0..self.config.particle_count {
            let particle = Particle::random(&mut self.rng, width, height, &self.config);
            self.particles.push(particle);
        }
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width as f64, self.height as f64);
        for particle in &mut self.particles {
            particle.advance(w, h);
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer
    }

    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), JsValue> {
        self.step();
        self.draw(surface)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), JsValue> {
        let config = &self.config;
        surface.clear(self.width as f64, self.height as f64);

        for p in &self.particles {
            let stops = [
                GradientStop {
                    offset: 0.0,
                    alpha: p.opacity,
                },
                GradientStop {
                    offset: config.glow_mid_offset,
                    alpha: p.opacity * config.glow_mid_fraction,
                },
                GradientStop {
                    offset: 1.0,
                    alpha: 0.0,
                },
            ];
            surface.glow(p.pos, p.glow_radius, config.glow_color, &stops)?;
            surface.disc(p.pos, p.radius, config.core_color, p.core_opacity(config.core_boost))?;
        }

        let pointer = if config.pointer_links { self.pointer } else { None };
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                self.link(surface, a.pos, b.pos, config.link_distance)?;
            }
            if let Some(pointer) = pointer {
                self.link(surface, a.pos, pointer, config.pointer_link_distance)?;
            }
        }
        Ok(())
    }

    fn link<S: Surface>(
        &self,
        surface: &mut S,
        from: Vector2<f64>,
        to: Vector2<f64>,
        threshold: f64,
    ) -> Result<(), JsValue> {
        let distance = vecmath::vec2_len(vecmath::vec2_sub(from, to));
        let opacity = link_opacity(distance, threshold);
        if opacity > 0.0 {
            surface.line(
                from,
                to,
                self.config.glow_color,
                opacity * self.config.link_fade,
                self.config.link_width,
            )?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }
}

fn diff(a: u32, b: u32) -> u32 {
    if a > b {
        a - b
    } else {
        b - a
    }
}
