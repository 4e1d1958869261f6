use crate::color::Color;
use rand::Rng;

/// Half-open `[min, max)` range a particle attribute is sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Span { min, max }
    }

    /// An empty or inverted span always yields `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Tuning for a [`ParticleField`](crate::field::ParticleField).
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Particle to particle connection threshold, in pixels.
    pub link_distance: f64,
    pub pointer_links: bool,
    /// Particle to pointer connection threshold, in pixels.
    pub pointer_link_distance: f64,
    /// Dimension change that forces the particle set to be regenerated.
    pub resize_tolerance: u32,
    /// Each velocity component is `(u - 0.5) * velocity_spread`.
    pub velocity_spread: f64,
    pub radius: Span,
    pub glow_radius: Span,
    pub opacity: Span,
    pub core_boost: f64,
    pub glow_mid_offset: f64,
    pub glow_mid_fraction: f64,
    pub link_fade: f64,
    pub link_width: f64,
    pub glow_color: Color,
    pub core_color: Color,
    /// Time every frame with `console.time`.
    pub trace: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 50,
            link_distance: 150.0,
            pointer_links: true,
            pointer_link_distance: 200.0,
            resize_tolerance: 50,
            velocity_spread: 0.15,
            radius: Span::new(1.0, 3.0),
            glow_radius: Span::new(10.0, 40.0),
            opacity: Span::new(0.3, 0.8),
            core_boost: 0.2,
            glow_mid_offset: 0.3,
            glow_mid_fraction: 0.4,
            link_fade: 0.2,
            link_width: 1.0,
            glow_color: Color::from_u32(0xffaa00ff),
            core_color: Color::from_u32(0xffdc64ff),
            trace: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Span;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn span_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let span = Span::new(10.0, 40.0);
        for _ in 0..500 {
            assert!(span.contains(span.sample(&mut rng)));
        }
    }

    #[test]
    fn degenerate_span_yields_min() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Span::new(2.0, 2.0).sample(&mut rng), 2.0);
        assert_eq!(Span::new(5.0, 1.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn narrow_span_never_reaches_max() {
        let mut rng = StdRng::seed_from_u64(9);
        let span = Span::new(1.0, 1.0 + f64::EPSILON);
        for _ in 0..10_000 {
            assert!(span.sample(&mut rng) < span.max);
        }
    }
}
