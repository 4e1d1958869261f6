// Simple particle struct to keep track of individual position, velocity,
// and the sizes/opacity used to draw its glow and core

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub glow_radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        glow_radius: f64,
        opacity: f64,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            glow_radius,
            opacity,
        }
    }

    // Uniformly placed inside [0, width) x [0, height)
    pub fn random<R: Rng>(rng: &mut R, width: u32, height: u32, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width as f64;
        let pos_y = rng.gen::<f64>() * height as f64;
        let vel_x = (rng.gen::<f64>() - 0.5) * config.velocity_spread;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.velocity_spread;
        Particle::new(
            pos_x,
            pos_y,
            vel_x,
            vel_y,
            config.radius.sample(rng),
            config.glow_radius.sample(rng),
            config.opacity.sample(rng),
        )
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    pub fn core_opacity(&self, boost: f64) -> f64 {
        (self.opacity + boost).min(1.0)
    }

    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.contain(width, height);
    }

    // Reflects each axis independently back into [0, extent]; the velocity
    // sign always ends up pointing inward.
    pub fn contain(&mut self, width: f64, height: f64) {
        reflect_axis(&mut self.pos[0], &mut self.vel[0], width);
        reflect_axis(&mut self.pos[1], &mut self.vel[1], height);
    }
}

fn reflect_axis(pos: &mut f64, vel: &mut f64, extent: f64) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = 2.0 * extent - *pos;
        *vel = -vel.abs();
    } else {
        return;
    }
    // only reachable when a single step overshoots the whole surface
    if *pos < 0.0 || *pos > extent {
        *pos = pos.max(0.0).min(extent.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::Particle;
    use crate::config::FieldConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particles_respect_config() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let p = Particle::random(&mut rng, 800, 600, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0].abs() <= 0.075 && p.vel[1].abs() <= 0.075);
            assert!(config.radius.contains(p.radius));
            assert!(config.glow_radius.contains(p.glow_radius));
            assert!(config.opacity.contains(p.opacity));
        }
    }

    #[test]
    fn bounce_off_right_edge() {
        let mut p = Particle::new(99.95, 50.0, 0.1, 0.0, 1.0, 10.0, 0.5);
        p.advance(100.0, 100.0);
        assert!(p.pos[0] <= 100.0);
        assert!((p.pos[0] - 99.95).abs() < 1e-9);
        assert_eq!(p.vel, [-0.1, 0.0]);
    }

    #[test]
    fn bounce_is_per_axis() {
        let mut p = Particle::new(0.02, 50.0, -0.05, 0.05, 1.0, 10.0, 0.5);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel, [0.05, 0.05]);
        assert!((p.pos[1] - 50.05).abs() < 1e-9);
    }

    #[test]
    fn overshoot_past_whole_surface_is_contained() {
        let mut p = Particle::new(0.5, 0.5, 3.0, -3.0, 1.0, 10.0, 0.5);
        p.advance(1.0, 1.0);
        assert!(p.pos[0] >= 0.0 && p.pos[0] <= 1.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] <= 1.0);
        assert_eq!(p.speed(), Particle::new(0.0, 0.0, 3.0, -3.0, 0.0, 0.0, 0.0).speed());
    }

    #[test]
    fn core_opacity_caps_at_one() {
        let p = Particle::new(0.0, 0.0, 0.0, 0.0, 1.0, 10.0, 0.7);
        assert!((p.core_opacity(0.2) - 0.9).abs() < 1e-12);
        assert_eq!(p.core_opacity(0.5), 1.0);
    }
}
