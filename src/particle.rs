// Simple particle struct to keep track of individual position, velocity,
// and the pulse that makes its radius breathe

use rand::Rng;

use crate::config::FieldConfig;

// Pointer closer than this is treated as sitting on the particle: no push
pub const MIN_REPEL_DISTANCE: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub base_size: f64,
    pub pulse_speed: f64,
    pub size: f64,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], base_size: f64, pulse_speed: f64) -> Particle {
        Particle {
            pos,
            vel,
            base_size,
            pulse_speed,
            size: base_size,
        }
    }

    pub fn seed<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let base_size = rng.gen::<f64>() * config.size_range + config.min_size;
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            (rng.gen::<f64>() - 0.5) * config.base_speed,
            (rng.gen::<f64>() - 0.5) * config.base_speed,
        ];
        let pulse_speed = rng.gen::<f64>() * config.pulse_speed_range + config.min_pulse_speed;
        Particle::new(pos, vel, base_size, pulse_speed)
    }

    pub fn integrate(&mut self) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }

    pub fn pulse(&mut self, clock: f64, amplitude: f64) {
        self.size = self.base_size + (clock * self.pulse_speed).sin() * amplitude;
    }

    pub fn drawn_radius(&self) -> f64 {
        self.size.max(0.0)
    }

    // Flips the velocity on any axis that left the canvas. Position is left
    // alone, the flipped velocity carries it back over the following frames.
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    // Nudges the particle away from the pointer. Returns the length of the
    // nudge, zero when out of range or when the direction is undefined.
    pub fn repel(&mut self, pointer: [f64; 2], radius: f64, strength: f64) -> f64 {
        let to_pointer = glm::vec2(pointer[0] - self.pos[0], pointer[1] - self.pos[1]);
        let distance = glm::length(&to_pointer);
        if distance >= radius || distance < MIN_REPEL_DISTANCE {
            return 0.0;
        }
        let force = (radius - distance) / radius;
        let push = glm::normalize(&to_pointer) * (force * strength);
        self.pos[0] -= push.x;
        self.pos[1] -= push.y;
        force * strength
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(
            &glm::vec2(self.pos[0], self.pos[1]),
            &glm::vec2(other.pos[0], other.pos[1]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 2.0, 0.03)
    }

    #[test]
    fn seeded_particles_respect_config_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = Particle::seed(&mut rng, 800.0, 600.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            assert!(p.vel[0].abs() <= 0.2 && p.vel[1].abs() <= 0.2);
            assert!(p.base_size >= 1.0 && p.base_size <= 3.0);
            assert!(p.pulse_speed >= 0.02 && p.pulse_speed <= 0.07);
            assert_eq!(p.size, p.base_size);
        }
    }

    #[test]
    fn reflect_flips_only_the_crossed_axis() {
        let mut p = Particle::new([-0.1, 50.0], [-0.2, 0.1], 2.0, 0.03);
        p.reflect(100.0, 100.0);
        assert_eq!(p.vel, [0.2, 0.1]);
        assert_eq!(p.pos, [-0.1, 50.0]);

        let mut p = Particle::new([50.0, 100.5], [0.1, 0.2], 2.0, 0.03);
        p.reflect(100.0, 100.0);
        assert_eq!(p.vel, [0.1, -0.2]);
    }

    #[test]
    fn drawn_radius_never_negative() {
        let mut p = Particle::new([0.0, 0.0], [0.0, 0.0], 0.2, 1.0);
        p.pulse(-std::f64::consts::FRAC_PI_2, 0.5);
        assert!(p.size < 0.0);
        assert_eq!(p.drawn_radius(), 0.0);
    }

    #[test]
    fn repel_pushes_away_from_pointer() {
        let mut p = still(100.0, 100.0);
        let moved = p.repel([110.0, 100.0], 220.0, 3.0);
        assert!(moved > 0.0);
        assert!(p.pos[0] < 100.0);
        assert!((p.pos[1] - 100.0).abs() < 1e-12);
    }

    #[test]
    fn repel_is_zero_outside_radius_and_on_top_of_pointer() {
        let mut p = still(100.0, 100.0);
        assert_eq!(p.repel([320.0, 100.0], 220.0, 3.0), 0.0);
        assert_eq!(p.pos, [100.0, 100.0]);

        assert_eq!(p.repel([100.0, 100.0], 220.0, 3.0), 0.0);
        assert!(p.pos[0].is_finite() && p.pos[1].is_finite());
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(still(0.0, 0.0).distance_to(&still(3.0, 4.0)), 5.0);
    }
}
