// Simulation context for the background: viewport, particle set, pointer and
// animation clock. Event handlers only touch it through set_pointer/resize;
// everything else happens inside tick.

use rand::rngs::StdRng;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::theme::{FieldPalette, Theme};

// Document coordinates far outside any canvas, so nothing is repelled
// before the first pointer move
pub const POINTER_SENTINEL: [f64; 2] = [-1000.0, -1000.0];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
    pub repelled: usize,
}

pub struct ParticleField {
    config: FieldConfig,
    rng: StdRng,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: [f64; 2],
    clock: f64,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: u32, height: u32, rng: StdRng) -> ParticleField {
        let mut field = ParticleField {
            config,
            rng,
            width: width as f64,
            height: height as f64,
            particles: Vec::new(),
            pointer: POINTER_SENTINEL,
            clock: 0.0,
        };
        field.reseed();
        field
    }

    // Throws away the current set and seeds a fresh one over the viewport
    pub fn reseed(&mut self) {
        let mut particles = Vec::with_capacity(self.config.particle_count);
        for _ in 0..self.config.particle_count {
            particles.push(Particle::seed(
                &mut self.rng,
                self.width,
                self.height,
                &self.config,
            ));
        }
        self.particles = particles;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
        self.reseed();
        log::debug!(
            "reseeded {} particles for {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    // Stores the pointer in document coordinates; tick maps it back into
    // the fixed canvas using the scroll offset current at that frame.
    pub fn set_pointer(&mut self, client_x: f64, client_y: f64, scroll_y: f64) {
        self.pointer = [client_x, client_y + scroll_y];
    }

    pub fn tick<S: Surface>(&mut self, surface: &mut S, theme: Theme, scroll_y: f64) -> FrameStats {
        self.clock += self.config.clock_step;
        surface.clear(self.width, self.height);

        let palette = FieldPalette::for_theme(theme);
        let pointer = [self.pointer[0], self.pointer[1] - scroll_y];
        let config = &self.config;
        let mut stats = FrameStats {
            particles: self.particles.len(),
            ..FrameStats::default()
        };

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.integrate();
            p.pulse(self.clock, config.pulse_amplitude);
            p.reflect(self.width, self.height);
            if p.repel(pointer, config.interaction_radius, config.repel_strength) > 0.0 {
                stats.repelled += 1;
            }
            surface.fill_circle(p.pos, p.drawn_radius(), &palette.particle);

            let p = self.particles[i];
            for other in &self.particles[i + 1..] {
                let distance = p.distance_to(other);
                if distance < config.connection_radius {
                    let width = (1.0 - distance / config.connection_radius) * config.link_width;
                    surface.stroke_line(p.pos, other.pos, width, &palette.link);
                    stats.links += 1;
                }
            }
        }

        stats
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> [f64; 2] {
        self.pointer
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
