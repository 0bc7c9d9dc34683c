use crate::Color;

/// One short-lived mote of the pointer trail.
///
/// `life` counts frames since the particle was spawned and never passes
/// `max_life`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub life: u32,
    pub max_life: u32,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub fn respawn(
        &mut self,
        position: (f64, f64),
        velocity: (f64, f64),
        max_life: u32,
        size: f64,
        color: Color,
    ) {
        self.position = position;
        self.velocity = velocity;
        self.life = 0;
        self.max_life = max_life;
        self.size = size;
        self.color = color;
    }

    pub fn tick(&mut self) {
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.life = (self.life + 1).min(self.max_life);
    }

    /// Opacity, falling linearly from 1 at spawn to 0 at `max_life`.
    pub fn alpha(&self) -> f64 {
        if self.max_life == 0 {
            0.0
        } else {
            1.0 - self.life as f64 / self.max_life as f64
        }
    }

    pub fn is_expired(&self) -> bool {
        self.life >= self.max_life
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(max_life: u32) -> Particle {
        let mut particle = Particle::default();
        particle.respawn((10.0, 10.0), (1.0, -0.5), max_life, 2.0, Color::default());
        particle
    }

    #[test]
    fn test_tick_integrates_velocity() {
        let mut particle = particle(40);

        particle.tick();
        particle.tick();

        assert_eq!(particle.position, (12.0, 9.0));
        assert_eq!(particle.life, 2);
        assert!((particle.alpha() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_is_zero_at_max_life() {
        let mut particle = particle(3);

        for _ in 0..3 {
            assert!(!particle.is_expired());
            particle.tick();
        }

        assert_eq!(particle.life, particle.max_life);
        assert_eq!(particle.alpha(), 0.0);
        assert!(particle.is_expired());

        particle.tick();
        assert_eq!(particle.life, 3);
    }

    #[test]
    fn test_respawn_resets_life() {
        let mut particle = particle(3);
        particle.tick();
        particle.respawn((0.0, 0.0), (0.0, 0.0), 60, 1.0, Color::default());

        assert_eq!(particle.life, 0);
        assert_eq!(particle.alpha(), 1.0);
    }
}
