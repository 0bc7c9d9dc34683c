use rand_chacha::rand_core::RngCore;

use crate::{
    random::{between, between_inclusive, pick, spread, unit},
    FieldSettings, Particle, ParticlePool, Surface,
};

/// The pointer trail: a bounded set of particles spawned near the pointer,
/// recycled through a [`ParticlePool`] once they fade out.
///
/// Every particle is owned by exactly one of the active list or the pool.
pub struct ParticleField<R: RngCore> {
    settings: FieldSettings,
    rng: R,
    pointer: Option<(f64, f64)>,
    active: Vec<Particle>,
    pool: ParticlePool,
}

impl<R: RngCore> ParticleField<R> {
    pub fn new(settings: FieldSettings, rng: R) -> ParticleField<R> {
        ParticleField {
            settings,
            active: Vec::new(),
            rng,
            pointer: None,
            pool: ParticlePool::new(),
        }
    }

    /// Records the pointer and maybe spawns a particle around it.
    ///
    /// Nothing spawns once `max_active` particles are alive, or when the
    /// spawn roll fails. Returns whether a particle was spawned.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.pointer = Some((x, y));

        if self.active.len() >= self.settings.max_active
            || unit(&mut self.rng) >= self.settings.spawn_chance
        {
            return false;
        }

        let particle = self.spawn(x, y);
        self.active.push(particle);

        true
    }

    fn spawn(&mut self, x: f64, y: f64) -> Particle {
        let settings = &self.settings;
        let rng = &mut self.rng;

        let position = (x + spread(rng, settings.jitter), y + spread(rng, settings.jitter));
        let velocity = (spread(rng, settings.max_speed), spread(rng, settings.max_speed));
        let max_life = between_inclusive(rng, settings.life_range.0, settings.life_range.1);
        let size = between(rng, settings.size_range.0, settings.size_range.1);
        let color = pick(rng, &settings.palette).copied().unwrap_or_default();

        let mut particle = self.pool.acquire();
        particle.respawn(position, velocity, max_life, size, color);
        particle
    }

    /// Advances every active particle by one frame and draws the survivors.
    ///
    /// Particles that reach `max_life` move to the pool instead of being
    /// drawn.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let mut index = self.active.len();

        while index > 0 {
            index -= 1;

            let particle = &mut self.active[index];
            particle.tick();

            let alpha = particle.alpha();

            if alpha > 0.0 {
                surface.fill_circle(particle.position, particle.size, &particle.color, alpha)?;
            } else {
                // Everything past `index` has been stepped already.
                let expired = self.active.swap_remove(index);
                self.pool.release(expired);
            }
        }

        Ok(())
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn active(&self) -> &[Particle] {
        &self.active
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    use super::*;
    use crate::surface::recording::{Recorder, Stroke};

    fn field(spawn_chance: f64) -> ParticleField<ChaCha8Rng> {
        let settings = FieldSettings {
            spawn_chance,
            ..FieldSettings::default()
        };

        ParticleField::new(settings, ChaCha8Rng::seed_from_u64(0x5eed))
    }

    fn run(field: &mut ParticleField<ChaCha8Rng>, frames: usize) {
        let mut surface = Recorder::default();

        for _ in 0..frames {
            field.step(&mut surface).unwrap();
        }
    }

    #[test]
    fn test_spawn_and_expire() {
        let mut field = field(1.0);

        assert!(field.on_pointer_move(100.0, 100.0));
        assert_eq!(field.active().len(), 1);

        let particle = field.active()[0].clone();
        assert_eq!(particle.life, 0);
        assert!((85.0..=115.0).contains(&particle.position.0));
        assert!((85.0..=115.0).contains(&particle.position.1));
        assert!((40..=80).contains(&particle.max_life));
        assert!((1.0..=4.0).contains(&particle.size));
        assert!(field.settings().palette.contains(&particle.color));

        run(&mut field, particle.max_life as usize - 1);
        assert_eq!(field.active().len(), 1);

        run(&mut field, 1);
        assert_eq!(field.active().len(), 0);
        assert_eq!(field.pool().len(), 1);
        assert_eq!(field.pool().constructed(), 1);
    }

    #[test]
    fn test_cap_enforcement() {
        let mut field = field(1.0);

        for i in 0..50 {
            assert!(field.on_pointer_move(i as f64, 0.0));
        }

        assert!(!field.on_pointer_move(500.0, 500.0));
        assert_eq!(field.active().len(), 50);
        assert_eq!(field.pointer(), Some((500.0, 500.0)));
    }

    #[test]
    fn test_failed_roll_only_moves_pointer() {
        let mut field = field(0.0);

        for _ in 0..100 {
            assert!(!field.on_pointer_move(10.0, 20.0));
        }

        assert!(field.active().is_empty());
        assert_eq!(field.pool().constructed(), 0);
        assert_eq!(field.pointer(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_recycled_particles_are_reused() {
        let mut field = field(1.0);

        field.on_pointer_move(50.0, 50.0);
        run(&mut field, 80);
        assert_eq!(field.pool().len(), 1);

        field.on_pointer_move(60.0, 60.0);
        assert_eq!(field.pool().len(), 0);
        assert_eq!(field.pool().constructed(), 1);
        assert_eq!(field.active()[0].life, 0);
    }

    #[test]
    fn test_expired_particles_are_not_drawn() {
        let mut field = field(1.0);
        let mut surface = Recorder::default();

        for _ in 0..10 {
            field.on_pointer_move(0.0, 0.0);
        }

        let mut drawn = 0;

        for _ in 0..80 {
            surface.clear();
            field.step(&mut surface).unwrap();
            drawn += surface.fills();

            for stroke in &surface.strokes {
                if let Stroke::Fill { alpha, .. } = stroke {
                    assert!(*alpha > 0.0);
                }
            }
        }

        assert!(field.active().is_empty());
        assert_eq!(field.pool().len(), 10);
        assert!(drawn > 0);
    }

    #[test]
    fn test_life_is_monotonic_until_removal() {
        let mut field = field(1.0);

        for i in 0..20 {
            field.on_pointer_move(i as f64 * 3.0, 0.0);
        }

        let mut surface = Recorder::default();

        for _ in 0..90 {
            let before: Vec<(f64, u32)> = field
                .active()
                .iter()
                .map(|particle| (particle.size, particle.life))
                .collect();

            field.step(&mut surface).unwrap();

            for particle in field.active() {
                assert!(particle.life < particle.max_life);

                if let Some((_, life)) = before.iter().find(|(size, _)| *size == particle.size) {
                    assert!(particle.life > *life);
                }
            }
        }
    }

    #[test]
    fn test_unvalidated_cap_does_not_preallocate() {
        let settings = FieldSettings {
            max_active: usize::MAX,
            spawn_chance: 1.0,
            ..FieldSettings::default()
        };
        let mut field = ParticleField::new(settings, ChaCha8Rng::seed_from_u64(1));

        assert!(field.on_pointer_move(1.0, 1.0));
        assert_eq!(field.active().len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Event {
        Move(f64, f64),
        Frame,
    }

    fn event() -> impl Strategy<Value = Event> {
        prop_oneof![
            (0.0..1920.0, 0.0..1080.0).prop_map(|(x, y)| Event::Move(x, y)),
            Just(Event::Frame),
        ]
    }

    proptest! {
        #[test]
        fn test_active_count_and_conservation(
            events in prop::collection::vec(event(), 0..600),
            seed in any::<u64>(),
        ) {
            let settings = FieldSettings { spawn_chance: 0.8, ..FieldSettings::default() };
            let mut field = ParticleField::new(settings, ChaCha8Rng::seed_from_u64(seed));
            let mut surface = Recorder::default();

            for event in events {
                match event {
                    Event::Move(x, y) => {
                        field.on_pointer_move(x, y);
                    }
                    Event::Frame => field.step(&mut surface).unwrap(),
                }

                prop_assert!(field.active().len() <= 50);
                prop_assert_eq!(
                    field.active().len() + field.pool().len(),
                    field.pool().constructed()
                );

                for particle in field.active() {
                    prop_assert!(particle.life <= particle.max_life);
                }
            }
        }
    }
}
