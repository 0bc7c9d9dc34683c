use crate::Particle;

/// Stack of expired particles waiting to be respawned.
#[derive(Debug, Default)]
pub struct ParticlePool {
    free: Vec<Particle>,
    constructed: usize,
}

impl ParticlePool {
    pub fn new() -> ParticlePool {
        ParticlePool::default()
    }

    /// Pops a recycled particle, or constructs one when the pool is empty.
    pub fn acquire(&mut self) -> Particle {
        self.free.pop().unwrap_or_else(|| {
            self.constructed += 1;
            Particle::default()
        })
    }

    pub fn release(&mut self, particle: Particle) {
        self.free.push(particle);
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Number of particles this pool has ever constructed.
    pub fn constructed(&self) -> usize {
        self.constructed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_before_construct() {
        let mut pool = ParticlePool::new();

        let first = pool.acquire();
        let second = pool.acquire();
        assert_eq!(pool.constructed(), 2);

        pool.release(first);
        pool.release(second);
        assert_eq!(pool.len(), 2);

        let _ = pool.acquire();
        assert_eq!(pool.constructed(), 2);
        assert_eq!(pool.len(), 1);
    }
}
