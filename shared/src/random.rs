use rand_chacha::rand_core::RngCore;

/// Uniform draw in `[0, 1)` built from the top 53 bits of a `u64`.
pub fn unit(rng: &mut impl RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform draw in `[-half, half)`.
pub fn spread(rng: &mut impl RngCore, half: f64) -> f64 {
    (unit(rng) - 0.5) * 2.0 * half
}

/// Uniform draw in `[min, max)`.
pub fn between(rng: &mut impl RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * unit(rng)
}

/// Uniform integer in `min..=max`.
pub fn between_inclusive(rng: &mut impl RngCore, min: u32, max: u32) -> u32 {
    let span = (max.saturating_sub(min) as u64) + 1;
    min + (rng.next_u64() % span) as u32
}

pub fn pick<'a, T>(rng: &mut impl RngCore, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get((unit(rng) * items.len() as f64) as usize % items.len())
    }
}
