/// One ring of the centre ripple at a given instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripple {
    pub radius: f64,
    pub opacity: f64,
}

/// Concentric rings that swell and fade from the middle of the viewport on a
/// staggered loop.
#[derive(Clone, Debug)]
pub struct Ripples {
    pub count: usize,
    pub period: f64,
    pub stagger: f64,
    pub base_radius: f64,
}

const SCALE_KEYFRAMES: [f64; 3] = [0.0, 2.0, 0.0];
const OPACITY_KEYFRAMES: [f64; 3] = [0.6, 0.1, 0.0];

impl Default for Ripples {
    fn default() -> Self {
        Ripples {
            count: 3,
            period: 6000.0,
            stagger: 2000.0,
            base_radius: 48.0,
        }
    }
}

impl Ripples {
    /// The ring `index` at `elapsed` milliseconds, or `None` if it is not
    /// visible.
    pub fn ring(&self, index: usize, elapsed: f64) -> Option<Ripple> {
        let local = elapsed - index as f64 * self.stagger;

        if local < 0.0 || self.period <= 0.0 {
            return None;
        }

        let progress = (local % self.period) / self.period;
        let scale = keyframe(&SCALE_KEYFRAMES, progress);
        let opacity = keyframe(&OPACITY_KEYFRAMES, progress);

        if scale <= 0.0 || opacity <= 0.0 {
            None
        } else {
            Some(Ripple {
                radius: self.base_radius * scale,
                opacity,
            })
        }
    }

    pub fn at(&self, elapsed: f64) -> impl Iterator<Item = Ripple> + '_ {
        (0..self.count).filter_map(move |index| self.ring(index, elapsed))
    }
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Samples evenly spaced keyframes at `progress` in `[0, 1]`, easing each
/// segment.
fn keyframe(frames: &[f64], progress: f64) -> f64 {
    let segments = frames.len().saturating_sub(1);

    if segments == 0 {
        return frames.first().copied().unwrap_or(0.0);
    }

    let position = progress.clamp(0.0, 1.0) * segments as f64;
    let segment = (position.floor() as usize).min(segments - 1);
    let t = ease_out(position - segment as f64);

    frames[segment] + (frames[segment + 1] - frames[segment]) * t
}
