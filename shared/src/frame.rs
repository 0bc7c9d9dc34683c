/// Caps the animation loop to a target rate.
///
/// Frame callbacks arriving less than one interval after the last admitted
/// one are turned away.
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: f64,
    last: Option<f64>,
}

impl FrameGate {
    pub fn new(interval: f64) -> FrameGate {
        FrameGate {
            interval,
            last: None,
        }
    }

    pub fn from_fps(fps: f64) -> FrameGate {
        FrameGate::new(1000.0 / fps)
    }

    pub fn admit(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_calls_are_skipped() {
        let mut gate = FrameGate::from_fps(60.0);

        assert!(gate.admit(100.0));
        assert!(!gate.admit(105.0));
        assert!(!gate.admit(116.0));
        assert!(gate.admit(116.7));
        assert!(gate.admit(140.0));
    }

    #[test]
    fn test_first_call_is_admitted() {
        let mut gate = FrameGate::from_fps(60.0);

        assert!(gate.admit(0.0));
        assert!(!gate.admit(0.0));
    }
}
