/// Logical viewport dimensions in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn centre(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Physical pixel dimensions of the drawing surface, and the scale from
/// logical to physical pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl BackingSize {
    /// Sizes the backing store for `viewport`, clamping the device pixel
    /// ratio to `max_pixel_ratio`. Unusable ratios fall back to 1.
    pub fn for_viewport(
        viewport: Viewport,
        device_pixel_ratio: f64,
        max_pixel_ratio: f64,
    ) -> BackingSize {
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let scale = ratio.min(max_pixel_ratio);

        BackingSize {
            width: (viewport.width * scale).floor() as u32,
            height: (viewport.height * scale).floor() as u32,
            scale,
        }
    }
}

impl Default for BackingSize {
    fn default() -> Self {
        BackingSize {
            width: 0,
            height: 0,
            scale: 1.0,
        }
    }
}
