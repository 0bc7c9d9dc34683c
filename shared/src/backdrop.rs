use rand_chacha::rand_core::RngCore;

use crate::{
    BackingSize, Color, FieldSettings, FrameGate, ParticleField, Ripples, Surface, Viewport,
};

/// Everything painted behind the page: the background fill, the pointer
/// trail and the centre ripples, driven by a rate-capped frame loop.
pub struct Backdrop<R: RngCore> {
    field: ParticleField<R>,
    gate: FrameGate,
    ripples: Option<Ripples>,
    background: Color,
    ripple_color: Color,
    max_pixel_ratio: f64,
    viewport: Viewport,
    backing: BackingSize,
    origin: Option<f64>,
}

impl<R: RngCore> Backdrop<R> {
    pub fn new(settings: FieldSettings, rng: R) -> Backdrop<R> {
        Backdrop {
            gate: FrameGate::new(settings.frame_interval()),
            ripples: settings.ripples.then(Ripples::default),
            background: settings.background,
            ripple_color: settings.ripple_color,
            max_pixel_ratio: settings.max_pixel_ratio,
            viewport: Viewport::default(),
            backing: BackingSize::default(),
            origin: None,
            field: ParticleField::new(settings, rng),
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.field.on_pointer_move(x, y)
    }

    /// Recomputes the backing surface for a new viewport.
    pub fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f64) -> BackingSize {
        self.viewport = viewport;
        self.backing =
            BackingSize::for_viewport(viewport, device_pixel_ratio, self.max_pixel_ratio);
        self.backing
    }

    /// Runs one frame at timestamp `now` (milliseconds) if the frame gate
    /// admits it. Returns whether anything was painted.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: f64, surface: &mut S) -> Result<bool, S::Error> {
        if !self.gate.admit(now) {
            return Ok(false);
        }

        let origin = *self.origin.get_or_insert(now);

        surface.fill_background(&self.background, self.viewport)?;
        self.field.step(surface)?;

        if let Some(ripples) = &self.ripples {
            let centre = self.viewport.centre();

            for ripple in ripples.at(now - origin) {
                surface.stroke_circle(centre, ripple.radius, &self.ripple_color, ripple.opacity)?;
            }
        }

        Ok(true)
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn backing(&self) -> BackingSize {
        self.backing
    }
}
