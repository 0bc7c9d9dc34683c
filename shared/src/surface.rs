use crate::{Color, Viewport};

/// A 2D target the background effect paints into.
///
/// Coordinates are logical (CSS) pixels; `alpha` multiplies the colour's own
/// alpha.
pub trait Surface {
    type Error;

    fn fill_background(&mut self, color: &Color, viewport: Viewport) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        centre: (f64, f64),
        radius: f64,
        color: &Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    fn stroke_circle(
        &mut self,
        centre: (f64, f64),
        radius: f64,
        color: &Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;
}
