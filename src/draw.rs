use shared::{Color, Surface, Viewport};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// [`Surface`] over a canvas context whose transform already maps logical
/// pixels onto the backing store.
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> CanvasSurface<'a> {
        CanvasSurface { context }
    }

    fn circle(&self, centre: (f64, f64), radius: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(centre.0, centre.1, radius, 0.0, std::f64::consts::TAU)
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn fill_background(&mut self, color: &Color, viewport: Viewport) -> Result<(), JsValue> {
        self.context.set_global_alpha(1.0);
        self.context.set_fill_style(&color.to_string().into());
        self.context
            .fill_rect(0.0, 0.0, viewport.width, viewport.height);

        Ok(())
    }

    fn fill_circle(
        &mut self,
        centre: (f64, f64),
        radius: f64,
        color: &Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.set_global_alpha(alpha);
        self.context.set_fill_style(&color.to_string().into());
        self.circle(centre, radius)?;
        self.context.fill();

        Ok(())
    }

    fn stroke_circle(
        &mut self,
        centre: (f64, f64),
        radius: f64,
        color: &Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.set_global_alpha(alpha);
        self.context.set_stroke_style(&color.to_string().into());
        self.context.set_line_width(1.0);
        self.circle(centre, radius)?;
        self.context.stroke();

        Ok(())
    }
}
