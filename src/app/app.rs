use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use serde::{Deserialize, Serialize};
use shared::{Backdrop, ContactError, FieldSettings, SettingsError, Viewport};
use wasm_bindgen::JsValue;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::{draw::CanvasSurface, window};

/// Errors concerning the [`App`] and its requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppError(pub String);

impl From<SettingsError> for AppError {
    fn from(settings_error: SettingsError) -> Self {
        AppError(format!("SettingsError: {0}", settings_error.0))
    }
}

impl From<ContactError> for AppError {
    fn from(contact_error: ContactError) -> Self {
        AppError(format!("ContactError: {0}", contact_error.0))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError(format!("JsonError: {error}"))
    }
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        AppError(format!("BindgenError: {error}"))
    }
}

impl From<AppError> for JsValue {
    fn from(app_error: AppError) -> Self {
        JsValue::from_str(&app_error.0)
    }
}

pub struct App {
    backdrop: Backdrop<ChaCha8Rng>,
}

impl App {
    pub fn new(settings: FieldSettings) -> App {
        let seed = js_sys::Math::random().to_bits();

        App {
            backdrop: Backdrop::new(settings, ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Paints a frame if the frame gate admits `now`.
    pub fn draw(&mut self, context: &CanvasRenderingContext2d, now: f64) -> Result<bool, JsValue> {
        let drawn = self.backdrop.frame(now, &mut CanvasSurface::new(context));

        context.set_global_alpha(1.0);

        drawn
    }

    pub fn on_mouse_move(&mut self, event: MouseEvent) {
        self.backdrop
            .on_pointer_move(event.client_x() as f64, event.client_y() as f64);
    }

    pub fn on_touch_move(&mut self, event: TouchEvent) {
        if let Some(touch) = event.touches().item(0) {
            self.backdrop
                .on_pointer_move(touch.client_x() as f64, touch.client_y() as f64);
        }
    }

    /// Resizes the canvas backing store to the window, with the transform
    /// scaled so drawing stays in CSS pixels.
    pub fn on_resize(
        &mut self,
        canvas: &HtmlCanvasElement,
        context: &CanvasRenderingContext2d,
    ) -> Result<(), JsValue> {
        let window = window();
        let viewport = Viewport::new(
            window.inner_width()?.as_f64().unwrap_or_default(),
            window.inner_height()?.as_f64().unwrap_or_default(),
        );

        let backing = self.backdrop.resize(viewport, window.device_pixel_ratio());

        // Assigning a dimension resets the context state, transform included.
        canvas.set_width(backing.width);
        canvas.set_height(backing.height);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;

        context.set_transform(backing.scale, 0.0, 0.0, backing.scale, 0.0, 0.0)?;
        context.set_image_smoothing_enabled(false);

        Ok(())
    }

    pub fn kv_get(key: &str) -> Option<String> {
        window()
            .local_storage()
            .unwrap_or_default()
            .and_then(|storage| storage.get_item(key).unwrap_or_default())
    }

    pub fn kv_set(key: &str, value: &str) {
        match window().local_storage() {
            Ok(Some(storage)) => {
                if let Err(err) = storage.set_item(key, value) {
                    console::warn_1(&err);
                }
            }
            Ok(None) => console::warn_1(&format!("glimmer: no local storage to keep {key}").into()),
            Err(err) => console::warn_1(&err),
        }
    }
}
