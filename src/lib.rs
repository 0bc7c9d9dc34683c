mod app;
mod draw;
mod mount;
mod net;

use std::cell::RefCell;

use mount::Mount;
use wasm_bindgen::{prelude::*, JsCast};

thread_local! {
    static MOUNT: RefCell<Option<Mount>> = RefCell::new(None);
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    attach_background()
}

/// Mounts the background effect unless it is already running.
#[wasm_bindgen]
pub fn attach_background() -> Result<(), JsValue> {
    MOUNT.with(|mount| {
        if mount.borrow().is_some() {
            return Ok(());
        }

        let attached = Mount::attach()?;
        mount.replace(attached);

        Ok(())
    })
}

/// Tears the background effect down: no further frames, no listeners.
#[wasm_bindgen]
pub fn detach_background() {
    let mounted = MOUNT.with(|mount| mount.borrow_mut().take());

    if let Some(mut mounted) = mounted {
        mounted.detach();
    }
}

/// Persists the visitor's choice and applies it straight away.
#[wasm_bindgen]
pub fn set_background_effects(enabled: bool) -> Result<(), JsValue> {
    app::save_effects_enabled(enabled);

    if enabled {
        attach_background()
    } else {
        detach_background();
        Ok(())
    }
}
