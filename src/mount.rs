use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use js_sys::{Object, Reflect};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
    console, CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent,
};

use crate::{
    app::{load_settings, App},
    document, request_animation_frame, window,
};

const CANVAS_STYLE: &str = "position: fixed; inset: 0; pointer-events: none; z-index: 0; mix-blend-mode: multiply;";

/// An event listener that remembers where it was registered.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(JsValue)>,
}

impl Listener {
    fn register<E: JsCast + 'static>(
        target: &EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<Listener, JsValue> {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        });

        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;

        Ok(Listener {
            target: target.clone(),
            kind,
            closure,
        })
    }

    fn remove(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            console::warn_1(&err);
        }
    }
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// The background effect while it is attached to the page: its canvas, its
/// listeners and its frame loop. Dropping a `Mount` detaches it.
pub struct Mount {
    canvas: HtmlCanvasElement,
    listeners: Vec<Listener>,
    frame: FrameClosure,
    request_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl Mount {
    /// Mounts the effect. Yields `None` when the effect is switched off or
    /// the browser hands out no 2D context, in which case nothing runs.
    pub fn attach() -> Result<Option<Mount>, JsValue> {
        let settings = load_settings();

        if !settings.enabled {
            console::log_1(&"glimmer: background effects are switched off".into());
            return Ok(None);
        }

        let canvas = document()
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let context = match context_2d(&canvas)? {
            Some(context) => context,
            None => {
                console::warn_1(&"glimmer: no 2d context, background stays still".into());
                return Ok(None);
            }
        };

        canvas.set_attribute("aria-hidden", "true")?;
        canvas.set_attribute("style", CANVAS_STYLE)?;

        let body = document()
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.insert_before(&canvas, body.first_child().as_ref())?;

        let mut mount = Mount {
            canvas: canvas.clone(),
            listeners: Vec::new(),
            frame: Rc::new(RefCell::new(None)),
            request_id: Rc::new(Cell::new(None)),
            cancelled: Rc::new(Cell::new(false)),
        };

        let app = Rc::new(RefCell::new(App::new(settings)));
        app.borrow_mut().on_resize(&canvas, &context)?;

        let document_target: EventTarget = document().into();
        let window_target: EventTarget = window().into();

        {
            let app = app.clone();
            mount.listeners.push(Listener::register(
                &document_target,
                "mousemove",
                move |event: MouseEvent| app.borrow_mut().on_mouse_move(event),
            )?);
        }

        {
            let app = app.clone();
            mount.listeners.push(Listener::register(
                &document_target,
                "touchmove",
                move |event: TouchEvent| app.borrow_mut().on_touch_move(event),
            )?);
        }

        {
            let app = app.clone();
            let canvas = canvas.clone();
            let context = context.clone();
            mount.listeners.push(Listener::register(
                &window_target,
                "resize",
                move |_: JsValue| {
                    if let Err(err) = app.borrow_mut().on_resize(&canvas, &context) {
                        console::error_1(&err);
                    }
                },
            )?);
        }

        mount.start(app, context)?;

        console::log_1(&"glimmer: background attached".into());

        Ok(Some(mount))
    }

    fn start(&mut self, app: Rc<RefCell<App>>, context: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let f = Rc::downgrade(&self.frame);
        let request_id = self.request_id.clone();
        let cancelled = self.cancelled.clone();

        *self.frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            if cancelled.get() {
                return;
            }

            if let Err(err) = app.borrow_mut().draw(&context, now) {
                console::error_1(&err);
            }

            if cancelled.get() {
                return;
            }

            if let Some(f) = f.upgrade() {
                if let Some(closure) = f.borrow().as_ref() {
                    match request_animation_frame(closure) {
                        Ok(id) => request_id.set(Some(id)),
                        Err(err) => console::error_1(&err),
                    }
                }
            }
        }));

        if let Some(closure) = self.frame.borrow().as_ref() {
            self.request_id.set(Some(request_animation_frame(closure)?));
        }

        Ok(())
    }

    /// Stops the frame loop, removes every listener and takes the canvas off
    /// the page. Calling it again does nothing.
    pub fn detach(&mut self) {
        if self.cancelled.replace(true) {
            return;
        }

        if let Some(id) = self.request_id.take() {
            if let Err(err) = window().cancel_animation_frame(id) {
                console::warn_1(&err);
            }
        }

        for listener in self.listeners.drain(..) {
            listener.remove();
        }

        self.frame.borrow_mut().take();
        self.canvas.remove();

        console::log_1(&"glimmer: background detached".into());
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.detach();
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<Option<CanvasRenderingContext2d>, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"alpha".into(), &JsValue::FALSE)?;

    let context = canvas
        .get_context_with_context_options("2d", &options)?
        .map(|context| context.dyn_into::<CanvasRenderingContext2d>())
        .transpose()?;

    if let Some(context) = &context {
        context.set_image_smoothing_enabled(false);
    }

    Ok(context)
}
