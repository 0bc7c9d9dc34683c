use futures::TryFutureExt;
use js_sys::Promise;
use shared::{ContactForm, Testimonial, TestimonialCard};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{console, Request, RequestInit, RequestMode, Response};

use crate::{app::AppError, window};

const BACKEND_URL: Option<&str> = option_env!("GLIMMER_BACKEND_URL");
const BACKEND_KEY: Option<&str> = option_env!("GLIMMER_BACKEND_KEY");

const TESTIMONIALS_QUERY: &str =
    "testimonials?select=*&is_approved=eq.true&order=created_at.desc";

struct Backend {
    url: &'static str,
    key: &'static str,
}

fn backend() -> Result<Backend, AppError> {
    match (BACKEND_URL, BACKEND_KEY) {
        (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Ok(Backend {
            url: url.trim_end_matches('/'),
            key,
        }),
        _ => Err(AppError(
            "backend is not configured, set GLIMMER_BACKEND_URL and GLIMMER_BACKEND_KEY"
                .to_string(),
        )),
    }
}

impl Backend {
    fn request(&self, method: &str, table: &str, body: Option<String>) -> Result<Request, AppError> {
        let mut opts = RequestInit::new();
        opts.method(method);
        opts.mode(RequestMode::Cors);

        if let Some(body) = body {
            opts.body(Some(&body.into()));
        }

        let url = format!("{}/rest/v1/{table}", self.url);
        let request = Request::new_with_str_and_init(&url, &opts)?;

        let headers = request.headers();
        headers.set("apikey", self.key)?;
        headers.set("Authorization", &format!("Bearer {}", self.key))?;
        headers.set("Content-Type", "application/json")?;

        Ok(request)
    }
}

async fn fetch(request: &Request) -> Result<Response, AppError> {
    let response: Response = JsFuture::from(window().fetch_with_request(request))
        .map_err(AppError::from)
        .await?
        .dyn_into()?;

    if response.ok() {
        Ok(response)
    } else {
        Err(AppError(format!(
            "backend responded with {} {}",
            response.status(),
            response.status_text()
        )))
    }
}

async fn insert_contact(form: JsValue) -> Result<(), AppError> {
    let form: ContactForm = serde_wasm_bindgen::from_value(form)?;
    let submission = form.into_submission()?;
    let body = serde_json::to_string(&[submission])?;

    let backend = backend()?;
    let request = backend.request("POST", "contact_submissions", Some(body))?;
    request.headers().set("Prefer", "return=minimal")?;

    fetch(&request).await?;

    Ok(())
}

async fn select_testimonials() -> Result<Vec<TestimonialCard>, AppError> {
    let backend = backend()?;
    let request = backend.request("GET", TESTIMONIALS_QUERY, None)?;

    let response = fetch(&request).await?;
    let json = JsFuture::from(response.json()?).await?;
    let rows: Vec<Testimonial> = serde_wasm_bindgen::from_value(json)?;

    Ok(rows.into_iter().map(TestimonialCard::from).collect())
}

/// Stores a contact inquiry. Resolves to `undefined`, or rejects with a
/// message describing what went wrong.
#[wasm_bindgen]
pub fn submit_contact(form: JsValue) -> Promise {
    future_to_promise(async move {
        insert_contact(form).await.map_err(|app_error| {
            console::error_1(&format!("glimmer: contact submission failed, {}", app_error.0).into());
            JsValue::from(app_error)
        })?;

        Ok(JsValue::UNDEFINED)
    })
}

/// Resolves to the approved testimonials, newest first, shaped for display.
#[wasm_bindgen]
pub fn fetch_testimonials() -> Promise {
    future_to_promise(async move {
        let cards = select_testimonials().await.map_err(|app_error| {
            console::error_1(&format!("glimmer: testimonials unavailable, {}", app_error.0).into());
            JsValue::from(app_error)
        })?;

        Ok(serde_wasm_bindgen::to_value(&cards)?)
    })
}
