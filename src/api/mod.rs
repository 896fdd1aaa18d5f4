//! REST API Client
//!
//! Thin fetch wrapper for the bookmark server, organized by domain.
//! Every endpoint is a JSON POST.

mod bookmark;
mod category;
mod setting;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use leptos::prelude::*;

use crate::config::LOGIN_PATH;
use crate::dialog::Dialogs;
use crate::error::ApiError;
use crate::models::{Outcome, Reply};

pub use bookmark::*;
pub use category::*;
pub use setting::*;

/// Server endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    CategoryList,
    CategoryAdd,
    CategoryEdit(i64),
    CategoryDelete(i64),
    BookmarkList,
    BookmarkAdd,
    BookmarkEdit(i64),
    BookmarkDelete(i64),
    Setting,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::CategoryList => "/category/get".to_string(),
            Endpoint::CategoryAdd => "/category/add".to_string(),
            Endpoint::CategoryEdit(id) => format!("/category/edit/{}", id),
            Endpoint::CategoryDelete(id) => format!("/category/delete/{}", id),
            Endpoint::BookmarkList => "/bookmark/get".to_string(),
            Endpoint::BookmarkAdd => "/bookmark/add".to_string(),
            Endpoint::BookmarkEdit(id) => format!("/bookmark/edit/{}", id),
            Endpoint::BookmarkDelete(id) => format!("/bookmark/delete/{}", id),
            Endpoint::Setting => "/setting".to_string(),
        }
    }
}

/// How the wrapper treats a response status
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusClass {
    Success,
    Unauthorized,
    Failure,
}

pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        401 => StatusClass::Unauthorized,
        _ => StatusClass::Failure,
    }
}

/// What the wrapper does with a failed request before returning it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Handling {
    /// Leave it to the caller
    Pass,
    /// Show an error dialog
    Alert,
    /// Show an error dialog, then leave the app for the given path
    AlertAndRedirect(&'static str),
}

pub fn failure_handling(err: &ApiError) -> Handling {
    match err {
        ApiError::Network(_) => Handling::Alert,
        ApiError::Unauthorized => Handling::AlertAndRedirect(LOGIN_PATH),
        ApiError::Http { .. } | ApiError::Decode(_) => Handling::Pass,
    }
}

/// API client handle. Holds the dialogs so transport and session
/// failures are reported before the caller sees them.
#[derive(Clone, Copy)]
pub struct Api {
    dialogs: Dialogs,
}

impl Api {
    pub fn new(dialogs: Dialogs) -> Self {
        Self { dialogs }
    }

    /// POST `body` as JSON and return the successful response.
    ///
    /// Network failures show an error dialog; a 401 shows one and then
    /// sends the browser to the login page.
    pub async fn post<B: Serialize>(self, endpoint: Endpoint, body: Option<&B>) -> Result<Response, ApiError> {
        let path = endpoint.path();
        log::debug!("POST {}", path);

        let err = match fetch_post(&path, body).await {
            Ok(resp) => match classify_status(resp.status()) {
                StatusClass::Success => return Ok(resp),
                StatusClass::Unauthorized => ApiError::Unauthorized,
                StatusClass::Failure => {
                    let status = resp.status();
                    let body = read_text(&resp).await.unwrap_or_default();
                    ApiError::Http { status, body }
                }
            },
            Err(e) => e,
        };

        log::warn!("POST {} failed: {:?}", path, err);
        match failure_handling(&err) {
            Handling::Pass => {}
            Handling::Alert => self.dialogs.error(&err.to_string()).await,
            Handling::AlertAndRedirect(target) => {
                self.dialogs.error(&err.to_string()).await;
                redirect(target);
            }
        }
        Err(err)
    }

    /// POST and interpret the `{status, message, error}` reply
    pub async fn submit<B: Serialize>(self, endpoint: Endpoint, body: Option<&B>) -> Result<Outcome, ApiError> {
        let resp = self.post(endpoint, body).await?;
        let text = read_text(&resp).await?;
        let reply: Reply = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Outcome::from(reply))
    }

    /// POST where only HTTP success matters (deletes)
    pub async fn send<B: Serialize>(self, endpoint: Endpoint, body: Option<&B>) -> Result<(), ApiError> {
        self.post(endpoint, body).await.map(|_| ())
    }

    /// POST and decode a JSON list reply
    pub async fn fetch<B: Serialize, T: DeserializeOwned>(self, endpoint: Endpoint, body: Option<&B>) -> Result<T, ApiError> {
        let resp = self.post(endpoint, body).await?;
        let promise = resp.json().map_err(|e| ApiError::Decode(js_error(e)))?;
        let value = JsFuture::from(promise).await.map_err(|e| ApiError::Decode(js_error(e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn dialogs(&self) -> Dialogs {
        self.dialogs
    }
}

/// Get the API client from context
pub fn use_api() -> Api {
    expect_context::<Api>()
}

/// Navigate the whole page (leaves the app)
pub fn redirect(path: &str) {
    if let Err(e) = window().location().set_href(path) {
        log::error!("redirect to {} failed: {}", path, js_error(e));
    }
}

async fn fetch_post<B: Serialize>(path: &str, body: Option<&B>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    if let Some(body) = body {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(path, &opts).map_err(|e| ApiError::Network(js_error(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_error(e)))?;

    let value = JsFuture::from(window().fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error(e)))?;
    value.dyn_into::<Response>().map_err(|e| ApiError::Network(js_error(e)))
}

async fn read_text(resp: &Response) -> Result<String, ApiError> {
    let promise = resp.text().map_err(|e| ApiError::Decode(js_error(e)))?;
    let value = JsFuture::from(promise).await.map_err(|e| ApiError::Decode(js_error(e)))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Best-effort message out of a thrown JS value
fn js_error(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
