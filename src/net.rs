//! The two network operations: the catalog fetch and the game launch.

use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, Request, RequestCache, RequestInit, Response};

use crate::error::MenuError;
use crate::state::CatalogSource;
use crate::util::clog;

/// Best-effort readable text for a rejected JS promise.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn js_err(err: JsValue) -> MenuError {
    MenuError::Js(js_error_message(&err))
}

async fn fetch_response(url: &str, cache: Option<RequestCache>) -> Result<Response, MenuError> {
    let window = web_sys::window().ok_or(MenuError::NoWindow)?;
    let opts = RequestInit::new();
    opts.set_method("GET");
    if let Some(cache) = cache {
        opts.set_cache(cache);
    }
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    value.dyn_into::<Response>().map_err(js_err)
}

async fn read_text(response: &Response) -> Result<String, MenuError> {
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string().ok_or(MenuError::NotText)
}

/// Fetches the catalog over HTTP, bypassing the browser cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, MenuError>> {
        let url = self.url.clone();
        async move {
            let response = fetch_response(&url, Some(RequestCache::NoStore)).await?;
            if !response.ok() {
                return Err(MenuError::Status {
                    status: response.status(),
                    status_text: response.status_text(),
                });
            }
            read_text(&response).await
        }
        .boxed_local()
    }
}

/// Loads a game's HTML and swaps it in for the whole current document.
/// On error the page is left as it was.
pub async fn launch_game(url: &str) -> Result<(), MenuError> {
    let response = fetch_response(url, None).await?;
    if !response.ok() {
        return Err(MenuError::GameUnavailable {
            status: response.status(),
        });
    }
    let html = read_text(&response).await?;
    clog!("launching {url} ({} bytes)", html.len());
    replace_document(&html)
}

// Executes whatever the game URL serves; only safe for trusted catalogs.
fn replace_document(html: &str) -> Result<(), MenuError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MenuError::NoWindow)?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| MenuError::Document("not an HTML document".into()))?;
    let doc_err = |err: JsValue| MenuError::Document(js_error_message(&err));
    document.open().map_err(doc_err)?;
    document
        .write(&js_sys::Array::of1(&JsValue::from_str(html)))
        .map_err(doc_err)?;
    document.close().map_err(doc_err)
}
