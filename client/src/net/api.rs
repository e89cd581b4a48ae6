//! REST client for the design endpoints.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`. Native builds get
//! stubs returning a transport error, so the persistence flows still compile
//! and are tested against an in-memory backend instead.
//!
//! ERROR HANDLING
//! ==============
//! Network failures map to `DesignError::Transport`, non-2xx responses to
//! `DesignError::Server(status)`, and undecodable bodies to
//! `DesignError::Decode`. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DesignSummary, LoadDesignResponse, SaveDesignRequest};
use crate::config::ApiConfig;
#[cfg(feature = "csr")]
use crate::config::CSRF_HEADER;
use crate::persistence::DesignBackend;
use crate::state::designs::DesignError;

pub const LIST_DESIGNS_ENDPOINT: &str = "/list-designs/";
pub const SAVE_DESIGN_ENDPOINT: &str = "/save-design/";

#[cfg(any(test, feature = "csr"))]
fn load_design_endpoint(id: i64) -> String {
    format!("/load-design/{id}/")
}

/// Server-rendered PDF of design `id`, with the floor height as a query parameter.
#[must_use]
pub fn export_pdf_url(id: i64, floor_height: u32) -> String {
    format!("/export-pdf/{id}/?height={floor_height}")
}

/// Value of cookie `name` in a `document.cookie` string, still percent-encoded.
#[cfg(any(test, feature = "csr"))]
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_owned)
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> DesignError {
    DesignError::Transport("not available outside the browser".to_owned())
}

/// [`DesignBackend`] over HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Current CSRF token from the page cookies, if any.
    #[cfg(feature = "csr")]
    fn csrf_token(&self) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        let raw = cookie_value(&cookies, &self.config.csrf_cookie)?;
        match js_sys::decode_uri_component(&raw) {
            Ok(decoded) => Some(String::from(decoded)),
            Err(_) => Some(raw),
        }
    }
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> DesignError {
    log::warn!("design request failed: {err}");
    DesignError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), DesignError> {
    if resp.ok() {
        Ok(())
    } else {
        log::warn!("{} returned {}", resp.url(), resp.status());
        Err(DesignError::Server(resp.status()))
    }
}

impl DesignBackend for HttpBackend {
    async fn list_designs(&self) -> Result<Vec<DesignSummary>, DesignError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.url(LIST_DESIGNS_ENDPOINT);
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport)?;
            check_status(&resp)?;
            resp.json::<Vec<DesignSummary>>().await.map_err(|e| DesignError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn save_design(&self, request: &SaveDesignRequest) -> Result<(), DesignError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.url(SAVE_DESIGN_ENDPOINT);
            let mut builder = gloo_net::http::Request::post(&url);
            if let Some(token) = self.csrf_token() {
                builder = builder.header(CSRF_HEADER, &token);
            }
            let resp = builder.json(request).map_err(transport)?.send().await.map_err(transport)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }

    async fn load_design(&self, id: i64) -> Result<LoadDesignResponse, DesignError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.url(&load_design_endpoint(id));
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport)?;
            check_status(&resp)?;
            resp.json::<LoadDesignResponse>().await.map_err(|e| DesignError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(unavailable())
        }
    }
}
