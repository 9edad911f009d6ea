//! Browser transport and page effects for the participant client
//!
//! Without the `csr` feature (native builds and tests of this crate) the
//! transport reports every request as failed, so panels stay empty.

use async_trait::async_trait;
use streetcrm_participants::io::{HttpClient, HttpResponse, PageEffects};
use streetcrm_participants::{ApiRoutes, ParticipantClient};

/// Participant client wired to the browser
pub type BrowserClient = ParticipantClient<GlooHttpClient, BrowserPage>;

/// Client for the server this page was loaded from
pub fn browser_client() -> BrowserClient {
    ParticipantClient::new(ApiRoutes::new(&page_origin()), GlooHttpClient, BrowserPage)
}

fn page_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }

    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// HTTP transport over the browser's fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use streetcrm_participants::io::{csrf_token_from_cookies, HttpResponse};
    use streetcrm_participants::PanelError;
    use wasm_bindgen::JsCast;

    /// Attach Django's CSRF token to an unsafe request when the cookie is set
    pub fn with_csrf(builder: RequestBuilder) -> RequestBuilder {
        let token = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .and_then(|cookies| csrf_token_from_cookies(&cookies));

        match token {
            Some(token) => builder.header("X-CSRFToken", &token),
            None => builder,
        }
    }

    pub fn build_failed(method: &str, url: &str, e: gloo_net::Error) -> PanelError {
        PanelError::Http(format!("{} {} failed: {}", method, url, e))
    }

    pub async fn finish(
        method: &str,
        url: &str,
        sent: Result<Response, gloo_net::Error>,
    ) -> streetcrm_participants::Result<HttpResponse> {
        let response = sent.map_err(|e| build_failed(method, url, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PanelError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    pub async fn send(
        method: &str,
        url: &str,
        request: Result<Request, gloo_net::Error>,
    ) -> streetcrm_participants::Result<HttpResponse> {
        let request = request.map_err(|e| build_failed(method, url, e))?;
        finish(method, url, request.send().await).await
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let sent = gloo_net::http::Request::get(url).send().await;
        transport::finish("GET", url, sent).await
    }

    async fn post(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let sent = transport::with_csrf(gloo_net::http::Request::post(url))
            .send()
            .await;
        transport::finish("POST", url, sent).await
    }

    async fn put_json(
        &self,
        url: &str,
        body: &str,
    ) -> streetcrm_participants::Result<HttpResponse> {
        tracing::debug!("PUT {}", url);
        let request = transport::with_csrf(gloo_net::http::Request::put(url))
            .header("Content-Type", "application/json")
            .body(body.to_string());
        transport::send("PUT", url, request).await
    }

    async fn delete(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        tracing::debug!("DELETE {}", url);
        let sent = transport::with_csrf(gloo_net::http::Request::delete(url))
            .send()
            .await;
        transport::finish("DELETE", url, sent).await
    }
}

#[cfg(not(feature = "csr"))]
#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        Err(unavailable("GET", url))
    }

    async fn post(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        Err(unavailable("POST", url))
    }

    async fn put_json(
        &self,
        url: &str,
        _body: &str,
    ) -> streetcrm_participants::Result<HttpResponse> {
        Err(unavailable("PUT", url))
    }

    async fn delete(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        Err(unavailable("DELETE", url))
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable(method: &str, url: &str) -> streetcrm_participants::PanelError {
    streetcrm_participants::PanelError::Http(format!(
        "{} {} failed: browser transport unavailable",
        method, url
    ))
}

/// Alerts and reloads on the browser window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageEffects for BrowserPage {
    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                window.alert_with_message(message).ok();
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            tracing::warn!("alert: {}", message);
        }
    }

    fn reload(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                window.location().reload().ok();
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            tracing::debug!("reload requested");
        }
    }
}
