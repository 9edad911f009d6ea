//! HTTP and page abstractions for testability
//!
//! The traits are `?Send` so the browser transport, whose futures are bound
//! to the JS event loop, can implement them alongside the native one.

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a status error
    pub fn error_for_status(self) -> crate::Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(crate::PanelError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Abstraction over the HTTP transport
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;

    /// Send a POST request with no body
    async fn post(&self, url: &str) -> crate::Result<HttpResponse>;

    /// Send a PUT request with a JSON body
    async fn put_json(&self, url: &str, body: &str) -> crate::Result<HttpResponse>;

    /// Send a DELETE request with no body
    async fn delete(&self, url: &str) -> crate::Result<HttpResponse>;
}

/// Side effects a mutation has on the page around the panel
#[cfg_attr(test, mockall::automock)]
pub trait PageEffects {
    /// Show a blocking message to the user
    fn alert(&self, message: &str);

    /// Discard client state and load everything again from the server
    fn reload(&self);
}

/// Value of Django's `csrftoken` cookie from a `document.cookie` string
pub fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "csrftoken")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Production HTTP client using reqwest
#[cfg(feature = "native")]
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(
        method: &str,
        url: &str,
        sent: reqwest::Result<reqwest::Response>,
    ) -> crate::Result<HttpResponse> {
        let response = sent
            .map_err(|e| crate::PanelError::Http(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::PanelError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        Self::finish("GET", url, self.client.get(url).send().await).await
    }

    async fn post(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        Self::finish("POST", url, self.client.post(url).send().await).await
    }

    async fn put_json(&self, url: &str, body: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("PUT {}", url);
        let sent = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await;
        Self::finish("PUT", url, sent).await
    }

    async fn delete(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("DELETE {}", url);
        Self::finish("DELETE", url, self.client.delete(url).send().await).await
    }
}
