use async_trait::async_trait;
use gloo_net::http::Request;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Fetch {
    /// `Err` carries a transport failure; HTTP error statuses are a successful fetch.
    async fn get(&self, url: &str) -> Result<FetchResponse, String>;
}

/// Browser `fetch` through `gloo-net`.
#[derive(Clone, Copy, Default)]
pub struct GlooFetch;

#[async_trait(?Send)]
impl Fetch for GlooFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(FetchResponse { status, body })
    }
}
