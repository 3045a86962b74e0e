// HTTP client for remote catalog documents
use crate::{document::CatalogDocument, ApiError, Result};
use std::time::Duration;
use tracing::debug;

pub struct CatalogClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("travelscout/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the catalog document.
    ///
    /// A non-success status is an error even when the body would parse.
    /// There is no retry: the caller decides what a failure means.
    pub async fn fetch_document(&self) -> Result<CatalogDocument> {
        debug!("Fetching catalog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let bytes = response.bytes().await?;
        crate::parse_document(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with a canned raw HTTP response
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/travel_recommendation_api.json", addr)
    }

    #[test]
    fn test_client_keeps_url() {
        let client = CatalogClient::new("https://example.com/catalog.json", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url(), "https://example.com/catalog.json");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 on loopback is the discard port; nothing listens there in CI
        let client = CatalogClient::new("http://127.0.0.1:9/catalog.json", Duration::from_secs(2)).unwrap();
        let result = client.fetch_document().await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;
        let client = CatalogClient::new(url, Duration::from_secs(5)).unwrap();

        match client.fetch_document().await {
            Err(ApiError::Status { status, reason }) => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ok_with_bad_body_is_parse_error() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!",
        )
        .await;
        let client = CatalogClient::new(url, Duration::from_secs(5)).unwrap();
        assert!(matches!(client.fetch_document().await, Err(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn test_ok_with_document() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 47\r\nConnection: close\r\n\r\n{\"countries\": [], \"temples\": [], \"beaches\": []}",
        )
        .await;
        let client = CatalogClient::new(url, Duration::from_secs(5)).unwrap();
        let doc = client.fetch_document().await.unwrap();
        assert!(doc.countries.is_empty());
    }
}
