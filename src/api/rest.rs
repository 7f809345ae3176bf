use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::api::traits::ListingApi;
use crate::errors::ApiError;
use crate::models::{ContactRequest, ContactRequestsResponse, PropertiesResponse, Property};

/// reqwest-backed [`ListingApi`] against a running rental service.
pub struct RestListingApi {
    client: Client,
    base_url: String,
}

impl RestListingApi {
    /// Client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl ListingApi for RestListingApi {
    async fn list_properties(
        &self,
        query: &[(&'static str, String)],
    ) -> Result<Vec<Property>, ApiError> {
        let endpoint = "/properties";
        debug!("GET {} with {} query pairs", endpoint, query.len());

        let response = self
            .client
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: response.status(),
            });
        }

        let body: PropertiesResponse = response.json().await?;
        Ok(body.properties)
    }

    async fn contact_requests(&self) -> Result<Vec<ContactRequest>, ApiError> {
        let endpoint = "/contact-requests";
        debug!("GET {}", endpoint);

        let response = self.client.get(self.url(endpoint)).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: response.status(),
            });
        }

        let body: ContactRequestsResponse = response.json().await?;
        Ok(body.contact_requests)
    }

    async fn update_contact_request_status(&self, id: i64, status: &str) -> Result<(), ApiError> {
        let endpoint = format!("/contact-requests/{id}/status");
        debug!("PUT {} -> {}", endpoint, status);

        let response = self
            .client
            .put(self.url(&endpoint))
            .json(&json!({ "status": status }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Serves one canned HTTP response on an ephemeral port and hands back
    /// the raw request it received.
    async fn one_shot_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_is_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{addr}"), handle)
    }

    fn request_is_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(headers_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text
            .lines()
            .filter_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .next()
            .unwrap_or(0);
        request.len() >= headers_end + 4 + content_length
    }

    #[tokio::test]
    async fn list_properties_sends_the_query_and_decodes_the_envelope() {
        let body = r#"{"properties":[{"id":1,"title":"Garden flat","city":"Karen","price":45000}]}"#;
        let (base_url, handle) = one_shot_server("200 OK", body).await;
        let api = RestListingApi::new(base_url).unwrap();

        let query = [
            ("search", "garden".to_string()),
            ("amenities", "Parking".to_string()),
            ("amenities", "Security".to_string()),
        ];
        let properties = api.list_properties(&query).await.unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].city, "Karen");

        let request = handle.await.unwrap();
        assert!(request
            .starts_with("GET /properties?search=garden&amenities=Parking&amenities=Security "));
    }

    #[tokio::test]
    async fn update_contact_request_status_puts_the_status_body() {
        let (base_url, handle) = one_shot_server("200 OK", "").await;
        let api = RestListingApi::new(base_url).unwrap();

        api.update_contact_request_status(42, "resolved").await.unwrap();

        let request = handle.await.unwrap();
        assert!(request.starts_with("PUT /contact-requests/42/status "));
        assert!(request.contains(r#"{"status":"resolved"}"#));
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let (base_url, _handle) = one_shot_server("500 Internal Server Error", "").await;
        let api = RestListingApi::new(base_url).unwrap();

        let err = api
            .update_contact_request_status(42, "resolved")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { ref endpoint, status }
            if endpoint == "/contact-requests/42/status"
                && status == reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    }
}
