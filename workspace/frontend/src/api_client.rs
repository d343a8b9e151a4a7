pub mod donor;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use crate::settings;

/// Failure of a call to the donor service. `Display` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Common GET request handler.
///
/// The donor service answers with the bare payload, not wrapped in an envelope.
pub async fn get<T>(endpoint: &str, query: &[(&str, &str)]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = endpoint_url(endpoint);
    log::debug!("GET request to: {} {:?}", url, query);

    let response = Request::get(&url)
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|e| {
            let error = ApiError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

    if !response.ok() {
        let error = ApiError::Http(response.status());
        log::error!("GET {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body = response.text().await.map_err(|e| {
        let error = ApiError::Request(e.to_string());
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    let data = parse_body(&body).map_err(|error| {
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

fn endpoint_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

fn parse_body<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DonorSummary;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Http(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ApiError::Request("network down".into()).to_string(),
            "Request failed: network down"
        );
    }

    #[test]
    fn test_endpoint_url_uses_settings() {
        assert_eq!(endpoint_url("/donordetails"), "http://localhost:5000/donordetails");
    }

    #[test]
    fn test_parse_body() {
        let body = r#"{"full_name":"Ada","totalDonations":1,"itemsDonated":2,"lastDonation":"N/A","impactScore":3}"#;
        let summary: DonorSummary = parse_body(body).expect("valid body");
        assert_eq!(summary.full_name, "Ada");

        let err = parse_body::<DonorSummary>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse response"));
    }
}
