use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    AccountsResponse, Client, NetworkError, SummaryClient, SummaryRequest, UpsertAccountsRequest,
};

use super::config::AppConfig;
use super::logging::Logger;

const ACCOUNTS_PATH: &str = "/bankingtransactions/accounts";
const UPSERT_ACCOUNTS_PATH: &str = "/bankingtransactions/create-or-update-accounts";
const SUMMARY_PATH: &str = "/bankingtransactions/summary";

/// API client for the banking transactions backend.
///
/// Every call is a single request/response exchange: no retries, no backoff.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_build_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: super::config::normalize_base_url(&base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch every account and unwrap it to its client
    pub async fn list_accounts(&self) -> Result<Vec<Client>, NetworkError> {
        let url = self.endpoint(ACCOUNTS_PATH);
        Logger::debug_with_component("api", &format!("GET {}", url));

        let response = Request::get(&url)
            .send()
            .await
            .map_err(NetworkError::transport)?;
        let accounts: AccountsResponse = Self::read_json(response).await?;
        let clients = accounts.into_clients();

        Logger::info_with_component("api", &format!("Loaded {} accounts", clients.len()));
        Ok(clients)
    }

    /// Create or update the whole account list in one batch
    pub async fn upsert_accounts(&self, request: &UpsertAccountsRequest) -> Result<(), NetworkError> {
        let url = self.endpoint(UPSERT_ACCOUNTS_PATH);
        Logger::debug_with_component(
            "api",
            &format!("POST {} ({} accounts)", url, request.accounts.len()),
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(NetworkError::transport)?
            .send()
            .await
            .map_err(NetworkError::transport)?;
        Self::check_status(&response)?;

        Logger::info_with_component("api", &format!("Saved {} accounts", request.accounts.len()));
        Ok(())
    }

    /// Ask the backend for per-client summaries, aligned with `clients` by position
    pub async fn compute_summary(&self, clients: &[Client]) -> Result<Vec<SummaryClient>, NetworkError> {
        if clients.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoint(SUMMARY_PATH);
        Logger::debug_with_component("api", &format!("POST {} ({} clients)", url, clients.len()));

        let response = Request::post(&url)
            .json(&SummaryRequest::from_clients(clients))
            .map_err(NetworkError::transport)?
            .send()
            .await
            .map_err(NetworkError::transport)?;
        let summary: Vec<SummaryClient> = Self::read_json(response).await?;

        if summary.len() != clients.len() {
            Logger::warn_with_component(
                "api",
                &format!(
                    "Summary has {} rows for {} clients; rows are matched by position",
                    summary.len(),
                    clients.len()
                ),
            );
        }
        Ok(summary)
    }

    fn check_status(response: &Response) -> Result<(), NetworkError> {
        if response.ok() {
            Ok(())
        } else {
            Logger::error_with_component(
                "api",
                &format!("{} answered {}", response.url(), response.status()),
            );
            Err(NetworkError::status(response.status()))
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
        Self::check_status(&response)?;
        response.json::<T>().await.map_err(NetworkError::decode)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_endpoints() {
        let api = ApiClient::with_base_url("http://bank.local:8080/".to_string());

        assert_eq!(api.base_url(), "http://bank.local:8080");
        assert_eq!(
            api.endpoint(ACCOUNTS_PATH),
            "http://bank.local:8080/bankingtransactions/accounts"
        );
        assert_eq!(
            api.endpoint(UPSERT_ACCOUNTS_PATH),
            "http://bank.local:8080/bankingtransactions/create-or-update-accounts"
        );
        assert_eq!(
            api.endpoint(SUMMARY_PATH),
            "http://bank.local:8080/bankingtransactions/summary"
        );
    }

    #[wasm_bindgen_test]
    async fn test_empty_summary_makes_no_request() {
        // Unroutable host: any request would fail
        let api = ApiClient::with_base_url("http://127.0.0.1:9".to_string());

        let summary = api.compute_summary(&[]).await;
        assert_eq!(summary, Ok(Vec::new()));
    }
}
