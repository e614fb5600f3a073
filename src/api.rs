//! HTTP client for the auth and budget services. One request per user
//! action; callers re-fetch the budget list after a mutation.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::models::{Budget, BudgetPayload, Credentials, ExpensePayload, TokenResponse};
use crate::session::Session;

const AUTH_BASE_URL: &str = "http://localhost:8000";
const BUDGET_BASE_URL: &str = "http://localhost:8001";

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not signed in")]
    Unauthorized,
    #[error("server responded with status {0}")]
    Http(u16),
    #[error("could not decode server response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Client for both backend services, carrying the session it authenticates
/// with.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        ApiClient { session }
    }

    fn bearer(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    fn check(resp: &Response) -> Result<(), ApiError> {
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(ApiError::Http(resp.status()));
        }
        Ok(())
    }

    async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ===== auth service =====

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = format!("{AUTH_BASE_URL}/register");
        let resp = Request::post(&url).json(credentials)?.send().await?;
        Self::check(&resp)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let url = format!("{AUTH_BASE_URL}/login");
        let resp = Request::post(&url).json(credentials)?.send().await?;
        Self::check(&resp)?;
        Self::decode(resp).await
    }

    // ===== budget service =====

    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/");
        let resp = self.bearer(Request::get(&url)).send().await?;
        Self::check(&resp)?;
        Self::decode(resp).await
    }

    pub async fn create_budget(&self, payload: &BudgetPayload) -> Result<(), ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/");
        let resp = self.bearer(Request::post(&url)).json(payload)?.send().await?;
        Self::check(&resp)
    }

    pub async fn update_budget(&self, id: i64, payload: &BudgetPayload) -> Result<(), ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/{id}");
        let resp = self.bearer(Request::put(&url)).json(payload)?.send().await?;
        Self::check(&resp)
    }

    pub async fn delete_budget(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/{id}");
        let resp = self.bearer(Request::delete(&url)).send().await?;
        Self::check(&resp)
    }

    pub async fn create_expense(
        &self,
        budget_id: i64,
        payload: &ExpensePayload,
    ) -> Result<(), ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/{budget_id}/expenses/");
        let resp = self.bearer(Request::post(&url)).json(payload)?.send().await?;
        Self::check(&resp)
    }

    pub async fn update_expense(
        &self,
        budget_id: i64,
        expense_id: i64,
        payload: &ExpensePayload,
    ) -> Result<(), ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/{budget_id}/expenses/{expense_id}");
        let resp = self.bearer(Request::put(&url)).json(payload)?.send().await?;
        Self::check(&resp)
    }

    pub async fn delete_expense(&self, budget_id: i64, expense_id: i64) -> Result<(), ApiError> {
        let url = format!("{BUDGET_BASE_URL}/budgets/{budget_id}/expenses/{expense_id}");
        let resp = self.bearer(Request::delete(&url)).send().await?;
        Self::check(&resp)
    }
}
