use async_trait::async_trait;
use errors::*;
use models::{
    payload::{CreateUserPayload, ErrorBody, UpdateUserPayload},
    user::User,
};
use reqwest::header::*;
use serde::de::DeserializeOwned;

pub mod errors;
pub mod models;

pub type Result<T> = std::result::Result<T, ApiError>;

const USERS_PATH: &str = "api/usuarios";

/// Source of the bearer credential attached to every request.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Returns the current token, failing before any request is built.
pub fn require_token(provider: &dyn TokenProvider) -> Result<String> {
    provider
        .token()
        .filter(|token| !token.trim().is_empty())
        .ok_or(ApiError::Unauthenticated)
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn create_user(&self, token: &str, payload: &CreateUserPayload) -> Result<()>;

    async fn update_user(&self, token: &str, id: u64, payload: &UpdateUserPayload)
        -> Result<User>;

    async fn list_users(&self, token: &str) -> Result<Vec<User>>;

    async fn get_user(&self, token: &str, id: u64) -> Result<User>;
}

struct BearerAuth<'a>(&'a str);

impl TryFrom<BearerAuth<'_>> for HeaderValue {
    type Error = ApiError;

    fn try_from(value: BearerAuth<'_>) -> Result<Self> {
        let mut header = HeaderValue::from_str(&format!("Bearer {}", value.0))
            .map_err(|_| ApiError::Unauthenticated)?;
        header.set_sensitive(true);

        Ok(header)
    }
}

fn get_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    headers
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turns a non-2xx response into [`ApiError::Rejected`]. The body is parsed on
/// a best-effort basis for a `message` field.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());

    tracing::debug!(status = status.as_u16(), ?message, "request rejected");

    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Json(e.to_string()))
}

/// HTTP client for the user-management API.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(get_headers())
            .build()
            .map_err(transport)?;

        // a trailing slash keeps `join` from dropping the last path segment
        let base = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = reqwest::Url::parse(&base).map_err(|_| ApiError::UrlParsing)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    fn make_url(&self, id: Option<u64>) -> Result<reqwest::Url> {
        let path = match id {
            Some(id) => format!("{USERS_PATH}/{id}"),
            None => USERS_PATH.to_string(),
        };

        self.base_url
            .join(&path)
            .map_err(|_| ApiError::UrlParsing)
    }
}

#[async_trait]
impl UserApi for Client {
    #[tracing::instrument(skip_all, fields(login = %payload.login))]
    async fn create_user(&self, token: &str, payload: &CreateUserPayload) -> Result<()> {
        let url = self.make_url(None)?;

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, HeaderValue::try_from(BearerAuth(token))?)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let response = ensure_success(response).await?;
        tracing::debug!(status = response.status().as_u16(), "user created");

        Ok(())
    }

    #[tracing::instrument(skip(self, token, payload))]
    async fn update_user(
        &self,
        token: &str,
        id: u64,
        payload: &UpdateUserPayload,
    ) -> Result<User> {
        let url = self.make_url(Some(id))?;

        let response = self
            .client
            .put(url)
            .header(AUTHORIZATION, HeaderValue::try_from(BearerAuth(token))?)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        read_json(ensure_success(response).await?).await
    }

    #[tracing::instrument(skip_all)]
    async fn list_users(&self, token: &str) -> Result<Vec<User>> {
        let url = self.make_url(None)?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, HeaderValue::try_from(BearerAuth(token))?)
            .send()
            .await
            .map_err(transport)?;

        read_json(ensure_success(response).await?).await
    }

    #[tracing::instrument(skip(self, token))]
    async fn get_user(&self, token: &str, id: u64) -> Result<User> {
        let url = self.make_url(Some(id))?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, HeaderValue::try_from(BearerAuth(token))?)
            .send()
            .await
            .map_err(transport)?;

        read_json(ensure_success(response).await?).await
    }
}
