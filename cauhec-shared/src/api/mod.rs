//! REST client for the CAUHEC Connect admin API.

mod errors;
mod login;

pub use errors::{ApiError, ApiErrorKind};
pub use login::{LoginRoute, join_url};

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode, header::ACCEPT};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::models::{
    ChartPayload, ConnectionRecord, CreateAdminRequest, InstitutionFilter, InstitutionRecord,
    LoginRequest, LoginResponse, NewInstitution, ProfileRecord, StatsPayload, UserRecord,
    UserRole,
};
use crate::session::SessionStore;

const LOGIN_PATH: &str = "/admin/login";
const NO_BODY: Option<&()> = None;
const NO_QUERY: &[(&str, &str)] = &[];

/// Whether a call carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Requires a stored token; fails with [`ApiError::Unauthenticated`]
    /// before any network traffic when there is none.
    Required,
    /// Sent without credentials.
    Public,
}

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Client for the admin API.
///
/// Reads the bearer token from the injected [`SessionStore`] on every call.
/// A 401 on an authenticated call clears that store and fires the
/// unauthorized hook before the error is returned.
#[derive(Clone)]
pub struct AdminClient {
    base_url: String,
    login_routes: Vec<LoginRoute>,
    client: Client,
    session: SessionStore,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url)
            .field("login_routes", &self.login_routes)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// A client for `base_url` with a single direct login route.
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            login_routes: vec![LoginRoute::direct(base_url.clone())],
            base_url,
            client: Client::new(),
            session,
            on_unauthorized: None,
        }
    }

    /// A client configured from `config`, including its login routes and,
    /// on native targets, its request timeout.
    pub fn from_config(config: &ClientConfig, session: SessionStore) -> Self {
        let mut client = Self::new(&config.api_base_url, session).with_login_routes(config.login_routes());
        client.client = build_http_client(config);
        client
    }

    /// Replaces the login route list. An empty list keeps the current one.
    #[must_use]
    pub fn with_login_routes(mut self, routes: Vec<LoginRoute>) -> Self {
        if !routes.is_empty() {
            self.login_routes = routes;
        }
        self
    }

    /// Registers the action run after a 401 has cleared the session.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn login_routes(&self) -> &[LoginRoute] {
        &self.login_routes
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Issues one request against the API base and returns the success body.
    ///
    /// # Errors
    /// See [`ApiError`] for the failure kinds.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        auth: Auth,
    ) -> Result<Value, ApiError> {
        self.send(method, &self.api_url(path), NO_QUERY, body, auth)
            .await
    }

    async fn send<B>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let token = match auth {
            Auth::Required => Some(self.session.token().ok_or(ApiError::Unauthenticated)?),
            Auth::Public => None,
        };

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, url, "sending request");
        let response = request.send().await.map_err(|err| {
            warn!(%method, url, error = %err, "request failed in transport");
            ApiError::from(err)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            warn!(%method, url, status = status.as_u16(), "request rejected");
            if status == StatusCode::UNAUTHORIZED && auth == Auth::Required {
                self.expire_session();
            }
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: server_message(&text),
            });
        }

        success_body(&text)
    }

    fn expire_session(&self) {
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "failed to clear session after 401");
        }
        info!("session expired; redirecting to login");
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }

    async fn get_field<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        field: &str,
    ) -> Result<T, ApiError> {
        let body = self
            .send(Method::GET, &self.api_url(path), query, NO_BODY, Auth::Required)
            .await?;
        take_field(body, field)
    }

    /// Signs in through the configured login routes, in order.
    ///
    /// A network or HTTP failure moves on to the next route; a malformed or
    /// rejected body ends the attempt. Only the final outcome is returned.
    /// The session is not written here.
    ///
    /// # Errors
    /// The error from the last route tried.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let mut last_error = None;

        for (attempt, route) in self.login_routes.iter().enumerate() {
            let url = route.endpoint(LOGIN_PATH);
            let outcome = self
                .send(Method::POST, &url, NO_QUERY, Some(&payload), Auth::Public)
                .await
                .and_then(|body| serde_json::from_value::<LoginResponse>(body).map_err(ApiError::from));
            match outcome {
                Ok(response) => {
                    info!(route = route.label(), attempt, user_id = response.user.id, "login succeeded");
                    return Ok(response);
                }
                Err(err) if err.is_transport_failure() => {
                    warn!(route = route.label(), attempt, error = %err, "login route failed");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::Network("no login route configured".to_string())))
    }

    /// `GET /admin/stats`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn stats(&self) -> Result<StatsPayload, ApiError> {
        self.get_field("/admin/stats", NO_QUERY, "data").await
    }

    /// `GET /admin/charts/preceptors-vs-students`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn preceptors_vs_students(&self) -> Result<ChartPayload, ApiError> {
        self.get_field("/admin/charts/preceptors-vs-students", NO_QUERY, "data")
            .await
    }

    /// `GET /admin/all-connections`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn connections(&self) -> Result<Vec<ConnectionRecord>, ApiError> {
        self.get_field("/admin/all-connections", NO_QUERY, "data")
            .await
    }

    /// `GET /admin/users-list/?role=<role>`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn users(&self, role: UserRole) -> Result<Vec<UserRecord>, ApiError> {
        self.get_field("/admin/users-list/", &[("role", role.as_str())], "data")
            .await
    }

    /// `GET /admin/view-user?id=<id>`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn user(&self, id: &str) -> Result<UserRecord, ApiError> {
        self.get_field("/admin/view-user", &[("id", id)], "user")
            .await
    }

    /// `GET /admin/institutions?state=&type=&search=`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn institutions(
        &self,
        filter: &InstitutionFilter,
    ) -> Result<Vec<InstitutionRecord>, ApiError> {
        let data: Value = self
            .get_field("/admin/institutions", &filter.query(), "data")
            .await?;
        take_field(data, "institutions")
    }

    /// `POST /admin/add-institution`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn add_institution(
        &self,
        institution: &NewInstitution,
    ) -> Result<InstitutionRecord, ApiError> {
        let body = self
            .send(
                Method::POST,
                &self.api_url("/admin/add-institution"),
                NO_QUERY,
                Some(institution),
                Auth::Required,
            )
            .await?;
        take_field(body, "schoolLocation")
    }

    /// `GET /admin/profiles`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn profiles(&self) -> Result<Vec<ProfileRecord>, ApiError> {
        self.get_field("/admin/profiles", NO_QUERY, "data").await
    }

    /// `POST /admin/create`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn create_admin(
        &self,
        request: &CreateAdminRequest,
    ) -> Result<ProfileRecord, ApiError> {
        let body = self
            .send(
                Method::POST,
                &self.api_url("/admin/create"),
                NO_QUERY,
                Some(request),
                Auth::Required,
            )
            .await?;
        take_field(body, "user")
    }

    /// `DELETE /admin/profile/<id>`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete_profile(&self, id: i64) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &self.api_url(&format!("/admin/profile/{id}")),
            NO_QUERY,
            NO_BODY,
            Auth::Required,
        )
        .await
        .map(|_| ())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> Client {
    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("cauhec-admin/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default HTTP client");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ClientConfig) -> Client {
    Client::new()
}

/// Parses a 2xx body and checks its `status` marker.
fn success_body(text: &str) -> Result<Value, ApiError> {
    let body: Value = serde_json::from_str(text)?;
    match body.get("status").and_then(Value::as_str) {
        Some("success") => Ok(body),
        Some(other) => Err(ApiError::UnexpectedShape(
            server_message(text).unwrap_or_else(|| format!("status was `{other}`")),
        )),
        None => Err(ApiError::UnexpectedShape(
            "response has no `status` field".to_string(),
        )),
    }
}

/// `message` from a JSON error body, if any.
fn server_message(text: &str) -> Option<String> {
    serde_json::from_str::<Value>(text)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn take_field<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T, ApiError> {
    let value = body
        .get_mut(field)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or_else(|| ApiError::UnexpectedShape(format!("response has no `{field}` field")))?;
    serde_json::from_value(value)
        .map_err(|err| ApiError::UnexpectedShape(format!("`{field}` is malformed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_requires_status() {
        assert!(success_body(r#"{"status":"success","data":[]}"#).is_ok());
        assert_eq!(
            success_body(r#"{"data":[]}"#).unwrap_err().kind(),
            ApiErrorKind::UnexpectedShape
        );
        assert_eq!(
            success_body("<html>").unwrap_err().kind(),
            ApiErrorKind::UnexpectedShape
        );
    }

    #[test]
    fn test_success_body_surfaces_server_message() {
        let err = success_body(r#"{"status":"error","message":"Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::UnexpectedShape("Invalid credentials".to_string())
        );
        let err = success_body(r#"{"status":"fail"}"#).unwrap_err();
        assert!(err.to_string().contains("fail"));
    }

    #[test]
    fn test_take_field() {
        let body = serde_json::json!({"status": "success", "data": [1, 2, 3]});
        let data: Vec<u8> = take_field(body, "data").unwrap();
        assert_eq!(data, vec![1, 2, 3]);

        let missing = serde_json::json!({"status": "success", "data": null});
        assert!(take_field::<Vec<u8>>(missing, "data").is_err());

        let wrong = serde_json::json!({"data": "nope"});
        let err = take_field::<Vec<u8>>(wrong, "data").unwrap_err();
        assert!(err.to_string().contains("`data` is malformed"));
    }

    #[test]
    fn test_new_client_uses_single_direct_route() {
        let client = AdminClient::new("https://backend.cauhec.org/api/v1/", SessionStore::in_memory());
        assert_eq!(client.base_url(), "https://backend.cauhec.org/api/v1");
        assert_eq!(
            client.login_routes(),
            &[LoginRoute::direct("https://backend.cauhec.org/api/v1")]
        );
        let same = client.clone().with_login_routes(Vec::new());
        assert_eq!(same.login_routes().len(), 1);
    }
}
