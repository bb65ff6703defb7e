//! HTTP API client wrapping `gloo-net` for calls to the platform API.
//!
//! One shared client carries the base address and the session handle;
//! the bearer credential is attached per call from current session
//! state, and every response passes through a single checkpoint that
//! turns an unauthorized status into the forced-logout transition.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use ztconsole_domain::device::{Device, NewDevice};
use ztconsole_domain::group::{Group, GroupStatus, NewGroup};
use ztconsole_domain::id::GroupId;
use ztconsole_domain::user::{Credentials, NewUser, User};

use crate::config::Config;
use crate::session::SessionHandle;

/// Error returned by API client methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential. The session has already been
    /// torn down by the time the caller sees this; never rendered as a
    /// form-level error.
    Unauthorized,
    /// Any other non-2xx answer, carrying the server's detail string.
    /// Validation failures and duplicates both arrive here, told apart
    /// only by message text.
    Server { status: u16, detail: String },
    /// The request never produced a response.
    Network(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("unauthorized"),
            Self::Server { detail, .. } => f.write_str(detail),
            Self::Network(message) => f.write_str(message),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Token grant returned by `POST /users/token`.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Reply from the group isolate/restore endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionReply {
    pub msg: String,
    pub status: GroupStatus,
    /// Absent when the group was already in the requested state.
    #[serde(default)]
    pub affected_devices: Option<u32>,
}

impl ActionReply {
    /// One-line summary for the success toast, including how many
    /// devices changed state when the server reports it.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.affected_devices {
            Some(count) => format!("{} ({count} devices, status {})", self.msg, self.status),
            None => self.msg.clone(),
        }
    }
}

/// Introspection summary from `GET /__routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesInfo {
    pub count: u32,
    pub build: String,
}

/// Session consequence of a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Checkpoint {
    /// Success; hand the response back to the caller.
    Accept,
    /// Credential rejected; tear the session down.
    Teardown,
    /// Any other error; surface it per view, session untouched.
    PassThrough,
}

/// Classify a response status at the checkpoint.
///
/// Exactly one status tears the session down. Validation, conflict,
/// forbidden, and server failures all pass through for per-view
/// display.
fn classify(status: u16) -> Checkpoint {
    match status {
        200..=299 => Checkpoint::Accept,
        401 => Checkpoint::Teardown,
        _ => Checkpoint::PassThrough,
    }
}

/// Render the server's `detail` field for display.
///
/// Plain strings pass through; FastAPI-style validation arrays are
/// shown as compact JSON rather than being dropped.
fn render_detail(detail: &serde_json::Value) -> String {
    match detail.as_str() {
        Some(text) => text.to_string(),
        None => detail.to_string(),
    }
}

/// Percent-encode a form value (handles `%`, `+`, `&`, `=`, spaces).
fn encode_form_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "%20")
}

/// Shared HTTP client for the platform API.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: SessionHandle,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &Config, session: SessionHandle) -> Self {
        Self {
            base: config.api_base.clone(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Attach the bearer credential from current session state.
    ///
    /// Read at call time, never baked in at construction, so a session
    /// change is visible to the next request without rebuilding the
    /// client.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Single response checkpoint.
    ///
    /// Exactly one status code (401) triggers the forced-logout
    /// transition; every other error status passes through untouched
    /// for per-view display and never mutates session state.
    async fn check(&self, resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        match classify(status) {
            Checkpoint::Accept => Ok(resp),
            Checkpoint::Teardown => {
                leptos::logging::warn!("credential rejected by the API, tearing down session");
                self.session.force_logout();
                Err(ApiError::Unauthorized)
            }
            Checkpoint::PassThrough => {
                let detail = match resp.json::<ErrorBody>().await {
                    Ok(body) => render_detail(&body.detail),
                    Err(_) => format!("HTTP {status}"),
                };
                Err(ApiError::Server { status, detail })
            }
        }
    }

    /// Exchange credentials for a bearer token (form-encoded, per the
    /// OAuth2 password grant the server implements).
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] on bad credentials; the session stays
    /// Anonymous and no redirect fires since there is nothing to tear
    /// down.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let body = format!(
            "username={}&password={}",
            encode_form_value(&credentials.username),
            encode_form_value(&credentials.password)
        );
        let resp = self
            .check(
                Request::post(&self.url("/users/token"))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body)?
                    .send()
                    .await?,
            )
            .await?;
        let token: TokenResponse = resp.json().await?;
        Ok(token.access_token)
    }

    /// Fetch all users.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self
            .check(self.with_auth(Request::get(&self.url("/users/"))).send().await?)
            .await?;
        Ok(resp.json().await?)
    }

    /// Create a user. Duplicate usernames come back as a server detail
    /// string.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn create_user(&self, payload: &NewUser) -> Result<User, ApiError> {
        let resp = self
            .check(
                self.with_auth(Request::post(&self.url("/users/")))
                    .json(payload)?
                    .send()
                    .await?,
            )
            .await?;
        Ok(resp.json().await?)
    }

    /// Fetch all devices.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn list_devices(&self) -> Result<Vec<Device>, ApiError> {
        let resp = self
            .check(self.with_auth(Request::get(&self.url("/devices/"))).send().await?)
            .await?;
        Ok(resp.json().await?)
    }

    /// Create a device.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn create_device(&self, payload: &NewDevice) -> Result<Device, ApiError> {
        let resp = self
            .check(
                self.with_auth(Request::post(&self.url("/devices/")))
                    .json(payload)?
                    .send()
                    .await?,
            )
            .await?;
        Ok(resp.json().await?)
    }

    /// Fetch all groups.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        let resp = self
            .check(self.with_auth(Request::get(&self.url("/groups/"))).send().await?)
            .await?;
        Ok(resp.json().await?)
    }

    /// Create a group. Duplicate names come back as a server detail
    /// string.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn create_group(&self, payload: &NewGroup) -> Result<Group, ApiError> {
        let resp = self
            .check(
                self.with_auth(Request::post(&self.url("/groups/")))
                    .json(payload)?
                    .send()
                    .await?,
            )
            .await?;
        Ok(resp.json().await?)
    }

    /// Mark every device in the group isolated.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] with a not-found detail when the group does
    /// not exist.
    pub async fn isolate_group(&self, id: GroupId) -> Result<ActionReply, ApiError> {
        let url = self.url(&format!("/groups/{id}/isolate"));
        let resp = self
            .check(self.with_auth(Request::post(&url)).send().await?)
            .await?;
        Ok(resp.json().await?)
    }

    /// Clear the group's isolation.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] with a not-found detail when the group does
    /// not exist.
    pub async fn restore_group(&self, id: GroupId) -> Result<ActionReply, ApiError> {
        let url = self.url(&format!("/groups/{id}/restore"));
        let resp = self
            .check(self.with_auth(Request::post(&url)).send().await?)
            .await?;
        Ok(resp.json().await?)
    }

    /// Fetch route count and build tag for the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors as [`ApiError`].
    pub async fn fetch_routes(&self) -> Result<RoutesInfo, ApiError> {
        let resp = self
            .check(self.with_auth(Request::get(&self.url("/__routes"))).send().await?)
            .await?;
        Ok(resp.json().await?)
    }
}

/// Access the shared API client from Leptos context.
///
/// Must be called within a component tree rooted in `App`.
pub fn use_api() -> ApiClient {
    leptos::prelude::use_context::<ApiClient>().expect("ApiClient not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pass_plain_detail_strings_through() {
        let detail = serde_json::json!("Group already exists");
        assert_eq!(render_detail(&detail), "Group already exists");
    }

    #[test]
    fn should_render_validation_arrays_as_json() {
        let detail = serde_json::json!([{"loc": ["body", "name"], "msg": "field required"}]);
        let rendered = render_detail(&detail);
        assert!(rendered.contains("field required"));
    }

    #[test]
    fn should_escape_reserved_characters_in_form_values() {
        assert_eq!(encode_form_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_form_value("p w+1%"), "p%20w%2B1%25");
    }

    #[test]
    fn should_display_server_error_as_its_detail() {
        let err = ApiError::Server {
            status: 400,
            detail: "Username already exists".into(),
        };
        assert_eq!(err.to_string(), "Username already exists");
    }

    #[test]
    fn should_tear_down_session_only_for_unauthorized_status() {
        assert_eq!(classify(401), Checkpoint::Teardown);
    }

    #[test]
    fn should_pass_other_error_statuses_through_without_teardown() {
        // Validation, forbidden, conflict, unprocessable, and server
        // failures all surface per view and leave the session alone.
        for status in [400, 403, 404, 409, 422, 500] {
            assert_eq!(classify(status), Checkpoint::PassThrough, "status {status}");
        }
    }

    #[test]
    fn should_accept_success_statuses() {
        assert_eq!(classify(200), Checkpoint::Accept);
        assert_eq!(classify(201), Checkpoint::Accept);
    }

    #[test]
    fn should_summarize_action_reply_with_device_count() {
        let reply = ActionReply {
            msg: "Group lobby isolated".into(),
            status: GroupStatus::Isolate,
            affected_devices: Some(4),
        };
        assert_eq!(reply.summary(), "Group lobby isolated (4 devices, status isolate)");
    }

    #[test]
    fn should_summarize_action_reply_without_device_count() {
        let reply = ActionReply {
            msg: "Group lobby already isolated".into(),
            status: GroupStatus::Isolate,
            affected_devices: None,
        };
        assert_eq!(reply.summary(), "Group lobby already isolated");
    }
}
