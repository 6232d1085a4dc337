//! Typed wrapper over the backend REST API.
//!
//! Every operation is a single request/response: attach the bearer token (if
//! the store holds one), send through the [`Transport`], and unwrap the
//! envelope into a canonical model type.
//!
//! ERROR HANDLING
//! ==============
//! HTTP 401 becomes [`ApiError::AuthenticationFailed`] and 403 becomes
//! [`ApiError::Forbidden`]; everything else that is not a successful envelope
//! with data becomes [`ApiError::RequestFailed`]. The backend message is kept
//! verbatim; blank messages fall back to an operation-specific text.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::model::dashboard::number_positions;
use crate::model::{
    AndreiDashboard, CaptureReceipt, Credentials, DaemonDashboard, LeaderboardEntry, LoginGrant, NewPunishment,
    NewReport, NewUser, Punishment, PunishmentUpdate, Report, ReportStatus, ResistanceOverview, UserProfile,
    UserUpdate,
};
use crate::role::Role;
use crate::storage::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

const AUTH_REQUIRED: &str = "authentication required";
const ACCESS_DENIED: &str = "access denied";

/// API client generic over its transport and token store.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S) -> Self {
        Self { transport, tokens }
    }

    /// The token store whose token is attached to requests.
    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /auth/login`. Never sends a bearer token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for blank fields. A `success: false` envelope,
    /// a 400, or a 401 is reported as [`ApiError::AuthenticationFailed`] with
    /// the backend message; other statuses stay [`ApiError::RequestFailed`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError> {
        const FALLBACK: &str = "login failed";
        credentials.validate()?;
        let body = to_body(credentials)?;
        let response = self.send(Method::Post, "/auth/login".to_owned(), Some(body), false).await?;
        let grant: LoginGrant = decode(&response, FALLBACK).map_err(|err| match err {
            ApiError::RequestFailed { status: Some(status), message }
                if status == 400 || (200..300).contains(&status) =>
            {
                ApiError::AuthenticationFailed(message)
            }
            other => other,
        })?;
        if grant.token.trim().is_empty() {
            return Err(ApiError::AuthenticationFailed(FALLBACK.to_owned()));
        }
        Ok(grant)
    }

    /// `GET /auth/me`: the profile behind the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/auth/me".to_owned(), "failed to load profile").await
    }

    /// `POST /auth/register` (andrei only).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn register_user(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        user.validate()?;
        self.post("/auth/register".to_owned(), to_body(user)?, "failed to create user").await
    }

    // =========================================================================
    // DASHBOARDS
    // =========================================================================

    /// `GET /dashboard/andrei`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn andrei_dashboard(&self) -> Result<AndreiDashboard, ApiError> {
        let mut dashboard: AndreiDashboard =
            self.get("/dashboard/andrei".to_owned(), "failed to load command center").await?;
        number_positions(&mut dashboard.top_daemons);
        Ok(dashboard)
    }

    /// `GET /dashboard/daemon`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn daemon_dashboard(&self) -> Result<DaemonDashboard, ApiError> {
        let mut dashboard: DaemonDashboard =
            self.get("/dashboard/daemon".to_owned(), "failed to load daemon terminal").await?;
        number_positions(&mut dashboard.leaderboard);
        Ok(dashboard)
    }

    /// `GET /resistance`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn resistance_overview(&self) -> Result<ResistanceOverview, ApiError> {
        self.get("/resistance".to_owned(), "failed to load resistance hub").await
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// `GET /users`, optionally filtered by role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn users(&self, role: Option<Role>) -> Result<Vec<UserProfile>, ApiError> {
        let path = match role {
            Some(role) => format!("/users?role={role}"),
            None => "/users".to_owned(),
        };
        self.get(path, "failed to load users").await
    }

    /// Network admins a daemon may capture.
    ///
    /// A 403 from the user list degrades to an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for every failure other than 403.
    pub async fn capture_targets(&self) -> Result<Vec<UserProfile>, ApiError> {
        match self.users(Some(Role::NetworkAdmin)).await {
            Err(ApiError::Forbidden(message)) => {
                warn!(%message, "capture targets forbidden; showing none");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// `PUT /users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<(), ApiError> {
        update.validate()?;
        self.put(format!("/users/{id}"), to_body(update)?, "failed to update user").await
    }

    /// `POST /users/{id}/capture`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn capture(&self, target_id: u64) -> Result<CaptureReceipt, ApiError> {
        const FALLBACK: &str = "capture failed";
        let response = self
            .send(Method::Post, format!("/users/{target_id}/capture"), None, true)
            .await?;
        let envelope: Envelope<CaptureReceipt> = parse(&response, FALLBACK)?;
        if !envelope.success {
            return Err(ApiError::request_failed(Some(response.status), envelope.message_or(FALLBACK)));
        }
        if let Some(receipt) = envelope.data {
            return Ok(receipt);
        }
        // The capture endpoint puts the receipt fields beside `success`.
        serde_json::from_str(&response.body).map_err(|e| malformed(response.status, FALLBACK, &e))
    }

    // =========================================================================
    // REPORTS
    // =========================================================================

    /// `GET /reports`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn reports(&self) -> Result<Vec<Report>, ApiError> {
        self.get("/reports".to_owned(), "failed to load reports").await
    }

    /// `POST /reports`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn create_report(&self, report: &NewReport) -> Result<Report, ApiError> {
        report.validate()?;
        self.post("/reports".to_owned(), to_body(report)?, "failed to file report").await
    }

    /// `PUT /reports/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn update_report_status(&self, id: u64, status: ReportStatus) -> Result<(), ApiError> {
        if status == ReportStatus::Unknown {
            return Err(ApiError::Validation("unknown report status".to_owned()));
        }
        let body = serde_json::json!({ "status": status });
        self.put(format!("/reports/{id}/status"), body, "failed to update report").await
    }

    // =========================================================================
    // PUNISHMENTS
    // =========================================================================

    /// `GET /punishments`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn punishments(&self) -> Result<Vec<Punishment>, ApiError> {
        self.get("/punishments".to_owned(), "failed to load punishments").await
    }

    /// `GET /punishments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn punishment(&self, id: u64) -> Result<Punishment, ApiError> {
        self.get(format!("/punishments/{id}"), "failed to load punishment").await
    }

    /// `POST /punishments`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn create_punishment(&self, punishment: &NewPunishment) -> Result<Punishment, ApiError> {
        punishment.validate()?;
        self.post("/punishments".to_owned(), to_body(punishment)?, "failed to assign punishment")
            .await
    }

    /// `PUT /punishments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn update_punishment(&self, id: u64, update: &PunishmentUpdate) -> Result<(), ApiError> {
        update.validate()?;
        self.put(format!("/punishments/{id}"), to_body(update)?, "failed to update punishment")
            .await
    }

    // =========================================================================
    // STATISTICS
    // =========================================================================

    /// `GET /statistics/leaderboard`, in backend order with positions filled.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the module-level mapping.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let mut entries: Vec<LeaderboardEntry> =
            self.get("/statistics/leaderboard".to_owned(), "failed to load leaderboard").await?;
        number_positions(&mut entries);
        Ok(entries)
    }

    // =========================================================================
    // PLUMBING
    // =========================================================================

    async fn get<D: DeserializeOwned>(&self, path: String, fallback: &str) -> Result<D, ApiError> {
        let response = self.send(Method::Get, path, None, true).await?;
        decode(&response, fallback)
    }

    async fn post<D: DeserializeOwned>(&self, path: String, body: Value, fallback: &str) -> Result<D, ApiError> {
        let response = self.send(Method::Post, path, Some(body), true).await?;
        decode(&response, fallback)
    }

    async fn put(&self, path: String, body: Value, fallback: &str) -> Result<(), ApiError> {
        let response = self.send(Method::Put, path, Some(body), true).await?;
        acknowledge(&response, fallback)
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<HttpResponse, ApiError> {
        let bearer = if authenticated { self.tokens.load() } else { None };
        let request = HttpRequest { method, path, bearer, body };
        let (method, path) = (request.method, request.path.clone());
        match self.transport.send(request).await {
            Ok(response) => {
                debug!(%method, %path, status = response.status, "api request");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %path, error = %err, "api request failed");
                Err(err.into())
            }
        }
    }
}

fn to_body(value: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Validation(e.to_string()))
}

fn malformed(status: u16, fallback: &str, err: &serde_json::Error) -> ApiError {
    ApiError::request_failed(Some(status), format!("{fallback}: malformed response ({err})"))
}

/// Message from an error body, if it is an envelope with a non-blank one.
fn error_message(body: &str) -> Option<String> {
    let envelope: Envelope<IgnoredAny> = serde_json::from_str(body).ok()?;
    let message = envelope.message.trim();
    (!message.is_empty()).then(|| message.to_owned())
}

/// Map non-2xx statuses to errors, then parse the envelope.
fn parse<D: DeserializeOwned>(response: &HttpResponse, fallback: &str) -> Result<Envelope<D>, ApiError> {
    match response.status {
        401 => Err(ApiError::AuthenticationFailed(
            error_message(&response.body).unwrap_or_else(|| AUTH_REQUIRED.to_owned()),
        )),
        403 => Err(ApiError::Forbidden(
            error_message(&response.body).unwrap_or_else(|| ACCESS_DENIED.to_owned()),
        )),
        status if !response.is_success() => Err(ApiError::request_failed(
            Some(status),
            error_message(&response.body).unwrap_or_else(|| fallback.to_owned()),
        )),
        status => serde_json::from_str(&response.body).map_err(|e| malformed(status, fallback, &e)),
    }
}

/// Unwrap an envelope that must carry data.
pub(crate) fn decode<D: DeserializeOwned>(response: &HttpResponse, fallback: &str) -> Result<D, ApiError> {
    parse::<D>(response, fallback)?.into_data(response.status, fallback)
}

/// Accept a successful envelope whether or not it carries data.
pub(crate) fn acknowledge(response: &HttpResponse, fallback: &str) -> Result<(), ApiError> {
    let envelope = parse::<IgnoredAny>(response, fallback)?;
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::request_failed(Some(response.status), envelope.message_or(fallback)))
    }
}
