use super::AttendanceApi;
use crate::libs::attendance::{AttendanceConfig, AttendanceRecord, NewAttendance, WireId};
use crate::libs::credentials::Credentials;
use crate::libs::error::{AttendanceError, AttendanceResult};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const ATTENDANCES_URL: &str = "attendances";
const HEALTH_URL: &str = "health";

/// Outcome of a `GET /health` probe.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub url: String,
    pub success: bool,
    pub status: Option<u16>,
    pub elapsed_ms: u128,
    pub error: Option<String>,
}

pub struct HttpAttendanceApi {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl HttpAttendanceApi {
    pub fn new(config: &AttendanceConfig, timeout: Duration) -> AttendanceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AttendanceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    /// Sends the cached bearer token with every request and drops it on 401.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path)).header(ACCEPT, "application/json");
        match self.credentials.as_ref().and_then(Credentials::token) {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> AttendanceResult<T> {
        let res = request.send().await.map_err(|e| AttendanceError::Network(e.to_string()))?;
        let res = Self::check_status(res).await?;
        let body = res.bytes().await.map_err(|e| AttendanceError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| AttendanceError::InvalidShape(e.to_string()))
    }

    async fn check_status(res: Response) -> AttendanceResult<Response> {
        let status = res.status();
        debug!(%status, url = %res.url(), "attendance response");

        if status.is_success() {
            return Ok(res);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(AttendanceError::Auth);
        }

        let body = res.text().await.unwrap_or_default();
        Err(AttendanceError::Server {
            status: status.as_u16(),
            message: server_message(&body, status),
        })
    }

    /// Probes `GET /health`; never fails, the outcome is in the report.
    pub async fn health(&self) -> HealthReport {
        let url = self.url(HEALTH_URL);
        let started = Instant::now();
        let result = self.request(Method::GET, HEALTH_URL).send().await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(res) => HealthReport {
                url,
                success: res.status() == StatusCode::OK,
                status: Some(res.status().as_u16()),
                elapsed_ms,
                error: None,
            },
            Err(e) => HealthReport {
                url,
                success: false,
                status: None,
                elapsed_ms,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Prefers the `message` or `error` field of a JSON error body.
fn server_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = fields.get(key) {
                return message.clone();
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("Server error").to_string()
    } else {
        body.to_string()
    }
}

impl AttendanceApi for HttpAttendanceApi {
    async fn list(&self) -> AttendanceResult<Value> {
        self.send(self.request(Method::GET, ATTENDANCES_URL)).await
    }

    async fn create(&self, request: &NewAttendance) -> AttendanceResult<AttendanceRecord> {
        debug!(employee_id = %request.employee_id, date = %request.date, "creating attendance record");
        self.send(self.request(Method::POST, ATTENDANCES_URL).json(request)).await
    }

    async fn update(&self, id: &WireId, request: &NewAttendance) -> AttendanceResult<AttendanceRecord> {
        debug!(record_id = %id, "updating attendance record");
        let path = format!("{}/{}", ATTENDANCES_URL, id);
        self.send(self.request(Method::PUT, &path).json(request)).await
    }

    fn session_expired(&self) {
        if let Some(credentials) = &self.credentials {
            if let Err(e) = credentials.clear() {
                warn!("failed to clear cached token: {}", e);
            }
        }
    }
}
