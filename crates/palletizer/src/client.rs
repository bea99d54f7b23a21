//! HTTP client for the packing endpoint.

use std::time::Instant;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::{ClientConfig, DEFAULT_API_URL};
use crate::context::CallContext;
use crate::error::{PalletizerError, Result, TransportError};
use crate::types::{PackingRequest, PackingResponse};

/// Path of the packing operation, relative to the base URL.
pub const PACK_PATH: &str = "/api/v1/pack";

/// Client for the Palletizer API.
///
/// Cheap to clone; clones share one connection pool. Holds no per-call
/// state, so a single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct PalletizerClient {
    base_url: String,
    http: reqwest::Client,
}

impl PalletizerClient {
    /// Default endpoint, 120 s timeout.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Custom endpoint, 120 s timeout.
    pub fn with_endpoint(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::default().with_base_url(base_url))
    }

    /// Default endpoint over a caller-built transport.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            http,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PalletizerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: normalize_base_url(&config.base_url),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pack_url(&self) -> String {
        format!("{}{}", self.base_url, PACK_PATH)
    }

    /// Send `request` to `POST /api/v1/pack`.
    ///
    /// The body is decoded before the status is checked, so a non-JSON body
    /// yields [`PalletizerError::Decode`] whatever the status. Any status
    /// other than 200 yields [`PalletizerError::Application`] when the body
    /// names an error, else [`PalletizerError::Status`]. A 200 whose
    /// body carries an `error` field is returned as `Ok`; check
    /// [`PackingResponse::soft_error`].
    pub async fn pack(
        &self,
        ctx: &CallContext,
        request: &PackingRequest,
    ) -> Result<PackingResponse> {
        let payload = serde_json::to_vec(request).map_err(TransportError::Serialize)?;
        let url = self.pack_url();
        let start = Instant::now();

        debug!(
            url = %url,
            carton_types = request.cartons.len(),
            cartons = request.total_quantity(),
            bytes = payload.len(),
            "Sending packing request"
        );

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload)
                .send()
                .await
                .map_err(TransportError::Request)?;

            let status = response.status();
            let body = response.bytes().await.map_err(TransportError::Body)?;
            Ok::<_, TransportError>((status, body))
        };

        let (status, body) = match ctx.run(exchange).await {
            Ok(Ok(parts)) => parts,
            Ok(Err(e)) | Err(e) => {
                warn!(url = %url, error = %e, "Packing request failed in transport");
                return Err(e.into());
            }
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let result = interpret(status, &body);

        match &result {
            Ok(response) => {
                debug!(
                    status = status.as_u16(),
                    pallets = response.summary.total_pallets,
                    packed = response.summary.total_cartons_packed,
                    elapsed_ms,
                    "Packing response received"
                );
                if let Some(soft) = response.soft_error() {
                    warn!(error = %soft, "Service returned 200 with an error field");
                }
            }
            Err(e) => warn!(
                status = status.as_u16(),
                elapsed_ms,
                error = %e,
                "Packing request rejected"
            ),
        }

        result
    }
}

/// Map a status and raw body onto the call outcome.
fn interpret(status: StatusCode, body: &[u8]) -> Result<PackingResponse> {
    let response =
        PackingResponse::from_json_slice(body).map_err(|source| PalletizerError::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        })?;

    if status != StatusCode::OK {
        let status = status.as_u16();
        return Err(match response.soft_error() {
            Some(msg) => PalletizerError::Application {
                status,
                message: msg.to_string(),
            },
            None => PalletizerError::Status {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            },
        });
    }

    Ok(response)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
