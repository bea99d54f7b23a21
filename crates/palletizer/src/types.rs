//! Wire data model for the packing API.
//!
//! Request types serialize exactly as the service expects. Response types
//! decode leniently: missing or `null` fields fall back to zero values and
//! unknown fields are ignored, so an error-only body such as
//! `{"error": "carton too large"}` still decodes into a [`PackingResponse`].

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Request ─────────────────────────────────────────────────────────

/// A carton type to be packed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Carton {
    pub id: String,
    /// Millimeters
    pub length: f64,
    /// Millimeters
    pub width: f64,
    /// Millimeters
    pub height: f64,
    /// Grams
    pub weight: f64,
    /// Number of identical cartons
    pub quantity: u32,
    pub fragile: bool,
    pub allow_rotation: bool,
}

/// Envelope of a single pallet: maximum dimensions (mm) and weight (g).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingConstraints {
    pub max_length: f64,
    pub max_width: f64,
    pub max_height: f64,
    pub max_weight: f64,
}

/// Options passed through to the packing algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingOptions {
    /// Minimum share of a carton's base that must be supported (0-100).
    pub support_percentage: f64,
}

/// Body of `POST /api/v1/pack`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingRequest {
    pub cartons: Vec<Carton>,
    pub packing_constraints: PackingConstraints,
    pub packing_options: PackingOptions,
}

impl PackingRequest {
    /// Total number of physical cartons across all carton types.
    pub fn total_quantity(&self) -> u64 {
        self.cartons.iter().map(|c| u64::from(c.quantity)).sum()
    }
}

// ─── Response ────────────────────────────────────────────────────────
//
// Every response field goes through `null_as_default`. Integer fields are
// `i64` to accept anything the service's signed integers can hold.

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point3D {
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub z: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    #[serde(deserialize_with = "null_as_default")]
    pub length: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
}

/// A carton as placed by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacedCarton {
    #[serde(deserialize_with = "null_as_default")]
    pub carton_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: Point3D,
    /// Dimensions after rotation
    #[serde(deserialize_with = "null_as_default")]
    pub dimensions: Dimensions,
    #[serde(deserialize_with = "null_as_default")]
    pub orientation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: f64,
    /// Layer number (0-based)
    #[serde(deserialize_with = "null_as_default")]
    pub layer: i64,
}

/// One packed pallet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pallet {
    #[serde(deserialize_with = "null_as_default")]
    pub pallet_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_weight: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub utilization_percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cartons: Vec<PlacedCarton>,
    #[serde(deserialize_with = "null_as_default")]
    pub center_of_gravity: Point3D,
}

/// Aggregate statistics across all pallets in a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_pallets: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_cartons_packed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_utilization: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub computation_time_ms: i64,
}

/// Body returned by `POST /api/v1/pack`.
///
/// A 200 response may still carry a non-empty `error`; the client returns
/// it unchanged and callers should check [`PackingResponse::soft_error`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub pallets: Vec<Pallet>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: PackingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PackingResponse {
    /// Decode a response body. A literal `null` body yields the empty
    /// response, like a missing object.
    pub fn from_json_slice(body: &[u8]) -> serde_json::Result<Self> {
        Ok(serde_json::from_slice::<Option<Self>>(body)?.unwrap_or_default())
    }

    /// The service-reported error, if present and non-empty.
    pub fn soft_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Number of placed cartons counted across the returned pallets.
    pub fn placed_carton_count(&self) -> usize {
        self.pallets.iter().map(|p| p.cartons.len()).sum()
    }
}

// ─── Auxiliary endpoints ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// Service-wide counters reported by the metrics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub total_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_cartons: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pallets: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_time_ms: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_util_pct: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub success_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub uptime_seconds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_alloc_mb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_sys_mb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_goroutines: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_gc: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub last_gc_pause_ms: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub go_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub build_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub build_time: String,
}
