//! Palletizer API Client
//!
//! Async client for the Palletizer carton packing service. The service does
//! the packing; this crate owns the wire schema, the unit conventions, and a
//! single `POST /api/v1/pack` call with distinct transport, decode, and
//! application errors.
//!
//! # Units
//!
//! Every length on the wire is in millimeters and every weight is in grams.
//! Use [`units`] to convert imperial values before building a request.
//!
//! # Usage
//!
//! ```no_run
//! use palletizer::{CallContext, Carton, PackingConstraints, PackingOptions};
//! use palletizer::{PackingRequest, PalletizerClient};
//!
//! # async fn run() -> Result<(), palletizer::PalletizerError> {
//! let client = PalletizerClient::new()?;
//!
//! let request = PackingRequest {
//!     cartons: vec![Carton {
//!         id: "BOX001".into(),
//!         length: 609.6,
//!         width: 457.2,
//!         height: 406.4,
//!         weight: 18143.68,
//!         quantity: 30,
//!         fragile: false,
//!         allow_rotation: true,
//!     }],
//!     packing_constraints: PackingConstraints::standard_pallet(),
//!     packing_options: PackingOptions {
//!         support_percentage: 80.0,
//!     },
//! };
//!
//! let response = client.pack(&CallContext::new(), &request).await?;
//! if let Some(err) = response.soft_error() {
//!     eprintln!("service reported: {err}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod presets;
pub mod types;
pub mod units;

pub use client::{PalletizerClient, PACK_PATH};
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use context::CallContext;
pub use error::{PalletizerError, Result, TransportError};
pub use types::{
    Carton, Dimensions, HealthResponse, MetricsResponse, PackingConstraints, PackingOptions,
    PackingRequest, PackingResponse, PackingSummary, Pallet, PlacedCarton, Point3D,
};
