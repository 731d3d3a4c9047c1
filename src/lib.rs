//! Liveness and readiness probe routes for actix-web.
//!
//! `configure` plugs both probes into an `App`; `register` does the same for any
//! [`RouteHost`].

pub mod api;
pub mod host;
pub mod models;

pub use api::{configure, register};
pub use host::RouteHost;
pub use models::{
    HealthOptions, HealthOverlay, Readiness, ReadinessCheck, DEFAULT_LIVENESS_ROUTE,
    DEFAULT_READINESS_ROUTE,
};
