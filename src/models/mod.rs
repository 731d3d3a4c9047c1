pub mod options;
pub mod readiness;

pub use options::{HealthOptions, HealthOverlay, DEFAULT_LIVENESS_ROUTE, DEFAULT_READINESS_ROUTE};
pub use readiness::{Readiness, ReadinessCheck};
