pub mod liveness;
pub mod readiness;

pub use liveness::liveness;
pub use readiness::readiness;

use actix_web::web;

use crate::host::RouteHost;
use crate::models::HealthOptions;

/// Merges the configuration and attaches the enabled probe routes to `host`.
///
/// A disabled probe gets no route at all, so the host answers 404 for it.
/// Errors from `host` are returned unchanged.
pub fn register<H>(host: &mut H, options: impl Into<HealthOptions>) -> Result<(), H::Error>
where
    H: RouteHost + ?Sized,
{
    let options = options.into();

    if options.enable_liveness {
        host.add_route(&options.liveness_route, liveness::resource(&options.liveness_route))?;
        log::info!("Liveness probe registered at GET {}", options.liveness_route);
    }

    if options.enable_readiness {
        host.add_route(
            &options.readiness_route,
            readiness::resource(&options.readiness_route, options.readiness_check.clone()),
        )?;
        log::info!("Readiness probe registered at GET {}", options.readiness_route);
    }

    Ok(())
}

/// `App::configure` entry point.
///
/// ```no_run
/// use actix_health_check::{configure, HealthOverlay};
/// use actix_web::App;
///
/// let app = App::new().configure(configure(HealthOverlay {
///     liveness_route: Some("/healthz".to_string()),
///     ..Default::default()
/// }));
/// ```
pub fn configure(options: impl Into<HealthOptions>) -> impl FnOnce(&mut web::ServiceConfig) {
    let options = options.into();
    move |cfg: &mut web::ServiceConfig| {
        register(cfg, options).unwrap_or_else(|never| match never {})
    }
}
