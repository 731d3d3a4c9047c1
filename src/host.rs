use actix_web::{web, Resource};
use std::convert::Infallible;

/// Anything that accepts a GET resource at a path.
///
/// A host that refuses a registration (e.g. a duplicate path) reports it through
/// `Error`; the registrar returns that error as-is.
pub trait RouteHost {
    type Error;

    fn add_route(&mut self, path: &str, resource: Resource) -> Result<(), Self::Error>;
}

// actix 不会拒绝重复路径，先注册的 resource 优先匹配
impl RouteHost for web::ServiceConfig {
    type Error = Infallible;

    fn add_route(&mut self, _path: &str, resource: Resource) -> Result<(), Self::Error> {
        self.service(resource);
        Ok(())
    }
}
