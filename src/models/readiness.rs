use actix_web::{Error, HttpRequest};
use chrono::{SecondsFormat, Utc};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// 就绪检查结果
///
/// 只看变体，不看内容：`Ready(json!({}))` 也是就绪。
#[derive(Debug, Clone, PartialEq)]
pub enum Readiness {
    /// 就绪，响应 200，值作为响应体
    Ready(Value),
    /// 未就绪，响应 500；有值时仍然序列化为响应体
    NotReady(Option<Value>),
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Readiness::Ready(value) => Some(value),
            Readiness::NotReady(value) => value.as_ref(),
        }
    }
}

impl From<Option<Value>> for Readiness {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Readiness::Ready(value),
            None => Readiness::NotReady(None),
        }
    }
}

type CheckFn = dyn Fn(HttpRequest) -> LocalBoxFuture<'static, Result<Readiness, Error>> + Send + Sync;

/// 用户提供的就绪检查函数
///
/// Cheap to clone; every actix worker shares the same closure.
#[derive(Clone)]
pub struct ReadinessCheck(Arc<CheckFn>);

impl ReadinessCheck {
    /// Wraps an async check. An `Err` is handed back to actix unchanged.
    pub fn new<F, Fut>(check: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Readiness, Error>> + 'static,
    {
        ReadinessCheck(Arc::new(move |req| check(req).boxed_local()))
    }

    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn(&HttpRequest) -> Readiness + Send + Sync + 'static,
    {
        Self::new(move |req| future::ready(Ok(check(&req))))
    }

    /// 默认检查：返回 `{version, timestamp}`，始终就绪
    pub fn version_and_timestamp(version: impl Into<String>) -> Self {
        let version = version.into();
        Self::from_fn(move |_| {
            Readiness::Ready(serde_json::json!({
                "version": &version,
                "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            }))
        })
    }

    pub async fn run(&self, req: HttpRequest) -> Result<Readiness, Error> {
        (self.0)(req).await
    }
}

impl fmt::Debug for ReadinessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadinessCheck").finish_non_exhaustive()
    }
}
