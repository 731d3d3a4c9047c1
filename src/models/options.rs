use serde::Deserialize;

use crate::models::readiness::ReadinessCheck;

pub const DEFAULT_LIVENESS_ROUTE: &str = "/health";
pub const DEFAULT_READINESS_ROUTE: &str = "/readiness";

/// 合并后的探针配置，注册完成后不再修改
#[derive(Debug, Clone)]
pub struct HealthOptions {
    /// 是否注册存活探针
    pub enable_liveness: bool,
    /// 存活探针路径
    pub liveness_route: String,
    /// 是否注册就绪探针
    pub enable_readiness: bool,
    /// 就绪探针路径
    pub readiness_route: String,
    /// 就绪检查函数
    pub readiness_check: ReadinessCheck,
    /// 默认就绪检查上报的版本号
    pub server_version: String,
}

/// 调用方传入的部分配置，缺省字段取默认值
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthOverlay {
    #[serde(default)]
    pub enable_liveness: Option<bool>,
    #[serde(default)]
    pub liveness_route: Option<String>,
    #[serde(default)]
    pub enable_readiness: Option<bool>,
    #[serde(default)]
    pub readiness_route: Option<String>,
    #[serde(skip)]
    pub readiness_check: Option<ReadinessCheck>,
    #[serde(default)]
    pub server_version: Option<String>,
}

impl HealthOptions {
    /// Field-by-field merge of `overlay` over the defaults.
    ///
    /// Without a custom check, the default one reports the merged `server_version`.
    pub fn merge(overlay: HealthOverlay) -> Self {
        let server_version = overlay
            .server_version
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        let readiness_check = overlay
            .readiness_check
            .unwrap_or_else(|| ReadinessCheck::version_and_timestamp(server_version.clone()));

        HealthOptions {
            enable_liveness: overlay.enable_liveness.unwrap_or(true),
            liveness_route: overlay
                .liveness_route
                .unwrap_or_else(|| DEFAULT_LIVENESS_ROUTE.to_string()),
            enable_readiness: overlay.enable_readiness.unwrap_or(true),
            readiness_route: overlay
                .readiness_route
                .unwrap_or_else(|| DEFAULT_READINESS_ROUTE.to_string()),
            readiness_check,
            server_version,
        }
    }
}

impl HealthOverlay {
    pub fn merge_over_defaults(self) -> HealthOptions {
        HealthOptions::merge(self)
    }
}

impl Default for HealthOptions {
    fn default() -> Self {
        HealthOptions::merge(HealthOverlay::default())
    }
}

impl From<HealthOverlay> for HealthOptions {
    fn from(overlay: HealthOverlay) -> Self {
        HealthOptions::merge(overlay)
    }
}
