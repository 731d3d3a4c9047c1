use clap::Parser;

use actix_health_check::HealthOverlay;

/// Health Check - 存活/就绪探针服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 9999)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// 存活探针路径
    #[arg(long, env = "LIVENESS_ROUTE")]
    pub liveness_route: Option<String>,

    /// 就绪探针路径
    #[arg(long, env = "READINESS_ROUTE")]
    pub readiness_route: Option<String>,

    /// 不注册存活探针
    #[arg(long, env = "DISABLE_LIVENESS")]
    pub disable_liveness: bool,

    /// 不注册就绪探针
    #[arg(long, env = "DISABLE_READINESS")]
    pub disable_readiness: bool,
}

impl CommandArgs {
    pub fn overlay(&self) -> HealthOverlay {
        HealthOverlay {
            enable_liveness: self.disable_liveness.then_some(false),
            liveness_route: self.liveness_route.clone(),
            enable_readiness: self.disable_readiness.then_some(false),
            readiness_route: self.readiness_route.clone(),
            readiness_check: None,
            server_version: None,
        }
    }
}
