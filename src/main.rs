use actix_web::{App, HttpServer};
use anyhow::Context;
use clap::Parser;

mod cli;

use actix_health_check::{configure, HealthOptions};
use cli::CommandArgs;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);

    let options = HealthOptions::merge(args.overlay());
    if !options.enable_liveness && !options.enable_readiness {
        log::warn!("Both probes are disabled, every request will get 404");
    }

    print_banner(&args, &options);

    HttpServer::new(move || App::new().configure(configure(options.clone())))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("health check server stopped with an error")
}

fn print_banner(args: &CommandArgs, options: &HealthOptions) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Actix Health Check v{:<33}║", options.server_version);
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    if options.enable_liveness {
        println!("  GET    {:<24} - Liveness probe", options.liveness_route);
    }
    if options.enable_readiness {
        println!("  GET    {:<24} - Readiness probe", options.readiness_route);
    }
    println!("═══════════════════════════════════════════════════════════");
}
