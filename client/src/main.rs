use anyhow::Result;
use clap::Parser;
use tracing::info;

use client::{build_client_app, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    cfg.apply_args(&args);
    info!(?cfg, "Client config loaded");

    let mut app = build_client_app(args, cfg)?;
    app.run();
    Ok(())
}
