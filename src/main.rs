use snip::config;
use snip::server;
use snip::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
