use anyhow::Result;
use dotenvy::dotenv;
use envconfig::Envconfig;
use tracing::info;
use webhook_dispatcher::{
    config::WebhookConfig,
    server::Server,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = WebhookConfig::init_from_env()?;

    let subscriber = get_subscriber("webhook-dispatcher", &config.log_level, std::io::stdout);
    init_subscriber(subscriber)?;

    config.validate()?;

    info!("Starting webhook-dispatcher with config:\n{config}");

    Server::new(config).run().await
}
