use clap::Parser;
use cobalt_relay::{
    bot::{BotState, Handler, lifecycle},
    config::Config,
    dispatch::Dispatcher,
    extract::ExtractionClient,
};
use serenity::all::GatewayIntents;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cobalt_relay=debug,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate()?;

    let base_url = config.base_url()?;
    tracing::info!("Using cobalt instance at {}", base_url);

    let extraction = ExtractionClient::new(base_url, config.api_key())?;
    let state = Arc::new(BotState::new(Dispatcher::new(extraction), config.guild_id()?));

    let mut client = serenity::Client::builder(&config.discord_token, GatewayIntents::empty())
        .event_handler(Handler::new(state.clone()))
        .await?;

    let shard_manager = client.shard_manager.clone();
    let http = client.http.clone();
    let mut gateway = tokio::spawn(async move { client.start().await });

    tracing::info!("Bot is now running. Press CTRL-C to exit.");

    tokio::select! {
        _ = lifecycle::shutdown_signal() => {
            tracing::info!("Shutdown requested");
        }
        result = &mut gateway => {
            match result {
                Ok(Ok(())) => tracing::warn!("Gateway connection closed"),
                Ok(Err(e)) => tracing::error!("Gateway connection failed: {}", e),
                Err(e) => tracing::error!("Gateway task aborted: {}", e),
            }
        }
    }

    if config.remove_commands {
        tracing::info!("Removing commands...");
        let registered = state.registered_commands().await;
        if let Err(e) = lifecycle::unregister_commands(&http, state.guild, &registered).await {
            tracing::error!("Cannot remove commands: {}", e);
        }
    }

    shard_manager.shutdown_all().await;
    gateway.abort();

    Ok(())
}
