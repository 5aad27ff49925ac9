use serenity::all::{Command, GuildId, Http};

use super::commands;
use crate::Result;

/// Register every command, scoped to `guild` when one is configured.
pub async fn register_commands(http: &Http, guild: Option<GuildId>) -> Result<Vec<Command>> {
    let mut registered = Vec::new();

    for builder in commands::all() {
        let command = match guild {
            Some(guild) => guild.create_command(http, builder).await?,
            None => Command::create_global_command(http, builder).await?,
        };
        tracing::info!("Registered command /{} ({})", command.name, command.id);
        registered.push(command);
    }

    Ok(registered)
}

/// Remove commands previously returned by [`register_commands`].
pub async fn unregister_commands(
    http: &Http,
    guild: Option<GuildId>,
    registered: &[Command],
) -> Result<()> {
    for command in registered {
        match guild {
            Some(guild) => guild.delete_command(http, command.id).await?,
            None => Command::delete_global_command(http, command.id).await?,
        }
        tracing::info!("Removed command /{}", command.name);
    }

    Ok(())
}

/// Resolve once the process is asked to stop (Ctrl-C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
