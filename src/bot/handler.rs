use async_trait::async_trait;
use serenity::all::{
    Command, CommandInteraction, Context, EventHandler, GuildId, Interaction, Ready,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::Instrument;

use super::{
    commands::{VIDEO_COMMAND, parse_video_options},
    lifecycle,
    responder::DiscordResponder,
};
use crate::{
    dispatch::{Dispatcher, render::MISSING_URL},
    extract::build_request,
    logging::InvocationRecord,
};

/// State shared by every event the bot receives.
pub struct BotState {
    pub dispatcher: Dispatcher,
    pub guild: Option<GuildId>,
    registered: Mutex<Vec<Command>>,
}

impl BotState {
    pub fn new(dispatcher: Dispatcher, guild: Option<u64>) -> Self {
        Self {
            dispatcher,
            guild: guild.map(GuildId::new),
            registered: Mutex::new(Vec::new()),
        }
    }

    /// Commands registered by the last `ready` event.
    pub async fn registered_commands(&self) -> Vec<Command> {
        self.registered.lock().await.clone()
    }
}

pub struct Handler {
    state: Arc<BotState>,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }

    async fn handle_video(&self, ctx: Context, command: CommandInteraction) {
        let args = parse_video_options(
            command
                .data
                .options
                .iter()
                .map(|o| (o.name.as_str(), &o.value)),
        );
        let responder = DiscordResponder::new(ctx.http.clone(), command);

        let Some(args) = args else {
            tracing::warn!("/{} invoked without a URL", VIDEO_COMMAND);
            self.state.dispatcher.reply(&responder, MISSING_URL).await;
            return;
        };

        let record = InvocationRecord::new(VIDEO_COMMAND, &args.url);
        let span = tracing::info_span!("invocation", id = %record.invocation_id, url = %args.url);

        async move {
            let request = build_request(&args.url, args.options);
            let record = match self.state.dispatcher.handle(&responder, &request).await {
                Some(report) => record.with_report(&report),
                None => record.with_error("INTERACTION_REJECTED", "acknowledgement failed"),
            };
            record.finish().emit();
        }
        .instrument(span)
        .await;
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("Logged in as: {}", ready.user.tag());

        match lifecycle::register_commands(&ctx.http, self.state.guild).await {
            Ok(commands) => *self.state.registered.lock().await = commands,
            Err(e) => tracing::error!("Cannot register commands: {}", e),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        match command.data.name.as_str() {
            VIDEO_COMMAND => self.handle_video(ctx, command).await,
            other => tracing::warn!("Unknown command: {}", other),
        }
    }
}
