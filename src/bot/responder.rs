use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, CreateAttachment, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditInteractionResponse,
    Http,
};
use std::sync::Arc;

use crate::{Result, dispatch::InteractionResponder, extract::DownloadedMedia};

/// Answers a slash command through a deferred interaction response.
pub struct DiscordResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl DiscordResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }

    fn attachment(media: &DownloadedMedia) -> CreateAttachment {
        CreateAttachment::bytes(media.data.to_vec(), media.filename.clone())
    }
}

#[async_trait]
impl InteractionResponder for DiscordResponder {
    async fn acknowledge(&self, content: &str) -> Result<()> {
        let message = CreateInteractionResponseMessage::new().content(content);
        let response = CreateInteractionResponse::Defer(message);
        self.interaction
            .create_response(self.http.as_ref(), response)
            .await?;
        Ok(())
    }

    async fn edit(&self, content: &str) -> Result<()> {
        self.interaction
            .edit_response(
                self.http.as_ref(),
                EditInteractionResponse::new().content(content),
            )
            .await?;
        Ok(())
    }

    async fn edit_with_file(&self, content: &str, media: &DownloadedMedia) -> Result<()> {
        let edit = EditInteractionResponse::new()
            .content(content)
            .new_attachment(Self::attachment(media));
        self.interaction
            .edit_response(self.http.as_ref(), edit)
            .await?;
        Ok(())
    }

    async fn followup_with_file(&self, content: &str, media: &DownloadedMedia) -> Result<()> {
        let followup = CreateInteractionResponseFollowup::new()
            .content(content)
            .add_file(Self::attachment(media));
        self.interaction
            .create_followup(self.http.as_ref(), followup)
            .await?;
        Ok(())
    }
}
