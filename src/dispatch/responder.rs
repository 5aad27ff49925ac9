use async_trait::async_trait;

use crate::{Result, extract::DownloadedMedia};

/// The chat-side half of a command invocation.
///
/// An invocation is acknowledged once, then its deferred response is edited
/// with the final content. A follow-up message is the secondary channel for
/// attachments that an edit refused.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    async fn acknowledge(&self, content: &str) -> Result<()>;

    async fn edit(&self, content: &str) -> Result<()>;

    async fn edit_with_file(&self, content: &str, media: &DownloadedMedia) -> Result<()>;

    async fn followup_with_file(&self, content: &str, media: &DownloadedMedia) -> Result<()>;
}
