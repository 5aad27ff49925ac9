use super::{
    render::{ATTACHMENT_CAPTION, link_fallback_message},
    responder::InteractionResponder,
};
use crate::extract::DownloadedMedia;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Attached,
    LinkFallback,
}

/// Deliver downloaded media as an attachment, falling back to a plain link.
///
/// The deferred response is edited with the file first; if the platform
/// refuses, a follow-up carries it instead. If both are rejected the
/// response is replaced by a link to `direct_url`. Never fails.
pub async fn deliver<R>(
    responder: &R,
    media: &DownloadedMedia,
    direct_url: &str,
) -> DeliveryOutcome
where
    R: InteractionResponder + ?Sized,
{
    let edit_err = match responder.edit_with_file(ATTACHMENT_CAPTION, media).await {
        Ok(()) => return DeliveryOutcome::Attached,
        Err(e) => e,
    };
    tracing::warn!(
        "Attaching {} ({} bytes) to response failed: {}",
        media.filename,
        media.data.len(),
        edit_err
    );

    match responder.followup_with_file(ATTACHMENT_CAPTION, media).await {
        Ok(()) => return DeliveryOutcome::Attached,
        Err(e) => tracing::warn!("Follow-up with {} failed: {}", media.filename, e),
    }

    if let Err(e) = responder.edit(&link_fallback_message(direct_url)).await {
        tracing::error!("Failed to edit response with download link: {}", e);
    }

    DeliveryOutcome::LinkFallback
}
