pub mod delivery;
pub mod render;
pub mod responder;

pub use delivery::{DeliveryOutcome, deliver};
pub use responder::InteractionResponder;

use crate::{
    Error,
    extract::{Downloadable, ExtractionClient, ExtractionRequest, ExtractionResult},
};
use render::{
    DOWNLOAD_FAILED, PROCESSING_FAILED, PROCESSING_MESSAGE, render_picker, render_service_error,
    render_unexpected,
};

/// What the user ended up seeing for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Attached,
    LinkFallback,
    Message,
    Failed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attached => "attached",
            Self::LinkFallback => "link_fallback",
            Self::Message => "message",
            Self::Failed => "failed",
        }
    }
}

impl From<DeliveryOutcome> for Outcome {
    fn from(outcome: DeliveryOutcome) -> Self {
        match outcome {
            DeliveryOutcome::Attached => Self::Attached,
            DeliveryOutcome::LinkFallback => Self::LinkFallback,
        }
    }
}

#[derive(Debug)]
pub struct DispatchReport {
    /// Status reported by the service, if it answered at all.
    pub status: Option<String>,
    pub outcome: Outcome,
    pub error: Option<Error>,
}

impl DispatchReport {
    fn new(status: &str, outcome: Outcome) -> Self {
        Self {
            status: Some(status.to_string()),
            outcome,
            error: None,
        }
    }

    fn failed(status: Option<&str>, error: Error) -> Self {
        Self {
            status: status.map(str::to_string),
            outcome: Outcome::Failed,
            error: Some(error),
        }
    }
}

/// Turns extraction results into exactly one user-visible response.
#[derive(Clone)]
pub struct Dispatcher {
    client: ExtractionClient,
}

impl Dispatcher {
    pub fn new(client: ExtractionClient) -> Self {
        Self { client }
    }

    /// Acknowledge the command, then run it. Returns `None` if the
    /// acknowledgement itself was rejected, in which case nothing else is sent.
    pub async fn handle<R>(
        &self,
        responder: &R,
        request: &ExtractionRequest,
    ) -> Option<DispatchReport>
    where
        R: InteractionResponder + ?Sized,
    {
        if let Err(e) = responder.acknowledge(PROCESSING_MESSAGE).await {
            tracing::error!("Failed to acknowledge interaction: {}", e);
            return None;
        }

        Some(self.run(responder, request).await)
    }

    /// Acknowledge the command and answer it with a fixed message.
    pub async fn reply<R>(&self, responder: &R, content: &str)
    where
        R: InteractionResponder + ?Sized,
    {
        if let Err(e) = responder.acknowledge(PROCESSING_MESSAGE).await {
            tracing::error!("Failed to acknowledge interaction: {}", e);
            return;
        }

        respond(responder, content).await;
    }

    /// Submit `request` and answer the deferred response with the result.
    pub async fn run<R>(&self, responder: &R, request: &ExtractionRequest) -> DispatchReport
    where
        R: InteractionResponder + ?Sized,
    {
        match self.client.submit(request).await {
            Ok(result) => self.dispatch(responder, result).await,
            Err(e) => {
                tracing::error!("{} {}: {}", PROCESSING_FAILED, request.url(), e);
                respond(responder, PROCESSING_FAILED).await;
                DispatchReport::failed(None, e)
            }
        }
    }

    /// Answer the deferred response for an already parsed result.
    pub async fn dispatch<R>(&self, responder: &R, result: ExtractionResult) -> DispatchReport
    where
        R: InteractionResponder + ?Sized,
    {
        let status = result.status().to_string();

        match result {
            ExtractionResult::Redirect(media) | ExtractionResult::Tunnel(media) => {
                self.download_and_deliver(responder, &status, media).await
            }
            ExtractionResult::Picker(picker) => {
                tracing::debug!("Picker with {} items", picker.items.len());
                respond(responder, &render_picker(&picker)).await;
                DispatchReport::new(&status, Outcome::Message)
            }
            ExtractionResult::Error(error) => {
                tracing::info!("Extraction service reported error: {}", error.code);
                respond(responder, &render_service_error(&error)).await;
                DispatchReport::new(&status, Outcome::Message)
            }
            ExtractionResult::Other { status } => {
                tracing::warn!("Unexpected response status: {}", status);
                respond(responder, &render_unexpected(&status)).await;
                DispatchReport::new(&status, Outcome::Message)
            }
        }
    }

    async fn download_and_deliver<R>(
        &self,
        responder: &R,
        status: &str,
        media: Downloadable,
    ) -> DispatchReport
    where
        R: InteractionResponder + ?Sized,
    {
        let downloaded = match self.client.fetch(&media.url, media.filename.as_deref()).await {
            Ok(downloaded) => downloaded,
            Err(e) => {
                tracing::error!("{} {}: {}", DOWNLOAD_FAILED, media.url, e);
                respond(responder, DOWNLOAD_FAILED).await;
                return DispatchReport::failed(Some(status), e);
            }
        };

        let outcome = deliver(responder, &downloaded, &media.url).await;
        DispatchReport::new(status, outcome.into())
    }
}

/// Replace the deferred response with `content`; rejection is only logged.
async fn respond<R>(responder: &R, content: &str)
where
    R: InteractionResponder + ?Sized,
{
    if let Err(e) = responder.edit(content).await {
        tracing::error!("Failed to edit interaction response: {}", e);
    }
}
