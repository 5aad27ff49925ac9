use std::fmt::Write;

use crate::extract::{PickerResult, ServiceError};

pub const PROCESSING_MESSAGE: &str = "Processing your video request...";
pub const ATTACHMENT_CAPTION: &str = "Here's your video:";
pub const PROCESSING_FAILED: &str = "Error processing video";
pub const DOWNLOAD_FAILED: &str = "Error downloading video";
pub const MISSING_URL: &str = "Please provide a URL.";

/// Maximum length of a single message accepted by the platform.
pub const MESSAGE_LIMIT: usize = 2000;

const PICKER_HEADER: &str = "Multiple media items found. Use the links below to download:";

/// Numbered link list for a picker result, shared audio first.
///
/// Items that would push the message past [`MESSAGE_LIMIT`] bytes are
/// replaced by a count of the omitted entries.
pub fn render_picker(picker: &PickerResult) -> String {
    let mut content = format!("{}\n\n", PICKER_HEADER);

    if let Some(audio) = &picker.audio {
        let name = audio.filename.as_deref().unwrap_or("audio");
        let _ = write!(content, "**Common Audio**: [{}]({})\n\n", name, audio.url);
    }

    let total = picker.items.len();
    for (index, item) in picker.items.iter().enumerate() {
        let line = format!(
            "{}. {}: [Download]({})\n",
            index + 1,
            item.kind.to_uppercase(),
            item.url
        );
        let remaining = total - index - 1;
        let reserve = if remaining > 0 {
            omitted_line(remaining).len()
        } else {
            0
        };

        if content.len() + line.len() + reserve > MESSAGE_LIMIT {
            content.push_str(&omitted_line(total - index));
            break;
        }
        content.push_str(&line);
    }

    content
}

fn omitted_line(count: usize) -> String {
    format!("...and {} more", count)
}

pub fn render_service_error(error: &ServiceError) -> String {
    let mut message = format!("Error: {}", error.code);

    if let Some(service) = error.service() {
        let _ = write!(message, " (Service: {})", service);
    }
    if let Some(limit) = error.limit() {
        let _ = write!(message, " (Limit: {})", limit);
    }

    message
}

pub fn render_unexpected(status: &str) -> String {
    format!("Received unexpected response status: {}", status)
}

pub fn link_fallback_message(url: &str) -> String {
    format!(
        "The video is too large to send directly. You can download it here: {}",
        url
    )
}
