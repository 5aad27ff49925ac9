use serde::Deserialize;

use crate::{Error, Result};

/// Media that can be fetched directly (`redirect` and `tunnel` results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloadable {
    pub url: String,
    pub filename: Option<String>,
}

/// A single candidate in a picker result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerItem {
    /// Media type tag as sent by the service (`photo`, `video`, `gif`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// Shared audio track offered alongside picker items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerAudio {
    pub url: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerResult {
    pub items: Vec<PickerItem>,
    pub audio: Option<PickerAudio>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorContext {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// An error reported by the extraction service itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub context: Option<ErrorContext>,
}

impl ServiceError {
    pub fn service(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.service.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn limit(&self) -> Option<i64> {
        self.context
            .as_ref()
            .and_then(|c| c.limit)
            .filter(|limit| *limit > 0)
    }
}

/// Parsed response of the extraction service, one variant per `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Redirect(Downloadable),
    Tunnel(Downloadable),
    Picker(PickerResult),
    Error(ServiceError),
    Other { status: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    status: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    audio: Option<String>,
    #[serde(default)]
    audio_filename: Option<String>,
    #[serde(default)]
    picker: Option<Vec<PickerItem>>,
    #[serde(default)]
    error: Option<ServiceError>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ExtractionResult {
    /// Parse a response body received from `source`.
    pub fn parse(source: &str, body: &[u8]) -> Result<Self> {
        let wire: WireResponse =
            serde_json::from_slice(body).map_err(|e| Error::MalformedResponse {
                url: source.to_string(),
                reason: e.to_string(),
            })?;

        let result = match wire.status.as_str() {
            "redirect" | "tunnel" => {
                let url = non_empty(wire.url).ok_or_else(|| Error::MalformedResponse {
                    url: source.to_string(),
                    reason: format!("missing media url for status {}", wire.status),
                })?;
                let media = Downloadable {
                    url,
                    filename: non_empty(wire.filename),
                };
                if wire.status == "redirect" {
                    Self::Redirect(media)
                } else {
                    Self::Tunnel(media)
                }
            }
            "picker" => Self::Picker(PickerResult {
                items: wire.picker.unwrap_or_default(),
                audio: non_empty(wire.audio).map(|url| PickerAudio {
                    url,
                    filename: non_empty(wire.audio_filename),
                }),
            }),
            "error" => Self::Error(wire.error.unwrap_or_default()),
            other => Self::Other {
                status: other.to_string(),
            },
        };

        Ok(result)
    }

    /// The wire discriminant this result was parsed from.
    pub fn status(&self) -> &str {
        match self {
            Self::Redirect(_) => "redirect",
            Self::Tunnel(_) => "tunnel",
            Self::Picker(_) => "picker",
            Self::Error(_) => "error",
            Self::Other { status } => status,
        }
    }
}
