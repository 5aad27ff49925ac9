use super::request::{ExtractionRequest, RequestField};

/// Raw value of a user-supplied option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Build the extraction request for `url` from a sparse set of named options.
///
/// `quality`/`videoQuality` and `mode`/`downloadMode` replace the defaults when
/// set to a non-empty string. Every other recognized option is copied through
/// when non-empty or `true`. Unknown names and values of the wrong kind are
/// dropped.
pub fn build_request<I, K>(url: &str, options: I) -> ExtractionRequest
where
    I: IntoIterator<Item = (K, OptionValue)>,
    K: AsRef<str>,
{
    let mut request = ExtractionRequest::new(url);

    for (name, value) in options {
        let name = name.as_ref();
        request = match (name, value) {
            ("quality" | "videoQuality" | "video_quality", OptionValue::Text(v)) => {
                request.with_video_quality(&v)
            }
            ("mode" | "downloadMode" | "download_mode", OptionValue::Text(v)) => {
                request.with_download_mode(&v)
            }
            (name, value) => match (RequestField::from_name(name), value) {
                (Some(field), OptionValue::Text(v)) => request.with_text(field, &v),
                (Some(field), OptionValue::Flag(b)) => request.with_flag(field, b),
                (None, _) => {
                    tracing::debug!("Ignoring unrecognized option: {}", name);
                    request
                }
            },
        };
    }

    request
}
