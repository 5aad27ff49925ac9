use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

pub const DEFAULT_VIDEO_QUALITY: &str = "1080";
pub const DEFAULT_DOWNLOAD_MODE: &str = "auto";

/// Optional fields of the extraction request, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    AudioFormat,
    AudioBitrate,
    FilenameStyle,
    YoutubeVideoCodec,
    YoutubeDubLang,
    AlwaysProxy,
    DisableMetadata,
    TiktokFullAudio,
    TiktokH265,
    TwitterGif,
    YoutubeHls,
}

impl RequestField {
    pub const ALL: [RequestField; 11] = [
        Self::AudioFormat,
        Self::AudioBitrate,
        Self::FilenameStyle,
        Self::YoutubeVideoCodec,
        Self::YoutubeDubLang,
        Self::AlwaysProxy,
        Self::DisableMetadata,
        Self::TiktokFullAudio,
        Self::TiktokH265,
        Self::TwitterGif,
        Self::YoutubeHls,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::AudioFormat => "audioFormat",
            Self::AudioBitrate => "audioBitrate",
            Self::FilenameStyle => "filenameStyle",
            Self::YoutubeVideoCodec => "youtubeVideoCodec",
            Self::YoutubeDubLang => "youtubeDubLang",
            Self::AlwaysProxy => "alwaysProxy",
            Self::DisableMetadata => "disableMetadata",
            Self::TiktokFullAudio => "tiktokFullAudio",
            Self::TiktokH265 => "tiktokH265",
            Self::TwitterGif => "twitterGif",
            Self::YoutubeHls => "youtubeHLS",
        }
    }

    fn snake_name(&self) -> &'static str {
        match self {
            Self::AudioFormat => "audio_format",
            Self::AudioBitrate => "audio_bitrate",
            Self::FilenameStyle => "filename_style",
            Self::YoutubeVideoCodec => "youtube_video_codec",
            Self::YoutubeDubLang => "youtube_dub_lang",
            Self::AlwaysProxy => "always_proxy",
            Self::DisableMetadata => "disable_metadata",
            Self::TiktokFullAudio => "tiktok_full_audio",
            Self::TiktokH265 => "tiktok_h265",
            Self::TwitterGif => "twitter_gif",
            Self::YoutubeHls => "youtube_hls",
        }
    }

    /// Look up a field by its wire name or its snake_case option name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == name || field.snake_name() == name)
    }

    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            Self::AlwaysProxy
                | Self::DisableMetadata
                | Self::TiktokFullAudio
                | Self::TiktokH265
                | Self::TwitterGif
                | Self::YoutubeHls
        )
    }
}

/// A value that is present on the wire. Empty strings and `false` never get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Enabled,
}

/// Request body for the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    url: String,
    video_quality: String,
    download_mode: String,
    fields: BTreeMap<RequestField, FieldValue>,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            video_quality: DEFAULT_VIDEO_QUALITY.to_string(),
            download_mode: DEFAULT_DOWNLOAD_MODE.to_string(),
            fields: BTreeMap::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn video_quality(&self) -> &str {
        &self.video_quality
    }

    pub fn download_mode(&self) -> &str {
        &self.download_mode
    }

    pub fn field(&self, field: RequestField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn with_video_quality(mut self, quality: &str) -> Self {
        if !quality.is_empty() {
            self.video_quality = quality.to_string();
        }
        self
    }

    pub fn with_download_mode(mut self, mode: &str) -> Self {
        if !mode.is_empty() {
            self.download_mode = mode.to_string();
        }
        self
    }

    /// Set a string field. Empty values and flag fields are ignored.
    pub fn with_text(mut self, field: RequestField, value: &str) -> Self {
        if !field.is_flag() && !value.is_empty() {
            self.fields.insert(field, FieldValue::Text(value.to_string()));
        }
        self
    }

    /// Set a boolean field. Only `true` is recorded; string fields are ignored.
    pub fn with_flag(mut self, field: RequestField, enabled: bool) -> Self {
        if field.is_flag() && enabled {
            self.fields.insert(field, FieldValue::Enabled);
        }
        self
    }
}

impl Serialize for ExtractionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.fields.len()))?;
        map.serialize_entry("url", &self.url)?;
        map.serialize_entry("videoQuality", &self.video_quality)?;
        map.serialize_entry("downloadMode", &self.download_mode)?;
        for (field, value) in &self.fields {
            match value {
                FieldValue::Text(text) => map.serialize_entry(field.wire_name(), text)?,
                FieldValue::Enabled => map.serialize_entry(field.wire_name(), &true)?,
            }
        }
        map.end()
    }
}
