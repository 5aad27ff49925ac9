pub mod client;
pub mod filename;
pub mod options;
pub mod request;
pub mod response;

pub use client::{DownloadedMedia, ExtractionClient};
pub use filename::resolve_filename;
pub use options::{OptionValue, build_request};
pub use request::{ExtractionRequest, FieldValue, RequestField};
pub use response::{
    Downloadable, ErrorContext, ExtractionResult, PickerAudio, PickerItem, PickerResult,
    ServiceError,
};
