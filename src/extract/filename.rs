use url::Url;

/// Used when neither the caller, the response headers nor the URL yield a name.
pub const FALLBACK_FILENAME: &str = "download";

/// Pick the filename for downloaded media.
///
/// Priority: the explicit name, then the `Content-Disposition` header, then the
/// last path segment of `url`.
pub fn resolve_filename(
    explicit: Option<&str>,
    content_disposition: Option<&str>,
    url: &str,
) -> String {
    if let Some(name) = explicit.filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    if let Some(name) = content_disposition.and_then(parse_content_disposition) {
        return name;
    }

    filename_from_url(url).unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

/// Extract a filename from a `Content-Disposition` header value.
///
/// `filename*=` (RFC 5987) wins over `filename=`.
pub fn parse_content_disposition(header: &str) -> Option<String> {
    // charset'language'percent-encoded
    let extended = param_value(header, "filename*=").and_then(|v| v.splitn(3, '\'').nth(2));
    if let Some(encoded) = extended {
        if let Ok(decoded) = urlencoding::decode(encoded) {
            if !decoded.is_empty() {
                return Some(decoded.into_owned());
            }
        }
    }

    param_value(header, "filename=").map(str::to_string)
}

fn param_value<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    let start = header.find(key)? + key.len();
    let rest = &header[start..];
    let end = rest.find(';').unwrap_or(rest.len());
    let value = rest[..end].trim().trim_matches(|c: char| c == '"' || c == '\'');
    (!value.is_empty()).then_some(value)
}

fn filename_from_url(raw: &str) -> Option<String> {
    match Url::parse(raw) {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| segment.to_string())
            }),
        Err(_) => {
            let path = raw.split(['?', '#']).next().unwrap_or(raw);
            path.rsplit('/').find(|s| !s.is_empty()).map(str::to_string)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://cdn.example.com/media/video.mp4?sig=abc";

    #[test]
    fn test_explicit_name_wins() {
        let name = resolve_filename(
            Some("chosen.mp4"),
            Some("attachment; filename=header.mp4"),
            URL,
        );
        assert_eq!(name, "chosen.mp4");
    }

    #[test]
    fn test_empty_explicit_falls_through_to_header() {
        let name = resolve_filename(Some(""), Some(r#"attachment; filename="header.mp4""#), URL);
        assert_eq!(name, "header.mp4");
    }

    #[test]
    fn test_header_value_stops_at_semicolon() {
        let name = parse_content_disposition("attachment; filename=clip.webm; size=100");
        assert_eq!(name.as_deref(), Some("clip.webm"));
    }

    #[test]
    fn test_extended_filename_is_decoded() {
        let name = parse_content_disposition(
            r#"attachment; filename="fallback.mp4"; filename*=UTF-8''caf%C3%A9.mp4"#,
        );
        assert_eq!(name.as_deref(), Some("café.mp4"));
    }

    #[test]
    fn test_empty_header_filename_falls_back_to_url() {
        let name = resolve_filename(None, Some(r#"attachment; filename="""#), URL);
        assert_eq!(name, "video.mp4");
    }

    #[test]
    fn test_header_without_filename_falls_back_to_url() {
        let name = resolve_filename(None, Some("inline"), URL);
        assert_eq!(name, "video.mp4");
    }

    #[test]
    fn test_url_with_trailing_slash() {
        let name = resolve_filename(None, None, "https://cdn.example.com/media/clip.mp4/");
        assert_eq!(name, "clip.mp4");
    }

    #[test]
    fn test_unparseable_url_uses_raw_segment() {
        let name = resolve_filename(None, None, "/relative/path/file.mp3?x=1");
        assert_eq!(name, "file.mp3");
    }

    #[test]
    fn test_no_source_uses_fallback() {
        let name = resolve_filename(None, None, "https://cdn.example.com/");
        assert_eq!(name, FALLBACK_FILENAME);
    }
}
