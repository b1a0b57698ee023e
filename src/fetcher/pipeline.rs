use crate::fetcher::types::{Charset, PageResponse};
use bytes::Bytes;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url_final: Url,
    body_bytes: Bytes,
    content_type: &str,
) -> PageResponse {
    let charset = detect_charset(content_type, &body_bytes);
    let (body_utf8, replacement_ratio) = decode_to_utf8(&body_bytes, &charset);

    debug!(
        "Decoded {} bytes as {:?} (replacement ratio {:.3})",
        body_bytes.len(),
        charset,
        replacement_ratio
    );

    PageResponse {
        url_final,
        body_utf8,
        charset,
        replacement_ratio,
    }
}

fn charset_from_captures(regex: &Regex, haystack: &str) -> Option<Charset> {
    let captures = regex.captures(haystack)?;
    let charset_name = captures.get(1)?.as_str().to_lowercase();
    Encoding::for_label(charset_name.as_bytes()).map(Charset::from_encoding)
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // 1. Content-Type header
    if let Some(charset) = charset_from_captures(&CHARSET_REGEX, content_type) {
        return charset;
    }

    // 2. <meta charset> or http-equiv in the first 4KB
    let search_bytes = &body_bytes[..body_bytes.len().min(4096)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(charset) = charset_from_captures(&META_CHARSET_REGEX, &search_str) {
        return charset;
    }
    if let Some(charset) = charset_from_captures(&META_HTTP_EQUIV_REGEX, &search_str) {
        return charset;
    }

    // 3. Heuristic guess
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, body_bytes.len() <= 4096);
    Charset::from_encoding(detector.guess(None, true))
}

/// Decodes leniently; malformed sequences become U+FFFD.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> (String, f64) {
    let (decoded, _encoding, had_errors) = charset.encoding().decode(body_bytes);

    let ratio = if had_errors {
        let total = decoded.chars().count().max(1);
        let replaced = decoded.chars().filter(|c| *c == char::REPLACEMENT_CHARACTER).count();
        replaced as f64 / total as f64
    } else {
        0.0
    };

    (decoded.into_owned(), ratio)
}
