//! Download artifact — filename derivation and the `Content-Disposition` header value.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 5987 attr-char: everything except ALPHA / DIGIT and these marks is encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Appended to every derived filename.
pub const FILENAME_SUFFIX: &str = "_official_document.txt";

/// `topic` with every ASCII space replaced by `_`, plus the fixed suffix.
pub fn download_filename(topic: &str) -> String {
    format!("{}{FILENAME_SUFFIX}", topic.replace(' ', "_"))
}

/// `attachment` disposition carrying the filename twice: a quoted ASCII fallback
/// for old clients and an RFC 5987 `filename*` with the exact UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}
