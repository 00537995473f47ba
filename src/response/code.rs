//! Wire codes derived from HTTP status codes.

use axum::http::StatusCode;

/// Standard reason phrase for `status`, or `""` when the code has none.
///
/// 413, 414 and 416 keep their RFC 7231 titles and 203 is hyphenated, so
/// derived codes stay stable for clients matching on them.
pub fn reason_phrase(status: StatusCode) -> &'static str {
    match status.as_u16() {
        203 => "Non-Authoritative Information",
        413 => "Request Entity Too Large",
        414 => "Request URI Too Long",
        416 => "Requested Range Not Satisfiable",
        _ => status.canonical_reason().unwrap_or(""),
    }
}

/// Upper-cased reason phrase with spaces replaced by underscores.
///
/// `404` becomes `NOT_FOUND`, `201` becomes `CREATED`. Codes without a
/// reason phrase derive the empty string.
pub fn derive_code(status: StatusCode) -> String {
    reason_phrase(status).to_uppercase().replace(' ', "_")
}
