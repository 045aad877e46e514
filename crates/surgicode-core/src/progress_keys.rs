//! Progress key/path conventions.
//!
//! Pure string functions. These define where a user's progress record lives,
//! both as a file name under a local directory and as an object key.

use crate::models::UserId;

pub const PROGRESS_PREFIX: &str = "progress/";

/// Percent-encode a user id so it is safe as a single path segment.
///
/// ASCII alphanumerics, `-` and `_` pass through; every other byte becomes
/// `%XX`. The mapping is injective, so distinct ids never share a file.
pub fn encode_user_id(user: &UserId) -> String {
    let mut out = String::with_capacity(user.as_str().len());
    for byte in user.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// File name of a user's record inside a local progress directory.
pub fn user_progress_file(user: &UserId) -> String {
    format!("{}.json", encode_user_id(user))
}

/// Object key of a user's record in a bucket.
pub fn user_progress(user: &UserId) -> String {
    format!("{PROGRESS_PREFIX}{}", user_progress_file(user))
}
