//! Canonical key-value text encoding of [`LicenseData`].
//!
//! Each entry becomes one line, `key: value\n`, in insertion order. The
//! encoded text is both what the token stores and what gets signed.

use crate::data::LicenseData;
use crate::error::{LicenseKeyError, LicenseKeyResult};

/// Separator between a key and its value.
pub const SEPARATOR: &str = ": ";

/// Encodes license data as canonical text.
///
/// # Errors
///
/// Returns [`LicenseKeyError::Encoding`] if a key contains a line break or
/// `": "`, or a value contains a line break. Such entries would not decode
/// back to the same data.
pub fn encode(data: &LicenseData) -> LicenseKeyResult<String> {
    let mut out = String::new();
    for (key, value) in data.iter() {
        if has_line_break(key) || key.contains(SEPARATOR) {
            return Err(LicenseKeyError::Encoding(format!(
                "key {key:?} must not contain a line break or {SEPARATOR:?}"
            )));
        }
        if has_line_break(value) {
            return Err(LicenseKeyError::Encoding(format!(
                "value for key {key:?} must not contain a line break"
            )));
        }
        out.push_str(key);
        out.push_str(SEPARATOR);
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}

/// Decodes canonical text back into license data.
///
/// Empty lines are skipped. Each other line is split on its first `": "`.
/// A repeated key overwrites the earlier value.
///
/// # Errors
///
/// Returns [`LicenseKeyError::Decoding`] if a non-empty line has no `": "`.
pub fn decode(text: &str) -> LicenseKeyResult<LicenseData> {
    let mut data = LicenseData::new();
    for (idx, line) in text.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        let (key, value) = line.split_once(SEPARATOR).ok_or_else(|| {
            LicenseKeyError::Decoding(format!("line {} has no {SEPARATOR:?} separator", idx + 1))
        })?;
        data.insert(key, value);
    }
    Ok(data)
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}
