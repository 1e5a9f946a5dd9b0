//! Header/footer framing of a license key token.
//!
//! ```text
//! -----BEGIN LICENSE KEY-----
//! product: Acme
//! seats: 5
//!
//! 3045022100C4E8...
//! -----END LICENSE KEY-----
//! ```

use crate::error::{LicenseKeyError, LicenseKeyResult};

/// Opening marker, including its line break.
pub const HEADER: &str = "-----BEGIN LICENSE KEY-----\n";

/// Closing marker, including the line break that precedes it.
pub const FOOTER: &str = "\n-----END LICENSE KEY-----";

/// The two blocks of a token, borrowed from the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramedToken<'a> {
    /// Encoded key-value block (may be empty).
    pub data: &'a str,
    /// Line-wrapped hex signature block.
    pub signature: &'a str,
}

/// Wraps an encoded data block and a formatted signature into a token.
///
/// `encoded_data` is expected to be canonical encoder output, where every
/// line ends in `\n`; the extra `\n` added here produces the blank line.
#[must_use]
pub fn frame(encoded_data: &str, formatted_signature: &str) -> String {
    let mut token = String::with_capacity(
        HEADER.len() + encoded_data.len() + 1 + formatted_signature.len() + FOOTER.len(),
    );
    token.push_str(HEADER);
    token.push_str(encoded_data);
    token.push('\n');
    token.push_str(formatted_signature);
    token.push_str(FOOTER);
    token
}

/// Splits a token into its data and signature blocks.
///
/// # Errors
///
/// Returns [`LicenseKeyError::MalformedToken`] if the header or footer is
/// missing or repeated, there is no blank line separating the blocks, or the
/// signature block is empty or itself contains a blank line.
pub fn unframe(token: &str) -> LicenseKeyResult<FramedToken<'_>> {
    let body = token
        .strip_prefix(HEADER)
        .ok_or_else(|| malformed("missing header"))?
        .strip_suffix(FOOTER)
        .ok_or_else(|| malformed("missing footer"))?;

    // Marker text inside a value is fine; a whole marker line is not.
    if body
        .split('\n')
        .any(|line| line == HEADER.trim_end() || line == FOOTER.trim_start())
    {
        return Err(malformed("header or footer appears more than once"));
    }

    // An empty data block leaves the blank line right after the header.
    let (data, signature) = match body.strip_prefix('\n') {
        Some(signature) => ("", signature),
        None => body
            .split_once("\n\n")
            .ok_or_else(|| malformed("missing blank line between data and signature"))?,
    };

    if signature.is_empty() {
        return Err(malformed("missing signature block"));
    }
    if signature.split('\n').any(str::is_empty) {
        return Err(malformed("unexpected blank line in signature block"));
    }

    Ok(FramedToken { data, signature })
}

fn malformed(reason: &str) -> LicenseKeyError {
    LicenseKeyError::MalformedToken(reason.to_string())
}
